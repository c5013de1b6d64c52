//! A sticker level model of the 3x3x3 cube.
//!
//! The cube owns one [`FaceGrid`] per physical [`Face`]. Which face currently points in which
//! direction is tracked separately by an [`OrientationMap`], so whole cube rotations only have to
//! reassign the map (plus a few grid rotations) rather than move stickers between grids.

pub mod axis;
pub mod grid;
pub mod interp;
pub mod moves;
pub mod scramble;

pub use grid::FaceGrid;

use crate::error::{OrientationError, StickerError};

use std::fmt;
use std::str::FromStr;

/// The colour of a single sticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Sticker {
    Red,
    Green,
    Orange,
    Blue,
    Yellow,
    White,
}

impl Sticker {
    /// Every sticker colour, in the same order as [`Face::ALL`].
    pub const ALL: [Sticker; 6] = [
        Sticker::Red,
        Sticker::Green,
        Sticker::Orange,
        Sticker::Blue,
        Sticker::Yellow,
        Sticker::White,
    ];

    /// The lowercase letter used for this colour in text input and output.
    pub fn letter(self) -> char {
        match self {
            Sticker::Red => 'r',
            Sticker::Green => 'g',
            Sticker::Orange => 'o',
            Sticker::Blue => 'b',
            Sticker::Yellow => 'y',
            Sticker::White => 'w',
        }
    }
}

impl TryFrom<char> for Sticker {
    type Error = StickerError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'r' => Ok(Sticker::Red),
            'g' => Ok(Sticker::Green),
            'o' => Ok(Sticker::Orange),
            'b' => Ok(Sticker::Blue),
            'y' => Ok(Sticker::Yellow),
            'w' => Ok(Sticker::White),
            _ => Err(StickerError::InvalidSticker(c)),
        }
    }
}

impl fmt::Display for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A physical face of the cube, named after the colour of its stickers when solved. A face keeps
/// its identity no matter where the cube is rotated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Face {
    Red,
    Green,
    Orange,
    Blue,
    Yellow,
    White,
}

impl Face {
    /// Every face, in grid storage order.
    pub const ALL: [Face; 6] = [
        Face::Red,
        Face::Green,
        Face::Orange,
        Face::Blue,
        Face::Yellow,
        Face::White,
    ];

    /// The sticker colour covering this face on a solved cube.
    pub fn sticker(self) -> Sticker {
        Sticker::ALL[self as usize]
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sticker().letter().to_ascii_uppercase())
    }
}

/// A direction relative to the viewer. Each side is occupied by exactly one physical face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Side {
    Front,
    Right,
    Back,
    Left,
    Top,
    Bottom,
}

impl Side {
    /// Every side, in the order faces are rendered.
    pub const ALL: [Side; 6] = [
        Side::Front,
        Side::Right,
        Side::Back,
        Side::Left,
        Side::Top,
        Side::Bottom,
    ];
}

/// Which physical face currently occupies each side. This is always a bijection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrientationMap([Face; 6]);

impl OrientationMap {
    /// Red in front, green on the right, yellow on top.
    pub const CANONICAL: OrientationMap = OrientationMap([
        Face::Red,
        Face::Green,
        Face::Orange,
        Face::Blue,
        Face::Yellow,
        Face::White,
    ]);

    /// Build a map from the faces occupying each side, indexed in [`Side::ALL`] order.
    pub fn try_new(faces: [Face; 6]) -> Result<OrientationMap, OrientationError> {
        for (i, &face) in faces.iter().enumerate() {
            if faces[..i].contains(&face) {
                return Err(OrientationError::DuplicateFace(face));
            }
        }
        Ok(OrientationMap(faces))
    }

    /// The face occupying the given side.
    pub fn face(&self, side: Side) -> Face {
        self.0[side as usize]
    }

    /// The side the given face currently occupies.
    pub fn side_of(&self, face: Face) -> Side {
        Side::ALL
            .into_iter()
            .find(|&side| self.face(side) == face)
            .unwrap_or_else(|| unreachable!("orientation map is a bijection"))
    }

    /// The faces occupying each side, indexed in [`Side::ALL`] order.
    pub fn faces(&self) -> [Face; 6] {
        self.0
    }

    /// The face at `sides[0]` moves to `sides[1]`, the one at `sides[1]` to `sides[2]` and so on,
    /// with the face at `sides[3]` wrapping around to `sides[0]`.
    pub(crate) fn cycle(&mut self, sides: [Side; 4]) {
        let old = self.0;
        for i in 0..4 {
            self.0[sides[(i + 1) % 4] as usize] = old[sides[i] as usize];
        }
    }
}

impl Default for OrientationMap {
    fn default() -> Self {
        OrientationMap::CANONICAL
    }
}

/// A 3x3x3 cube described by its 54 stickers.
///
/// Stickers can only be moved around by applying moves (see [`StickerCube::apply`]), never
/// recoloured, so the number of stickers of each colour is always preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StickerCube {
    faces: [FaceGrid; 6],
    orientation: OrientationMap,
}

impl StickerCube {
    /// The solved cube in the canonical orientation.
    pub const SOLVED: StickerCube = StickerCube {
        faces: [
            FaceGrid::filled(Sticker::Red),
            FaceGrid::filled(Sticker::Green),
            FaceGrid::filled(Sticker::Orange),
            FaceGrid::filled(Sticker::Blue),
            FaceGrid::filled(Sticker::Yellow),
            FaceGrid::filled(Sticker::White),
        ],
        orientation: OrientationMap::CANONICAL,
    };

    /// A solved cube in the canonical orientation.
    pub fn new() -> StickerCube {
        StickerCube::SOLVED
    }

    /// A solved cube held in a custom orientation.
    pub fn with_orientation(orientation: OrientationMap) -> StickerCube {
        StickerCube {
            orientation,
            ..StickerCube::SOLVED
        }
    }

    /// Build a cube from one grid per face, given in [`Face::ALL`] order. The cube is held in the
    /// canonical orientation. No check is made that the stickers describe a reachable state.
    pub fn from_faces(faces: [FaceGrid; 6]) -> StickerCube {
        StickerCube {
            faces,
            orientation: OrientationMap::CANONICAL,
        }
    }

    /// The grid of the given physical face.
    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face as usize]
    }

    /// The grid of whichever face currently occupies the given side.
    pub fn face_at(&self, side: Side) -> &FaceGrid {
        self.face(self.orientation.face(side))
    }

    /// The current orientation of the cube.
    pub fn orientation(&self) -> &OrientationMap {
        &self.orientation
    }

    /// How many stickers of each colour are on the cube, indexed in [`Sticker::ALL`] order.
    pub fn sticker_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for sticker in self.faces.iter().flat_map(FaceGrid::stickers) {
            counts[sticker as usize] += 1;
        }
        counts
    }

    /// Whether every face is a single colour, regardless of orientation.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(FaceGrid::is_uniform)
    }

    pub(crate) fn face_at_mut(&mut self, side: Side) -> &mut FaceGrid {
        &mut self.faces[self.orientation.face(side) as usize]
    }

    pub(crate) fn orientation_mut(&mut self) -> &mut OrientationMap {
        &mut self.orientation
    }

    /// Rotate the grid at the given side clockwise by `k` quarter turns, without touching any
    /// other face.
    pub(crate) fn rotate_face(&mut self, side: Side, k: u8) {
        self.face_at_mut(side).rotate_clockwise(k);
    }
}

impl Default for StickerCube {
    fn default() -> Self {
        StickerCube::SOLVED
    }
}

/// Reads 54 stickers, nine per face in [`Face::ALL`] order, each face row-major. Whitespace is
/// ignored.
impl FromStr for StickerCube {
    type Err = StickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stickers = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Sticker::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        if stickers.len() != 54 {
            return Err(StickerError::WrongCount {
                expected: 54,
                found: stickers.len(),
            });
        }

        let faces = std::array::from_fn(|f| {
            FaceGrid::new(std::array::from_fn(|i| {
                std::array::from_fn(|j| stickers[f * 9 + i * 3 + j])
            }))
        });

        Ok(StickerCube::from_faces(faces))
    }
}

const ROW_SEPARATOR: &str = "—  ┼  —  ┼  —";

impl fmt::Display for StickerCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for side in Side::ALL {
            for row in self.face_at(side).rows() {
                writeln!(f, "{}  |  {}  |  {}", row[0], row[1], row[2])?;
                writeln!(f, "{ROW_SEPARATOR}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
