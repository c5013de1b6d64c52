//! Whole cube rotations about the three axes of the cube.

use super::{Side, StickerCube};

/// An axis of the cube, named as in rotation notation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left-Right axis, turning the same way as R
    X,
    /// Up-Down axis, turning the same way as U
    Y,
    /// Front-Back axis, turning the same way as F
    Z,
}

impl Axis {
    /// The sides swept through by a rotation about this axis. The face at each side moves to the
    /// next one in the list.
    fn cycle(self) -> [Side; 4] {
        match self {
            Axis::X => [Side::Front, Side::Top, Side::Back, Side::Bottom],
            Axis::Y => [Side::Front, Side::Left, Side::Back, Side::Right],
            Axis::Z => [Side::Top, Side::Right, Side::Bottom, Side::Left],
        }
    }

    /// Clockwise quarter turns applied to the grid at each side once the faces have been cycled,
    /// so that row 0 of every face is again the row nearest the top.
    fn corrections(self) -> &'static [(Side, u8)] {
        match self {
            Axis::X => &[
                (Side::Right, 1),
                (Side::Back, 2),
                (Side::Left, 3),
                (Side::Bottom, 2),
            ],
            Axis::Y => &[(Side::Top, 1), (Side::Bottom, 3)],
            Axis::Z => &[
                (Side::Front, 1),
                (Side::Right, 1),
                (Side::Back, 3),
                (Side::Left, 1),
                (Side::Top, 1),
                (Side::Bottom, 1),
            ],
        }
    }
}

impl StickerCube {
    /// Rotate the whole cube a quarter turn clockwise about the given axis. No stickers change
    /// grid, only the orientation map and the way each grid is read.
    pub(crate) fn rotate(&mut self, axis: Axis) {
        self.orientation_mut().cycle(axis.cycle());
        for &(side, k) in axis.corrections() {
            self.rotate_face(side, k);
        }
    }
}
