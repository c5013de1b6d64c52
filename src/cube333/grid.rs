//! The 3x3 sticker grid belonging to a single face.

use super::Sticker;
use crate::error::StickerError;

use std::str::FromStr;

/// The nine stickers of one face, stored row by row. Row 0 is the row adjacent to whatever side
/// is currently on top when the face is viewed from outside the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceGrid([[Sticker; 3]; 3]);

impl FaceGrid {
    /// Create a grid from its rows.
    pub const fn new(rows: [[Sticker; 3]; 3]) -> FaceGrid {
        FaceGrid(rows)
    }

    /// A grid covered entirely by one sticker colour.
    pub const fn filled(sticker: Sticker) -> FaceGrid {
        FaceGrid([[sticker; 3]; 3])
    }

    /// The rows of the grid.
    pub fn rows(&self) -> &[[Sticker; 3]; 3] {
        &self.0
    }

    /// The sticker at the given row and column.
    pub fn get(&self, row: usize, col: usize) -> Sticker {
        self.0[row][col]
    }

    /// Iterate over the stickers in row-major order.
    pub fn stickers(&self) -> impl Iterator<Item = Sticker> + '_ {
        self.0.iter().flatten().copied()
    }

    /// Whether every sticker on the grid has the same colour.
    pub fn is_uniform(&self) -> bool {
        let centre = self.0[1][1];
        self.stickers().all(|s| s == centre)
    }

    pub(super) fn top_row(&self) -> [Sticker; 3] {
        self.0[0]
    }

    pub(super) fn set_top_row(&mut self, row: [Sticker; 3]) {
        self.0[0] = row;
    }

    /// Rotate the grid clockwise by `k` quarter turns. Only `k % 4` matters.
    pub(super) fn rotate_clockwise(&mut self, k: u8) {
        for _ in 0..k % 4 {
            let old = self.0;
            self.0 = std::array::from_fn(|i| std::array::from_fn(|j| old[2 - j][i]));
        }
    }
}

/// Reads nine stickers in row-major order, ignoring whitespace.
impl FromStr for FaceGrid {
    type Err = StickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stickers = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Sticker::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        if stickers.len() != 9 {
            return Err(StickerError::WrongCount {
                expected: 9,
                found: stickers.len(),
            });
        }

        Ok(FaceGrid(std::array::from_fn(|i| {
            std::array::from_fn(|j| stickers[i * 3 + j])
        })))
    }
}
