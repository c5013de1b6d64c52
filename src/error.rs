//! This module defines the error types used throughout the crate.

use thiserror::Error;

use crate::cube333::Face;

/// Error type for decoding and executing move notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The token does not name a move in the notation table, or carries an unknown modifier.
    #[error("unknown move token {0:?}")]
    UnknownToken(String),
}

/// Error type for loading a cube from externally supplied sticker values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StickerError {
    /// The character does not name one of the six sticker colours.
    #[error("invalid sticker {0:?}, expected one of r, g, o, b, y, w")]
    InvalidSticker(char),
    /// The input held the wrong number of stickers.
    #[error("expected {expected} stickers, found {found}")]
    WrongCount {
        /// How many stickers were required
        expected: usize,
        /// How many stickers were supplied
        found: usize,
    },
}

/// Error type for building an orientation map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrientationError {
    /// The same physical face was assigned to more than one side.
    #[error("face {0} is assigned to more than one side")]
    DuplicateFace(Face),
}
