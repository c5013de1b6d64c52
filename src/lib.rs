//! A sticker model of the 3x3x3 Rubik's cube together with an interpreter for move notation.
//! Every named move is rewritten down to a single upper layer turn and whole cube rotations.

#![deny(missing_docs)]

pub mod cube333;
pub mod error;
pub mod moves;
