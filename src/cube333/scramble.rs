//! Random scrambles made of quarter turns.

use super::moves::{MoveLetter, MoveToken};
use super::StickerCube;
use crate::moves::MoveSequence;

use rand::Rng;
use tracing::debug;

/// The number of moves in a scramble made by [`StickerCube::scramble`].
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 40;

/// Draw `len` clockwise quarter turns, each letter chosen uniformly with replacement from every
/// letter in the notation table (rotations included).
pub fn random_moves<R: Rng>(rng: &mut R, len: usize) -> MoveSequence<MoveToken> {
    (0..len)
        .map(|_| MoveToken::single(MoveLetter::ALL[rng.gen_range(0..MoveLetter::ALL.len())]))
        .collect()
}

impl StickerCube {
    /// Apply a random scramble of [`DEFAULT_SCRAMBLE_LENGTH`] moves, returning the moves used.
    pub fn scramble<R: Rng>(&mut self, rng: &mut R) -> MoveSequence<MoveToken> {
        let moves = random_moves(rng, DEFAULT_SCRAMBLE_LENGTH);
        debug!(scramble = %moves, "scrambling");
        self.apply_sequence(moves.clone());
        moves
    }
}
