//! Executes move notation on a [`StickerCube`].
//!
//! Moves are decoded from a work queue. The token at the front is either performed natively or
//! replaced by its rewrite from the notation table, which is pushed onto the front of the queue.
//! A half turn pushes a second copy of its quarter turn before being decoded as a quarter turn.
//! Since the notation table never refers back to a letter that rewrites to it, this always runs
//! down to native moves, and the queue keeps stack usage flat however long the input is.

use super::moves::{Instruction, Modifier, MoveToken};
use super::StickerCube;
use crate::error::MoveError;
use crate::moves::MoveSequence;

use std::collections::VecDeque;

use tracing::{debug, trace};

impl StickerCube {
    /// Apply a sequence of moves written in notation, one token per item.
    ///
    /// Tokens are parsed only once every move before them has been performed. If a token is not
    /// valid notation an error is returned, and the moves before it stay applied.
    pub fn apply<'a, I>(&mut self, moves: I) -> Result<(), MoveError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut input = moves.into_iter();
        let mut queue: VecDeque<MoveToken> = VecDeque::new();

        loop {
            let token = match queue.pop_front() {
                Some(token) => token,
                None => match input.next() {
                    Some(text) => text
                        .parse::<MoveToken>()
                        .inspect_err(|err| debug!(%err, "bad move"))?,
                    None => return Ok(()),
                },
            };
            self.step(token, &mut queue);
        }
    }

    /// Apply moves written as whitespace separated notation, e.g. `"R U R' U'"`.
    pub fn apply_str(&mut self, moves: &str) -> Result<(), MoveError> {
        self.apply(moves.split_whitespace())
    }

    /// Apply a sequence of already decoded moves.
    pub fn apply_moves<I>(&mut self, moves: I)
    where
        I: IntoIterator<Item = MoveToken>,
    {
        let mut input = moves.into_iter();
        let mut queue: VecDeque<MoveToken> = VecDeque::new();

        while let Some(token) = queue.pop_front().or_else(|| input.next()) {
            self.step(token, &mut queue);
        }
    }

    /// Apply an algorithm to the cube.
    pub fn apply_sequence(&mut self, moves: MoveSequence<MoveToken>) {
        self.apply_moves(moves)
    }

    /// Decode the token at the front of the queue. Only native moves change the cube.
    fn step(&mut self, token: MoveToken, queue: &mut VecDeque<MoveToken>) {
        let inverse = match token.modifier {
            Modifier::Single => false,
            Modifier::Inverse => true,
            Modifier::Double => {
                queue.push_front(MoveToken::single(token.letter));
                false
            }
        };

        match token.letter.instruction(inverse) {
            Instruction::Native(mv) => {
                trace!(%token, ?mv, "native move");
                self.make_native(mv);
            }
            Instruction::Rewrite(tokens) => {
                trace!(%token, rewrite = ?tokens, "rewrite");
                for &t in tokens.iter().rev() {
                    queue.push_front(t);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::moves::MoveLetter;
    use crate::cube333::{Face, Side, Sticker};
    use crate::moves::Move;
    use crate::tok;

    use proptest::collection::vec;
    use proptest::prelude::*;

    const SCRAMBLE: &str = "y' x2 L D2 U B U R F B2 L' D2 L F2 D' F' R' F D2 L' D L2";

    fn scrambled() -> StickerCube {
        let mut cube = StickerCube::new();
        cube.apply_str(SCRAMBLE).unwrap();
        cube
    }

    fn after(cube: &StickerCube, moves: &str) -> StickerCube {
        let mut cube = cube.clone();
        cube.apply_str(moves).unwrap();
        cube
    }

    fn is_bijection(cube: &StickerCube) -> bool {
        let faces = cube.orientation().faces();
        Face::ALL.iter().all(|f| faces.contains(f))
    }

    #[test]
    fn scramble_changes_cube() {
        let cube = scrambled();
        assert!(!cube.is_solved());
        assert_eq!(cube.sticker_counts(), [9; 6]);
    }

    #[test]
    fn four_turns_are_identity() {
        for start in [StickerCube::new(), scrambled()] {
            for letter in MoveLetter::ALL {
                let mut cube = start.clone();
                cube.apply_moves([MoveToken::single(letter); 4]);
                assert_eq!(cube, start, "{letter:?}");
            }
        }
    }

    #[test]
    fn double_is_two_singles() {
        for start in [StickerCube::new(), scrambled()] {
            for letter in MoveLetter::ALL {
                let mut double = start.clone();
                double.apply_moves([MoveToken {
                    letter,
                    modifier: Modifier::Double,
                }]);
                let mut singles = start.clone();
                singles.apply_moves([MoveToken::single(letter); 2]);
                assert_eq!(double, singles, "{letter:?}");
            }
        }
    }

    #[test]
    fn inverse_cancels() {
        for start in [StickerCube::new(), scrambled()] {
            for letter in MoveLetter::ALL {
                let single = MoveToken::single(letter);
                let inverse = single.inverse();

                let mut cube = start.clone();
                cube.apply_moves([single, inverse]);
                assert_eq!(cube, start, "{letter:?}");

                cube.apply_moves([inverse, single]);
                assert_eq!(cube, start, "{letter:?}'");
            }
        }
    }

    #[test]
    fn face_turns_are_conjugates_of_u() {
        let pairs = [
            ("R", "z' U z"),
            ("R'", "z' U' z"),
            ("L", "z U z'"),
            ("F", "x U x'"),
            ("B", "x' U x"),
            ("B'", "x' U' x"),
            ("D", "x2 U x2"),
        ];
        for start in [StickerCube::new(), scrambled()] {
            for (mv, conjugate) in pairs {
                assert_eq!(after(&start, mv), after(&start, conjugate), "{mv}");
            }
        }
    }

    #[test]
    fn slices_and_wide_turns() {
        for start in [StickerCube::new(), scrambled()] {
            assert_eq!(after(&start, "r"), after(&start, "R M'"));
            assert_eq!(after(&start, "l"), after(&start, "L M"));
            assert_eq!(after(&start, "u"), after(&start, "y D"));
            assert_eq!(after(&start, "u d"), after(&start, "U D"));
            assert_eq!(after(&start, "M x"), after(&start, "R L'"));
        }
    }

    #[test]
    fn opposite_layers_commute() {
        for start in [StickerCube::new(), scrambled()] {
            for (a, b) in [("R", "L"), ("U", "D"), ("F", "B"), ("R", "x"), ("U", "y"), ("F", "z")]
            {
                assert_eq!(after(&start, &format!("{a} {b}")), after(&start, &format!("{b} {a}")));
            }
        }
    }

    #[test]
    fn r_moves_front_right_column_up() {
        let cube = after(&StickerCube::new(), "R");
        let front = cube.face_at(Side::Front);
        let top = cube.face_at(Side::Top);
        let back = cube.face_at(Side::Back);
        for row in 0..3 {
            assert_eq!(front.get(row, 2), Sticker::White);
            assert_eq!(front.get(row, 0), Sticker::Red);
            assert_eq!(top.get(row, 2), Sticker::Red);
            assert_eq!(back.get(row, 0), Sticker::Yellow);
        }
        assert_eq!(cube.face_at(Side::Right), &crate::cube333::FaceGrid::filled(Sticker::Green));
        assert_eq!(cube.orientation(), StickerCube::new().orientation());
    }

    #[test]
    fn known_identities() {
        let sexy = "R U R' U' ".repeat(6);
        assert_eq!(after(&StickerCube::new(), &sexy), StickerCube::new());
        assert!(!after(&StickerCube::new(), &"R U R' U' ".repeat(3)).is_solved());

        let ru = "R U ".repeat(105);
        assert_eq!(after(&StickerCube::new(), &ru), StickerCube::new());

        let t_perm = "R U R' U' R' F R2 U' R' U' R U R' F' ";
        let once = after(&StickerCube::new(), t_perm);
        assert!(!once.is_solved());
        assert_eq!(after(&once, t_perm), StickerCube::new());
    }

    #[test]
    fn upper_turn_on_solved_cube() {
        let cube = after(&StickerCube::new(), "U");
        assert_eq!(cube.face_at(Side::Front).rows()[0], [Sticker::Green; 3]);
        assert_eq!(cube.face_at(Side::Left).rows()[0], [Sticker::Red; 3]);
        assert_eq!(cube.face_at(Side::Back).rows()[0], [Sticker::Blue; 3]);
        assert_eq!(cube.face_at(Side::Right).rows()[0], [Sticker::Orange; 3]);
        assert_eq!(cube.sticker_counts(), [9; 6]);
        assert_eq!(cube.orientation(), StickerCube::new().orientation());
    }

    #[test]
    fn computed_inverse_restores() {
        let moves: MoveSequence<MoveToken> = "x2 U".parse().unwrap();
        let mut cube = StickerCube::new();
        cube.apply_sequence(moves.clone());
        assert_ne!(cube, StickerCube::new());
        cube.apply_sequence(moves.inverse());
        assert_eq!(cube, StickerCube::new());

        let moves: MoveSequence<MoveToken> = SCRAMBLE.parse().unwrap();
        let mut cube = StickerCube::new();
        cube.apply_sequence(moves.clone().append(moves.inverse()));
        for face in Face::ALL {
            assert_eq!(cube.face(face), StickerCube::new().face(face));
        }
    }

    #[test]
    fn unknown_token_keeps_earlier_moves() {
        let mut cube = StickerCube::new();
        let err = cube.apply(["R", "U2", "Q", "F"]);
        assert_eq!(err, Err(MoveError::UnknownToken("Q".to_owned())));
        assert_eq!(cube, after(&StickerCube::new(), "R U2"));

        let mut cube = scrambled();
        assert!(cube.apply_str("Q").is_err());
        assert_eq!(cube, scrambled());
    }

    #[test]
    fn text_and_tokens_agree() {
        let mut text = StickerCube::new();
        text.apply_str("M2 u' l x").unwrap();
        let mut tokens = StickerCube::new();
        tokens.apply_moves([tok!(M, Double), tok!(Uw, Inverse), tok!(Lw), tok!(X)]);
        assert_eq!(text, tokens);
    }

    proptest! {
        #[test]
        fn stickers_are_conserved(mvs in vec(any::<MoveToken>(), 0..40)) {
            let mut cube = StickerCube::new();
            cube.apply_moves(mvs);
            prop_assert_eq!(cube.sticker_counts(), [9; 6]);
            prop_assert!(is_bijection(&cube));
        }

        #[test]
        fn sequence_then_inverse_is_identity(mvs in vec(any::<MoveToken>(), 0..30).prop_map(MoveSequence)) {
            let mut cube = scrambled();
            cube.apply_sequence(mvs.clone());
            cube.apply_sequence(mvs.inverse());
            prop_assert_eq!(cube, scrambled());
        }

        #[test]
        fn split_sequences_compose(a in vec(any::<MoveToken>(), 0..15), b in vec(any::<MoveToken>(), 0..15)) {
            let mut split = StickerCube::new();
            split.apply_moves(a.clone());
            split.apply_moves(b.clone());
            let mut joined = StickerCube::new();
            joined.apply_moves(a.into_iter().chain(b));
            prop_assert_eq!(split, joined);
        }
    }
}
