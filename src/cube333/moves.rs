//! Move notation for the 3x3x3 and the table that rewrites every move in terms of the two moves
//! the cube implements natively: an upper layer turn and a whole cube rotation.

use super::axis::Axis;
use super::{Side, StickerCube};
use crate::error::MoveError;

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Create a move token by specifying a letter and optionally a modifier. As with the enum
/// variants, `tok!(X, Inverse)` is the token written `x'`.
#[macro_export]
macro_rules! tok {
    ($letter:ident) => {
        $crate::tok!($letter, Single)
    };
    ($letter:ident, $modifier:ident) => {
        $crate::cube333::moves::MoveToken {
            letter: $crate::cube333::moves::MoveLetter::$letter,
            modifier: $crate::cube333::moves::Modifier::$modifier,
        }
    };
}

/// The base letter of a move, identifying which layers turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum MoveLetter {
    /// Up, the only layer turn implemented natively
    U,
    /// Down
    D,
    /// Right
    R,
    /// Left
    L,
    /// Front
    F,
    /// Back
    B,
    /// Middle slice, turning the same way as L
    M,
    /// Whole cube rotation about the R axis, written `x`
    X,
    /// Whole cube rotation about the U axis, written `y`
    Y,
    /// Whole cube rotation about the F axis, written `z`
    Z,
    /// Up and the layer below it, written `u`
    Uw,
    /// Down and the layer above it, written `d`
    Dw,
    /// Right and the middle slice, written `r`
    Rw,
    /// Left and the middle slice, written `l`
    Lw,
}

impl MoveLetter {
    /// Every move letter in notation table order.
    pub const ALL: [MoveLetter; 14] = [
        MoveLetter::U,
        MoveLetter::X,
        MoveLetter::Y,
        MoveLetter::Z,
        MoveLetter::D,
        MoveLetter::R,
        MoveLetter::L,
        MoveLetter::F,
        MoveLetter::B,
        MoveLetter::M,
        MoveLetter::Uw,
        MoveLetter::Dw,
        MoveLetter::Rw,
        MoveLetter::Lw,
    ];

    /// The character this letter is written as.
    pub fn symbol(self) -> char {
        match self {
            MoveLetter::U => 'U',
            MoveLetter::D => 'D',
            MoveLetter::R => 'R',
            MoveLetter::L => 'L',
            MoveLetter::F => 'F',
            MoveLetter::B => 'B',
            MoveLetter::M => 'M',
            MoveLetter::X => 'x',
            MoveLetter::Y => 'y',
            MoveLetter::Z => 'z',
            MoveLetter::Uw => 'u',
            MoveLetter::Dw => 'd',
            MoveLetter::Rw => 'r',
            MoveLetter::Lw => 'l',
        }
    }

    fn from_symbol(c: char) -> Option<MoveLetter> {
        MoveLetter::ALL.into_iter().find(|l| l.symbol() == c)
    }

    /// Look up how to perform a clockwise (or with `inverse`, anticlockwise) quarter turn of this
    /// letter.
    ///
    /// Only `U` and the rotations have native implementations, and only clockwise ones. Their
    /// inverses are three clockwise turns. Every other letter is a conjugate of `U` by some
    /// rotation, or a combination of such moves with a rotation.
    pub fn instruction(self, inverse: bool) -> Instruction {
        use Instruction::{Native, Rewrite};
        use MoveLetter as ML;

        match (self, inverse) {
            (ML::U, false) => Native(NativeMove::UpperTurn),
            (ML::U, true) => Rewrite(&[tok!(U, Double), tok!(U)]),
            (ML::X, false) => Native(NativeMove::Rotate(Axis::X)),
            (ML::X, true) => Rewrite(&[tok!(X, Double), tok!(X)]),
            (ML::Y, false) => Native(NativeMove::Rotate(Axis::Y)),
            (ML::Y, true) => Rewrite(&[tok!(Y, Double), tok!(Y)]),
            (ML::Z, false) => Native(NativeMove::Rotate(Axis::Z)),
            (ML::Z, true) => Rewrite(&[tok!(Z, Double), tok!(Z)]),

            (ML::D, false) => Rewrite(&[tok!(X, Double), tok!(U), tok!(X, Double)]),
            (ML::D, true) => Rewrite(&[tok!(X, Double), tok!(U, Inverse), tok!(X, Double)]),
            (ML::R, false) => Rewrite(&[tok!(Z, Inverse), tok!(U), tok!(Z)]),
            (ML::R, true) => Rewrite(&[tok!(Z, Inverse), tok!(U, Inverse), tok!(Z)]),
            (ML::L, false) => Rewrite(&[tok!(Z), tok!(U), tok!(Z, Inverse)]),
            (ML::L, true) => Rewrite(&[tok!(Z), tok!(U, Inverse), tok!(Z, Inverse)]),
            (ML::F, false) => Rewrite(&[tok!(X), tok!(U), tok!(X, Inverse)]),
            (ML::F, true) => Rewrite(&[tok!(X), tok!(U, Inverse), tok!(X, Inverse)]),
            (ML::B, false) => Rewrite(&[tok!(X, Inverse), tok!(U), tok!(X)]),
            (ML::B, true) => Rewrite(&[tok!(X, Inverse), tok!(U, Inverse), tok!(X)]),
            (ML::M, false) => Rewrite(&[tok!(L, Inverse), tok!(R), tok!(X, Inverse)]),
            (ML::M, true) => Rewrite(&[tok!(L), tok!(R, Inverse), tok!(X)]),

            (ML::Uw, false) => Rewrite(&[tok!(D), tok!(Y)]),
            (ML::Uw, true) => Rewrite(&[tok!(D, Inverse), tok!(Y, Inverse)]),
            (ML::Dw, false) => Rewrite(&[tok!(U), tok!(Y, Inverse)]),
            (ML::Dw, true) => Rewrite(&[tok!(U, Inverse), tok!(Y)]),
            (ML::Rw, false) => Rewrite(&[tok!(L), tok!(X)]),
            (ML::Rw, true) => Rewrite(&[tok!(L, Inverse), tok!(X, Inverse)]),
            (ML::Lw, false) => Rewrite(&[tok!(R), tok!(X, Inverse)]),
            (ML::Lw, true) => Rewrite(&[tok!(R, Inverse), tok!(X)]),
        }
    }
}

/// How far a move turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Modifier {
    /// A clockwise quarter turn, written with no suffix
    Single,
    /// An anticlockwise quarter turn, written with a `'` suffix
    Inverse,
    /// A half turn, written with a `2` suffix
    Double,
}

/// A single token of move notation, such as `R`, `x'` or `M2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct MoveToken {
    pub letter: MoveLetter,
    pub modifier: Modifier,
}

impl MoveToken {
    /// A clockwise quarter turn of the given letter.
    pub const fn single(letter: MoveLetter) -> MoveToken {
        MoveToken {
            letter,
            modifier: Modifier::Single,
        }
    }
}

impl crate::moves::Move for MoveToken {
    fn inverse(self) -> Self {
        let modifier = match self.modifier {
            Modifier::Single => Modifier::Inverse,
            Modifier::Inverse => Modifier::Single,
            Modifier::Double => Modifier::Double,
        };
        MoveToken { modifier, ..self }
    }
}

impl FromStr for MoveToken {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || MoveError::UnknownToken(s.to_owned());

        let mut chars = s.chars();
        let letter = chars
            .next()
            .and_then(MoveLetter::from_symbol)
            .ok_or_else(unknown)?;
        let modifier = match chars.as_str() {
            "" => Modifier::Single,
            "'" => Modifier::Inverse,
            "2" => Modifier::Double,
            _ => return Err(unknown()),
        };

        Ok(MoveToken { letter, modifier })
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.modifier {
            Modifier::Single => "",
            Modifier::Inverse => "'",
            Modifier::Double => "2",
        };
        write!(f, "{}{}", self.letter.symbol(), suffix)
    }
}

/// A move the cube can perform directly, without rewriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeMove {
    /// A clockwise quarter turn of the top layer
    UpperTurn,
    /// A clockwise quarter rotation of the whole cube
    Rotate(Axis),
}

/// An entry of the notation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Perform a native move
    Native(NativeMove),
    /// Replace the move by this sequence of moves
    Rewrite(&'static [MoveToken]),
}

impl StickerCube {
    /// Turn the top layer a quarter turn clockwise. The top rows of the four sides each move one
    /// place to the left (right to front, front to left and so on), and the top face turns.
    ///
    /// This is the only operation that moves stickers from one face to another.
    pub(crate) fn upper_turn(&mut self) {
        let buffer = self.face_at(Side::Front).top_row();
        for (to, from) in [
            (Side::Front, Side::Right),
            (Side::Right, Side::Back),
            (Side::Back, Side::Left),
        ] {
            let row = self.face_at(from).top_row();
            self.face_at_mut(to).set_top_row(row);
        }
        self.face_at_mut(Side::Left).set_top_row(buffer);

        self.rotate_face(Side::Top, 1);
    }

    /// Perform a native move.
    pub(crate) fn make_native(&mut self, mv: NativeMove) {
        match mv {
            NativeMove::UpperTurn => self.upper_turn(),
            NativeMove::Rotate(axis) => self.rotate(axis),
        }
    }
}
