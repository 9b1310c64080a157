/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use anyhow::{bail, Result};

/// Represents the color of a player or piece on a chess board.
///
/// White traditionally moves first, and therefore [`Color`] defaults to [`Color::White`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[repr(u8)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// Number of color variants.
    pub const COUNT: usize = 2;

    /// An array of both colors, starting with White.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::White, Self::Black]
    }

    /// Returns `true` if this [`Color`] is White.
    #[inline(always)]
    pub const fn is_white(&self) -> bool {
        matches!(self, Self::White)
    }

    /// Returns `true` if this [`Color`] is Black.
    #[inline(always)]
    pub const fn is_black(&self) -> bool {
        matches!(self, Self::Black)
    }

    /// Returns this [`Color`]'s opposite / inverse / enemy.
    ///
    /// # Example
    /// ```
    /// # use hopper::Color;
    /// assert_eq!(Color::White.opponent(), Color::Black);
    /// assert_eq!(Color::Black.opponent(), Color::White);
    /// ```
    #[inline(always)]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Returns the row step a Pawn of this [`Color`] advances by.
    ///
    /// White Pawns advance toward row `0`, so this is `-1` for White and `1` for Black.
    ///
    /// # Example
    /// ```
    /// # use hopper::Color;
    /// assert_eq!(Color::White.pawn_direction(), -1);
    /// assert_eq!(Color::Black.pawn_direction(), 1);
    /// ```
    #[inline(always)]
    pub const fn pawn_direction(&self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Creates a [`Color`] based on the ASCII case of the provided character,
    /// with uppercase being White and lowercase being Black.
    ///
    /// This follows the piece-placement convention of FEN strings.
    ///
    /// # Example
    /// ```
    /// # use hopper::Color;
    /// assert_eq!(Color::from_case('N'), Color::White);
    /// assert_eq!(Color::from_case('k'), Color::Black);
    /// ```
    #[inline(always)]
    pub const fn from_case(c: char) -> Self {
        if c.is_ascii_lowercase() {
            Self::Black
        } else {
            Self::White
        }
    }

    /// Fetches a human-readable name for this [`Color`].
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Represents the kind (or "role") that a chess piece can be.
///
/// These have no [`Color`] associated with them. See [`Piece`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[repr(u8)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Number of piece variants.
    pub const COUNT: usize = 6;

    /// An array of all 6 [`PieceKind`]s.
    ///
    /// In the order: `Pawn`, `Knight`, `Bishop`, `Rook`, `Queen`, `King`.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        use PieceKind::*;
        [Pawn, Knight, Bishop, Rook, Queen, King]
    }

    /// Creates a new [`PieceKind`] from a character, according to FEN/UCI notation.
    ///
    /// Case-insensitive; use [`Color::from_case`] to recover the color.
    ///
    /// # Example
    /// ```
    /// # use hopper::PieceKind;
    /// let queen = PieceKind::from_uci('q');
    /// assert!(queen.is_ok());
    /// assert_eq!(queen.unwrap(), PieceKind::Queen);
    ///
    /// let err = PieceKind::from_uci('x');
    /// assert!(err.is_err());
    /// ```
    #[inline(always)]
    pub fn from_uci(kind: char) -> Result<Self> {
        match kind.to_ascii_lowercase() {
            'p' => Ok(Self::Pawn),
            'n' => Ok(Self::Knight),
            'b' => Ok(Self::Bishop),
            'r' => Ok(Self::Rook),
            'q' => Ok(Self::Queen),
            'k' => Ok(Self::King),
            _ => bail!("PieceKind must be one of [p, n, b, r, q, k] (case-insensitive). Found {kind:?}"),
        }
    }

    /// Converts this [`PieceKind`] to a lowercase char, according to FEN/UCI notation.
    ///
    /// # Example
    /// ```
    /// # use hopper::PieceKind;
    /// assert_eq!(PieceKind::Knight.to_uci(), 'n');
    /// ```
    #[inline(always)]
    pub const fn to_uci(&self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }

    /// Fetches a human-readable name for this [`PieceKind`].
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Represents a chess piece: a [`Color`], a [`PieceKind`], and a "has moved" flag.
///
/// The color and kind of a [`Piece`] never change. The "has moved" flag only
/// influences a Pawn's double-step and is updated externally, via
/// [`Piece::set_moved`], by whatever applies moves to the board; move
/// generation itself never mutates it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    moved: bool,
}

impl Piece {
    /// Creates a new [`Piece`] that has not yet moved.
    ///
    /// # Example
    /// ```
    /// # use hopper::{Color, Piece, PieceKind};
    /// let pawn = Piece::new(Color::White, PieceKind::Pawn);
    /// assert_eq!(pawn.color(), Color::White);
    /// assert_eq!(pawn.kind(), PieceKind::Pawn);
    /// assert!(!pawn.has_moved());
    /// ```
    #[inline(always)]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            moved: false,
        }
    }

    /// Fetches the [`Color`] of this [`Piece`].
    #[inline(always)]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Fetches the [`PieceKind`] of this [`Piece`].
    #[inline(always)]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Returns `true` if this [`Piece`] has been marked as having moved.
    #[inline(always)]
    pub const fn has_moved(&self) -> bool {
        self.moved
    }

    /// Marks whether this [`Piece`] has moved.
    ///
    /// Called by the layer that applies moves, never by move generation.
    ///
    /// # Example
    /// ```
    /// # use hopper::{Color, Piece, PieceKind};
    /// let mut pawn = Piece::new(Color::Black, PieceKind::Pawn);
    /// pawn.set_moved(true);
    /// assert!(pawn.has_moved());
    /// ```
    #[inline(always)]
    pub fn set_moved(&mut self, moved: bool) {
        self.moved = moved;
    }

    /// Creates a new [`Piece`] from a character, according to FEN/UCI notation.
    ///
    /// Uppercase pieces are White, lowercase are Black. The new piece has not moved.
    ///
    /// # Example
    /// ```
    /// # use hopper::{Color, Piece, PieceKind};
    /// let knight = Piece::from_uci('N');
    /// assert!(knight.is_ok());
    /// assert_eq!(knight.unwrap(), Piece::new(Color::White, PieceKind::Knight));
    /// ```
    #[inline(always)]
    pub fn from_uci(piece: char) -> Result<Self> {
        let kind = PieceKind::from_uci(piece)?;
        Ok(Self::new(Color::from_case(piece), kind))
    }

    /// Converts this [`Piece`] to a char, according to FEN/UCI notation.
    ///
    /// White pieces are uppercase, Black pieces are lowercase.
    ///
    /// # Example
    /// ```
    /// # use hopper::{Color, Piece, PieceKind};
    /// assert_eq!(Piece::new(Color::White, PieceKind::Queen).to_uci(), 'Q');
    /// assert_eq!(Piece::new(Color::Black, PieceKind::Queen).to_uci(), 'q');
    /// ```
    #[inline(always)]
    pub const fn to_uci(&self) -> char {
        if self.color.is_white() {
            self.kind.to_uci().to_ascii_uppercase()
        } else {
            self.kind.to_uci()
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_piece_uci_roundtrip() {
        for color in Color::all() {
            for kind in PieceKind::all() {
                let piece = Piece::new(color, kind);
                assert_eq!(Piece::from_uci(piece.to_uci()).unwrap(), piece);
            }
        }
    }

    #[test]
    fn test_moved_flag_does_not_change_identity() {
        let mut pawn = Piece::new(Color::White, PieceKind::Pawn);
        pawn.set_moved(true);
        assert_eq!(pawn.color(), Color::White);
        assert_eq!(pawn.kind(), PieceKind::Pawn);
        assert!(pawn.has_moved());
        pawn.set_moved(false);
        assert!(!pawn.has_moved());
    }
}
