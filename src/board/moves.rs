/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use super::Coord;

/// Maximum possible number of moves a single piece can have.
///
/// A Queen on one of the four central squares reaches 27 destinations on an
/// otherwise empty board; no piece ever exceeds that.
pub const MAX_PIECE_MOVES: usize = 27;

/// An alias for an [`arrayvec::ArrayVec`] containing at most [`MAX_PIECE_MOVES`] moves.
///
/// Move generation yields these in no particular order; treat membership, not
/// position, as meaningful.
pub type MoveList = arrayvec::ArrayVec<Move, MAX_PIECE_MOVES>;

/// Represents a move of a single piece from one [`Coord`] to another.
///
/// A [`Move`] is nothing but its two endpoints: it carries no capture or
/// check information, and two moves are equal iff both endpoints are equal.
/// Whether a move captures must be re-derived by inspecting the board it was
/// generated against, *before* the move is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    from: Coord,
    to: Coord,
}

impl Move {
    /// Creates a new [`Move`] from one [`Coord`] to another.
    ///
    /// # Example
    /// ```
    /// # use hopper::{Coord, Move};
    /// let mv = Move::new(Coord::new(6, 4), Coord::new(4, 4));
    /// assert_eq!(mv.from(), Coord::new(6, 4));
    /// assert_eq!(mv.to(), Coord::new(4, 4));
    /// ```
    #[inline(always)]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// Fetches the [`Coord`] this [`Move`] starts from.
    #[inline(always)]
    pub const fn from(&self) -> Coord {
        self.from
    }

    /// Fetches the [`Coord`] this [`Move`] lands on.
    #[inline(always)]
    pub const fn to(&self) -> Coord {
        self.to
    }
}

impl fmt::Display for Move {
    /// Moves print as their two endpoints concatenated, like `e2e4`.
    ///
    /// # Example
    /// ```
    /// # use hopper::{Coord, Move};
    /// let mv = Move::new("e2".parse().unwrap(), "e4".parse().unwrap());
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
