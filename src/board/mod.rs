/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use anyhow::{bail, Result};

/// Coordinates on (and off) the board.
mod coord;

/// Per-piece move generation.
mod movegen;

/// Moves and move lists.
mod moves;

/// Colors, piece kinds, and pieces.
mod piece;

pub use coord::*;
pub use moves::*;
pub use piece::*;

/// FEN string for the starting position of chess.
pub const FEN_STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Represents all pieces and their locations on a chess board.
///
/// A [`Board`] is a pure occupancy grid: it knows nothing of turn order,
/// check, or any other game state, and it never enforces whose move it is.
/// At most one [`Piece`] occupies any square.
///
/// All accessors take a [`Coord`] that must lie on the board; reading or
/// writing an off-board coordinate panics, since only a buggy caller can
/// produce one (see [`Coord::index`]).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// One slot per square, row-major from the top-left corner `(0, 0)`.
    mailbox: [Option<Piece>; 64],
}

impl Board {
    /// Creates a new, empty [`Board`] containing no pieces.
    ///
    /// # Example
    /// ```
    /// # use hopper::Board;
    /// let board = Board::new();
    /// assert_eq!(board.to_fen(), "8/8/8/8/8/8/8/8");
    /// ```
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            mailbox: [None; 64],
        }
    }

    /// Creates a [`Board`] with the conventional starting position, all
    /// pieces unmoved.
    ///
    /// # Example
    /// ```
    /// # use hopper::{Board, Coord, PieceKind};
    /// let board = Board::standard();
    /// assert_eq!(board.kind_at(Coord::new(7, 4)), Some(PieceKind::King));
    /// ```
    #[inline(always)]
    pub fn standard() -> Self {
        // Safety: The FEN for startpos is always valid
        unsafe { Self::from_fen(FEN_STARTPOS).unwrap_unchecked() }
    }

    /// Constructs a [`Board`] from the provided FEN string, ignoring
    /// everything after the piece placements.
    ///
    /// FEN lists rank 8 first, which is row `0`, so placements are read in
    /// row order. Every piece starts with its "has moved" flag unset,
    /// wherever it is placed.
    ///
    /// # Example
    /// ```
    /// # use hopper::{Board, Coord, PieceKind};
    /// let board = Board::from_fen("8/8/8/8/2N5/8/8/8").unwrap();
    /// assert_eq!(board.kind_at(Coord::new(4, 2)), Some(PieceKind::Knight));
    /// ```
    pub fn from_fen(fen: &str) -> Result<Self> {
        let mut board = Self::new();

        // If this FEN string contains more than just the initial placements, extract the placements
        let placements = if fen.contains(' ') {
            fen.split(' ').next().unwrap()
        } else {
            fen
        };

        // Check if the placements string is the correct length
        if placements.matches('/').count() != 7 {
            bail!("FEN must have piece placements for all 8 ranks");
        }

        for (row, placements) in placements.split('/').enumerate() {
            let mut col = 0i8;

            for piece_char in placements.chars() {
                if col >= 8 {
                    bail!("FEN rank {} describes more than 8 squares", 8 - row);
                }

                // If the next char is a piece, place it; otherwise it must be a run of empty squares
                if let Ok(piece) = Piece::from_uci(piece_char) {
                    board.place(piece, Coord::new(row as i8, col));
                    col += 1;
                } else {
                    let Some(empty) = piece_char.to_digit(10) else {
                        bail!(
                            "FEN placements must contain piece chars or digits. Got {piece_char:?}"
                        );
                    };
                    col += empty as i8;
                }
            }
        }

        Ok(board)
    }

    /// Generates the piece-placement field of a FEN string for this [`Board`].
    pub fn to_fen(&self) -> String {
        let mut placements = String::with_capacity(71);

        for row in 0..8 {
            let mut empty = 0;

            for col in 0..8 {
                if let Some(piece) = self.get(Coord::new(row, col)) {
                    if empty > 0 {
                        placements += &empty.to_string();
                        empty = 0;
                    }
                    placements.push(piece.to_uci());
                } else {
                    empty += 1;
                }
            }

            if empty > 0 {
                placements += &empty.to_string();
            }
            if row != 7 {
                placements.push('/');
            }
        }

        placements
    }

    /// Fetches the occupant of the provided [`Coord`], if there is one.
    ///
    /// # Panics
    /// If `coord` lies outside the board. Callers must bounds-check first;
    /// an off-board read is a bug, not an empty square.
    ///
    /// # Example
    /// ```
    /// # use hopper::{Board, Color, Coord};
    /// let board = Board::standard();
    /// assert!(board.get(Coord::new(4, 4)).is_none());
    /// assert_eq!(board.get(Coord::new(6, 0)).unwrap().color(), Color::White);
    /// ```
    #[inline(always)]
    pub fn get(&self, coord: Coord) -> Option<Piece> {
        self.mailbox[coord.index()]
    }

    /// Returns `true` if there is a piece at the given [`Coord`], else `false`.
    ///
    /// # Example
    /// ```
    /// # use hopper::Board;
    /// let board = Board::standard();
    /// assert!(board.has("b1".parse().unwrap()));
    /// ```
    #[inline(always)]
    pub fn has(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    /// Fetches the [`Color`] of the piece at the provided [`Coord`], if there is one.
    ///
    /// # Example
    /// ```
    /// # use hopper::{Board, Color, Coord};
    /// let board = Board::standard();
    /// assert_eq!(board.color_at(Coord::new(1, 3)), Some(Color::Black));
    /// assert!(board.color_at(Coord::new(4, 3)).is_none());
    /// ```
    #[inline(always)]
    pub fn color_at(&self, coord: Coord) -> Option<Color> {
        self.get(coord).map(|piece| piece.color())
    }

    /// Fetches the [`PieceKind`] of the piece at the provided [`Coord`], if there is one.
    #[inline(always)]
    pub fn kind_at(&self, coord: Coord) -> Option<PieceKind> {
        self.get(coord).map(|piece| piece.kind())
    }

    /// Places the provided [`Piece`] at the supplied [`Coord`].
    ///
    /// If another piece occupies this square, it is overwritten and lost.
    /// Use [`Board::take`] first if the occupant matters.
    ///
    /// # Panics
    /// If `coord` lies outside the board.
    ///
    /// # Example
    /// ```
    /// # use hopper::{Board, Color, Piece, PieceKind};
    /// let mut board = Board::new();
    /// let white_knight = Piece::new(Color::White, PieceKind::Knight);
    /// board.place(white_knight, "c4".parse().unwrap());
    /// assert_eq!(board.to_fen(), "8/8/8/8/2N5/8/8/8");
    /// ```
    #[inline(always)]
    pub fn place(&mut self, piece: Piece, coord: Coord) {
        self.mailbox[coord.index()] = Some(piece);
    }

    /// Takes the [`Piece`] from a given [`Coord`], if there is one present.
    ///
    /// This is the removal half of applying a move: take from the source,
    /// mark it moved, place at the destination (evicting any capture).
    ///
    /// # Example
    /// ```
    /// # use hopper::{Board, Color, Piece, PieceKind};
    /// let mut board = Board::from_fen("8/8/8/8/2N5/8/8/8").unwrap();
    /// let taken = board.take("c4".parse().unwrap());
    /// assert_eq!(taken, Some(Piece::new(Color::White, PieceKind::Knight)));
    /// assert_eq!(board.to_fen(), "8/8/8/8/8/8/8/8");
    /// ```
    #[inline(always)]
    pub fn take(&mut self, coord: Coord) -> Option<Piece> {
        self.mailbox[coord.index()].take()
    }

    /// Clears the supplied [`Coord`] of any pieces.
    #[inline(always)]
    pub fn clear(&mut self, coord: Coord) {
        self.take(coord);
    }
}

impl Default for Board {
    /// A default [`Board`] is the standard starting position.
    #[inline(always)]
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    /// Prints the board as an ASCII diagram with rank and file labels:
    ///
    /// ```text
    /// 8| r n b q k b n r
    /// 7| p p p p p p p p
    /// 6| . . . . . . . .
    /// 5| . . . . . . . .
    /// 4| . . . . . . . .
    /// 3| . . . . . . . .
    /// 2| P P P P P P P P
    /// 1| R N B Q K B N R
    ///  +----------------
    ///    a b c d e f g h
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Allocate just enough capacity
        let mut board = String::with_capacity(198);

        for row in 0..8 {
            board += &format!("{}| ", 8 - row);

            for col in 0..8 {
                let occupant = match self.get(Coord::new(row, col)) {
                    Some(piece) => piece.to_uci(),
                    None => '.',
                };

                board += &format!("{occupant} ");
            }

            board += "\n";
        }
        board += " +";
        for _ in 0..8 {
            board += "--";
        }
        board += "\n   a b c d e f g h";

        write!(f, "{board}")
    }
}

impl fmt::Debug for Board {
    /// Debug output is the [`fmt::Display`] diagram followed by the FEN placements.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}\nFEN: {}", self.to_fen())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_fen_roundtrip() {
        for fen in [
            "8/8/8/8/8/8/8/8",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        ] {
            assert_eq!(Board::from_fen(fen).unwrap().to_fen(), fen);
        }
    }

    #[test]
    fn test_from_fen_accepts_full_fen_strings() {
        let board = Board::from_fen(FEN_STARTPOS).unwrap();
        assert_eq!(board, Board::standard());
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_from_fen_rejects_malformed_placements() {
        assert!(Board::from_fen("8/8/8/8/8/8/8").is_err());
        assert!(Board::from_fen("8/8/8/8/x7/8/8/8").is_err());
        assert!(Board::from_fen("9p/8/8/8/8/8/8/8").is_err());
    }

    #[test]
    fn test_place_overwrites() {
        let mut board = Board::new();
        let coord = Coord::new(3, 3);
        board.place(Piece::new(Color::White, PieceKind::Rook), coord);
        board.place(Piece::new(Color::Black, PieceKind::Queen), coord);
        assert_eq!(board.color_at(coord), Some(Color::Black));
        assert_eq!(board.kind_at(coord), Some(PieceKind::Queen));
    }

    #[test]
    fn test_take_empties_the_square() {
        let mut board = Board::standard();
        let coord = "e2".parse().unwrap();
        let pawn = board.take(coord).unwrap();
        assert_eq!(pawn.kind(), PieceKind::Pawn);
        assert!(!board.has(coord));
        assert!(board.take(coord).is_none());

        board.clear("d1".parse().unwrap());
        assert!(!board.has("d1".parse().unwrap()));
    }

    #[test]
    #[should_panic]
    fn test_off_board_access_panics() {
        Board::new().get(Coord::new(-1, 0));
    }
}
