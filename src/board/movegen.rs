/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{Board, Color, Coord, Move, MoveList, Piece, PieceKind};

/// Deltas for the movement of the Queen.
const QUEEN_DELTAS: [(i8, i8); 8] = [
    /* Rook */
    (1, 0),
    (0, -1),
    (-1, 0),
    (0, 1),
    /* Bishop */
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

/// Deltas for the movement of the Rook.
const ROOK_DELTAS: [(i8, i8); 4] = [
    QUEEN_DELTAS[0],
    QUEEN_DELTAS[1],
    QUEEN_DELTAS[2],
    QUEEN_DELTAS[3],
];

/// Deltas for the movement of the Bishop.
const BISHOP_DELTAS: [(i8, i8); 4] = [
    QUEEN_DELTAS[4],
    QUEEN_DELTAS[5],
    QUEEN_DELTAS[6],
    QUEEN_DELTAS[7],
];

/// Deltas for the movement of the Knight.
const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

/// Deltas for the movement of the King: one step in any of the Queen's directions.
const KING_DELTAS: [(i8, i8); 8] = QUEEN_DELTAS;

impl Piece {
    /// Generates every square this [`Piece`] may move to from `from` on `board`,
    /// under basic movement rules.
    ///
    /// "Basic" means occupancy-driven movement only: sliding pieces travel
    /// until blocked and may capture the first enemy they meet, stepping
    /// pieces visit any candidate square not held by a friendly piece, and
    /// Pawns advance onto empty squares (twice while unmoved) and capture
    /// diagonally. Castling, en passant, promotion, and check are not
    /// modeled here; a caller that needs full legality must filter further.
    ///
    /// This is a pure function of the piece's own state and the board
    /// snapshot: it never mutates `board`, and every [`Move`] it returns has
    /// `from` as its origin and an on-board destination. The returned list
    /// is in no particular order.
    ///
    /// The board square at `from` is *not* consulted; callers are expected
    /// to invoke this on a coordinate they know holds this piece.
    ///
    /// # Example
    /// ```
    /// # use hopper::{Board, Color, Coord, Move, Piece, PieceKind};
    /// let mut board = Board::new();
    /// let bishop = Piece::new(Color::White, PieceKind::Bishop);
    /// let from = Coord::new(4, 4);
    /// board.place(bishop, from);
    ///
    /// let moves = bishop.moves_from(from, &board);
    /// assert!(moves.contains(&Move::new(from, Coord::new(0, 0))));
    /// assert!(!moves.contains(&Move::new(from, Coord::new(4, 0))));
    /// ```
    pub fn moves_from(&self, from: Coord, board: &Board) -> MoveList {
        match self.kind() {
            PieceKind::Pawn => pawn_moves(*self, from, board),
            PieceKind::Knight => stepper_moves(self.color(), from, board, &KNIGHT_DELTAS),
            PieceKind::Bishop => slider_moves(self.color(), from, board, &BISHOP_DELTAS),
            PieceKind::Rook => slider_moves(self.color(), from, board, &ROOK_DELTAS),
            PieceKind::Queen => slider_moves(self.color(), from, board, &QUEEN_DELTAS),
            PieceKind::King => stepper_moves(self.color(), from, board, &KING_DELTAS),
        }
    }
}

/// Is `to` on the board and empty?
#[inline(always)]
fn is_occupiable(board: &Board, to: Coord) -> bool {
    to.is_on_board() && board.get(to).is_none()
}

/// Is `to` on the board and held by an opponent of `mover`?
#[inline(always)]
fn is_capturable(board: &Board, to: Coord, mover: Color) -> bool {
    to.is_on_board() && board.get(to).is_some_and(|piece| piece.color() != mover)
}

/// Moves for the sliding pieces (Bishop, Rook, Queen).
///
/// Walks each ray one delta at a time, collecting empty squares until the
/// ray is no longer occupiable. The square that stopped the walk becomes one
/// final capture iff it holds an enemy; its occupant is only read after an
/// explicit bounds check, since the walk may have run off the board.
fn slider_moves(mover: Color, from: Coord, board: &Board, deltas: &[(i8, i8)]) -> MoveList {
    let mut moves = MoveList::new();

    for &(dr, dc) in deltas {
        let mut to = from.offset(dr, dc);

        while is_occupiable(board, to) {
            moves.push(Move::new(from, to));
            to = to.offset(dr, dc);
        }

        if is_capturable(board, to, mover) {
            moves.push(Move::new(from, to));
        }
    }

    moves
}

/// Moves for the stepping pieces (Knight, King).
///
/// Each delta is a candidate destination in its own right: intervening
/// occupancy is irrelevant, so a square is admitted unless it is off the
/// board or held by a friendly piece.
fn stepper_moves(mover: Color, from: Coord, board: &Board, deltas: &[(i8, i8)]) -> MoveList {
    let mut moves = MoveList::new();

    for &(dr, dc) in deltas {
        let to = from.offset(dr, dc);

        if is_occupiable(board, to) || is_capturable(board, to, mover) {
            moves.push(Move::new(from, to));
        }
    }

    moves
}

/// Moves for a Pawn, whose forward and capturing rules differ.
///
/// Forward squares are admitted only when empty (Pawns never capture
/// straight ahead), and the double step additionally requires an unmoved
/// pawn and an empty, on-board destination of its own. Diagonal squares are
/// admitted only when enemy-occupied; there is no en passant, and a pawn
/// reaching the far rank stays a pawn.
fn pawn_moves(pawn: Piece, from: Coord, board: &Board) -> MoveList {
    let mut moves = MoveList::new();
    let dir = pawn.color().pawn_direction();

    let ahead = from.offset(dir, 0);
    if is_occupiable(board, ahead) {
        moves.push(Move::new(from, ahead));

        let double = from.offset(2 * dir, 0);
        if !pawn.has_moved() && is_occupiable(board, double) {
            moves.push(Move::new(from, double));
        }
    }

    for dc in [-1, 1] {
        let diagonal = from.offset(dir, dc);
        if is_capturable(board, diagonal, pawn.color()) {
            moves.push(Move::new(from, diagonal));
        }
    }

    moves
}
