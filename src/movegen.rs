//! Pseudo-legal destination generation.
//!
//! Moves follow piece movement rules only: nothing here looks at whose turn
//! it is, and a move that leaves the mover's own king attacked is still
//! generated.

use std::collections::BTreeSet;

use log::trace;

use crate::board::Board;
use crate::types::{Color, Piece, PieceType, Square};

/// Destination squares of one piece. Ordered so iteration is row-major.
pub type MoveSet = BTreeSet<Square>;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// What a piece finds on a square it could reach
enum PotentialMove {
    /// Empty square, the piece may stop here and a slider may keep going
    Empty,
    /// Opposing piece, can be captured but blocks further sliding
    Capture,
    /// Own piece, not a destination and blocks further sliding
    Blocked,
}

impl PotentialMove {
    fn is_destination(&self) -> bool {
        !matches!(self, PotentialMove::Blocked)
    }

    fn continue_search_in_direction(&self) -> bool {
        matches!(self, PotentialMove::Empty)
    }
}

fn check_move_target(board: &Board, color: Color, candidate: Square) -> PotentialMove {
    match board.piece_at(candidate) {
        None => PotentialMove::Empty,
        Some(other) if other.color == color => PotentialMove::Blocked,
        Some(_) => PotentialMove::Capture,
    }
}

/// Destinations for `piece` standing on `square`.
///
/// `piece` is taken as given rather than read from the board, so the
/// caller decides what is being moved; the board is only consulted for
/// the occupancy of target squares.
pub fn generate_moves(board: &Board, square: Square, piece: Piece) -> MoveSet {
    let mut moves = MoveSet::new();
    match piece.piece_type {
        PieceType::Pawn => {
            pawn_pushes(board, square, piece.color, &mut moves);
            pawn_captures(board, square, piece.color, &mut moves);
        }
        PieceType::Knight => step_moves(board, square, piece.color, &KNIGHT_OFFSETS, &mut moves),
        PieceType::Bishop => {
            sliding_moves(board, square, piece.color, &BISHOP_DIRECTIONS, &mut moves)
        }
        PieceType::Rook => sliding_moves(board, square, piece.color, &ROOK_DIRECTIONS, &mut moves),
        PieceType::Queen => {
            sliding_moves(board, square, piece.color, &BISHOP_DIRECTIONS, &mut moves);
            sliding_moves(board, square, piece.color, &ROOK_DIRECTIONS, &mut moves);
        }
        PieceType::King => step_moves(board, square, piece.color, &KING_OFFSETS, &mut moves),
    }
    trace!(
        "{} on {} has {} destinations",
        piece.to_human(),
        square,
        moves.len()
    );
    moves
}

/// Destinations for every piece of `color`, skipping pieces that cannot move
pub fn generate_moves_for_color(board: &Board, color: Color) -> Vec<(Square, MoveSet)> {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .map(|(square, piece)| (square, generate_moves(board, square, piece)))
        .filter(|(_, moves)| !moves.is_empty())
        .collect()
}

/// One step forward onto an empty square, two from the starting row if both are empty.
/// A pawn on the last row simply has nothing in front of it.
fn pawn_pushes(board: &Board, square: Square, color: Color, moves: &mut MoveSet) {
    let direction = color.pawn_direction();
    let Some(one_step) = square.offset(direction, 0) else {
        return;
    };
    if board.piece_at(one_step).is_some() {
        return;
    }
    moves.insert(one_step);

    if square.row() == color.pawn_starting_row() {
        if let Some(two_step) = one_step.offset(direction, 0) {
            if board.piece_at(two_step).is_none() {
                moves.insert(two_step);
            }
        }
    }
}

/// Diagonal steps forward, only onto an opposing piece
fn pawn_captures(board: &Board, square: Square, color: Color, moves: &mut MoveSet) {
    let direction = color.pawn_direction();
    for d_col in [-1, 1] {
        if let Some(candidate) = square.offset(direction, d_col) {
            if let PotentialMove::Capture = check_move_target(board, color, candidate) {
                moves.insert(candidate);
            }
        }
    }
}

/// Fixed-offset movers (knight, king): any on-board target not holding an own piece
fn step_moves(
    board: &Board,
    square: Square,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut MoveSet,
) {
    for (d_row, d_col) in offsets {
        if let Some(candidate) = square.offset(*d_row, *d_col) {
            if check_move_target(board, color, candidate).is_destination() {
                moves.insert(candidate);
            }
        }
    }
}

/// Walk each direction until the board edge or the first occupied square,
/// which is included only when it holds an opposing piece
fn sliding_moves(
    board: &Board,
    square: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut MoveSet,
) {
    for (d_row, d_col) in directions {
        let mut current = square;
        while let Some(candidate) = current.offset(*d_row, *d_col) {
            let potential_move = check_move_target(board, color, candidate);
            if potential_move.is_destination() {
                moves.insert(candidate);
            }
            if !potential_move.continue_search_in_direction() {
                break;
            }
            current = candidate;
        }
    }
}
