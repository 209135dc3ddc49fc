use itertools::iproduct;
use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::types::{Color, Piece, PieceType, Square};

pub const STARTING_POSITION_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

static STARTING_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (col, piece_type) in BACK_RANK.iter().enumerate() {
        board.squares[0][col] = Some(Piece::new(Color::Black, *piece_type));
        board.squares[1][col] = Some(Piece::new(Color::Black, PieceType::Pawn));
        board.squares[6][col] = Some(Piece::new(Color::White, PieceType::Pawn));
        board.squares[7][col] = Some(Piece::new(Color::White, *piece_type));
    }
    board
});

/// All 64 squares, row-major from a8 to h1
pub fn all_squares() -> impl Iterator<Item = Square> {
    iproduct!(0..8u8, 0..8u8).filter_map(|(row, col)| Square::new(row, col))
}

/// Piece placement on an 8x8 grid. Holds no turn or selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position
    pub fn new() -> Board {
        STARTING_BOARD.clone()
    }

    pub fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Build a board from the piece placement field of a FEN string.
    ///
    /// A full FEN string is accepted as well, everything after the first
    /// space is ignored since the board carries no castling or clock state.
    pub fn from_placement(fen: &str) -> Result<Board> {
        let placement = fen.split_whitespace().next().unwrap_or("");
        let invalid = |message: String| Error::InvalidPlacement { message };

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid(format!(
                "expected 8 ranks, found {} in {placement:?}",
                ranks.len()
            )));
        }

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col: usize = 0;
            for piece_char in rank.chars() {
                if let Some(skip) = piece_char.to_digit(10) {
                    col += skip as usize;
                } else {
                    let piece = Piece::from_char(piece_char)?;
                    if col >= 8 {
                        return Err(invalid(format!("rank {rank:?} has more than 8 files")));
                    }
                    board.squares[row][col] = Some(piece);
                    col += 1;
                }
            }
            if col != 8 {
                return Err(invalid(format!(
                    "rank {rank:?} covers {col} files instead of 8"
                )));
            }
        }
        Ok(board)
    }

    /// Piece placement field of a FEN string for this board
    pub fn to_placement(&self) -> String {
        let mut placement = String::new();
        for (row, rank) in self.squares.iter().enumerate() {
            if row > 0 {
                placement.push('/');
            }
            let mut empty = 0;
            for square in rank {
                match square {
                    Some(piece) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
        }
        placement
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.row() as usize][square.col() as usize].as_ref()
    }

    /// Put `piece` on `square` (or clear it with `None`), returning what was there before
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.squares[square.row() as usize][square.col() as usize],
            piece,
        )
    }

    pub fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.set_piece(square, None)
    }

    /// Occupied squares with their pieces, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        all_squares().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, *p)))
    }
}
