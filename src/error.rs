//! Error types for parsing board input
//!
//! The click-driven game itself never fails; these errors only come out of the
//! helpers that turn text (algebraic squares, piece letters, FEN placements)
//! into board values.

/// Errors that can occur while parsing board input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Square text was neither algebraic (`e2`) nor a `row,col` pair in range
    #[error("Invalid square: {input:?}")]
    InvalidSquare { input: String },

    /// Character is not one of `pnbrqkPNBRQK`
    #[error("Invalid piece character: {0:?}")]
    InvalidPieceChar(char),

    /// Piece placement field could not be read
    #[error("Invalid piece placement: {message}")]
    InvalidPlacement { message: String },
}

/// Result type alias for parsing operations
pub type Result<T> = std::result::Result<T, Error>;
