//! Terminal drawing of a [`GameView`].

use itertools::Itertools;

use crate::game::GameView;
use crate::types::{Color, Piece, Square};

const RESET: &str = "\x1b[0m";
const LIGHT_SQUARE_BG: &str = "\x1b[48;5;180m";
const DARK_SQUARE_BG: &str = "\x1b[48;5;94m";
const SELECTED_BG: &str = "\x1b[48;5;220m";
const DESTINATION_BG: &str = "\x1b[48;5;71m";
const WHITE_PIECE_FG: &str = "\x1b[1;97m";
const BLACK_PIECE_FG: &str = "\x1b[1;30m";
const WHITE_TURN_FG: &str = "\x1b[1;33m";
const BLACK_TURN_FG: &str = "\x1b[1;31m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    /// Chess glyphs instead of FEN letters
    pub unicode: bool,
    /// ANSI background colours instead of bracket markers
    pub color: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            unicode: true,
            color: true,
        }
    }
}

impl RenderStyle {
    pub fn plain() -> Self {
        Self {
            unicode: false,
            color: false,
        }
    }
}

fn piece_text(piece: &Piece, style: RenderStyle) -> String {
    if style.unicode {
        piece.to_symbol().to_string()
    } else {
        piece.to_char().to_string()
    }
}

/// One 3-character cell
fn draw_square(view: &GameView<'_>, square: Square, style: RenderStyle) -> String {
    let selected = view.is_selected(square);
    let destination = view.is_destination(square);
    let content = match view.piece_at(square) {
        Some(piece) => piece_text(piece, style),
        None if destination => "·".to_string(),
        None => ".".to_string(),
    };

    if !style.color {
        return if selected {
            format!("[{content}]")
        } else if destination {
            format!("({content})")
        } else {
            format!(" {content} ")
        };
    }

    let background = if selected {
        SELECTED_BG
    } else if destination {
        DESTINATION_BG
    } else if square.is_light() {
        LIGHT_SQUARE_BG
    } else {
        DARK_SQUARE_BG
    };
    let (foreground, content) = match view.piece_at(square) {
        Some(piece) => (
            match piece.color {
                Color::White => WHITE_PIECE_FG,
                Color::Black => BLACK_PIECE_FG,
            },
            content,
        ),
        // empty squares are drawn by their background alone
        None if destination => (BLACK_PIECE_FG, content),
        None => ("", " ".to_string()),
    };
    format!("{background}{foreground} {content} {RESET}")
}

/// The board as text, black's back rank on top, with rank and file labels
pub fn draw_board(view: &GameView<'_>, style: RenderStyle) -> String {
    let mut string = String::new();
    for row in 0..8 {
        string.push_str(&format!("{} ", 8 - row));
        for col in 0..8 {
            if let Some(square) = Square::new(row, col) {
                string.push_str(&draw_square(view, square, style));
            }
        }
        string.push('\n');
    }
    string.push_str("  ");
    string.push_str(&('a'..='h').map(|file| format!(" {file} ")).join(""));
    string.push('\n');
    string
}

pub fn turn_banner(turn: Color, style: RenderStyle) -> String {
    if !style.color {
        return format!("Current turn: {turn}");
    }
    let foreground = match turn {
        Color::White => WHITE_TURN_FG,
        Color::Black => BLACK_TURN_FG,
    };
    format!("Current turn: {foreground}{turn}{RESET}")
}
