//! Selection and turn handling for a two-player game driven by square clicks.
//!
//! [`Game`] is a two-state machine: either nothing is selected, or one of the
//! side to move's pieces is selected together with its destination squares.
//! Every click has exactly one outcome, reported as a [`ClickOutcome`].

use log::{debug, info, warn};

use crate::board::Board;
use crate::movegen::{generate_moves, MoveSet};
use crate::types::{Color, Piece, Square};

/// A move that was carried out on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

impl AppliedMove {
    pub fn to_human(&self) -> String {
        let maybe_capture_str = match self.captured {
            Some(p) => format!(" capturing {}", p.to_human()),
            None => "".to_string(),
        };
        format!(
            "{} moves {} from {} to {}{}",
            self.piece.color.to_human(),
            self.piece.piece_type.to_human(),
            self.from,
            self.to,
            maybe_capture_str
        )
    }

    pub fn to_algebraic(&self) -> String {
        format!(
            "{}{}{}{}",
            self.piece.piece_type.to_char(),
            self.from,
            if self.captured.is_some() { "x" } else { "" },
            self.to
        )
    }
}

/// Result of a single click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed
    Ignored,
    /// The clicked piece is now the selection (fresh selection or re-selection)
    Selected(Square),
    /// The selection was dropped without moving
    Deselected,
    /// The selected piece moved and the turn passed to the other side
    Moved(AppliedMove),
}

/// Board, side to move and the current selection.
///
/// The game owns the only board; presentation code reads it through
/// [`Game::view`] and changes it only by feeding clicks to
/// [`Game::on_square_clicked`].
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    selection: Option<Square>,
    legal_destinations: MoveSet,
    moves_played: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, white to move
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            selection: None,
            legal_destinations: MoveSet::new(),
            moves_played: 0,
        }
    }

    /// Back to the starting position with white to move and nothing selected
    pub fn reset_game(&mut self) {
        *self = Self::new();
        info!("game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    pub fn legal_destinations(&self) -> &MoveSet {
        &self.legal_destinations
    }

    /// Moves applied since the game was created or last reset
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    pub fn view(&self) -> GameView<'_> {
        GameView { game: self }
    }

    /// Handle a click on `(row, col)`. Coordinates off the board are ignored.
    pub fn on_square_clicked(&mut self, row: u8, col: u8) -> ClickOutcome {
        match Square::new(row, col) {
            Some(square) => self.click(square),
            None => {
                warn!("ignoring click outside the board at ({row}, {col})");
                ClickOutcome::Ignored
            }
        }
    }

    pub fn click(&mut self, square: Square) -> ClickOutcome {
        if let Some(from) = self.selection {
            if self.legal_destinations.contains(&square) {
                return self.apply_move(from, square);
            }
        }

        match self.own_piece_at(square) {
            Some(piece) => {
                self.select(square, piece);
                ClickOutcome::Selected(square)
            }
            None if self.selection.is_some() => {
                self.clear_selection();
                debug!("selection cleared by click on {square}");
                ClickOutcome::Deselected
            }
            None => ClickOutcome::Ignored,
        }
    }

    fn own_piece_at(&self, square: Square) -> Option<Piece> {
        self.board
            .piece_at(square)
            .filter(|piece| piece.color == self.turn)
            .copied()
    }

    fn select(&mut self, square: Square, piece: Piece) {
        self.legal_destinations = generate_moves(&self.board, square, piece);
        self.selection = Some(square);
        debug!(
            "selected {} on {} with {} destinations",
            piece.to_human(),
            square,
            self.legal_destinations.len()
        );
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.legal_destinations.clear();
    }

    fn apply_move(&mut self, from: Square, to: Square) -> ClickOutcome {
        // only `click` mutates the board, so the selected square still holds the selected piece
        let Some(piece) = self.board.take_piece(from) else {
            warn!("selected square {from} is empty, dropping selection");
            self.clear_selection();
            return ClickOutcome::Deselected;
        };
        let captured = self.board.set_piece(to, Some(piece));
        let applied = AppliedMove {
            piece,
            from,
            to,
            captured,
        };

        self.clear_selection();
        self.turn = self.turn.other_color();
        self.moves_played += 1;
        info!("{}", applied.to_human());
        ClickOutcome::Moved(applied)
    }
}

/// Read-only view of a [`Game`] for rendering
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    game: &'a Game,
}

impl<'a> GameView<'a> {
    pub fn board(&self) -> &'a Board {
        &self.game.board
    }

    pub fn piece_at(&self, square: Square) -> Option<&'a Piece> {
        self.game.board.piece_at(square)
    }

    pub fn turn(&self) -> Color {
        self.game.turn
    }

    pub fn selection(&self) -> Option<Square> {
        self.game.selection
    }

    pub fn legal_destinations(&self) -> &'a MoveSet {
        &self.game.legal_destinations
    }

    pub fn is_selected(&self, square: Square) -> bool {
        self.game.selection == Some(square)
    }

    pub fn is_destination(&self, square: Square) -> bool {
        self.game.legal_destinations.contains(&square)
    }

    /// Selected square or one of its destinations
    pub fn is_highlighted(&self, square: Square) -> bool {
        self.is_selected(square) || self.is_destination(square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceType;
    use pretty_assertions::assert_eq;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn set(squares: &[(u8, u8)]) -> MoveSet {
        squares.iter().map(|(r, c)| sq(*r, *c)).collect()
    }

    #[test]
    fn new_game_is_idle_white_to_move() {
        let game = Game::new();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.selection(), None);
        assert!(game.legal_destinations().is_empty());
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.moves_played(), 0);
    }

    #[test]
    fn idle_click_on_empty_square_is_ignored() {
        let mut game = Game::new();
        let before = game.clone();
        assert_eq!(game.on_square_clicked(4, 4), ClickOutcome::Ignored);
        assert_eq!(game.selection(), before.selection());
        assert_eq!(game.board(), before.board());
        assert_eq!(game.turn(), before.turn());
    }

    #[test]
    fn idle_click_on_opponent_piece_is_ignored() {
        let mut game = Game::new();
        assert_eq!(game.on_square_clicked(1, 0), ClickOutcome::Ignored);
        assert_eq!(game.selection(), None);
        assert!(game.legal_destinations().is_empty());
        assert_eq!(
            game.board().piece_at(sq(6, 0)),
            Some(&Piece::new(Color::White, PieceType::Pawn))
        );
    }

    #[test]
    fn select_and_move_pawn() {
        let mut game = Game::new();
        assert_eq!(game.on_square_clicked(6, 4), ClickOutcome::Selected(sq(6, 4)));
        assert_eq!(game.legal_destinations(), &set(&[(5, 4), (4, 4)]));

        let pawn = Piece::new(Color::White, PieceType::Pawn);
        assert_eq!(
            game.on_square_clicked(4, 4),
            ClickOutcome::Moved(AppliedMove {
                piece: pawn,
                from: sq(6, 4),
                to: sq(4, 4),
                captured: None,
            })
        );
        assert_eq!(game.board().piece_at(sq(4, 4)), Some(&pawn));
        assert_eq!(game.board().piece_at(sq(6, 4)), None);
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.selection(), None);
        assert!(game.legal_destinations().is_empty());
        assert_eq!(game.moves_played(), 1);
    }

    #[test]
    fn reselect_own_piece() {
        let mut game = Game::new();
        game.on_square_clicked(6, 4);
        assert_eq!(game.on_square_clicked(7, 6), ClickOutcome::Selected(sq(7, 6)));
        assert_eq!(game.selection(), Some(sq(7, 6)));
        assert_eq!(game.legal_destinations(), &set(&[(5, 5), (5, 7)]));
    }

    #[test]
    fn clicking_selected_square_reselects_it() {
        let mut game = Game::new();
        game.on_square_clicked(6, 4);
        assert_eq!(game.on_square_clicked(6, 4), ClickOutcome::Selected(sq(6, 4)));
        assert_eq!(game.selection(), Some(sq(6, 4)));
        assert_eq!(game.legal_destinations(), &set(&[(5, 4), (4, 4)]));
    }

    #[test]
    fn deselect_on_empty_or_opponent_square() {
        let mut game = Game::new();
        game.on_square_clicked(6, 4);
        assert_eq!(game.on_square_clicked(3, 0), ClickOutcome::Deselected);
        assert_eq!(game.selection(), None);
        assert!(game.legal_destinations().is_empty());
        assert_eq!(game.turn(), Color::White);

        game.on_square_clicked(6, 4);
        assert_eq!(game.on_square_clicked(0, 0), ClickOutcome::Deselected);
        assert_eq!(game.selection(), None);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn capture_overwrites_target() {
        // white rook a1, black knight a8
        let board = Board::from_placement("n7/8/8/8/8/8/8/R7").unwrap();
        let mut game = Game::from_board(board, Color::White);
        game.on_square_clicked(7, 0);
        let outcome = game.on_square_clicked(0, 0);
        let ClickOutcome::Moved(applied) = outcome else {
            panic!("expected a move, got {outcome:?}");
        };
        assert_eq!(
            applied.captured,
            Some(Piece::new(Color::Black, PieceType::Knight))
        );
        assert_eq!(applied.to_human(), "white moves rook from a1 to a8 capturing black knight");
        assert_eq!(applied.to_algebraic(), "Ra1xa8");
        assert_eq!(game.board().pieces().count(), 1);
        assert_eq!(
            game.board().piece_at(sq(0, 0)),
            Some(&Piece::new(Color::White, PieceType::Rook))
        );
    }

    #[test]
    fn blocked_piece_can_be_selected_but_not_moved() {
        let mut game = Game::new();
        assert_eq!(game.on_square_clicked(7, 0), ClickOutcome::Selected(sq(7, 0)));
        assert!(game.legal_destinations().is_empty());
        assert_eq!(game.on_square_clicked(5, 0), ClickOutcome::Deselected);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let mut game = Game::new();
        game.on_square_clicked(6, 4);
        assert_eq!(game.on_square_clicked(8, 0), ClickOutcome::Ignored);
        assert_eq!(game.on_square_clicked(0, 200), ClickOutcome::Ignored);
        assert_eq!(game.selection(), Some(sq(6, 4)));
    }

    #[test]
    fn reset_restores_start() {
        let mut game = Game::new();
        game.on_square_clicked(6, 4);
        game.on_square_clicked(4, 4);
        game.on_square_clicked(1, 3);
        game.reset_game();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.selection(), None);
        assert_eq!(game.moves_played(), 0);
    }

    #[test]
    fn view_reports_highlights() {
        let mut game = Game::new();
        game.on_square_clicked(7, 1);
        let view = game.view();
        assert!(view.is_selected(sq(7, 1)));
        assert!(view.is_destination(sq(5, 0)));
        assert!(view.is_highlighted(sq(5, 2)));
        assert!(!view.is_highlighted(sq(5, 1)));
        assert_eq!(view.turn(), Color::White);
        assert_eq!(
            view.piece_at(sq(7, 1)),
            Some(&Piece::new(Color::White, PieceType::Knight))
        );
    }
}
