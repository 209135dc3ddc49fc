pub mod error;
pub mod types;
pub mod board;
pub mod movegen;
pub mod game;
pub mod render;

pub use error::{Error, Result};
pub use game::{AppliedMove, ClickOutcome, Game, GameView};
