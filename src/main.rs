//! Interactive two-player board in the terminal.
//!
//! Usage: cargo run -- [--ascii] [--no-color] [--fen <PLACEMENT>]
//!
//! Each input line is a click on a square, given either in algebraic
//! notation (`e2`) or as `row,col` with row 0 at the top (`6,4`).
//! Example session:
//!   > e2
//!   < selected white pawn on e2: e3 e4
//!   > e4
//!   < white moves pawn from e2 to e4

use std::io::{self, BufRead, Write};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use itertools::Itertools;

use click_chess::board::Board;
use click_chess::movegen::generate_moves_for_color;
use click_chess::render::{draw_board, turn_banner, RenderStyle};
use click_chess::types::{Color, Square};
use click_chess::{ClickOutcome, Game};

const HELP: &str = "\
Commands:
  <square>   click a square, e.g. `e2` or `6,4` (row 0 is black's back rank)
  moves      list every move available to the side to move
  reset      start a new game
  help       show this message
  quit       exit";

#[derive(Parser, Debug)]
#[command(name = "click_chess")]
#[command(about = "Two-player chess board driven by square clicks")]
struct Args {
    /// Start from this piece placement (first field of a FEN string)
    #[arg(long)]
    fen: Option<String>,

    /// Black moves first, only meaningful together with --fen
    #[arg(long, requires = "fen")]
    black_to_move: bool,

    /// Draw pieces as letters instead of chess glyphs
    #[arg(long)]
    ascii: bool,

    /// Disable ANSI colours
    #[arg(long)]
    no_color: bool,
}

enum Command {
    Click(Square),
    Moves,
    Reset,
    Help,
    Quit,
}

fn parse_command(line: &str) -> click_chess::Result<Command> {
    match line {
        "moves" | "m" => Ok(Command::Moves),
        "reset" | "r" => Ok(Command::Reset),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        square => square.parse().map(Command::Click),
    }
}

fn describe_outcome(game: &Game, outcome: &ClickOutcome) -> String {
    match outcome {
        ClickOutcome::Ignored => "nothing to select there".to_string(),
        ClickOutcome::Selected(square) => {
            let destinations = game.legal_destinations();
            let piece = game
                .board()
                .piece_at(*square)
                .map(|p| p.to_human())
                .unwrap_or_default();
            if destinations.is_empty() {
                format!("selected {piece} on {square}: no moves")
            } else {
                format!(
                    "selected {piece} on {square}: {}",
                    destinations.iter().join(" ")
                )
            }
        }
        ClickOutcome::Deselected => "selection cleared".to_string(),
        ClickOutcome::Moved(applied) => applied.to_human(),
    }
}

fn print_state(out: &mut impl Write, game: &Game, style: RenderStyle) -> io::Result<()> {
    write!(out, "{}", draw_board(&game.view(), style))?;
    writeln!(out, "{}", turn_banner(game.turn(), style))?;
    out.flush()
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let style = RenderStyle {
        unicode: !args.ascii,
        color: !args.no_color,
    };

    let mut game = match &args.fen {
        Some(fen) => {
            let board = Board::from_placement(fen).wrap_err("could not read --fen")?;
            let turn = if args.black_to_move {
                Color::Black
            } else {
                Color::White
            };
            Game::from_board(board, turn)
        }
        None => Game::new(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    print_state(&mut stdout, &game, style)?;

    for line in stdin.lock().lines() {
        let line = line.wrap_err("failed to read from stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Ok(Command::Click(square)) => {
                let outcome = game.click(square);
                writeln!(stdout, "{}", describe_outcome(&game, &outcome))?;
                print_state(&mut stdout, &game, style)?;
            }
            Ok(Command::Moves) => {
                for (square, destinations) in generate_moves_for_color(game.board(), game.turn())
                {
                    writeln!(stdout, "{square}: {}", destinations.iter().join(" "))?;
                }
            }
            Ok(Command::Reset) => {
                game.reset_game();
                writeln!(stdout, "new game")?;
                print_state(&mut stdout, &game, style)?;
            }
            Ok(Command::Help) => writeln!(stdout, "{HELP}")?,
            Ok(Command::Quit) => break,
            Err(e) => writeln!(stdout, "{e} (type `help` for commands)")?,
        }
        stdout.flush()?;
    }
    Ok(())
}
