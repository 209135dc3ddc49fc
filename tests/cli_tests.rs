//! Integration tests for the terminal front end
//!
//! Run with: cargo test --test cli_tests

use std::io::Write;
use std::process::{Command, Stdio};

/// Run the binary with `args`, feed it `input` on stdin and return stdout
fn run_session(args: &[&str], input: &str) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_click_chess"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to start click_chess");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "exited with {}", output.status);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn plays_a_move() {
    let out = run_session(&["--ascii", "--no-color"], "e2\n4,4\nquit\n");
    assert!(out.contains("selected white pawn on e2: e4 e3"), "{out}");
    assert!(out.contains("white moves pawn from e2 to e4"), "{out}");
    assert!(out.contains("Current turn: Black"), "{out}");
    assert!(out.contains("4  .  .  .  .  P  .  .  . "), "{out}");
}

#[test]
fn ignores_opponent_piece_and_bad_input() {
    let out = run_session(&["--ascii", "--no-color"], "a7\nz9\n");
    assert!(out.contains("nothing to select there"), "{out}");
    assert!(out.contains("Invalid square"), "{out}");
    assert!(!out.contains("Current turn: Black"), "{out}");
}

#[test]
fn lists_moves_and_resets() {
    let out = run_session(
        &["--ascii", "--no-color"],
        "moves\ne2\ne4\nreset\n",
    );
    assert!(out.contains("g1: f3 h3"), "{out}");
    assert!(out.contains("new game"), "{out}");
    assert!(out.trim_end().ends_with("Current turn: White"), "{out}");
}

#[test]
fn starts_from_placement() {
    let out = run_session(
        &["--ascii", "--no-color", "--fen", "8/8/8/8/4R3/8/8/8", "--black-to-move"],
        "e4\n",
    );
    assert!(out.contains("Current turn: Black"), "{out}");
    assert!(out.contains("nothing to select there"), "{out}");
}

#[test]
fn rejects_bad_placement() {
    let status = Command::new(env!("CARGO_BIN_EXE_click_chess"))
        .args(["--fen", "8/8/8"])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(!status.success());
}
