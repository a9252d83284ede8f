//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Reads guesses from any reader and writes
//! the board to any writer, so it runs equally over stdin or a script.

use crate::game::{GameSession, SubmitOutcome};
use crate::output::{write_guess_row, write_keyboard, write_round_summary, write_statistics};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the line-mode game loop until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "\n╔════════════════════════════════════════╗")?;
    writeln!(out, "║        Word Game - Line Mode           ║")?;
    writeln!(out, "╚════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the five-letter word in {} tries.",
        session.max_guesses()
    )?;
    writeln!(out, "Commands: 'new' for a new word, 'quit' to exit\n")?;

    loop {
        if session.state().is_terminal() {
            write_round_summary(&mut out, session)?;
            write_statistics(&mut out, session.stats())?;

            let Some(answer) = prompt(&mut input, &mut out, "\nPlay again? (yes/no)")? else {
                return Ok(());
            };
            if matches!(answer.as_str(), "yes" | "y") {
                session.reset();
                writeln!(out, "\n🔄 New word chosen!\n")?;
                continue;
            }
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }

        let label = format!("Guess {}/{}", session.attempts() + 1, session.max_guesses());
        let Some(line) = prompt(&mut input, &mut out, &label)? else {
            return Ok(());
        };

        match line.as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                session.reset();
                writeln!(out, "\n🔄 New word chosen!\n")?;
            }
            guess => match session.submit_guess(guess) {
                SubmitOutcome::Accepted { .. } => {
                    writeln!(out)?;
                    for (i, record) in session.history().iter().enumerate() {
                        write_guess_row(&mut out, i + 1, session.max_guesses(), record)?;
                    }
                    write_keyboard(&mut out, session)?;
                }
                SubmitOutcome::InvalidGuess => {
                    writeln!(
                        out,
                        "{}",
                        format!("❌ '{guess}' is not in the word list").red()
                    )?;
                }
                SubmitOutcome::GameOver => {}
            },
        }
    }
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush().context("failed to flush output")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionState;
    use crate::wordlists::WordBank;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn session(target: &str) -> GameSession {
        let bank = WordBank::new(
            words_from_slice(&["crane", "slate", "irate", "trace"]),
            Some(words_from_slice(&[target])),
        );
        GameSession::new(bank, 6)
    }

    fn run(session: &mut GameSession, script: &str) -> String {
        let mut out = Vec::new();
        run_simple(session, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn immediate_quit() {
        let mut session = session("crane");
        let output = run(&mut session, "quit\n");
        assert!(output.contains("Thanks for playing"));
        assert_eq!(session.attempts(), 0);
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let mut session = session("crane");
        run(&mut session, "");
        assert_eq!(session.state(), SessionState::InProgress);
    }

    #[test]
    fn invalid_guess_reported_and_not_counted() {
        let mut session = session("crane");
        let output = run(&mut session, "zzzzz\nquit\n");
        assert!(output.contains("not in the word list"));
        assert_eq!(session.attempts(), 0);
    }

    #[test]
    fn winning_round_prints_summary() {
        let mut session = session("crane");
        let output = run(&mut session, "slate\nCRANE\nno\n");
        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.attempts(), 2);
        assert!(output.contains("Solved in 2 guesses"));
        assert!(output.contains("⬛⬛🟩⬛🟩\n🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn losing_round_reveals_target() {
        let mut session = session("crane");
        let output = run(&mut session, "slate\nslate\nslate\nslate\nslate\nirate\nno\n");
        assert_eq!(session.state(), SessionState::Lost);
        assert!(output.contains("Out of guesses"));
        assert!(output.contains("CRANE"));
    }

    #[test]
    fn play_again_resets() {
        let mut session = session("crane");
        run(&mut session, "crane\nyes\nquit\n");
        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.stats().games_won, 1);
    }
}
