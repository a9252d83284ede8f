//! Display functions for command results and rounds

use super::formatters::{colored_row, create_progress_bar, keyboard_rows, share_grid};
use crate::commands::ScoreResult;
use crate::core::LetterState;
use crate::game::{GameSession, GuessRecord, SessionState, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of scoring a guess against a target
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}   Guess: {}",
        result.target.text().to_uppercase().bright_yellow().bold(),
        result.guess.text().to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_row(&result.guess, &result.evaluation));
    println!("  {}", result.evaluation.to_emoji());

    println!(
        "\n  Correct: {}  Present: {}  Absent: {}",
        result.evaluation.count(LetterState::Correct).to_string().green(),
        result.evaluation.count(LetterState::Present).to_string().yellow(),
        result.evaluation.count(LetterState::Absent).to_string().bright_black()
    );

    if result.evaluation.is_win() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Write one scored guess as a numbered row
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_guess_row<W: Write>(
    out: &mut W,
    attempt: usize,
    max_guesses: usize,
    record: &GuessRecord,
) -> io::Result<()> {
    writeln!(
        out,
        "  {}/{max_guesses}  {}",
        attempt,
        colored_row(&record.word, &record.evaluation)
    )
}

/// Write the keyboard hints
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_keyboard<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(out)?;
    for row in keyboard_rows(session.keyboard()) {
        writeln!(out, "  {row}")?;
    }
    writeln!(out)
}

/// Write the end-of-round banner and share grid
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_round_summary<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    let attempts = session.attempts();
    match session.state() {
        SessionState::Won => {
            let cheer = match attempts {
                1 => "🎯 Hole in one!",
                2 => "🔥 Magnificent!",
                3 => "✨ Splendid!",
                4 => "👏 Great job!",
                5 => "🎉 Nice work!",
                _ => "😅 Phew!",
            };
            writeln!(out, "\n{}", cheer.bright_green().bold())?;
            writeln!(
                out,
                "Solved in {attempts} {}",
                if attempts == 1 { "guess" } else { "guesses" }
            )?;
        }
        SessionState::Lost => {
            writeln!(
                out,
                "\n{} The word was {}",
                "❌ Out of guesses.".red().bold(),
                session.target().text().to_uppercase().bright_yellow().bold()
            )?;
        }
        SessionState::InProgress => return Ok(()),
    }

    writeln!(out, "\n{}\n", share_grid(session.history()))
}

/// Write session statistics with a guess distribution chart
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Statistics:".bright_cyan().bold())?;
    writeln!(out, "   Played:       {}", stats.games_played)?;
    writeln!(out, "   Win rate:     {:.0}%", stats.win_rate())?;
    writeln!(
        out,
        "   Streak:       {} (best {})",
        stats.current_streak, stats.max_streak
    )?;

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, most as f64, 20);
        writeln!(out, "   {}: {} {count}", i + 1, bar.green())?;
    }
    Ok(())
}
