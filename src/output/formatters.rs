//! Formatting utilities for terminal output

use crate::core::{Evaluation, KeyboardHints, LetterState, Word};
use crate::game::GuessRecord;
use colored::{ColoredString, Colorize};

/// QWERTY rows used by the on-screen keyboards
pub const KEYBOARD_LAYOUT: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A single letter tile coloured by its state
#[must_use]
pub fn tile(letter: u8, state: LetterState) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    let text = text.as_str();
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
        LetterState::Entered => text.bold(),
        LetterState::Initial => text.normal(),
    }
}

/// A scored guess as a row of coloured tiles
#[must_use]
pub fn colored_row(word: &Word, evaluation: &Evaluation) -> String {
    word.chars()
        .iter()
        .zip(evaluation.states())
        .map(|(&letter, &state)| tile(letter, state).to_string())
        .collect()
}

/// The keyboard hints as three indented rows of coloured keys
#[must_use]
pub fn keyboard_rows(hints: &KeyboardHints) -> Vec<String> {
    KEYBOARD_LAYOUT
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|letter| tile(letter, hints.state_of(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Emoji grid summarising a round, one line per guess
#[must_use]
pub fn share_grid(history: &[GuessRecord]) -> String {
    history
        .iter()
        .map(|record| record.evaluation.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn record(target: &str, guess: &str) -> GuessRecord {
        let target = Word::new(target).unwrap();
        let word = Word::new(guess).unwrap();
        GuessRecord {
            evaluation: evaluate(&target, &word),
            word,
        }
    }

    #[test]
    fn layout_covers_alphabet_once() {
        let mut letters: Vec<u8> = KEYBOARD_LAYOUT.iter().flat_map(|r| r.bytes()).collect();
        letters.sort_unstable();
        assert_eq!(letters, (b'a'..=b'z').collect::<Vec<_>>());
    }

    #[test]
    fn keyboard_rows_shape() {
        let rows = keyboard_rows(&KeyboardHints::new());
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains(" Q "));
        assert!(rows[2].starts_with("    "));
    }

    #[test]
    fn tile_text_is_uppercase_letter() {
        let t = tile(b'a', LetterState::Correct);
        assert!(t.to_string().contains(" A "));
    }

    #[test]
    fn share_grid_lines() {
        let history = vec![record("crane", "slate"), record("crane", "crane")];
        assert_eq!(share_grid(&history), "⬛⬛🟩⬛🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_empty() {
        assert_eq!(share_grid(&[]), "");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
