//! Guess scoring
//!
//! Scores a guess against the target position by position. Repeated letters
//! are handled by consumption counting: every occurrence of a letter in the
//! target can back at most one `Correct` or `Present` tile in the guess.

use super::{LetterState, WORD_LENGTH, Word};

/// The scored feedback for one guess
///
/// Every position holds `Absent`, `Present` or `Correct`; the UI-only states
/// never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([LetterState; WORD_LENGTH]);

impl Evaluation {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterState::Correct; WORD_LENGTH]);

    /// The per-position states, left to right
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// The state at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn state_at(&self, position: usize) -> LetterState {
        self.0[position]
    }

    /// True iff every position is `Correct`
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == LetterState::Correct)
    }

    /// Count positions holding the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Convert to an emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

impl std::str::FromStr for Evaluation {
    type Err = String;

    /// Parse feedback written as letters or emoji
    ///
    /// Accepts:
    /// - 'C'/'G'/🟩 for correct
    /// - 'P'/'Y'/🟨 for present
    /// - 'A'/'-'/'_'/⬛/⬜ for absent
    ///
    /// Letters are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut states = [LetterState::Absent; WORD_LENGTH];
        let mut len = 0;

        for ch in s.chars() {
            if len == WORD_LENGTH {
                return Err(format!("Invalid evaluation string: {s}"));
            }
            states[len] = match ch.to_ascii_uppercase() {
                'C' | 'G' | '🟩' => LetterState::Correct,
                'P' | 'Y' | '🟨' => LetterState::Present,
                'A' | '-' | '_' | '⬛' | '⬜' => LetterState::Absent,
                _ => return Err(format!("Invalid evaluation string: {s}")),
            };
            len += 1;
        }

        if len == WORD_LENGTH {
            Ok(Self(states))
        } else {
            Err(format!("Invalid evaluation string: {s}"))
        }
    }
}

/// Score `guess` against `target`
///
/// # Algorithm
/// 1. First pass: mark exact matches `Correct` and consume one target
///    occurrence of that letter for each
/// 2. Second pass: left to right over the remaining positions, mark `Present`
///    while unconsumed occurrences of the letter remain, else `Absent`
///
/// When the guess repeats a letter more often than the target holds it, the
/// earliest unmatched positions win `Present` and later ones are `Absent`.
///
/// # Examples
/// ```
/// use wordle_game::core::{Word, evaluate};
///
/// let target = Word::new("allot").unwrap();
/// let guess = Word::new("lilac").unwrap();
/// assert_eq!(evaluate(&target, &guess).to_emoji(), "🟨⬛🟩🟨⬛");
/// ```
#[must_use]
pub fn evaluate(target: &Word, guess: &Word) -> Evaluation {
    let mut states = [LetterState::Absent; WORD_LENGTH];
    let mut remaining = target.char_counts();

    for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
        if g == t {
            states[i] = LetterState::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (i, &letter) in guess.chars().iter().enumerate() {
        if states[i] == LetterState::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&letter)
            && *count > 0
        {
            states[i] = LetterState::Present;
            *count -= 1;
        }
    }

    Evaluation(states)
}

/// Score two raw strings
///
/// Intended for callers whose input pipeline already guarantees shape.
///
/// # Panics
/// Panics if either argument is not exactly five ASCII letters. Reaching this
/// with malformed input is a bug upstream, not a user error.
#[must_use]
pub fn evaluate_str(target: &str, guess: &str) -> Evaluation {
    let target =
        Word::new(target).unwrap_or_else(|e| panic!("malformed target {target:?}: {e}"));
    let guess = Word::new(guess).unwrap_or_else(|e| panic!("malformed guess {guess:?}: {e}"));
    evaluate(&target, &guess)
}
