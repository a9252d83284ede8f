//! Cumulative keyboard hints
//!
//! Tracks the best state seen so far for every letter across a round.

use super::{Evaluation, LetterState, Word};

const ALPHABET_LEN: usize = 26;

/// Aggregate per-letter display state for the on-screen keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardHints {
    states: [LetterState; ALPHABET_LEN],
}

impl Default for KeyboardHints {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardHints {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            states: [LetterState::Initial; ALPHABET_LEN],
        }
    }

    /// Fold one scored guess into the hints
    ///
    /// A key only ever moves towards `Correct`. A guess holding the same
    /// letter twice can score it `Present` and `Absent` at once; the key
    /// keeps `Present`.
    pub fn record(&mut self, guess: &Word, evaluation: &Evaluation) {
        for (&letter, &state) in guess.chars().iter().zip(evaluation.states()) {
            if let Some(slot) = Self::index(letter).map(|i| &mut self.states[i]) {
                *slot = slot.upgrade(state);
            }
        }
    }

    /// Current state of a letter key
    ///
    /// Uppercase letters are folded to lowercase; anything else reports
    /// `Initial`.
    #[must_use]
    pub fn state_of(&self, letter: u8) -> LetterState {
        Self::index(letter).map_or(LetterState::Initial, |i| self.states[i])
    }

    /// Letters with their states, alphabetical
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterState)> + '_ {
        (b'a'..=b'z').zip(self.states.iter().copied())
    }

    pub fn reset(&mut self) {
        self.states = [LetterState::Initial; ALPHABET_LEN];
    }

    fn index(letter: u8) -> Option<usize> {
        let letter = letter.to_ascii_lowercase();
        letter
            .is_ascii_lowercase()
            .then(|| usize::from(letter - b'a'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;
    use proptest::prelude::*;

    fn record(hints: &mut KeyboardHints, target: &str, guess: &str) {
        let target = Word::new(target).unwrap();
        let guess = Word::new(guess).unwrap();
        hints.record(&guess, &evaluate(&target, &guess));
    }

    #[test]
    fn starts_initial() {
        let hints = KeyboardHints::new();
        assert!(hints.iter().all(|(_, s)| s == LetterState::Initial));
        assert_eq!(hints.iter().count(), 26);
    }

    #[test]
    fn records_each_letter() {
        let mut hints = KeyboardHints::new();
        record(&mut hints, "crane", "crate");
        assert_eq!(hints.state_of(b'c'), LetterState::Correct);
        assert_eq!(hints.state_of(b'a'), LetterState::Correct);
        assert_eq!(hints.state_of(b't'), LetterState::Absent);
        assert_eq!(hints.state_of(b'z'), LetterState::Initial);
    }

    #[test]
    fn present_and_absent_in_one_guess_keeps_present() {
        // below vs level: first l present, last l absent
        let mut hints = KeyboardHints::new();
        record(&mut hints, "below", "level");
        assert_eq!(hints.state_of(b'l'), LetterState::Present);
        assert_eq!(hints.state_of(b'e'), LetterState::Correct);
        assert_eq!(hints.state_of(b'v'), LetterState::Absent);
    }

    #[test]
    fn correct_never_regresses() {
        let mut hints = KeyboardHints::new();
        record(&mut hints, "hello", "lolly");
        assert_eq!(hints.state_of(b'l'), LetterState::Correct);

        // l now scores present, then absent
        record(&mut hints, "hello", "llama");
        assert_eq!(hints.state_of(b'l'), LetterState::Correct);
        record(&mut hints, "below", "level");
        assert_eq!(hints.state_of(b'l'), LetterState::Correct);
    }

    #[test]
    fn present_upgrades_to_correct() {
        let mut hints = KeyboardHints::new();
        record(&mut hints, "crane", "react");
        assert_eq!(hints.state_of(b'r'), LetterState::Present);
        record(&mut hints, "crane", "brine");
        assert_eq!(hints.state_of(b'r'), LetterState::Correct);
    }

    #[test]
    fn case_folding_and_non_letters() {
        let mut hints = KeyboardHints::new();
        record(&mut hints, "crane", "crane");
        assert_eq!(hints.state_of(b'C'), LetterState::Correct);
        assert_eq!(hints.state_of(b'1'), LetterState::Initial);
    }

    #[test]
    fn reset_clears() {
        let mut hints = KeyboardHints::new();
        record(&mut hints, "crane", "crane");
        hints.reset();
        assert_eq!(hints, KeyboardHints::new());
    }

    proptest! {
        #[test]
        fn hints_are_monotonic(
            target in "[a-e]{5}",
            guesses in proptest::collection::vec("[a-e]{5}", 1..8),
        ) {
            let target = Word::new(target).unwrap();
            let mut hints = KeyboardHints::new();
            for guess in guesses {
                let guess = Word::new(guess).unwrap();
                let before = hints.clone();
                hints.record(&guess, &evaluate(&target, &guess));
                for ((_, old), (_, new)) in before.iter().zip(hints.iter()) {
                    prop_assert!(new >= old);
                }
            }
        }
    }
}
