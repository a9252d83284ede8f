//! Round orchestration
//!
//! A `GameSession` owns one word bank and plays rounds against it: it holds
//! the target, the scored guesses, the pending row being typed, and the
//! keyboard hints.

use super::{KeyInput, KeyOutcome, Statistics};
use crate::core::{Evaluation, KeyboardHints, WORD_LENGTH, Word, evaluate};
use crate::wordlists::WordBank;
use log::{debug, info};

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Won,
    Lost,
}

impl SessionState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One accepted guess with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub evaluation: Evaluation,
}

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The guess was scored and consumed an attempt
    Accepted {
        evaluation: Evaluation,
        state: SessionState,
    },
    /// Not a dictionary word (or malformed); no attempt consumed
    InvalidGuess,
    /// The round already ended; nothing changed
    GameOver,
}

impl SubmitOutcome {
    #[must_use]
    pub const fn accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    #[must_use]
    pub const fn evaluation(&self) -> Option<&Evaluation> {
        match self {
            Self::Accepted { evaluation, .. } => Some(evaluation),
            Self::InvalidGuess | Self::GameOver => None,
        }
    }
}

/// A sequence of rounds played against one word bank
#[derive(Debug)]
pub struct GameSession {
    bank: WordBank,
    target: Word,
    history: Vec<GuessRecord>,
    state: SessionState,
    max_guesses: usize,
    keyboard: KeyboardHints,
    pending: Vec<u8>,
    stats: Statistics,
}

impl GameSession {
    /// Start a session and draw the first target
    ///
    /// `max_guesses` below one is raised to one.
    #[must_use]
    pub fn new(mut bank: WordBank, max_guesses: usize) -> Self {
        let max_guesses = max_guesses.max(1);
        let target = bank.draw_target();

        Self {
            bank,
            target,
            history: Vec::with_capacity(max_guesses),
            state: SessionState::InProgress,
            max_guesses,
            keyboard: KeyboardHints::new(),
            pending: Vec::with_capacity(WORD_LENGTH),
            stats: Statistics::new(max_guesses),
        }
    }

    /// Submit a complete guess
    ///
    /// Terminal rounds ignore the call. Guesses the bank rejects leave the
    /// attempt count untouched. Accepted guesses are scored, appended to the
    /// history, and may end the round.
    pub fn submit_guess(&mut self, raw: &str) -> SubmitOutcome {
        if self.state.is_terminal() {
            debug!("guess {raw:?} ignored: round is over");
            return SubmitOutcome::GameOver;
        }

        if !self.bank.is_valid_guess(raw) {
            debug!("guess {raw:?} rejected: not in word list");
            return SubmitOutcome::InvalidGuess;
        }
        let Ok(guess) = Word::new(raw.trim()) else {
            return SubmitOutcome::InvalidGuess;
        };

        let evaluation = evaluate(&self.target, &guess);
        self.keyboard.record(&guess, &evaluation);
        self.history.push(GuessRecord {
            word: guess,
            evaluation,
        });

        self.state = if evaluation.is_win() {
            SessionState::Won
        } else if self.history.len() >= self.max_guesses {
            SessionState::Lost
        } else {
            SessionState::InProgress
        };

        match self.state {
            SessionState::Won => {
                info!("round won in {} guesses", self.history.len());
                self.stats.record_win(self.history.len());
            }
            SessionState::Lost => {
                info!("round lost; target was {}", self.target);
                self.stats.record_loss();
            }
            SessionState::InProgress => {}
        }

        SubmitOutcome::Accepted {
            evaluation,
            state: self.state,
        }
    }

    /// Feed one key press into the pending row
    pub fn press(&mut self, key: KeyInput) -> KeyOutcome {
        if self.state.is_terminal() {
            return KeyOutcome::Ignored;
        }

        match key {
            KeyInput::Backspace => {
                if self.pending.pop().is_some() {
                    KeyOutcome::Erased
                } else {
                    KeyOutcome::Ignored
                }
            }
            KeyInput::Letter(letter) if !letter.is_ascii_alphabetic() => KeyOutcome::Ignored,
            KeyInput::Letter(letter) if self.pending.len() < WORD_LENGTH => {
                self.pending.push(letter.to_ascii_lowercase());
                KeyOutcome::Typed
            }
            KeyInput::Enter if self.pending.len() == WORD_LENGTH => {
                let raw: String = self.pending.iter().copied().map(char::from).collect();
                let outcome = self.submit_guess(&raw);
                // Rejected rows stay on screen so they can be edited
                if outcome.accepted() {
                    self.pending.clear();
                }
                KeyOutcome::Submitted(outcome)
            }
            KeyInput::Letter(_) | KeyInput::Enter => KeyOutcome::IncompleteRow,
        }
    }

    /// Start a new round with a fresh target
    pub fn reset(&mut self) {
        self.target = self.bank.draw_target();
        self.history.clear();
        self.pending.clear();
        self.keyboard.reset();
        self.state = SessionState::InProgress;
        debug!("new round started, {} targets left", self.bank.remaining());
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Accepted guesses this round
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardHints {
        &self.keyboard
    }

    /// Letters typed into the current row but not yet submitted
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// The secret word, for hosts that reveal it once the round ends
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn bank(&self) -> &WordBank {
        &self.bank
    }
}
