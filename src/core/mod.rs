//! Core domain types for the word game
//!
//! Pure, synchronous types with no I/O: words, letter states, the scoring
//! algorithm, and keyboard hint aggregation.

mod evaluation;
mod keyboard;
mod letter_state;
mod word;

pub use evaluation::{Evaluation, evaluate, evaluate_str};
pub use keyboard::KeyboardHints;
pub use letter_state::LetterState;
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Default number of attempts per round
pub const MAX_GUESSES: usize = 6;
