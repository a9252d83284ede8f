//! Word lists and the word bank
//!
//! Provides the embedded dictionary, list loading, and the `WordBank` that
//! hands out targets and validates guesses.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{ExhaustionPolicy, FALLBACK_WORD, WordBank};
pub use embedded::{WORDS, WORDS_COUNT};
