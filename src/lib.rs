//! Word Game
//!
//! A five-letter word guessing game. The scoring core classifies each guessed
//! letter as correct, present, or absent, distributing repeated letters so no
//! letter is credited more often than it occurs in the target.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterState, Word, evaluate};
//!
//! let target = Word::new("allot").unwrap();
//! let guess = Word::new("lilac").unwrap();
//!
//! let evaluation = evaluate(&target, &guess);
//! assert_eq!(evaluation.state_at(2), LetterState::Correct);
//! assert!(!evaluation.is_win());
//! ```

// Core domain types
pub mod core;

// Word lists and target supply
pub mod wordlists;

// Rounds, input, statistics
pub mod game;

// File and CLI configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
