//! Terminal output formatting
//!
//! Coloured tiles, keyboards, and result printing for the line-mode host
//! and the `score` command.

pub mod display;
pub mod formatters;

pub use display::{
    print_score_result, write_guess_row, write_keyboard, write_round_summary, write_statistics,
};
