//! Word scoring command
//!
//! Scores one guess against one target without a dictionary check.

use crate::core::{Evaluation, Word, evaluate};
use anyhow::{Context, Result};

/// Result of scoring a guess
#[derive(Debug)]
pub struct ScoreResult {
    pub target: Word,
    pub guess: Word,
    pub evaluation: Evaluation,
}

/// Validate both words and score the guess
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn score_words(target: &str, guess: &str) -> Result<ScoreResult> {
    let target = Word::new(target).with_context(|| format!("invalid target word {target:?}"))?;
    let guess = Word::new(guess).with_context(|| format!("invalid guess {guess:?}"))?;
    let evaluation = evaluate(&target, &guess);

    Ok(ScoreResult {
        target,
        guess,
        evaluation,
    })
}
