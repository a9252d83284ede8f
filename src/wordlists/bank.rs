//! Target word supply and guess validation

use crate::core::Word;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Target returned when the candidate pool runs dry under the sentinel policy
pub const FALLBACK_WORD: &str = "sorry";

/// What `draw_target` does once every candidate has been used
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExhaustionPolicy {
    /// Keep returning the fallback word
    #[default]
    Sentinel,
    /// Refill the pool from the original candidates; targets may repeat
    Reshuffle,
}

/// Pool of unused targets plus the dictionary used to accept guesses
///
/// Drawing mutates the pool, so a bank shared between threads must sit
/// behind a lock. Each `GameSession` owns its own bank.
#[derive(Debug)]
pub struct WordBank {
    dictionary: FxHashSet<Word>,
    candidates: Vec<Word>,
    pool: Vec<Word>,
    current: Option<Word>,
    policy: ExhaustionPolicy,
    fallback: Word,
    rng: StdRng,
}

impl WordBank {
    /// Create a bank from a dictionary and an optional separate answer list
    ///
    /// Without `answers`, every dictionary word is a candidate target.
    #[must_use]
    pub fn new(dictionary: Vec<Word>, answers: Option<Vec<Word>>) -> Self {
        let candidates = answers.unwrap_or_else(|| dictionary.clone());
        info!(
            "word bank ready: {} dictionary words, {} candidate targets",
            dictionary.len(),
            candidates.len()
        );

        Self {
            dictionary: dictionary.into_iter().collect(),
            pool: candidates.clone(),
            candidates,
            current: None,
            policy: ExhaustionPolicy::default(),
            fallback: Word::new(FALLBACK_WORD).expect("fallback word is five letters"),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Set the exhaustion policy
    #[must_use]
    pub const fn with_policy(mut self, policy: ExhaustionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the fallback target used when the pool is exhausted
    #[must_use]
    pub fn with_fallback(mut self, fallback: Word) -> Self {
        self.fallback = fallback;
        self
    }

    /// Use a seeded RNG for reproducible draws
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Remove and return a uniformly random unused target
    ///
    /// Never fails: an empty pool is handled by the exhaustion policy, and
    /// the fallback word covers the case where nothing can be refilled.
    pub fn draw_target(&mut self) -> Word {
        if self.pool.is_empty()
            && self.policy == ExhaustionPolicy::Reshuffle
            && !self.candidates.is_empty()
        {
            warn!(
                "candidate pool exhausted; reshuffling {} targets",
                self.candidates.len()
            );
            self.pool.clone_from(&self.candidates);
        }

        let target = if self.pool.is_empty() {
            warn!("candidate pool exhausted; falling back to {}", self.fallback);
            self.fallback.clone()
        } else {
            let index = self.rng.random_range(0..self.pool.len());
            self.pool.swap_remove(index)
        };

        debug!("drew new target, {} candidates remain", self.pool.len());
        self.current = Some(target.clone());
        target
    }

    /// Whether `raw` is an acceptable guess
    ///
    /// The input is trimmed and lowercased. It must then be five letters and
    /// either equal the current target or appear in the dictionary.
    #[must_use]
    pub fn is_valid_guess(&self, raw: &str) -> bool {
        let Ok(word) = Word::new(raw.trim()) else {
            return false;
        };
        self.current.as_ref() == Some(&word) || self.dictionary.contains(&word)
    }

    /// The most recently drawn target
    #[must_use]
    pub const fn current_target(&self) -> Option<&Word> {
        self.current.as_ref()
    }

    /// Number of targets not yet drawn
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    #[must_use]
    pub const fn policy(&self) -> ExhaustionPolicy {
        self.policy
    }
}
