//! Game configuration
//!
//! Settings come from an optional TOML file and are overridden by command
//! line flags. Every field has a default, so an empty file is valid:
//!
//! ```toml
//! max_guesses = 6
//! dictionary = "data/words.txt"   # embedded list when omitted
//! answers = "data/answers.txt"    # dictionary doubles as target pool when omitted
//! exhaustion = "sentinel"         # or "reshuffle"
//! fallback_word = "sorry"
//! seed = 42                       # OS entropy when omitted
//! ```

use crate::core::{MAX_GUESSES, Word};
use crate::game::GameSession;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{ExhaustionPolicy, FALLBACK_WORD, WORDS, WordBank};
use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Upper bound accepted for `max_guesses`
pub const MAX_GUESSES_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub max_guesses: usize,
    pub dictionary: Option<PathBuf>,
    pub answers: Option<PathBuf>,
    pub exhaustion: ExhaustionPolicy,
    pub fallback_word: String,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            dictionary: None,
            answers: None,
            exhaustion: ExhaustionPolicy::default(),
            fallback_word: FALLBACK_WORD.to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load and validate a TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML for
    /// this structure, or fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML, unknown keys, or failed validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns an error if `max_guesses` is outside `1..=10` or the fallback
    /// word is not five letters.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (1..=MAX_GUESSES_LIMIT).contains(&self.max_guesses),
            "max_guesses must be between 1 and {MAX_GUESSES_LIMIT}, got {}",
            self.max_guesses
        );
        Word::new(self.fallback_word.as_str())
            .with_context(|| format!("invalid fallback_word {:?}", self.fallback_word))?;
        Ok(())
    }

    /// Load the configured word lists and build a bank
    ///
    /// # Errors
    ///
    /// Returns an error if a configured list cannot be loaded or the
    /// configuration is invalid.
    pub fn build_bank(&self) -> Result<WordBank> {
        self.validate()?;

        let dictionary = match &self.dictionary {
            Some(path) => load_from_file(path).context("failed to load dictionary")?,
            None => words_from_slice(WORDS),
        };
        let answers = self
            .answers
            .as_ref()
            .map(|path| load_from_file(path).context("failed to load answer list"))
            .transpose()?;
        let fallback = Word::new(self.fallback_word.as_str())?;

        let bank = WordBank::new(dictionary, answers)
            .with_policy(self.exhaustion)
            .with_fallback(fallback);

        Ok(match self.seed {
            Some(seed) => bank.with_seed(seed),
            None => bank,
        })
    }

    /// Build a ready-to-play session
    ///
    /// # Errors
    ///
    /// Same as [`GameConfig::build_bank`].
    pub fn build_session(&self) -> Result<GameSession> {
        Ok(GameSession::new(self.build_bank()?, self.max_guesses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.exhaustion, ExhaustionPolicy::Sentinel);
        assert_eq!(config.fallback_word, "sorry");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_toml_is_default() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let config = GameConfig::from_toml_str(
            r#"
            max_guesses = 8
            dictionary = "words.txt"
            answers = "answers.txt"
            exhaustion = "reshuffle"
            fallback_word = "empty"
            seed = 42
            "#,
        )
        .unwrap();

        assert_eq!(config.max_guesses, 8);
        assert_eq!(config.dictionary, Some(PathBuf::from("words.txt")));
        assert_eq!(config.answers, Some(PathBuf::from("answers.txt")));
        assert_eq!(config.exhaustion, ExhaustionPolicy::Reshuffle);
        assert_eq!(config.fallback_word, "empty");
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn rejects_out_of_range_max_guesses() {
        assert!(GameConfig::from_toml_str("max_guesses = 0").is_err());
        assert!(GameConfig::from_toml_str("max_guesses = 11").is_err());
        assert!(GameConfig::from_toml_str("max_guesses = 10").is_ok());
    }

    #[test]
    fn rejects_bad_fallback_word() {
        let err = GameConfig::from_toml_str("fallback_word = \"oops\"").unwrap_err();
        assert!(format!("{err:#}").contains("fallback_word"));
    }

    #[test]
    fn rejects_unknown_keys_and_policies() {
        assert!(GameConfig::from_toml_str("colour = \"blue\"").is_err());
        assert!(GameConfig::from_toml_str("exhaustion = \"explode\"").is_err());
    }

    #[test]
    fn load_missing_file_has_context() {
        let err = GameConfig::load("/nonexistent/wordle.toml").unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn builds_bank_from_embedded_list() {
        let config = GameConfig {
            seed: Some(5),
            ..GameConfig::default()
        };
        let bank = config.build_bank().unwrap();
        assert_eq!(bank.dictionary_len(), WORDS.len());
        assert_eq!(bank.remaining(), WORDS.len());
    }

    #[test]
    fn builds_session_with_configured_limits() {
        let config = GameConfig {
            max_guesses: 3,
            seed: Some(5),
            ..GameConfig::default()
        };
        let session = config.build_session().unwrap();
        assert_eq!(session.max_guesses(), 3);
        assert!(WORDS.contains(&session.target().text()));
    }

    #[test]
    fn missing_dictionary_file_fails_build() {
        let config = GameConfig {
            dictionary: Some(PathBuf::from("/nonexistent/words.txt")),
            ..GameConfig::default()
        };
        let err = config.build_bank().unwrap_err();
        assert!(format!("{err:#}").contains("failed to load dictionary"));
    }
}
