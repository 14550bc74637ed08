//! Engine configuration, loadable from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! year-one setup: single-digit adaptive addition, 25-question chapters.
//!
//! ```toml
//! [generation]
//! operation = "subtraction"
//! max_digits = 2
//!
//! [tracker]
//! hard_streak = 9
//!
//! [session]
//! rng_seed = 42
//!
//! [number_pairs]
//! discovery_rule = "unordered"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::practice_engine::{
    error::ConfigError,
    models::GenerationConfig,
    number_pairs::DiscoveryRule,
    tracker::TierThresholds,
};

/// Largest digit budget the generator accepts.
pub const MAX_DIGITS_LIMIT: u32 = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub generation: GenerationConfig,
    pub tracker: TierThresholds,
    pub session: SessionConfig,
    pub number_pairs: NumberPairsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Length of the addition, subtraction and making-ten chapters.
    pub questions_per_chapter: usize,
    /// Rounds in a puzzle-pairs game.
    pub puzzle_questions: usize,
    /// Suggested pause between an answer and the next question.
    pub advance_delay_ms: u64,
    /// Pause after a correct number-pairs answer (longer, for the animation).
    pub discovery_advance_delay_ms: u64,
    /// Fixed seed for reproducible sessions; entropy when absent.
    pub rng_seed: Option<u64>,
}

impl SessionConfig {
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    pub fn discovery_advance_delay(&self) -> Duration {
        Duration::from_millis(self.discovery_advance_delay_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            questions_per_chapter: 25,
            puzzle_questions: 5,
            advance_delay_ms: 1500,
            discovery_advance_delay_ms: 2000,
            rng_seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberPairsConfig {
    pub discovery_rule: DiscoveryRule,
}

impl EngineConfig {
    /// Load and validate a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_owned(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.generation;
        if !(1..=MAX_DIGITS_LIMIT).contains(&g.max_digits) {
            return Err(ConfigError::Invalid(format!(
                "generation.max_digits must be in 1..={MAX_DIGITS_LIMIT}, got {}",
                g.max_digits
            )));
        }

        let t = &self.tracker;
        for (name, rate) in [("promotion_rate", t.promotion_rate), ("demotion_rate", t.demotion_rate)] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::Invalid(format!(
                    "tracker.{name} must be in 0.0..=1.0, got {rate}"
                )));
            }
        }
        if t.demotion_rate >= t.promotion_rate {
            return Err(ConfigError::Invalid(format!(
                "tracker.demotion_rate ({}) must be below tracker.promotion_rate ({})",
                t.demotion_rate, t.promotion_rate
            )));
        }
        if t.medium_streak == 0 || t.hard_streak == 0 {
            return Err(ConfigError::Invalid("tracker streaks must be at least 1".to_string()));
        }

        let s = &self.session;
        if s.questions_per_chapter == 0 || s.puzzle_questions == 0 {
            return Err(ConfigError::Invalid("session lengths must be at least 1".to_string()));
        }
        Ok(())
    }
}
