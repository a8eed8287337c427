//! Game configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{
    CONFIG_FILE, DEFAULT_LEXICON, MASK_PLACEHOLDER, MAX_ATTEMPTS, WIN_REWARD,
};
use crate::persistence;

/// Per-round tunables. Missing fields in `config.json` take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Guesses allowed per round
    pub max_attempts: u32,

    /// Points granted on a win
    pub reward: u32,

    /// Lexicon a new round draws from until changed
    pub default_lexicon: String,

    /// Character shown in the mask for an unrevealed letter
    pub placeholder: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            reward: WIN_REWARD,
            default_lexicon: DEFAULT_LEXICON.to_string(),
            placeholder: MASK_PLACEHOLDER,
        }
    }
}

impl GameConfig {
    /// Load `config.json` from the data directory, falling back to defaults.
    pub fn load() -> Self {
        match persistence::data_dir() {
            Ok(dir) => Self::load_from(&dir),
            Err(_) => Self::default(),
        }
    }

    /// Load `config.json` from `dir`, falling back to defaults.
    ///
    /// `max_attempts` and `reward` are raised to at least 1.
    pub fn load_from(dir: &Path) -> Self {
        let mut config: Self = persistence::load_json_or_default(&dir.join(CONFIG_FILE));
        if config.max_attempts == 0 || config.reward == 0 {
            tracing::warn!(
                max_attempts = config.max_attempts,
                reward = config.reward,
                "config values below 1 raised to 1"
            );
            config.max_attempts = config.max_attempts.max(1);
            config.reward = config.reward.max(1);
        }
        config
    }
}
