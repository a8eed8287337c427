//! Error types raised by rounds, players and their collaborators.

use thiserror::Error;

/// Errors surfaced by the game core and its storage collaborators.
#[derive(Debug, Error)]
pub enum HangmanError {
    #[error("no word available in lexicon `{lexicon}`")]
    NoWordAvailable { lexicon: String },

    #[error("invalid player: {0}")]
    InvalidPlayer(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HangmanError>;
