//! Hangman - word-guessing game library
//!
//! Round state machine, accent-insensitive masking, per-player statistics,
//! and the storage collaborators a front end plugs into.

pub mod config;
pub mod constants;
pub mod error;
pub mod lexicon;
pub mod persistence;
pub mod player;
pub mod round;
pub mod simulator;
pub mod stats;
pub mod store;
pub mod word;

pub use config::GameConfig;
pub use error::{HangmanError, Result};
pub use lexicon::{JsonLexicon, LexiconProvider, MemoryLexicon};
pub use player::{IdentityAllocator, Player, PlayerRecord};
pub use round::{GuessOutcome, PlayedChars, Round, RoundResult, RoundState};
pub use stats::{level, Stats, StatsSnapshot};
pub use store::{JsonPlayerStore, MemoryPlayerStore, PlayerStore};
pub use word::{build_mask, decompose, GuessSet};
