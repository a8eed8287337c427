//! Round data structures.

use std::collections::BTreeSet;

use crate::config::GameConfig;
use crate::player::Player;
use crate::word::GuessSet;

/// Whether a round has a word loaded.
///
/// A round is suspended from construction until `start`, and again after
/// `stop` or a win/loss. Only `start` acts on a suspended round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Suspended,
    Active,
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Win,
    Loss,
}

/// What a single call to `guess` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The round was suspended; nothing changed
    Ignored,
    /// The guess was played and the round goes on
    Continue,
    /// The guess completed the word
    Won,
    /// The guess used the last attempt
    Lost,
}

/// Every guess made since the `Round` was created, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayedChars {
    /// Single-character guesses
    pub chars: BTreeSet<char>,
    /// Guesses of any other length, including the empty string
    pub words: BTreeSet<String>,
}

impl PlayedChars {
    pub fn record(&mut self, input: &str) {
        let mut it = input.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => {
                self.chars.insert(c);
            }
            _ => {
                self.words.insert(input.to_string());
            }
        }
    }

    pub fn contains(&self, input: &str) -> bool {
        let mut it = input.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => self.chars.contains(&c),
            _ => self.words.contains(input),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len() + self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty() && self.words.is_empty()
    }
}

/// One player's hangman round. Reusable: `start` again after it ends.
#[derive(Debug, Clone)]
pub struct Round {
    pub(super) player: Player,
    pub(super) config: GameConfig,
    pub(super) state: RoundState,
    pub(super) lexicon: String,
    /// Secret word, one entry per char. Empty while suspended.
    pub(super) word: Vec<char>,
    /// Accepted guesses per position of `word`
    pub(super) valid_chars: Vec<GuessSet>,
    pub(super) mask: Vec<char>,
    /// Non-alphabetic chars seen in any word this round has loaded
    pub(super) symbols: Vec<char>,
    pub(super) attempts: u32,
    pub(super) played_chars: PlayedChars,
    pub(super) last_result: Option<RoundResult>,
}

impl Round {
    pub fn new(player: Player) -> Self {
        Self::with_config(player, GameConfig::default())
    }

    pub fn with_config(player: Player, config: GameConfig) -> Self {
        Self {
            player,
            state: RoundState::Suspended,
            lexicon: config.default_lexicon.clone(),
            word: Vec::new(),
            valid_chars: Vec::new(),
            mask: Vec::new(),
            symbols: Vec::new(),
            attempts: config.max_attempts,
            played_chars: PlayedChars::default(),
            last_result: None,
            config,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_suspended(&self) -> bool {
        self.state == RoundState::Suspended
    }

    /// The word as revealed so far. Empty while suspended.
    pub fn mask(&self) -> String {
        self.mask.iter().collect()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn played_chars(&self) -> &PlayedChars {
        &self.played_chars
    }

    pub fn lexicon(&self) -> &str {
        &self.lexicon
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Result of the most recent finished round, cleared by `start`.
    pub fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }
}
