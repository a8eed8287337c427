//! Hangman rounds: word selection, guessing, and win/loss bookkeeping.

pub mod logic;
pub mod types;

pub use types::{GuessOutcome, PlayedChars, Round, RoundResult, RoundState};
