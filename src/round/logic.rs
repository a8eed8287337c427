//! Round logic.
//!
//! Handles word selection, mask updates, attempt accounting, and folding the
//! result into the player's stats when a round ends.

use rand::Rng;

use super::{GuessOutcome, Round, RoundResult, RoundState};
use crate::error::{HangmanError, Result};
use crate::lexicon::LexiconProvider;
use crate::store::PlayerStore;
use crate::word::{build_mask, decompose};

impl Round {
    /// Load a new word from the current lexicon. Does nothing while active.
    pub fn start<L: LexiconProvider, R: Rng + ?Sized>(
        &mut self,
        provider: &L,
        rng: &mut R,
    ) -> Result<()> {
        if self.state == RoundState::Active {
            return Ok(());
        }

        let word = match provider.random_word(&self.lexicon, rng) {
            Some(w) if !w.is_empty() => w,
            _ => {
                tracing::warn!(lexicon = %self.lexicon, "no word available");
                return Err(HangmanError::NoWordAvailable {
                    lexicon: self.lexicon.clone(),
                });
            }
        };

        let (mask, symbols) = build_mask(&word, self.config.placeholder);
        for s in symbols {
            if !self.symbols.contains(&s) {
                self.symbols.push(s);
            }
        }
        self.valid_chars = decompose(&word);
        self.mask = mask.chars().collect();
        self.word = word.chars().collect();
        self.attempts = self.config.max_attempts;
        self.last_result = None;
        self.state = RoundState::Active;

        tracing::debug!(
            lexicon = %self.lexicon,
            letters = self.word.len(),
            "round started"
        );
        Ok(())
    }

    /// Switch lexicons. Takes effect on the next `start`.
    pub fn set_lexicon(&mut self, lexicon: impl Into<String>) {
        self.lexicon = lexicon.into();
    }

    /// Drop the current word and suspend the round. Stats are not touched.
    pub fn stop(&mut self) {
        self.word.clear();
        self.valid_chars.clear();
        self.mask.clear();
        self.attempts = self.config.max_attempts;
        self.state = RoundState::Suspended;
        tracing::debug!(lexicon = %self.lexicon, "round stopped");
    }

    /// Play a letter or a whole word. Every played guess costs one attempt.
    ///
    /// Does nothing while suspended. The only error is a failed save when
    /// the round ends; stats are updated and the round stopped regardless.
    pub fn guess<S: PlayerStore + ?Sized>(
        &mut self,
        input: &str,
        store: &mut S,
    ) -> Result<GuessOutcome> {
        if self.state == RoundState::Suspended {
            return Ok(GuessOutcome::Ignored);
        }

        // Symbols in the word never need guessing
        let stripped: String = input
            .chars()
            .filter(|c| !self.symbols.contains(c))
            .collect();
        if stripped.chars().all(char::is_alphabetic) {
            self.update_mask(input);
        }

        self.played_chars.record(input);
        self.attempts = self.attempts.saturating_sub(1);
        tracing::debug!(attempts_left = self.attempts, "guess played");

        if self.mask == self.word {
            self.finish(RoundResult::Win, store)?;
            return Ok(GuessOutcome::Won);
        }

        if self.attempts == 0 {
            self.finish(RoundResult::Loss, store)?;
            return Ok(GuessOutcome::Lost);
        }

        Ok(GuessOutcome::Continue)
    }

    fn update_mask(&mut self, input: &str) {
        let chars: Vec<char> = input.chars().collect();
        match chars.as_slice() {
            [] => {}
            [c] => {
                for (i, set) in self.valid_chars.iter().enumerate() {
                    if set.contains(*c) {
                        self.mask[i] = self.word[i];
                    }
                }
            }
            _ => {
                if chars == self.word {
                    self.mask = self.word.clone();
                }
            }
        }
    }

    fn finish<S: PlayerStore + ?Sized>(
        &mut self,
        result: RoundResult,
        store: &mut S,
    ) -> Result<()> {
        let reward = match result {
            RoundResult::Win => self.config.reward,
            RoundResult::Loss => 0,
        };
        self.player.stats_mut().update(reward);
        let saved = store.save(&self.player.record());
        self.stop();
        self.last_result = Some(result);

        tracing::info!(
            player = self.player.name(),
            ?result,
            reward,
            level = self.player.stats().level(),
            "round finished"
        );
        if let Err(e) = &saved {
            tracing::warn!(player = self.player.name(), error = %e, "failed to save player");
        }
        saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::lexicon::MemoryLexicon;
    use crate::player::{IdentityAllocator, Player};
    use crate::store::MemoryPlayerStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn round_with_word(word: &str) -> (Round, MemoryPlayerStore) {
        let store = MemoryPlayerStore::new();
        let player =
            Player::load_or_create("Tester", &store, &mut IdentityAllocator::new()).unwrap();
        let mut round = Round::new(player);
        let lexicon = MemoryLexicon::new().with_lexicon("french", [word]);
        round.start(&lexicon, &mut seeded_rng()).unwrap();
        (round, store)
    }

    #[test]
    fn test_start_builds_mask() {
        let (round, _) = round_with_word("a-b");
        assert_eq!(round.state(), RoundState::Active);
        assert_eq!(round.mask(), "*-*");
        assert_eq!(round.symbols(), &['-']);
        assert_eq!(round.attempts(), 12);
        assert_eq!(round.valid_chars.len(), 3);
    }

    #[test]
    fn test_start_without_word_fails() {
        let store = MemoryPlayerStore::new();
        let player =
            Player::load_or_create("Tester", &store, &mut IdentityAllocator::new()).unwrap();
        let mut round = Round::new(player);
        let lexicon = MemoryLexicon::new().with_lexicon("english", ["tea"]);

        let err = round.start(&lexicon, &mut seeded_rng()).unwrap_err();
        assert!(matches!(
            err,
            HangmanError::NoWordAvailable { ref lexicon } if lexicon == "french"
        ));
        assert!(round.is_suspended());

        round.set_lexicon("english");
        round.start(&lexicon, &mut seeded_rng()).unwrap();
        assert_eq!(round.mask(), "***");
    }

    #[test]
    fn test_start_while_active_is_noop() {
        let (mut round, mut store) = round_with_word("chat");
        round.guess("c", &mut store).unwrap();
        let other = MemoryLexicon::new().with_lexicon("french", ["chien"]);
        round.start(&other, &mut seeded_rng()).unwrap();
        assert_eq!(round.mask(), "c***");
        assert_eq!(round.attempts(), 11);
    }

    #[test]
    fn test_guess_reveals_all_positions() {
        let (mut round, mut store) = round_with_word("banana");
        let outcome = round.guess("a", &mut store).unwrap();
        assert_eq!(outcome, GuessOutcome::Continue);
        assert_eq!(round.mask(), "*a*a*a");
        assert_eq!(round.attempts(), 11);
    }

    #[test]
    fn test_base_letter_reveals_accented_position() {
        let (mut round, mut store) = round_with_word("café");
        round.guess("e", &mut store).unwrap();
        assert_eq!(round.mask(), "***é");
    }

    #[test]
    fn test_accented_guess_reveals_only_accented_position() {
        let (mut round, mut store) = round_with_word("élève");
        round.guess("è", &mut store).unwrap();
        assert_eq!(round.mask(), "**è**");
        round.guess("e", &mut store).unwrap();
        assert_eq!(round.mask(), "é*è*e");
    }

    #[test]
    fn test_repeated_guess_still_costs_attempt() {
        let (mut round, mut store) = round_with_word("chat");
        round.guess("c", &mut store).unwrap();
        round.guess("c", &mut store).unwrap();
        assert_eq!(round.mask(), "c***");
        assert_eq!(round.attempts(), 10);
        assert_eq!(round.played_chars().chars.len(), 1);
    }

    #[test]
    fn test_partial_word_guess_has_no_effect() {
        let (mut round, mut store) = round_with_word("chat");
        round.guess("cha", &mut store).unwrap();
        assert_eq!(round.mask(), "****");
        assert_eq!(round.attempts(), 11);
        assert!(round.played_chars().words.contains("cha"));
    }

    #[test]
    fn test_full_word_guess_wins() {
        let (mut round, mut store) = round_with_word("chat");
        let outcome = round.guess("chat", &mut store).unwrap();
        assert_eq!(outcome, GuessOutcome::Won);
        assert!(round.is_suspended());
        assert_eq!(round.last_result(), Some(RoundResult::Win));
        assert_eq!(round.mask(), "");
        assert_eq!(round.attempts(), 12);

        let snap = round.player().stats().snapshot();
        assert_eq!(snap.games_played, 1);
        assert_eq!(snap.successes, 1);
        assert_eq!(snap.points, 3);
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.lookup("Tester").unwrap().unwrap().stats.snapshot(), snap);
    }

    #[test]
    fn test_word_guess_with_symbols() {
        let (mut round, mut store) = round_with_word("a-b");
        assert_eq!(round.guess("a-b", &mut store).unwrap(), GuessOutcome::Won);
    }

    #[test]
    fn test_symbol_only_guess_costs_attempt() {
        let (mut round, mut store) = round_with_word("a-b");
        let outcome = round.guess("-", &mut store).unwrap();
        assert_eq!(outcome, GuessOutcome::Continue);
        assert_eq!(round.mask(), "*-*");
        assert_eq!(round.attempts(), 11);
        assert!(round.played_chars().chars.contains(&'-'));
    }

    #[test]
    fn test_empty_guess_costs_attempt() {
        let (mut round, mut store) = round_with_word("chat");
        round.guess("", &mut store).unwrap();
        assert_eq!(round.mask(), "****");
        assert_eq!(round.attempts(), 11);
        assert!(round.played_chars().words.contains(""));
    }

    #[test]
    fn test_non_alphabetic_guess_is_recorded_only() {
        let (mut round, mut store) = round_with_word("chat");
        round.guess("4", &mut store).unwrap();
        assert_eq!(round.mask(), "****");
        assert!(round.played_chars().contains("4"));
    }

    #[test]
    fn test_loss_after_max_attempts() {
        let (mut round, mut store) = round_with_word("chat");
        for _ in 0..11 {
            assert_eq!(round.guess("z", &mut store).unwrap(), GuessOutcome::Continue);
        }
        assert_eq!(round.attempts(), 1);
        assert_eq!(round.guess("y", &mut store).unwrap(), GuessOutcome::Lost);

        assert!(round.is_suspended());
        assert_eq!(round.last_result(), Some(RoundResult::Loss));
        assert_eq!(round.attempts(), 12);
        let snap = round.player().stats().snapshot();
        assert_eq!(snap.failures, 1);
        assert_eq!(snap.points, 0);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_win_on_last_attempt_counts_once() {
        let config = GameConfig {
            max_attempts: 1,
            ..GameConfig::default()
        };
        let store = MemoryPlayerStore::new();
        let player =
            Player::load_or_create("Tester", &store, &mut IdentityAllocator::new()).unwrap();
        let mut round = Round::with_config(player, config);
        let mut store = store;
        let lexicon = MemoryLexicon::new().with_lexicon("french", ["ok"]);
        round.start(&lexicon, &mut seeded_rng()).unwrap();

        assert_eq!(round.guess("ok", &mut store).unwrap(), GuessOutcome::Won);
        let snap = round.player().stats().snapshot();
        assert_eq!(snap.games_played, 1);
        assert_eq!(snap.successes, 1);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_guess_while_suspended_is_ignored() {
        let store = MemoryPlayerStore::new();
        let player =
            Player::load_or_create("Tester", &store, &mut IdentityAllocator::new()).unwrap();
        let mut round = Round::new(player);
        let mut store = store;

        assert_eq!(round.guess("a", &mut store).unwrap(), GuessOutcome::Ignored);
        assert_eq!(round.attempts(), 12);
        assert!(round.played_chars().is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_stop_resets_but_keeps_history() {
        let (mut round, mut store) = round_with_word("chat");
        round.guess("c", &mut store).unwrap();
        round.stop();

        assert!(round.is_suspended());
        assert_eq!(round.mask(), "");
        assert_eq!(round.attempts(), 12);
        assert!(round.played_chars().contains("c"));
        assert_eq!(round.player().stats().snapshot().games_played, 0);
        assert_eq!(store.save_count(), 0);

        // Stopping again changes nothing
        round.stop();
        assert!(round.is_suspended());
        assert_eq!(round.attempts(), 12);
    }

    #[test]
    fn test_symbols_accumulate_across_rounds() {
        let (mut round, mut store) = round_with_word("a-b");
        round.stop();
        let lexicon = MemoryLexicon::new().with_lexicon("french", ["l'eau"]);
        round.start(&lexicon, &mut seeded_rng()).unwrap();
        assert_eq!(round.symbols(), &['-', '\'']);

        // Hyphen is still stripped from guesses
        round.guess("-", &mut store).unwrap();
        assert_eq!(round.mask(), "*'***");
    }

    #[test]
    fn test_restart_after_win_clears_result() {
        let (mut round, mut store) = round_with_word("chat");
        round.guess("chat", &mut store).unwrap();
        let lexicon = MemoryLexicon::new().with_lexicon("french", ["chat"]);
        round.start(&lexicon, &mut seeded_rng()).unwrap();
        assert_eq!(round.last_result(), None);
        assert_eq!(round.mask(), "****");
        assert!(round.played_chars().contains("chat"));
    }

    #[test]
    fn test_history_accumulates_across_restarts() {
        let (mut round, mut store) = round_with_word("chat");
        round.guess("z", &mut store).unwrap();
        round.stop();
        assert!(round.played_chars().contains("z"));

        let lexicon = MemoryLexicon::new().with_lexicon("french", ["chat"]);
        round.start(&lexicon, &mut seeded_rng()).unwrap();
        assert!(round.played_chars().contains("z"));

        round.guess("c", &mut store).unwrap();
        assert_eq!(round.played_chars().len(), 2);
        assert_eq!(round.attempts(), 11);
    }
}
