//! Round simulator for tuning attempts and rewards.
//!
//! Plays many rounds with a naive letter-guessing strategy and reports how
//! often it wins. Collaborators are in-memory unless the caller supplies
//! file-backed ones.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::error::Result;
use crate::lexicon::{LexiconProvider, MemoryLexicon};
use crate::player::{IdentityAllocator, Player};
use crate::round::{GuessOutcome, Round};
use crate::stats::StatsSnapshot;
use crate::store::{MemoryPlayerStore, PlayerStore};

/// Words used when no lexicon is supplied.
pub const SAMPLE_WORDS: &[&str] = &[
    "maison",
    "café",
    "élève",
    "forêt",
    "garçon",
    "porte-monnaie",
    "aujourd'hui",
    "château",
    "fenêtre",
    "hôpital",
    "bibliothèque",
    "arc-en-ciel",
];

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Name the simulated player is stored under.
pub const PLAYER_NAME: &str = "Simulator";

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of rounds to play
    pub num_rounds: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Round settings
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_rounds: 100,
            seed: None,
            game: GameConfig::default(),
        }
    }
}

/// Aggregate results of a simulation.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    /// Attempts spent across all rounds
    pub attempts_used: u64,
    pub stats: StatsSnapshot,
}

impl SimReport {
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.rounds)
    }

    pub fn avg_attempts(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.attempts_used as f64 / f64::from(self.rounds)
    }

    pub fn to_text(&self) -> String {
        format!(
            "Rounds:         {}\n\
             Wins:           {} ({:.1}%)\n\
             Losses:         {}\n\
             Avg attempts:   {:.2}\n\
             Points:         {}\n\
             Level:          {}",
            self.rounds,
            self.wins,
            self.win_rate() * 100.0,
            self.losses,
            self.avg_attempts(),
            self.stats.points,
            self.stats.level,
        )
    }
}

/// Play `config.num_rounds` rounds against the sample lexicon.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    let lexicon = MemoryLexicon::new()
        .with_lexicon(&config.game.default_lexicon, SAMPLE_WORDS.iter().copied());
    run_simulation_with(config, &lexicon, &mut MemoryPlayerStore::new())
}

/// Play `config.num_rounds` rounds against `lexicon`, saving the simulated
/// player to `store` after each round. A returning player keeps its stats.
pub fn run_simulation_with<L, S>(
    config: &SimConfig,
    lexicon: &L,
    store: &mut S,
) -> Result<SimReport>
where
    L: LexiconProvider,
    S: PlayerStore + ?Sized,
{
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut allocator = IdentityAllocator::new();
    let player = Player::load_or_create(PLAYER_NAME, &*store, &mut allocator)?;
    let mut round = Round::with_config(player, config.game.clone());

    let mut report = SimReport {
        rounds: 0,
        wins: 0,
        losses: 0,
        attempts_used: 0,
        stats: StatsSnapshot::default(),
    };

    for _ in 0..config.num_rounds {
        round.start(lexicon, &mut rng)?;
        let mut letters: Vec<char> = ALPHABET.chars().collect();
        letters.shuffle(&mut rng);

        loop {
            let guess = next_guess(&mut letters, &mut rng);
            report.attempts_used += 1;
            match round.guess(&guess, store)? {
                GuessOutcome::Won => {
                    report.wins += 1;
                    break;
                }
                GuessOutcome::Lost => {
                    report.losses += 1;
                    break;
                }
                GuessOutcome::Continue => {}
                GuessOutcome::Ignored => break,
            }
        }
        report.rounds += 1;
    }

    report.stats = round.player().stats().snapshot();
    tracing::debug!(rounds = report.rounds, wins = report.wins, "simulation complete");
    Ok(report)
}

/// Next untried letter, or a random letter once the alphabet is exhausted.
fn next_guess<R: Rng + ?Sized>(letters: &mut Vec<char>, rng: &mut R) -> String {
    if let Some(c) = letters.pop() {
        return c.to_string();
    }
    let bytes = ALPHABET.as_bytes();
    char::from(bytes[rng.gen_range(0..bytes.len())]).to_string()
}
