//! Per-player round statistics and the derived skill level.

use serde::{Deserialize, Serialize};

use crate::constants::{
    LARGE_SAMPLE_GAMES, LARGE_SAMPLE_SCALE, MIN_GAMES_FOR_LEVEL, SMALL_SAMPLE_SCALE,
};

/// Cumulative round results for one player.
///
/// Fields are private: the only mutation is [`Stats::update`], which keeps
/// `games_played == successes + failures` and the level in sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    games_played: u32,
    successes: u32,
    failures: u32,
    points: u64,
    level: u8,
}

/// Read-only copy of all counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub games_played: u32,
    pub successes: u32,
    pub failures: u32,
    pub points: u64,
    pub level: u8,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished round into the counters. A positive reward is a win.
    pub fn update(&mut self, reward: u32) {
        self.games_played += 1;
        self.points += u64::from(reward);
        if reward > 0 {
            self.successes += 1;
        } else {
            self.failures += 1;
        }
        self.level = level(self.games_played, self.successes);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            games_played: self.games_played,
            successes: self.successes,
            failures: self.failures,
            points: self.points,
            level: self.level,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

/// Skill tier from the success ratio.
///
/// Fewer than 3 games is always level 0. Under 10 games the scale has four
/// tiers, so the best reachable level there is 3; from 10 games on it has five.
pub fn level(games_played: u32, successes: u32) -> u8 {
    if games_played < MIN_GAMES_FOR_LEVEL {
        return 0;
    }
    let average = f64::from(successes) / f64::from(games_played);
    let scale: &[f64] = if games_played >= LARGE_SAMPLE_GAMES {
        &LARGE_SAMPLE_SCALE
    } else {
        &SMALL_SAMPLE_SCALE
    };
    scale
        .iter()
        .position(|&threshold| threshold >= average)
        .unwrap_or(scale.len() - 1) as u8
}
