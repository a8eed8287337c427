//! Players, their persisted form, and session identity allocation.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_NAME_LEN, SAVE_VERSION};
use crate::error::{HangmanError, Result};
use crate::stats::Stats;
use crate::store::PlayerStore;

/// A player as stored by a [`PlayerStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default = "default_version")]
    pub version: u32,
    pub identity: u64,
    pub name: String,
    pub stats: Stats,
    /// Unix timestamp of the last save
    #[serde(default)]
    pub last_saved: i64,
}

fn default_version() -> u32 {
    SAVE_VERSION
}

/// A named player with an identity and statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    identity: u64,
    name: String,
    stats: Stats,
}

impl Player {
    /// Resolve `name` against `store`, reusing a stored identity and stats,
    /// or mint a fresh identity from `allocator` for a new player.
    pub fn load_or_create<S: PlayerStore + ?Sized>(
        name: &str,
        store: &S,
        allocator: &mut IdentityAllocator,
    ) -> Result<Self> {
        validate_name(name).map_err(HangmanError::InvalidPlayer)?;

        if let Some(record) = store.lookup(name.trim())? {
            tracing::debug!(name = %record.name, identity = record.identity, "loaded player");
            return Ok(Self::from(record));
        }

        let identity = allocator.allocate(store)?;
        tracing::debug!(name = name.trim(), identity, "created player");
        Ok(Self {
            identity,
            name: name.trim().to_string(),
            stats: Stats::new(),
        })
    }

    pub fn identity(&self) -> u64 {
        self.identity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    /// Persisted form, stamped with the current time.
    pub fn record(&self) -> PlayerRecord {
        PlayerRecord {
            version: SAVE_VERSION,
            identity: self.identity,
            name: self.name.clone(),
            stats: self.stats.clone(),
            last_saved: chrono::Utc::now().timestamp(),
        }
    }
}

impl From<PlayerRecord> for Player {
    fn from(record: PlayerRecord) -> Self {
        Self {
            identity: record.identity,
            name: record.name,
            stats: record.stats,
        }
    }
}

/// Hands out player identities for one session.
///
/// Every identity is greater than both the store's historical maximum and
/// anything this allocator has already issued.
#[derive(Debug, Clone, Default)]
pub struct IdentityAllocator {
    last_issued: Option<u64>,
}

impl IdentityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate<S: PlayerStore + ?Sized>(&mut self, store: &S) -> Result<u64> {
        let floor = store.max_identity()?.max(self.last_issued);
        let identity = floor.map_or(0, |max| max + 1);
        self.last_issued = Some(identity);
        Ok(identity)
    }

    pub fn last_issued(&self) -> Option<u64> {
        self.last_issued
    }
}

pub fn validate_name(name: &str) -> std::result::Result<(), String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(format!("Name must be {} characters or less", MAX_NAME_LEN));
    }

    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_');

    if !valid_chars {
        return Err(
            "Name can only contain letters, numbers, spaces, hyphens, and underscores".to_string(),
        );
    }

    Ok(())
}

/// File-name-safe key for a player name.
pub fn sanitize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}
