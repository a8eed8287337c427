//! Player persistence.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::PLAYERS_DIR;
use crate::error::Result;
use crate::persistence;
use crate::player::{sanitize_name, PlayerRecord};

/// Looks up and saves player records.
pub trait PlayerStore {
    /// The stored record for `name`, or `None` if the player is unknown.
    fn lookup(&self, name: &str) -> Result<Option<PlayerRecord>>;

    /// Insert or replace the record for `record.name`.
    fn save(&mut self, record: &PlayerRecord) -> Result<()>;

    /// Highest identity ever stored, or `None` if the store is empty.
    fn max_identity(&self) -> Result<Option<u64>>;
}

/// Records kept in memory for one process.
#[derive(Debug, Clone, Default)]
pub struct MemoryPlayerStore {
    records: HashMap<String, PlayerRecord>,
    saves: usize,
}

impl MemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PlayerStore for MemoryPlayerStore {
    fn lookup(&self, name: &str) -> Result<Option<PlayerRecord>> {
        Ok(self.records.get(name).cloned())
    }

    fn save(&mut self, record: &PlayerRecord) -> Result<()> {
        self.saves += 1;
        self.records.insert(record.name.clone(), record.clone());
        Ok(())
    }

    fn max_identity(&self) -> Result<Option<u64>> {
        Ok(self.records.values().map(|r| r.identity).max())
    }
}

/// One pretty-printed JSON file per player under `<data dir>/players/`.
///
/// Files are keyed by the sanitized name, so names differing only in case,
/// or in characters the sanitizer drops, refer to the same player.
#[derive(Debug, Clone)]
pub struct JsonPlayerStore {
    players_dir: PathBuf,
}

impl JsonPlayerStore {
    /// Store under the default data directory.
    pub fn open() -> Result<Self> {
        Self::open_in(&persistence::data_dir()?)
    }

    /// Store under `dir`, creating `dir/players/` if needed.
    pub fn open_in(dir: &Path) -> Result<Self> {
        let players_dir = dir.join(PLAYERS_DIR);
        fs::create_dir_all(&players_dir)?;
        Ok(Self { players_dir })
    }

    fn record_path(&self, name: &str) -> PathBuf {
        self.players_dir.join(format!("{}.json", sanitize_name(name)))
    }

    /// Every readable record, most recently saved first.
    /// Unreadable files are skipped.
    pub fn list(&self) -> Result<Vec<PlayerRecord>> {
        let mut records = Vec::new();

        for entry in fs::read_dir(&self.players_dir)? {
            let path = entry?.path();

            // Only process .json files
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            match persistence::load_json::<PlayerRecord>(&path) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping corrupted player file");
                }
            }
        }

        records.sort_by(|a, b| b.last_saved.cmp(&a.last_saved));
        Ok(records)
    }
}

impl PlayerStore for JsonPlayerStore {
    fn lookup(&self, name: &str) -> Result<Option<PlayerRecord>> {
        persistence::load_json(&self.record_path(name))
    }

    fn save(&mut self, record: &PlayerRecord) -> Result<()> {
        let path = self.record_path(&record.name);
        persistence::save_json(&path, record)?;
        tracing::debug!(path = %path.display(), "saved player");
        Ok(())
    }

    fn max_identity(&self) -> Result<Option<u64>> {
        Ok(self.list()?.iter().map(|r| r.identity).max())
    }
}
