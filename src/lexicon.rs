//! Word sources for new rounds.

use std::collections::BTreeMap;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::WORDS_FILE;
use crate::error::Result;
use crate::persistence;

/// Supplies a random word from a named lexicon.
pub trait LexiconProvider {
    /// A random word, or `None` if the lexicon is unknown or empty.
    fn random_word<R: Rng + ?Sized>(&self, lexicon: &str, rng: &mut R) -> Option<String>;

    /// Identifiers of every lexicon this provider knows.
    fn lexicons(&self) -> Vec<String>;
}

/// Lexicons held in memory, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct MemoryLexicon {
    words: BTreeMap<String, Vec<String>>,
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `words` to `lexicon`, creating it if needed. Empty words are dropped.
    pub fn insert<I, S>(&mut self, lexicon: &str, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.words.entry(lexicon.to_string()).or_default();
        entry.extend(words.into_iter().map(Into::into).filter(|w| !w.is_empty()));
    }

    pub fn with_lexicon<I, S>(mut self, lexicon: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(lexicon, words);
        self
    }
}

impl LexiconProvider for MemoryLexicon {
    fn random_word<R: Rng + ?Sized>(&self, lexicon: &str, rng: &mut R) -> Option<String> {
        self.words
            .get(lexicon)
            .and_then(|words| words.choose(rng))
            .cloned()
    }

    fn lexicons(&self) -> Vec<String> {
        self.words.keys().cloned().collect()
    }
}

/// Lexicons read from `words.json`: `{ "<lexicon>": ["word", ...] }`.
#[derive(Debug, Clone)]
pub struct JsonLexicon {
    inner: MemoryLexicon,
}

impl JsonLexicon {
    /// Load `words.json` from the data directory.
    pub fn open() -> Result<Self> {
        Self::open_in(&persistence::data_dir()?)
    }

    /// Load `words.json` from `dir`. A missing file gives an empty provider.
    pub fn open_in(dir: &Path) -> Result<Self> {
        let path = dir.join(WORDS_FILE);
        let raw: BTreeMap<String, Vec<String>> =
            persistence::load_json(&path)?.unwrap_or_default();
        let mut inner = MemoryLexicon::new();
        for (lexicon, words) in raw {
            inner.insert(&lexicon, words);
        }
        tracing::debug!(path = %path.display(), lexicons = inner.words.len(), "loaded lexicons");
        Ok(Self { inner })
    }
}

impl LexiconProvider for JsonLexicon {
    fn random_word<R: Rng + ?Sized>(&self, lexicon: &str, rng: &mut R) -> Option<String> {
        self.inner.random_word(lexicon, rng)
    }

    fn lexicons(&self) -> Vec<String> {
        self.inner.lexicons()
    }
}
