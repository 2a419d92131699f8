//! Composition root: one directory plus one top-K call ranking cache,
//! kept consistent across every mutation.
//!
//! Inserts feed the cache incrementally, call-count updates replace the
//! cached copy, and removals that touch a cached entry invalidate the
//! cache as a whole; the next ranking read then rebuilds it from a full
//! directory scan. Cache updates are not linearizable with directory
//! updates under concurrent access — the registry is single-writer.

use crate::cache::{CacheError, TopKCache};
use crate::directory::{Directory, DirectoryError};
use crate::entry::{cmp_by_calls, Entry};
use crate::number::{self, NumberError};
use std::io;
use thiserror::Error;

/// Default number of top-ranked entries the registry tracks.
pub const DEFAULT_TOP_K: usize = 5;

/// Registry tuning knobs.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// How many of the highest call-count entries to keep ranked.
    pub top_k: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Errors from [`Registry::add`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddError {
    #[error(transparent)]
    Number(#[from] NumberError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Phone directory with a continuously tracked top-K ranking by outgoing
/// calls.
#[derive(Debug)]
pub struct Registry {
    directory: Directory,
    ranking: TopKCache<Entry>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Registry tracking the default number of top entries.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            directory: Directory::new(),
            ranking: TopKCache::new(config.top_k, cmp_by_calls),
        }
    }

    /// Validate `raw_number` and insert a new entry under `name` with an
    /// initial call count.
    ///
    /// On success the new entry is offered to the ranking cache through
    /// the validity-gated path: an invalidated cache stays empty until the
    /// next rebuild picks the entry up from the directory.
    ///
    /// # Errors
    ///
    /// [`AddError::Number`] when validation fails, [`AddError::Directory`]
    /// when the name is already taken. The directory is unchanged either
    /// way.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        raw_number: &str,
        calls: u64,
    ) -> Result<&Entry, AddError> {
        let parsed = number::parse(raw_number)?;
        let entry = Entry::new(name, parsed, calls);
        let ranked = entry.clone();
        let inserted = self.directory.insert(entry)?;
        self.ranking.insert_if_valid([ranked]);
        tracing::trace!(name = %inserted.name, calls = inserted.calls, "added entry");
        Ok(inserted)
    }

    /// Remove the entry named `name`. Returns false when absent.
    ///
    /// Removing a cached entry invalidates the ranking cache as a whole;
    /// the next [`top_calls`](Self::top_calls) pays one full directory
    /// scan to rebuild it.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.directory.remove(name) {
            Some(removed) => {
                if self.ranking.contains(&removed) {
                    tracing::debug!(name = %removed.name, "removed a ranked entry; invalidating cache");
                    self.ranking.invalidate();
                }
                true
            }
            None => false,
        }
    }

    /// Add `delta` outgoing calls to the entry named `name`. Returns false
    /// when absent.
    ///
    /// The entry is replaced wholesale (removed, then reinserted with the
    /// new count) rather than mutated in place, and the cache is informed
    /// through the update path whether or not it is currently valid.
    pub fn record_calls(&mut self, name: &str, delta: u64) -> bool {
        let Some(old) = self.directory.remove(name) else {
            return false;
        };
        let updated = Entry {
            calls: old.calls.saturating_add(delta),
            ..old
        };
        self.ranking.update_if_present(&updated);
        self.directory
            .insert(updated)
            .expect("name was just removed; reinsert cannot collide");
        true
    }

    /// The up-to-K entries with the most outgoing calls, best first.
    ///
    /// Served straight from the ranking cache while it is valid; an
    /// invalidated cache is rebuilt here from a full directory scan before
    /// returning.
    pub fn top_calls(&mut self) -> Vec<Entry> {
        match self.ranking.ordered() {
            Ok(ranked) => ranked,
            Err(CacheError::Invalidated) => {
                tracing::debug!(
                    entries = self.directory.len(),
                    "rebuilding ranking cache from directory scan"
                );
                self.ranking.rebuild(self.directory.iter().cloned())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.directory.get(name)
    }

    /// Write every entry to `sink`, one per line, ascending by name.
    pub fn print_all(&self, sink: &mut impl io::Write) -> io::Result<()> {
        self.directory.print_all(sink)
    }

    pub fn len(&self) -> usize {
        self.directory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directory.is_empty()
    }
}
