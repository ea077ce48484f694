//! The favorites cache: an in-memory replica of the user's favorites
//! collection with an explicit freshness flag.

use std::collections::BTreeSet;

use crate::api::models::FavoriteRecord;

/// Whether the cached collection may be trusted as authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// The cache matches the last full fetch from the backend.
    Fresh,
    /// A mutation has happened since the last fetch; the cache must be
    /// refreshed before being trusted again.
    Stale,
}

/// In-memory favorites collection.
///
/// The backend is the source of truth; this is a replica. Every mutating
/// request marks the cache stale, and the update loop reacts by fetching
/// the full collection and replacing the cache atomically, always a
/// full replace, never a partial merge. Not incremental, but one user's
/// working set is small.
///
/// The cache is owned by the application state and mutated only from the
/// UI event loop, so there is a single writer by construction.
#[derive(Debug)]
pub struct FavoritesCache {
    records: Vec<FavoriteRecord>,
    freshness: Freshness,
}

impl FavoritesCache {
    /// An empty cache, born stale so the first refresh populates it.
    pub fn new() -> Self {
        FavoritesCache {
            records: Vec::new(),
            freshness: Freshness::Stale,
        }
    }

    pub fn is_stale(&self) -> bool {
        self.freshness == Freshness::Stale
    }

    /// Mark the replica untrusted. Called after every mutation request
    /// completes, whether or not it succeeded.
    pub fn mark_stale(&mut self) {
        self.freshness = Freshness::Stale;
    }

    /// Atomically replace the collection with a freshly fetched one.
    pub fn replace(&mut self, records: Vec<FavoriteRecord>) {
        self.records = records;
        self.freshness = Freshness::Fresh;
    }

    /// All cached records, in backend order.
    pub fn records(&self) -> &[FavoriteRecord] {
        &self.records
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&FavoriteRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Union of all tags across cached records, duplicates collapsed.
    pub fn all_tags(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .flat_map(|record| record.tags.iter().cloned())
            .collect()
    }

    /// Records whose tag set contains `tag`, in cache order.
    pub fn by_tag(&self, tag: &str) -> Vec<&FavoriteRecord> {
        self.records
            .iter()
            .filter(|record| record.tags.contains(tag))
            .collect()
    }
}

impl Default for FavoritesCache {
    fn default() -> Self {
        Self::new()
    }
}
