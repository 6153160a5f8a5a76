//! In-memory metadata cache
//!
//! Entries live as long as the cache itself: there is no eviction and no
//! expiry. Only definitive outcomes are stored, so a transient failure can be
//! retried on the next lookup.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::version::types::{Lookup, PackageMetadata};

/// A definitive lookup outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedLookup {
    Found(Arc<PackageMetadata>),
    NotFound,
}

impl From<CachedLookup> for Lookup {
    fn from(cached: CachedLookup) -> Self {
        match cached {
            CachedLookup::Found(metadata) => Lookup::Found(metadata),
            CachedLookup::NotFound => Lookup::NotFound,
        }
    }
}

/// Package name to metadata map, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MetadataCache {
    entries: Arc<RwLock<HashMap<String, CachedLookup>>>,
}

impl MetadataCache {
    pub fn new() -> Self {
        Self::default()
    }

    // Writers never leave the map half-updated, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CachedLookup>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CachedLookup>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns the cached outcome for a package, if any
    pub fn get(&self, package_name: &str) -> Option<CachedLookup> {
        self.read().get(package_name).cloned()
    }

    /// Stores an outcome unless one already exists, returning the stored entry
    ///
    /// The first writer wins, so every caller observes the same entry for a
    /// given package name.
    pub fn insert_if_absent(&self, package_name: &str, lookup: CachedLookup) -> CachedLookup {
        match self.write().entry(package_name.to_string()) {
            Entry::Occupied(entry) => {
                debug!("Cache entry for {} already present", package_name);
                entry.get().clone()
            }
            Entry::Vacant(entry) => entry.insert(lookup).clone(),
        }
    }

    /// Number of cached packages
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Removes every entry
    pub fn clear(&self) {
        self.write().clear();
    }
}
