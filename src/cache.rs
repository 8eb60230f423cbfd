//! TTL-bounded in-process cache for upstream metadata listings.
//!
//! Values are stored as whole snapshots and replaced wholesale, never
//! patched in place, so concurrent readers either see a complete mapping or
//! nothing. There is no background eviction; expiry is checked on read and
//! stale entries are swept on write.

use parking_lot::RwLock;
use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

pub struct TtlCache<V> {
    entries: RwLock<HashMap<String, Entry<V>>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the value for `key` unless it is missing or past its
    /// deadline. An expired entry is left for the next write to sweep.
    pub fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.read();
        let entry = entries.get(key)?;
        if entry.expires_at <= Instant::now() {
            return None;
        }
        Some(entry.value.clone())
    }

    /// Stores `value` under `key` for `ttl`, replacing any previous entry.
    pub fn insert(&self, key: String, value: V, ttl: Duration) {
        let now = Instant::now();
        let mut entries = self.entries.write();
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            key,
            Entry {
                value,
                expires_at: now + ttl,
            },
        );
    }

    /// Drops every entry whose key starts with `prefix`.
    pub fn invalidate_prefix(&self, prefix: &str) {
        self.entries
            .write()
            .retain(|key, _| !key.starts_with(prefix));
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.read().len()
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
