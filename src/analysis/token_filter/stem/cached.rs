//! Memoizing wrapper around any stemmer.
//!
//! Index-time analysis sees the same words over and over, so remembering
//! recent stems avoids re-running the rule pipeline. The cache is bounded:
//! once it holds `capacity` entries it is cleared and starts filling again.

use std::sync::atomic::{AtomicU64, Ordering};

use ahash::AHashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::{PorterStemmer, Stemmer};

/// Default maximum number of cached entries.
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;

/// Cache statistics for a [`CachingStemmer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of lookups answered from the cache.
    pub hits: u64,

    /// Number of lookups that ran the wrapped stemmer.
    pub misses: u64,

    /// Number of entries currently cached.
    pub entries: usize,
}

/// A stemmer that caches the results of another stemmer.
#[derive(Debug)]
pub struct CachingStemmer<S: Stemmer = PorterStemmer> {
    inner: S,
    capacity: usize,
    cache: RwLock<AHashMap<String, String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<S: Stemmer> CachingStemmer<S> {
    /// Wrap `inner` with the default capacity.
    pub fn new(inner: S) -> Self {
        Self::with_capacity(inner, DEFAULT_CACHE_CAPACITY)
    }

    /// Wrap `inner`, holding at most `capacity` entries. A capacity of zero
    /// disables caching.
    pub fn with_capacity(inner: S, capacity: usize) -> Self {
        CachingStemmer {
            inner,
            capacity,
            cache: RwLock::new(AHashMap::with_capacity(capacity.min(1024))),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Get the wrapped stemmer.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Get the maximum number of cached entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.read().len(),
        }
    }

    /// Remove every cached entry.
    pub fn clear(&self) {
        self.cache.write().clear();
    }
}

impl Default for CachingStemmer<PorterStemmer> {
    fn default() -> Self {
        Self::new(PorterStemmer::new())
    }
}

impl<S: Stemmer> Stemmer for CachingStemmer<S> {
    fn stem(&self, word: &str) -> String {
        if let Some(stemmed) = self.cache.read().get(word) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return stemmed.clone();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let stemmed = self.inner.stem(word);

        if self.capacity > 0 {
            let mut cache = self.cache.write();
            if cache.len() >= self.capacity {
                log::debug!("stem cache full at {} entries, clearing", cache.len());
                cache.clear();
            }
            cache.insert(word.to_string(), stemmed.clone());
        }

        stemmed
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
