//! Document Cache Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and
//! object URL lifecycle management.

use std::collections::HashMap;

use tracing::debug;

use crate::blob::{AllocatorError, Blob, ObjectUrlAllocator};
use crate::cache::{CacheStats, DocumentEntry, LruTracker};
use crate::safe_url::{PassThroughSanitizer, SafeUrl, Sanitizer, VIEWER_FRAGMENT};

// == Document Cache ==
/// Bounded mapping from document key to a renderable object URL.
///
/// Every handle the cache allocates is released exactly once: on eviction,
/// on replacement, on `remove`/`clear`, or when the cache is dropped.
#[derive(Debug)]
pub struct DocumentCache<A: ObjectUrlAllocator, S: Sanitizer = PassThroughSanitizer> {
    /// Cached documents by key
    entries: HashMap<String, DocumentEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of documents held at once
    max_size: usize,
    allocator: A,
    sanitizer: S,
}

impl<A: ObjectUrlAllocator> DocumentCache<A> {
    // == Constructor ==
    /// Creates a cache holding at most `max_size` documents (at least one).
    pub fn new(max_size: usize, allocator: A) -> Self {
        Self::with_sanitizer(max_size, allocator, PassThroughSanitizer)
    }
}

impl<A: ObjectUrlAllocator, S: Sanitizer> DocumentCache<A, S> {
    /// Creates a cache that wraps URLs with a custom sanitizer.
    pub fn with_sanitizer(max_size: usize, allocator: A, sanitizer: S) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_size: max_size.max(1),
            allocator,
            sanitizer,
        }
    }

    // == Get ==
    /// Returns the cached URL for `key`, marking it most recently used.
    ///
    /// A miss returns None and leaves recency and handles untouched; the
    /// caller is expected to fetch the document and `set` it.
    pub fn get(&mut self, key: &str) -> Option<&SafeUrl> {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.mark_accessed();
                self.lru.touch(key);
                self.stats.record_hit();
                Some(&entry.resource_url)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Caches `blob` under `key` and returns its renderable URL.
    ///
    /// The new handle is allocated before anything else changes, so an
    /// allocator error leaves the cache as it was. Replacing a key releases
    /// the previous handle; overflowing capacity evicts the single least
    /// recently used document.
    pub fn set(&mut self, key: impl Into<String>, blob: &Blob) -> Result<SafeUrl, AllocatorError> {
        let key = key.into();

        let handle = self.allocator.create(blob)?;
        self.stats.record_handle_created();

        let resource_url = self
            .sanitizer
            .wrap_for_rendering(format!("{}{}", handle, VIEWER_FRAGMENT));
        let entry = DocumentEntry::new(resource_url.clone(), handle, blob);

        if let Some(previous) = self.entries.insert(key.clone(), entry) {
            self.release(previous);
            self.stats.record_replacement();
            debug!(key = %key, "Document replaced");
        }
        self.lru.touch(&key);

        if self.entries.len() > self.max_size {
            self.evict_oldest();
        }

        self.stats.set_total_entries(self.entries.len());
        Ok(resource_url)
    }

    // == Peek ==
    /// Looks at an entry without affecting recency or statistics.
    pub fn peek(&self, key: &str) -> Option<&DocumentEntry> {
        self.entries.get(key)
    }

    // == Remove ==
    /// Drops one document and releases its handle.
    ///
    /// Returns false if the key was not cached.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.entries.remove(key) {
            Some(entry) => {
                self.lru.remove(key);
                self.release(entry);
                self.stats.set_total_entries(self.entries.len());
                debug!(key = %key, "Document removed");
                true
            }
            None => false,
        }
    }

    // == Clear ==
    /// Releases every cached document.
    ///
    /// Returns the number of handles released.
    pub fn clear(&mut self) -> usize {
        let drained: Vec<DocumentEntry> = self.entries.drain().map(|(_, entry)| entry).collect();
        let count = drained.len();

        self.lru.clear();
        for entry in drained {
            self.release(entry);
        }

        self.stats.set_total_entries(0);
        count
    }

    // == Listing ==
    /// Returns cached keys from most to least recently used.
    pub fn keys_by_recency(&self) -> Vec<String> {
        self.lru.iter_recent().map(str::to_string).collect()
    }

    /// Returns cached entries from most to least recently used.
    pub fn entries_by_recency(&self) -> Vec<(&str, &DocumentEntry)> {
        self.lru
            .iter_recent()
            .filter_map(|key| self.entries.get(key).map(|entry| (key, entry)))
            .collect()
    }

    // == Accessors ==
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the current number of cached documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of cached documents.
    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    // == Internals ==
    fn evict_oldest(&mut self) {
        if let Some(evicted_key) = self.lru.evict_oldest() {
            if let Some(entry) = self.entries.remove(&evicted_key) {
                self.release(entry);
                self.stats.record_eviction();
                debug!(key = %evicted_key, "Document evicted");
            }
        }
    }

    fn release(&mut self, entry: DocumentEntry) {
        self.allocator.release(entry.into_handle());
        self.stats.record_handle_released();
    }
}

impl<A: ObjectUrlAllocator, S: Sanitizer> Drop for DocumentCache<A, S> {
    fn drop(&mut self) {
        let released = self.clear();
        if released > 0 {
            debug!(released, "Released remaining documents on drop");
        }
    }
}
