//! LRU Tracker Module
//!
//! Implements Least Recently Used ordering for document eviction.

use std::collections::{HashMap, VecDeque};

/// Stale records tolerated before the order queue is compacted
const COMPACT_SLACK: usize = 32;

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Every touch pushes a `(key, stamp)` record onto the front of a VecDeque:
/// - Front = Most recently used
/// - Back = Least recently used
///
/// A record is live only while its stamp matches the key's latest stamp.
/// Older records for the same key are skipped lazily, which keeps `touch`
/// and `evict_oldest` O(1) amortized.
#[derive(Debug, Default)]
pub struct LruTracker {
    /// Access records, newest first
    order: VecDeque<(String, u64)>,
    /// Latest stamp per tracked key
    stamps: HashMap<String, u64>,
    /// Monotonic stamp source
    clock: u64,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recently used, tracking it if new.
    pub fn touch(&mut self, key: &str) {
        self.clock += 1;
        self.stamps.insert(key.to_string(), self.clock);
        self.order.push_front((key.to_string(), self.clock));
        self.compact_if_needed();
    }

    // == Remove ==
    /// Stops tracking a key.
    pub fn remove(&mut self, key: &str) {
        if self.stamps.remove(key).is_some() {
            self.compact_if_needed();
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        while let Some((key, stamp)) = self.order.pop_back() {
            if self.stamps.get(&key) == Some(&stamp) {
                self.stamps.remove(&key);
                return Some(key);
            }
        }
        None
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&str> {
        self.order
            .iter()
            .rev()
            .find(|record| self.is_live(record))
            .map(|(key, _)| key.as_str())
    }

    // == Iterate ==
    /// Iterates tracked keys from most to least recently used.
    pub fn iter_recent(&self) -> impl Iterator<Item = &str> + '_ {
        self.order
            .iter()
            .filter(|record| self.is_live(record))
            .map(|(key, _)| key.as_str())
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.stamps.contains_key(key)
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.order.clear();
        self.stamps.clear();
    }

    fn is_live(&self, (key, stamp): &(String, u64)) -> bool {
        self.stamps.get(key) == Some(stamp)
    }

    /// Drops stale records once they outnumber live ones.
    fn compact_if_needed(&mut self) {
        if self.order.len() > 2 * self.stamps.len() + COMPACT_SLACK {
            let stamps = &self.stamps;
            self.order
                .retain(|(key, stamp)| stamps.get(key) == Some(stamp));
        }
    }
}
