//! Cache Statistics Module
//!
//! Tracks document cache metrics including hits, misses, evictions and
//! object URL handle accounting.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance and handle lifecycle counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful lookups
    pub hits: u64,
    /// Number of lookups for uncached documents
    pub misses: u64,
    /// Number of entries evicted due to LRU policy
    pub evictions: u64,
    /// Number of `set` calls that replaced an existing document
    pub replacements: u64,
    /// Object URL handles allocated by the cache
    pub handles_created: u64,
    /// Object URL handles released by the cache
    pub handles_released: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Handles allocated and not yet released.
    pub fn live_handles(&self) -> u64 {
        self.handles_created - self.handles_released
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_replacement(&mut self) {
        self.replacements += 1;
    }

    pub fn record_handle_created(&mut self) {
        self.handles_created += 1;
    }

    pub fn record_handle_released(&mut self) {
        self.handles_released += 1;
    }

    // == Update Entry Count ==
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.replacements, 0);
        assert_eq!(stats.live_handles(), 0);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_live_handles() {
        let mut stats = CacheStats::new();
        stats.record_handle_created();
        stats.record_handle_created();
        stats.record_handle_created();
        stats.record_handle_released();
        assert_eq!(stats.live_handles(), 2);
    }

    #[test]
    fn test_record_eviction_and_replacement() {
        let mut stats = CacheStats::new();
        stats.record_eviction();
        stats.record_eviction();
        stats.record_replacement();
        assert_eq!(stats.evictions, 2);
        assert_eq!(stats.replacements, 1);
    }
}
