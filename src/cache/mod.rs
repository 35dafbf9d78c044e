//! Cache Module
//!
//! Provides the bounded document cache with LRU eviction and object URL
//! lifecycle management.

mod entry;
mod lru;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;
#[cfg(test)]
pub(crate) mod testing;

// Re-export public types
pub use entry::DocumentEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::DocumentCache;

// == Public Constants ==
/// Default number of documents kept open at once
pub const DEFAULT_MAX_DOCUMENTS: usize = 20;

/// Maximum allowed document key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;
