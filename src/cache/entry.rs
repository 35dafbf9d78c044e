//! Document Entry Module
//!
//! Defines a cached document: its renderable URL and the native handle
//! backing it.

use chrono::{DateTime, Utc};

use crate::blob::{Blob, ObjectUrl};
use crate::safe_url::SafeUrl;

// == Document Entry ==
/// A single cached document.
///
/// The entry owns its object URL handle exclusively; the cache hands it back
/// to the allocator when the entry is evicted, replaced, or cleared.
#[derive(Debug)]
pub struct DocumentEntry {
    /// Sanitized URL: handle plus viewer fragment
    pub resource_url: SafeUrl,
    /// Native handle, released exactly once when the entry leaves the cache
    handle: ObjectUrl,
    /// MIME type of the cached blob
    pub content_type: String,
    /// Blob size in bytes
    pub size_bytes: usize,
    /// When the entry was stored
    pub created_at: DateTime<Utc>,
    /// Last `set` or successful `get`
    pub last_accessed: DateTime<Utc>,
}

impl DocumentEntry {
    // == Constructor ==
    /// Creates an entry for a freshly allocated handle.
    pub fn new(resource_url: SafeUrl, handle: ObjectUrl, blob: &Blob) -> Self {
        let now = Utc::now();
        Self {
            resource_url,
            handle,
            content_type: blob.content_type().to_string(),
            size_bytes: blob.len(),
            created_at: now,
            last_accessed: now,
        }
    }

    /// Returns the native handle without giving up ownership.
    pub fn handle(&self) -> &ObjectUrl {
        &self.handle
    }

    /// Records an access.
    pub fn mark_accessed(&mut self) {
        self.last_accessed = Utc::now();
    }

    /// Consumes the entry, yielding the handle to release.
    pub(crate) fn into_handle(self) -> ObjectUrl {
        self.handle
    }
}
