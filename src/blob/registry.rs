//! Blob Registry Module
//!
//! In-process object URL allocator. Handles are plain HTTP URLs under the
//! configured origin so the API can serve the bytes back to a viewer.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{AllocatorError, Blob, ObjectUrl, ObjectUrlAllocator};

/// Path segment that precedes a blob id in every handle
const BLOB_PATH: &str = "/blobs/";

// == Registry State ==
#[derive(Debug, Default)]
struct RegistryState {
    /// Live blobs keyed by id
    blobs: HashMap<String, Blob>,
    /// Sum of the sizes of all live blobs
    bytes_in_use: usize,
}

// == Blob Registry ==
/// Thread-safe blob store that mints `{origin}/blobs/{id}` handles.
///
/// Clones share the same underlying store.
#[derive(Debug, Clone)]
pub struct BlobRegistry {
    state: Arc<Mutex<RegistryState>>,
    /// Origin prefixed to every handle, without trailing slash
    origin: String,
    /// Maximum total bytes held at once
    max_bytes: usize,
}

impl BlobRegistry {
    // == Constructor ==
    /// Creates a registry with no practical byte limit.
    pub fn new(origin: impl Into<String>) -> Self {
        Self::with_byte_limit(origin, usize::MAX)
    }

    /// Creates a registry that refuses allocations beyond `max_bytes` in total.
    pub fn with_byte_limit(origin: impl Into<String>, max_bytes: usize) -> Self {
        let origin = origin.into().trim_end_matches('/').to_string();
        Self {
            state: Arc::new(Mutex::new(RegistryState::default())),
            origin,
            max_bytes,
        }
    }

    // == Resolve ==
    /// Looks up the blob behind a handle id.
    ///
    /// Returns None once the handle has been released.
    pub fn resolve(&self, id: &str) -> Option<Blob> {
        self.state.lock().blobs.get(id).cloned()
    }

    // == Accessors ==
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Number of handles created and not yet released.
    pub fn live_handles(&self) -> usize {
        self.state.lock().blobs.len()
    }

    pub fn bytes_in_use(&self) -> usize {
        self.state.lock().bytes_in_use
    }

    /// Extracts the blob id from a handle minted by this registry.
    fn blob_id<'a>(&self, handle: &'a str) -> Option<&'a str> {
        handle
            .strip_prefix(self.origin.as_str())?
            .strip_prefix(BLOB_PATH)
    }
}

impl ObjectUrlAllocator for BlobRegistry {
    fn create(&self, blob: &Blob) -> Result<ObjectUrl, AllocatorError> {
        let mut state = self.state.lock();

        let available = self.max_bytes.saturating_sub(state.bytes_in_use);
        if blob.len() > available {
            return Err(AllocatorError::BudgetExceeded {
                requested: blob.len(),
                available,
            });
        }

        let id = Uuid::new_v4().simple().to_string();
        let handle = format!("{}{}{}", self.origin, BLOB_PATH, id);

        state.bytes_in_use += blob.len();
        state.blobs.insert(id, blob.clone());

        debug!(handle = %handle, size = blob.len(), "Object URL created");
        Ok(ObjectUrl::new(handle))
    }

    fn release(&self, handle: ObjectUrl) {
        let removed = self.blob_id(handle.as_str()).and_then(|id| {
            let mut state = self.state.lock();
            let blob = state.blobs.remove(id)?;
            state.bytes_in_use -= blob.len();
            Some(blob)
        });

        match removed {
            Some(_) => debug!(handle = %handle, "Object URL released"),
            None => warn!(handle = %handle, "Release of unknown object URL ignored"),
        }
    }
}
