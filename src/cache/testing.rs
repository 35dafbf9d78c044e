//! Test allocator that records every create and release.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::blob::{AllocatorError, Blob, ObjectUrl, ObjectUrlAllocator};

#[derive(Debug, Default)]
struct Log {
    created: Vec<String>,
    released: Vec<String>,
}

/// Allocator double. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingAllocator {
    log: Arc<Mutex<Log>>,
    next_id: Arc<AtomicU64>,
    fail_next: Arc<AtomicBool>,
}

impl RecordingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `create` call fail.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Handles in creation order.
    pub fn created(&self) -> Vec<String> {
        self.log.lock().created.clone()
    }

    /// Handles in release order.
    pub fn released(&self) -> Vec<String> {
        self.log.lock().released.clone()
    }

    pub fn release_count(&self, handle: &str) -> usize {
        self.log
            .lock()
            .released
            .iter()
            .filter(|h| h.as_str() == handle)
            .count()
    }

    /// Handles created and not yet released.
    pub fn live(&self) -> Vec<String> {
        let log = self.log.lock();
        log.created
            .iter()
            .filter(|h| !log.released.contains(h))
            .cloned()
            .collect()
    }
}

impl ObjectUrlAllocator for RecordingAllocator {
    fn create(&self, _blob: &Blob) -> Result<ObjectUrl, AllocatorError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(AllocatorError::Failed("invalid blob".to_string()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let handle = format!("blob:test/{}", id);
        self.log.lock().created.push(handle.clone());
        Ok(ObjectUrl::new(handle))
    }

    fn release(&self, handle: ObjectUrl) {
        self.log.lock().released.push(handle.as_str().to_string());
    }
}
