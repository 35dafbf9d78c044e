//! Blob Module
//!
//! Binary payloads and the object URL allocator contract the document cache
//! builds on.

mod registry;

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

pub use registry::BlobRegistry;

// == Public Constants ==
/// Content type assumed when an upload does not declare one
pub const DEFAULT_CONTENT_TYPE: &str = "application/pdf";

// == Blob ==
/// An immutable in-memory binary payload.
///
/// Cloning a blob shares the underlying bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    /// Raw bytes
    data: Arc<[u8]>,
    /// MIME type served alongside the bytes
    content_type: String,
}

impl Blob {
    // == Constructor ==
    /// Creates a new blob from bytes and a content type.
    pub fn new(data: impl Into<Arc<[u8]>>, content_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            content_type: content_type.into(),
        }
    }

    /// Creates a PDF blob.
    pub fn pdf(data: impl Into<Arc<[u8]>>) -> Self {
        Self::new(data, DEFAULT_CONTENT_TYPE)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Returns the payload size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// == Object URL ==
/// A native object URL handle.
///
/// Not `Clone`: whoever holds the value owns the handle, and
/// giving it back to [`ObjectUrlAllocator::release`] consumes it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    /// Wraps a handle string minted by an allocator.
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// == Allocator Error ==
/// Failure to allocate an object URL for a blob.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocatorError {
    /// The allocator's byte budget cannot hold the blob
    #[error("Blob budget exceeded: {requested} bytes requested, {available} available")]
    BudgetExceeded { requested: usize, available: usize },

    /// Any other allocation failure reported by the host
    #[error("Object URL allocation failed: {0}")]
    Failed(String),
}

// == Allocator Trait ==
/// Creates and revokes object URLs for in-memory blobs.
///
/// Every handle returned by `create` must be unique. `release` is called at
/// most once per handle.
pub trait ObjectUrlAllocator {
    /// Registers a blob and returns a handle referencing it.
    fn create(&self, blob: &Blob) -> Result<ObjectUrl, AllocatorError>;

    /// Revokes a handle and frees the blob behind it.
    fn release(&self, handle: ObjectUrl);
}
