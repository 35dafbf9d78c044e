//! Doc Cache - A document preview cache server
//!
//! Hands out renderable object URLs for uploaded documents, keeping a
//! bounded number alive with LRU eviction.

pub mod api;
pub mod blob;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod safe_url;

pub use api::AppState;
pub use blob::{Blob, BlobRegistry, ObjectUrl, ObjectUrlAllocator};
pub use cache::DocumentCache;
pub use config::Config;
pub use safe_url::{SafeUrl, Sanitizer};
