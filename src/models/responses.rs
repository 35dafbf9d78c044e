//! Response DTOs for the document cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::{CacheStats, DocumentEntry};
use crate::safe_url::SafeUrl;

/// Response body for GET /documents/:key
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResponse {
    /// Document key
    pub key: String,
    /// Renderable resource URL
    pub url: SafeUrl,
}

impl DocumentResponse {
    pub fn new(key: impl Into<String>, url: SafeUrl) -> Self {
        Self {
            key: key.into(),
            url,
        }
    }
}

/// Response body for PUT /documents/:key
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    /// Success message
    pub message: String,
    pub key: String,
    /// URL to hand to the viewer
    pub url: SafeUrl,
}

impl UploadResponse {
    pub fn new(key: impl Into<String>, url: SafeUrl) -> Self {
        let key = key.into();
        Self {
            message: format!("Document '{}' cached successfully", key),
            key,
            url,
        }
    }
}

/// Response body for DELETE /documents/:key
#[derive(Debug, Clone, Serialize)]
pub struct RemoveResponse {
    pub message: String,
    pub key: String,
}

impl RemoveResponse {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Document '{}' removed successfully", key),
            key,
        }
    }
}

/// Response body for DELETE /documents
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Number of object URLs released
    pub released: usize,
}

/// One row of GET /documents
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    pub key: String,
    pub url: SafeUrl,
    pub content_type: String,
    pub size_bytes: usize,
    pub created_at: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
}

impl DocumentSummary {
    pub fn from_entry(key: &str, entry: &DocumentEntry) -> Self {
        Self {
            key: key.to_string(),
            url: entry.resource_url.clone(),
            content_type: entry.content_type.clone(),
            size_bytes: entry.size_bytes,
            created_at: entry.created_at,
            last_accessed: entry.last_accessed,
        }
    }
}

/// Response body for GET /documents, most recently used first
#[derive(Debug, Clone, Serialize)]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentSummary>,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub replacements: u64,
    /// Current number of cached documents
    pub total_entries: usize,
    /// Maximum number of cached documents
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Object URLs currently registered
    pub live_handles: usize,
    /// Bytes held by registered blobs
    pub bytes_in_use: usize,
}

impl StatsResponse {
    /// Builds the response from cache statistics and registry usage.
    pub fn new(stats: &CacheStats, capacity: usize, live_handles: usize, bytes_in_use: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            replacements: stats.replacements,
            total_entries: stats.total_entries,
            capacity,
            hit_rate: stats.hit_rate(),
            live_handles,
            bytes_in_use,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
