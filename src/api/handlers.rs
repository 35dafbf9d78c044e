//! API Handlers
//!
//! HTTP request handlers for each document cache endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, warn};

use crate::blob::BlobRegistry;
use crate::cache::DocumentCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    validate_key, ClearResponse, DocumentListResponse, DocumentResponse, DocumentSummary,
    HealthResponse, RemoveResponse, StatsResponse, UploadRequest, UploadResponse,
};

/// Document cache backed by the in-process blob registry.
pub type SharedCache = Arc<RwLock<DocumentCache<BlobRegistry>>>;

/// Application state shared across all handlers.
///
/// The cache and the blob endpoint share one registry, so every URL the
/// cache hands out stays resolvable until its document leaves the cache.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe document cache
    pub cache: SharedCache,
    /// Registry serving `/blobs/:id`
    pub registry: BlobRegistry,
    /// Largest accepted upload in bytes
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: DocumentCache<BlobRegistry>, max_upload_bytes: usize) -> Self {
        let registry = cache.allocator().clone();
        Self {
            cache: Arc::new(RwLock::new(cache)),
            registry,
            max_upload_bytes,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let registry =
            BlobRegistry::with_byte_limit(config.public_origin.clone(), config.max_blob_bytes);
        let cache = DocumentCache::new(config.max_documents, registry);
        Self::new(cache, config.max_upload_bytes)
    }
}

/// Handler for PUT /documents/:key
///
/// Caches the request body as a blob and returns its viewer URL.
pub async fn upload_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UploadResponse>> {
    let req = UploadRequest {
        key,
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        data: body.to_vec(),
    };
    req.validate(state.max_upload_bytes)?;

    let key = req.key.clone();
    let blob = req.into_blob();

    let mut cache = state.cache.write().await;
    let url = cache.set(key.clone(), &blob).map_err(|err| {
        warn!(key = %key, error = %err, "Object URL allocation failed");
        CacheError::from(err)
    })?;

    debug!(key = %key, size = blob.len(), "Document cached");
    Ok(Json(UploadResponse::new(key, url)))
}

/// Handler for GET /documents/:key
///
/// Returns the cached URL and marks the document most recently used.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DocumentResponse>> {
    // Write lock: a hit updates recency
    let mut cache = state.cache.write().await;
    let url = cache
        .get(&key)
        .cloned()
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(DocumentResponse::new(key, url)))
}

/// Handler for DELETE /documents/:key
pub async fn remove_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<RemoveResponse>> {
    validate_key(&key)?;

    let mut cache = state.cache.write().await;
    if !cache.remove(&key) {
        return Err(CacheError::NotFound(key));
    }

    Ok(Json(RemoveResponse::new(key)))
}

/// Handler for GET /documents
///
/// Lists cached documents, most recently used first, without promoting any.
pub async fn list_handler(State(state): State<AppState>) -> Json<DocumentListResponse> {
    let cache = state.cache.read().await;
    let documents = cache
        .entries_by_recency()
        .into_iter()
        .map(|(key, entry)| DocumentSummary::from_entry(key, entry))
        .collect();

    Json(DocumentListResponse { documents })
}

/// Handler for DELETE /documents
///
/// Releases every cached document, e.g. on sign-out.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut cache = state.cache.write().await;
    let released = cache.clear();
    debug!(released, "Document cache cleared");

    Json(ClearResponse { released })
}

/// Handler for GET /blobs/:id
///
/// Serves the bytes behind an object URL until it is released.
pub async fn blob_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let blob = state
        .registry
        .resolve(&id)
        .ok_or_else(|| CacheError::NotFound(format!("blob {}", id)))?;

    Ok((
        [(header::CONTENT_TYPE, blob.content_type().to_string())],
        blob.bytes().to_vec(),
    )
        .into_response())
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;

    Json(StatsResponse::new(
        &cache.stats(),
        cache.capacity(),
        state.registry.live_handles(),
        state.registry.bytes_in_use(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
