//! Request models for the document cache API
//!
//! Uploads arrive as a raw body; the handler assembles an `UploadRequest`
//! from the path key, the Content-Type header and the bytes.

use crate::blob::{Blob, DEFAULT_CONTENT_TYPE};
use crate::cache::MAX_KEY_LENGTH;
use crate::error::{CacheError, Result};

/// Document upload (PUT /documents/:key)
///
/// # Fields
/// - `key`: Document identifier
/// - `content_type`: Declared MIME type, if any
/// - `data`: Raw document bytes
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub key: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl UploadRequest {
    /// Validates the upload against key rules and the size limit.
    pub fn validate(&self, max_upload_bytes: usize) -> Result<()> {
        validate_key(&self.key)?;
        if self.data.is_empty() {
            return Err(CacheError::InvalidRequest(
                "Document body cannot be empty".to_string(),
            ));
        }
        if self.data.len() > max_upload_bytes {
            return Err(CacheError::PayloadTooLarge {
                size: self.data.len(),
                limit: max_upload_bytes,
            });
        }
        Ok(())
    }

    /// Converts the upload into a blob, defaulting the content type to PDF.
    pub fn into_blob(self) -> Blob {
        let content_type = self
            .content_type
            .filter(|ct| !ct.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
        Blob::new(self.data, content_type)
    }
}

/// Checks a document key for emptiness and length.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidRequest("Key cannot be empty".to_string()));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidRequest(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    Ok(())
}
