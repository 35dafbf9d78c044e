//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::DEFAULT_MAX_DOCUMENTS;

/// Default per-document upload limit (25 MiB)
const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Default total blob budget (512 MiB)
const DEFAULT_MAX_BLOB_BYTES: usize = 512 * 1024 * 1024;

const DEFAULT_SERVER_PORT: u16 = 3000;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of documents the cache holds at once
    pub max_documents: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Origin prefixed to every object URL handed out
    pub public_origin: String,
    /// Largest accepted upload in bytes
    pub max_upload_bytes: usize,
    /// Total bytes the blob registry may hold
    pub max_blob_bytes: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_DOCUMENTS` - Cache capacity (default: 20, zero is ignored)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `PUBLIC_ORIGIN` - Object URL origin (default: `http://localhost:{port}`)
    /// - `MAX_UPLOAD_BYTES` - Per-document upload limit (default: 25 MiB)
    /// - `MAX_BLOB_BYTES` - Blob registry budget (default: 512 MiB)
    pub fn from_env() -> Self {
        let server_port = parse_var("SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT);

        Self {
            max_documents: parse_var("MAX_DOCUMENTS")
                .filter(|&n: &usize| n > 0)
                .unwrap_or(DEFAULT_MAX_DOCUMENTS),
            server_port,
            public_origin: env::var("PUBLIC_ORIGIN")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default_origin(server_port)),
            max_upload_bytes: parse_var("MAX_UPLOAD_BYTES").unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            max_blob_bytes: parse_var("MAX_BLOB_BYTES").unwrap_or(DEFAULT_MAX_BLOB_BYTES),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_documents: DEFAULT_MAX_DOCUMENTS,
            server_port: DEFAULT_SERVER_PORT,
            public_origin: default_origin(DEFAULT_SERVER_PORT),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_blob_bytes: DEFAULT_MAX_BLOB_BYTES,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn default_origin(port: u16) -> String {
    format!("http://localhost:{}", port)
}
