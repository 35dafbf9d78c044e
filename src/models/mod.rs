//! Request and Response models for the document cache API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! validating uploads and serializing HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{validate_key, UploadRequest};
pub use responses::{
    ClearResponse, DocumentListResponse, DocumentResponse, DocumentSummary, HealthResponse,
    RemoveResponse, StatsResponse, UploadResponse,
};
