//! API Module
//!
//! HTTP handlers and routing for the document cache REST API.
//!
//! # Endpoints
//! - `PUT /documents/:key` - Cache a document
//! - `GET /documents/:key` - Look up a cached document
//! - `DELETE /documents/:key` - Release one document
//! - `GET /documents` - List cached documents
//! - `DELETE /documents` - Release every document
//! - `GET /blobs/:id` - Serve object URL bytes
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
