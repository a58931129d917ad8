//! HTTP boundary for the catalog service.
//!
//! Thin plumbing over [`catalog_storage::ItemStore`]: routing, parameter
//! extraction, and status-code mapping. All consistency semantics live in
//! the storage layer; this crate only translates outcomes to responses.

pub mod api;

pub use api::{app, ApiError, AppState};
