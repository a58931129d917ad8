//! Persistent storage layer for the catalog service.
//!
//! This crate mediates all access to the durable state:
//! - `Database`: the single process-wide handle to the sled store, opened
//!   at startup and held for the process lifetime
//! - `ItemStore`: the item repository, wrapping every CRUD operation in
//!   one atomic storage operation
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │               HTTP handlers                 │
//! └────────────────────┬───────────────────────┘
//!                      │
//! ┌────────────────────▼───────────────────────┐
//! │              Storage Layer                  │
//! │  ┌──────────────┐   ┌───────────────────┐  │
//! │  │  ItemStore   │   │  Database         │  │
//! │  │  - CRUD ops  │   │  - sled wrapper   │  │
//! │  │  - codec     │   │  - items tree     │  │
//! │  └──────────────┘   └───────────────────┘  │
//! └────────────────────┬───────────────────────┘
//!                      │
//! ┌────────────────────▼───────────────────────┐
//! │           sled (embedded KV store)          │
//! └────────────────────────────────────────────┘
//! ```
//!
//! No in-memory state is kept between calls; every operation re-reads the
//! durable state through the sled handle.

pub mod db;
pub mod items;

// Re-export commonly used types
pub use db::{Database, Result, StorageError};
pub use items::ItemStore;
