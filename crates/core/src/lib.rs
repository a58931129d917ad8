//! Core entity types for the catalog service.
//!
//! This crate provides the types shared by the storage and server layers:
//! - The [`Item`] entity
//! - The byte codec that carries items across the storage boundary

pub mod codec;
pub mod item;

// Re-export commonly used types at the crate root
pub use codec::CodecError;
pub use item::Item;
