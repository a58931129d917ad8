//! sled database wrapper.
//!
//! Owns the single process-wide handle to the backing store and the `items`
//! tree (namespace). The tree is opened once, idempotently, when the
//! database is opened; runtime operations never drop it.

use catalog_core::CodecError;
use std::path::Path;
use thiserror::Error;

/// Name of the tree holding all catalog items.
const ITEMS_TREE: &[u8] = b"items";

/// Storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sled::Error),

    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// The process-wide storage handle.
///
/// Opened at startup, held for the process lifetime, released on drop.
/// Opening the same path from a second process is unsupported; sled takes
/// an exclusive file lock.
pub struct Database {
    db: sled::Db,
    items: sled::Tree,
}

impl Database {
    /// Open the database at the given path and open the items tree,
    /// creating both if absent.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = sled::open(path)?;
        let items = db.open_tree(ITEMS_TREE)?;
        Ok(Self { db, items })
    }

    /// Open a temporary database backed by a scratch directory that is
    /// removed on drop (for testing).
    pub fn open_temporary() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        let items = db.open_tree(ITEMS_TREE)?;
        Ok(Self { db, items })
    }

    /// The tree holding catalog items, keyed by item id in byte order.
    pub fn items_tree(&self) -> &sled::Tree {
        &self.items
    }

    /// Flush all pending writes to disk.
    ///
    /// A write is durable across restart only once flushed; the item store
    /// flushes before reporting any mutation as committed.
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }
}
