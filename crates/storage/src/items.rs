//! The item repository.
//!
//! Every operation is a single-shot request/response wrapping exactly one
//! atomic storage operation. Writes serialize inside sled; readers never
//! block a writer and never observe a partially written value. There is no
//! cross-call state and no cache: each call re-reads the durable tree.

use crate::db::{Database, Result};
use catalog_core::{codec, Item};

/// Repository of catalog items, keyed by item id in byte order.
pub struct ItemStore<'a> {
    db: &'a Database,
}

impl<'a> ItemStore<'a> {
    /// Create a new ItemStore wrapping the given database.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn tree(&self) -> &sled::Tree {
        self.db.items_tree()
    }

    /// Encode and upsert an item under the given key, then flush so the
    /// write is durable before the caller sees success.
    fn put(&self, key: &str, item: &Item) -> Result<()> {
        let encoded = codec::encode(item)?;
        self.tree().insert(key.as_bytes(), encoded)?;
        self.db.flush()
    }

    // =========================================================================
    // Write Operations
    // =========================================================================

    /// Store an item under its own id.
    ///
    /// No existence pre-check: creating twice with the same id silently
    /// overwrites. On any failure the prior durable state is unchanged.
    pub fn create(&self, item: &Item) -> Result<()> {
        self.put(&item.id, item)
    }

    /// Store an item under the given key.
    ///
    /// The key is authoritative for addressing; the payload's embedded id
    /// is stored verbatim but never used as the key. Updating a
    /// nonexistent id silently creates it.
    pub fn update(&self, id: &str, item: &Item) -> Result<()> {
        self.put(id, item)
    }

    /// Remove an item if present.
    ///
    /// Idempotent: deleting an absent id succeeds and changes nothing.
    pub fn delete(&self, id: &str) -> Result<()> {
        self.tree().remove(id.as_bytes())?;
        self.db.flush()
    }

    // =========================================================================
    // Read Operations
    // =========================================================================

    /// Look up an item by id.
    ///
    /// `None` covers both a missing key and a never-written namespace; the
    /// two are indistinguishable to callers by contract. A present but
    /// undecodable value is an error.
    pub fn get(&self, id: &str) -> Result<Option<Item>> {
        match self.tree().get(id.as_bytes())? {
            Some(bytes) => Ok(Some(codec::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Return every item in key (id-lexicographic) order.
    ///
    /// An empty tree yields an empty vec. If any entry fails to decode the
    /// whole call fails; partial results are never returned.
    pub fn get_all(&self) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        for entry in self.tree().iter() {
            let (_key, value) = entry?;
            items.push(codec::decode(&value)?);
        }
        Ok(items)
    }
}
