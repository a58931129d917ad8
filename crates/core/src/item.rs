//! The catalog item entity.

use serde::{Deserialize, Serialize};

/// A single catalog item.
///
/// The `id` doubles as the storage key. It is caller-supplied and unique by
/// construction: writing a second item with the same id overwrites the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Caller-supplied identifier; addresses the item in storage and routes.
    pub id: String,
    /// Free-form display name, no uniqueness constraint.
    pub name: String,
}

impl Item {
    /// Create a new item.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let item = Item::new("1", "Widget");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["name"], "Widget");
    }

    #[test]
    fn test_equality() {
        assert_eq!(Item::new("a", "x"), Item::new("a", "x"));
        assert_ne!(Item::new("a", "x"), Item::new("a", "y"));
    }
}
