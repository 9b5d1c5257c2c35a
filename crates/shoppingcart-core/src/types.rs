//! # Domain Types
//!
//! Identifier and option types shared by line items and the cart.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Cart Identity                                  │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │     ItemId      │   │   ItemOptions   │   │      RowId      │        │
//! │  │  ─────────────  │ + │  ─────────────  │ ► │  ─────────────  │        │
//! │  │  42 | "SKU-1"   │   │  size: "L"      │   │  sha256 hex     │        │
//! │  │  (catalog key)  │   │  color: "red"   │   │  (cart key)     │        │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two line items with the same `ItemId` and the same options (in any order)
//! share a `RowId`, which is how the cart merges them.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Item Id
// =============================================================================

/// External product identifier: either an integer key or a string key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Numeric catalog key (e.g. a database primary key).
    Int(i64),

    /// String catalog key (e.g. a SKU or UUID).
    Str(String),
}

impl ItemId {
    /// Returns true for identifiers that count as "not supplied":
    /// an empty string or the integer `0`.
    pub fn is_empty(&self) -> bool {
        match self {
            ItemId::Int(n) => *n == 0,
            ItemId::Str(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(n) => write!(f, "{n}"),
            ItemId::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        ItemId::Int(id)
    }
}

impl From<i32> for ItemId {
    fn from(id: i32) -> Self {
        ItemId::Int(i64::from(id))
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::Str(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId::Str(id)
    }
}

// =============================================================================
// Row Id
// =============================================================================

/// Derived identity of a cart row. See [`crate::line_item::generate_row_id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    /// Returns the row id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RowId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        RowId(s.to_string())
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        RowId(s)
    }
}

// =============================================================================
// Item Options
// =============================================================================

/// Arbitrary per-item options (size, color, engraving text, ...).
///
/// Keeps insertion order for display, but equality and row ids ignore order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemOptions(IndexMap<String, Value>);

impl ItemOptions {
    /// Creates an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    ///
    /// ```rust
    /// use shoppingcart_core::ItemOptions;
    ///
    /// let options = ItemOptions::new().with("size", "L").with("color", "red");
    /// assert_eq!(options.len(), 2);
    /// ```
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces an option, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns an option value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if the option is present.
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Plain key/value form, nested objects included.
    pub fn to_map(&self) -> Map<String, Value> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Canonical JSON text: keys sorted at every nesting level.
    ///
    /// Identical for any two option sets that compare equal.
    pub fn canonical_json(&self) -> String {
        let mut keys: Vec<&String> = self.0.keys().collect();
        keys.sort();

        let mut sorted = Map::new();
        for key in keys {
            if let Some(value) = self.0.get(key) {
                sorted.insert(key.clone(), canonicalize(value));
            }
        }

        Value::Object(sorted).to_string()
    }
}

/// Rebuilds objects with sorted keys so the output does not depend on the
/// map backend serde_json was compiled with.
fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::new();
            for key in keys {
                if let Some(inner) = map.get(key) {
                    sorted.insert(key.clone(), canonicalize(inner));
                }
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

impl<K, V> FromIterator<(K, V)> for ItemOptions
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ItemOptions(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<Map<String, Value>> for ItemOptions {
    fn from(map: Map<String, Value>) -> Self {
        ItemOptions(map.into_iter().collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_id_empty() {
        assert!(ItemId::from("").is_empty());
        assert!(ItemId::from(0).is_empty());
        assert!(!ItemId::from("SKU-1").is_empty());
        assert!(!ItemId::from(42).is_empty());
    }

    #[test]
    fn test_item_id_untagged_serde() {
        assert_eq!(serde_json::from_value::<ItemId>(json!(7)).unwrap(), ItemId::Int(7));
        assert_eq!(
            serde_json::from_value::<ItemId>(json!("abc")).unwrap(),
            ItemId::Str("abc".to_string())
        );
        assert_eq!(serde_json::to_value(ItemId::Int(7)).unwrap(), json!(7));
    }

    #[test]
    fn test_options_equality_ignores_order() {
        let a = ItemOptions::new().with("size", "L").with("color", "red");
        let b = ItemOptions::new().with("color", "red").with("size", "L");
        assert_eq!(a, b);
        assert_eq!(a.canonical_json(), b.canonical_json());
    }

    #[test]
    fn test_options_keep_insertion_order_for_display() {
        let options = ItemOptions::new().with("size", "L").with("color", "red");
        let keys: Vec<&String> = options.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["size", "color"]);
    }

    #[test]
    fn test_canonical_json_sorts_nested_objects() {
        let a = ItemOptions::new().with("engraving", json!({"font": "serif", "text": "Hi"}));
        let b = ItemOptions::new().with("engraving", json!({"text": "Hi", "font": "serif"}));
        assert_eq!(a.canonical_json(), b.canonical_json());
        assert_eq!(
            a.canonical_json(),
            r#"{"engraving":{"font":"serif","text":"Hi"}}"#
        );
    }

    #[test]
    fn test_options_roundtrip_through_map() {
        let options = ItemOptions::new().with("size", "L").with("qty_pack", 6);
        let map = options.to_map();
        assert_eq!(map.get("qty_pack"), Some(&json!(6)));
        assert_eq!(ItemOptions::from(map), options);
    }
}
