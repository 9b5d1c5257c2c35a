//! # Session Storage
//!
//! The key-value store a host framework keeps per visitor. The cart only
//! needs four operations from it, so any session backend (cookie, redis,
//! database row) can sit behind [`SessionStore`].
//!
//! ```text
//! ┌──────────────┐   get / put / forget / has   ┌────────────────────────┐
//! │  CartStore   │ ───────────────────────────► │  dyn SessionStore      │
//! │  Provider    │                              │  (MemorySession here)  │
//! └──────────────┘                              └────────────────────────┘
//! ```

use std::collections::HashMap;

use serde_json::Value;
use uuid::Uuid;

/// Per-visitor key-value storage.
pub trait SessionStore {
    /// Returns a copy of the value stored under `key`.
    fn get(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: Value);

    /// Removes `key` and returns what was stored there.
    fn forget(&mut self, key: &str) -> Option<Value>;

    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// In-process session, used by tests and the demo binary.
#[derive(Debug, Clone)]
pub struct MemorySession {
    id: Uuid,
    values: HashMap<String, Value>,
}

impl MemorySession {
    /// Creates an empty session with a fresh id.
    pub fn new() -> Self {
        MemorySession {
            id: Uuid::new_v4(),
            values: HashMap::new(),
        }
    }

    /// Session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drops every key and issues a new session id.
    pub fn invalidate(&mut self) {
        self.values.clear();
        self.id = Uuid::new_v4();
    }
}

impl Default for MemorySession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    fn forget(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_put_get_forget() {
        let mut session = MemorySession::new();
        assert!(session.is_empty());
        assert!(!session.has("cart"));

        session.put("cart", json!({"default": {}}));
        assert!(session.has("cart"));
        assert_eq!(session.get("cart"), Some(json!({"default": {}})));

        assert_eq!(session.forget("cart"), Some(json!({"default": {}})));
        assert!(session.get("cart").is_none());
        assert!(session.forget("cart").is_none());
    }

    #[test]
    fn test_put_replaces() {
        let mut session = MemorySession::new();
        session.put("k", json!(1));
        session.put("k", json!(2));
        assert_eq!(session.get("k"), Some(json!(2)));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_invalidate_rotates_id() {
        let mut session = MemorySession::new();
        let before = session.id();
        session.put("k", json!(true));

        session.invalidate();
        assert!(session.is_empty());
        assert_ne!(session.id(), before);
    }

    #[test]
    fn test_default_has_impl() {
        struct OnlyGet(Option<Value>);

        impl SessionStore for OnlyGet {
            fn get(&self, _key: &str) -> Option<Value> {
                self.0.clone()
            }
            fn put(&mut self, _key: &str, value: Value) {
                self.0 = Some(value);
            }
            fn forget(&mut self, _key: &str) -> Option<Value> {
                self.0.take()
            }
        }

        let mut store = OnlyGet(None);
        assert!(!store.has("any"));
        store.put("any", json!("x"));
        assert!(store.has("any"));
    }
}
