//! Ignore Registry
//!
//! One-shot suppression of filesystem events the engine caused itself.
//! The style stage marks every compiled output it writes; the watch loop
//! consumes the entry on the next event for that key.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::value_objects::AssetKey;

/// Keys whose next filesystem event is swallowed
#[derive(Debug, Default)]
pub struct IgnoreRegistry {
    keys: Mutex<HashSet<AssetKey>>,
}

impl IgnoreRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn keys(&self) -> MutexGuard<'_, HashSet<AssetKey>> {
        self.keys.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add `key` (idempotent)
    pub fn mark_ignored(&self, key: AssetKey) {
        self.keys().insert(key);
    }

    /// Remove `key` and return true if it was marked
    pub fn consume_if_ignored(&self, key: &AssetKey) -> bool {
        self.keys().remove(key)
    }

    /// True if `key` is marked (does not consume)
    pub fn is_ignored(&self, key: &AssetKey) -> bool {
        self.keys().contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn key(s: &str) -> AssetKey {
        AssetKey::new(s).unwrap()
    }

    #[test]
    fn consume_is_one_shot() {
        let registry = IgnoreRegistry::new();
        registry.mark_ignored(key("x.css"));

        assert!(registry.consume_if_ignored(&key("x.css")));
        assert!(!registry.consume_if_ignored(&key("x.css")));
    }

    #[test]
    fn mark_is_idempotent() {
        let registry = IgnoreRegistry::new();
        registry.mark_ignored(key("x.css"));
        registry.mark_ignored(key("x.css"));

        assert_eq!(registry.len(), 1);
        assert!(registry.consume_if_ignored(&key("x.css")));
        assert!(registry.is_empty());
    }

    #[test]
    fn unknown_key_not_consumed() {
        let registry = IgnoreRegistry::new();
        registry.mark_ignored(key("a.css"));
        assert!(!registry.consume_if_ignored(&key("b.css")));
        assert!(registry.is_ignored(&key("a.css")));
    }

    #[test]
    fn concurrent_consumers_see_one_hit() {
        let registry = Arc::new(IgnoreRegistry::new());
        registry.mark_ignored(key("x.css"));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.consume_if_ignored(&key("x.css")))
            })
            .collect();
        let hits = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|hit| *hit)
            .count();

        assert_eq!(hits, 1);
    }
}
