//! Bound-value capture: placeholder naming and the name -> value mapping.

use indexmap::IndexMap;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque bound value, kept exactly as supplied by the caller.
///
/// Values are never interpolated into rendered SQL; the execution layer binds
/// them by placeholder name.
pub type Value = serde_json::Value;

static NEXT_BIND_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a fresh placeholder name.
///
/// Names come from a process-wide monotonic counter, so they never collide.
/// The tag records where the value was captured (`val` for literal values,
/// `arg` for function arguments, `flt` for filter operands) and exists for
/// debuggability only.
pub(crate) fn fresh_name(tag: &str) -> String {
    let id = NEXT_BIND_ID.fetch_add(1, Ordering::Relaxed);
    format!("{tag}_{id}")
}

/// Flat mapping from placeholder name to bound value.
///
/// Iteration order is insertion order. On key collision the later entry
/// silently wins; the counter-based generator makes collisions impossible in
/// practice, the rule exists so merges stay total.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BindValues {
    values: IndexMap<String, Value>,
}

impl BindValues {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value under a placeholder name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Union another mapping into this one, later entries winning.
    pub fn merge(&mut self, other: BindValues) {
        for (name, value) in other.values {
            self.values.insert(name, value);
        }
    }

    /// Look up a value by placeholder name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Placeholder names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Consume the wrapper and return the underlying map.
    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_names_are_unique_and_tagged() {
        let a = fresh_name("val");
        let b = fresh_name("val");
        assert!(a.starts_with("val_"));
        assert!(b.starts_with("val_"));
        assert_ne!(a, b);
    }

    #[test]
    fn merge_later_wins() {
        let mut first = BindValues::new();
        first.insert("k", 1);
        let mut second = BindValues::new();
        second.insert("k", 2);
        first.merge(second);
        assert_eq!(first.len(), 1);
        assert_eq!(first.get("k"), Some(&Value::from(2)));
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut binds = BindValues::new();
        binds.insert("z", 1);
        binds.insert("a", 2);
        let names: Vec<&str> = binds.names().collect();
        assert_eq!(names, vec!["z", "a"]);
    }
}
