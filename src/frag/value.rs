//! Literal-value fragments: captured placeholders and the NULL keyword.

use crate::bind::{self, BindValues, Value};
use crate::frag::Fragment;

/// A captured literal value.
///
/// Construction generates one fresh placeholder name and records the value
/// under it; rendering emits the `:name` token. The value is kept exactly as
/// supplied, binding is the execution layer's job.
#[derive(Debug, Clone, PartialEq)]
pub struct BindValue {
    name: String,
    value: Value,
}

impl BindValue {
    /// Capture a value under a fresh `val_*` placeholder.
    pub fn new(value: impl Into<Value>) -> Self {
        Self::tagged("val", value)
    }

    /// Capture a value under a placeholder tagged by origin.
    pub(crate) fn tagged(tag: &str, value: impl Into<Value>) -> Self {
        Self {
            name: bind::fresh_name(tag),
            value: value.into(),
        }
    }

    /// The generated placeholder name (without the leading colon).
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Fragment for BindValue {
    fn to_sql(&self) -> String {
        format!(":{}", self.name)
    }

    fn bind_values(&self) -> BindValues {
        let mut binds = BindValues::new();
        binds.insert(self.name.clone(), self.value.clone());
        binds
    }
}

/// The SQL `NULL` keyword as an explicit operand.
///
/// Distinct from an absent operand: `Where::with_op("deleted_at", "IS",
/// SqlNull)` renders `"deleted_at" IS NULL`, whereas leaving the right side
/// off renders the left side alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SqlNull;

impl Fragment for SqlNull {
    fn to_sql(&self) -> String {
        "NULL".to_string()
    }

    fn bind_values(&self) -> BindValues {
        BindValues::new()
    }
}
