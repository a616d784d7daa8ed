//! Conditions: logical connectives and comparison/filter clauses.

use crate::bind::BindValues;
use crate::frag::{Fragment, Operand, SqlPart};

/// The connective keyword for a [`Group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    And,
    Or,
}

impl GroupKind {
    fn keyword(self) -> &'static str {
        match self {
            GroupKind::And => "AND",
            GroupKind::Or => "OR",
        }
    }
}

/// A logical connective over an ordered list of conditions.
///
/// Elements are fragments or raw strings. A single element renders alone,
/// unwrapped; two or more render parenthesized and keyword-joined.
pub struct Group {
    kind: GroupKind,
    parts: Vec<SqlPart>,
}

impl Group {
    pub fn new(kind: GroupKind, parts: Vec<SqlPart>) -> Self {
        Self { kind, parts }
    }

    pub fn and(parts: Vec<SqlPart>) -> Self {
        Self::new(GroupKind::And, parts)
    }

    pub fn or(parts: Vec<SqlPart>) -> Self {
        Self::new(GroupKind::Or, parts)
    }
}

impl Fragment for Group {
    fn to_sql(&self) -> String {
        let rendered: Vec<String> = self.parts.iter().map(|part| part.to_sql()).collect();
        match rendered.len() {
            0 => String::new(),
            1 => rendered.into_iter().next().unwrap(),
            _ => format!(
                "({})",
                rendered.join(&format!(" {} ", self.kind.keyword()))
            ),
        }
    }

    fn bind_values(&self) -> BindValues {
        let mut binds = BindValues::new();
        for part in &self.parts {
            binds.merge(part.bind_values());
        }
        binds
    }
}

/// A comparison/filter clause: `left [op right]`.
///
/// The left side promotes bare strings to identifiers; the right side
/// promotes any bare value (strings included) to a fresh `flt_*` placeholder.
/// With no right side only the left side renders, which is how a bare
/// predicate (a boolean function call, say) is expressed.
pub struct Where {
    left: Box<dyn Fragment>,
    op: String,
    right: Option<Box<dyn Fragment>>,
}

impl Where {
    /// Equality filter: `left = right`.
    pub fn new(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::with_op(left, "=", right)
    }

    /// Filter with an explicit operator token.
    pub fn with_op(
        left: impl Into<Operand>,
        op: impl Into<String>,
        right: impl Into<Operand>,
    ) -> Self {
        Self {
            left: left.into().into_ident(),
            op: op.into(),
            right: Some(right.into().into_value("flt")),
        }
    }

    /// Bare predicate: the left side renders alone, no operator.
    pub fn unary(left: impl Into<Operand>) -> Self {
        Self {
            left: left.into().into_ident(),
            op: "=".to_string(),
            right: None,
        }
    }
}

impl Fragment for Where {
    fn to_sql(&self) -> String {
        match &self.right {
            Some(right) => format!("{} {} {}", self.left.to_sql(), self.op, right.to_sql()),
            None => self.left.to_sql(),
        }
    }

    fn bind_values(&self) -> BindValues {
        let mut binds = self.left.bind_values();
        if let Some(right) = &self.right {
            binds.merge(right.bind_values());
        }
        binds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frag::{Func, SqlNull};

    #[test]
    fn default_operator_is_equals() {
        let w = Where::new("status", "active");
        let binds = w.bind_values();
        assert_eq!(binds.len(), 1);
        let (name, value) = binds.iter().next().unwrap();
        assert_eq!(w.to_sql(), format!("\"status\" = :{name}"));
        assert_eq!(value, &serde_json::Value::from("active"));
    }

    #[test]
    fn explicit_operator() {
        let w = Where::with_op("age", ">=", 18);
        let binds = w.bind_values();
        let (name, _) = binds.iter().next().unwrap();
        assert_eq!(w.to_sql(), format!("\"age\" >= :{name}"));
    }

    #[test]
    fn null_literal_right_side() {
        let w = Where::with_op("deleted_at", "IS NOT", SqlNull);
        assert_eq!(w.to_sql(), "\"deleted_at\" IS NOT NULL");
        assert!(w.bind_values().is_empty());
    }

    #[test]
    fn unary_renders_left_only() {
        let w = Where::unary(Func::new("pg_is_in_recovery", vec![]));
        assert_eq!(w.to_sql(), "pg_is_in_recovery()");
    }

    #[test]
    fn single_element_group_is_unwrapped() {
        let g = Group::and(vec!["a = b".into()]);
        assert_eq!(g.to_sql(), "a = b");
    }

    #[test]
    fn multi_element_group_is_parenthesized() {
        let g = Group::or(vec!["a = b".into(), "c = d".into()]);
        assert_eq!(g.to_sql(), "(a = b OR c = d)");
    }

    #[test]
    fn empty_group_renders_nothing() {
        let g = Group::and(vec![]);
        assert_eq!(g.to_sql(), "");
    }

    #[test]
    fn group_merges_fragment_binds() {
        let w1 = Where::new("a", 1);
        let w2 = Where::new("b", 2);
        let g = Group::and(vec![w1.into(), w2.into()]);
        assert_eq!(g.bind_values().len(), 2);
        assert!(g.to_sql().starts_with("(\"a\" = :"));
        assert!(g.to_sql().contains(" AND \"b\" = :"));
    }
}
