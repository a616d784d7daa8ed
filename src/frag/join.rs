//! Join clauses.
//!
//! One join type parameterized by a keyword enum; the directional and lateral
//! variants differ only in what surrounds the literal `JOIN` keyword.

use crate::bind::BindValues;
use crate::frag::ident::quote_segment;
use crate::frag::{Fragment, Operand, Where};

/// The directional/lateral flavor of a [`Join`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Outer,
    LeftOuter,
    FullOuter,
    CrossLateral,
    LeftLateral,
}

impl JoinKind {
    fn prefix(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Outer => "OUTER",
            JoinKind::LeftOuter => "LEFT OUTER",
            JoinKind::FullOuter => "FULL OUTER",
            JoinKind::CrossLateral => "CROSS",
            JoinKind::LeftLateral => "LEFT",
        }
    }

    fn lateral(self) -> bool {
        matches!(self, JoinKind::CrossLateral | JoinKind::LeftLateral)
    }
}

/// A join clause: `<kind> JOIN <target> [AS "alias"] [ON <condition>]`.
///
/// The target is a table name (promoted to an identifier) or any fragment,
/// typically a sub-statement for lateral joins.
pub struct Join {
    kind: JoinKind,
    target: Box<dyn Fragment>,
    on: Option<Where>,
    alias: Option<String>,
}

impl Join {
    pub fn new(kind: JoinKind, target: impl Into<Operand>) -> Self {
        Self {
            kind,
            target: target.into().into_ident(),
            on: None,
            alias: None,
        }
    }

    pub fn inner(target: impl Into<Operand>) -> Self {
        Self::new(JoinKind::Inner, target)
    }

    pub fn outer(target: impl Into<Operand>) -> Self {
        Self::new(JoinKind::Outer, target)
    }

    pub fn left_outer(target: impl Into<Operand>) -> Self {
        Self::new(JoinKind::LeftOuter, target)
    }

    pub fn full_outer(target: impl Into<Operand>) -> Self {
        Self::new(JoinKind::FullOuter, target)
    }

    pub fn cross_lateral(target: impl Into<Operand>) -> Self {
        Self::new(JoinKind::CrossLateral, target)
    }

    pub fn left_lateral(target: impl Into<Operand>) -> Self {
        Self::new(JoinKind::LeftLateral, target)
    }

    /// Attach the `ON` condition.
    pub fn on(mut self, condition: Where) -> Self {
        self.on = Some(condition);
        self
    }

    /// Attach an alias for the join target.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl Fragment for Join {
    fn to_sql(&self) -> String {
        let mut sql = format!("{} JOIN", self.kind.prefix());
        if self.kind.lateral() {
            sql.push_str(" LATERAL");
        }
        sql.push(' ');
        sql.push_str(&self.target.to_sql());
        if let Some(alias) = &self.alias {
            sql.push_str(" AS ");
            sql.push_str(&quote_segment(alias));
        }
        if let Some(on) = &self.on {
            sql.push_str(" ON ");
            sql.push_str(&on.to_sql());
        }
        sql
    }

    fn bind_values(&self) -> BindValues {
        let mut binds = self.target.bind_values();
        if let Some(on) = &self.on {
            binds.merge(on.bind_values());
        }
        binds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frag::Ident;

    #[test]
    fn inner_join_with_condition() {
        let j = Join::inner("orders").on(Where::with_op(
            "orders.user_id",
            "=",
            Ident::new("users.id"),
        ));
        assert_eq!(
            j.to_sql(),
            "INNER JOIN \"orders\" ON \"orders\".\"user_id\" = \"users\".\"id\""
        );
    }

    #[test]
    fn directional_keywords() {
        assert_eq!(Join::outer("t").to_sql(), "OUTER JOIN \"t\"");
        assert_eq!(Join::left_outer("t").to_sql(), "LEFT OUTER JOIN \"t\"");
        assert_eq!(Join::full_outer("t").to_sql(), "FULL OUTER JOIN \"t\"");
    }

    #[test]
    fn lateral_keywords_wrap_join() {
        assert_eq!(Join::cross_lateral("t").to_sql(), "CROSS JOIN LATERAL \"t\"");
        assert_eq!(Join::left_lateral("t").to_sql(), "LEFT JOIN LATERAL \"t\"");
    }

    #[test]
    fn alias_renders_before_condition() {
        let j = Join::inner("orders")
            .alias("o")
            .on(Where::with_op("o.user_id", "=", Ident::new("u.id")));
        assert_eq!(
            j.to_sql(),
            "INNER JOIN \"orders\" AS \"o\" ON \"o\".\"user_id\" = \"u\".\"id\""
        );
    }

    #[test]
    fn condition_binds_are_forwarded() {
        let j = Join::inner("orders").on(Where::new("orders.status", "open"));
        assert_eq!(j.bind_values().len(), 1);
    }
}
