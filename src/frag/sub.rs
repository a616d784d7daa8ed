//! Sub-statements and set operations.
//!
//! Both run caller-supplied callbacks against fresh builders at construction
//! time, capturing the rendered SQL and the builders' bound values before the
//! constructor returns. A failing callback fails construction; rendering a
//! successfully constructed fragment cannot fail.

use crate::bind::BindValues;
use crate::builder::QueryBuilder;
use crate::error::SqlResult;
use crate::frag::ident::quote_segment;
use crate::frag::Fragment;

/// A nested statement: `(sql) [AS "alias"]`.
pub struct SubQuery {
    sql: String,
    binds: BindValues,
    alias: Option<String>,
}

impl SubQuery {
    /// Run `build` against a fresh builder and capture its output.
    ///
    /// The callback typically ends with `qb.to_select_sql()`; the fresh
    /// builder's bound values are captured the moment the callback returns.
    pub fn new<F>(build: F) -> SqlResult<Self>
    where
        F: FnOnce(&mut QueryBuilder) -> SqlResult<String>,
    {
        let mut qb = QueryBuilder::new();
        let sql = build(&mut qb)?;
        let binds = qb.bind_values();
        Ok(Self {
            sql,
            binds,
            alias: None,
        })
    }

    /// Attach an alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl Fragment for SubQuery {
    fn to_sql(&self) -> String {
        match &self.alias {
            Some(alias) => format!("({}) AS {}", self.sql, quote_segment(alias)),
            None => format!("({})", self.sql),
        }
    }

    fn bind_values(&self) -> BindValues {
        self.binds.clone()
    }
}

/// A set operation over member statements: `UNION` or `UNION ALL`.
///
/// Each member callback gets its own fresh builder; member statements are
/// joined by the keyword in the order added, and their bound values merged in
/// that order, later entries winning on (impossible by construction) key
/// collision.
pub struct Union {
    members: Vec<String>,
    binds: BindValues,
    all: bool,
}

impl Union {
    /// A distinct `UNION`.
    pub fn distinct() -> Self {
        Self {
            members: Vec::new(),
            binds: BindValues::new(),
            all: false,
        }
    }

    /// A `UNION ALL`.
    pub fn all() -> Self {
        Self {
            all: true,
            ..Self::distinct()
        }
    }

    /// Run `build` against a fresh builder and append the resulting member.
    pub fn member<F>(mut self, build: F) -> SqlResult<Self>
    where
        F: FnOnce(&mut QueryBuilder) -> SqlResult<String>,
    {
        let mut qb = QueryBuilder::new();
        let sql = build(&mut qb)?;
        self.binds.merge(qb.bind_values());
        self.members.push(sql);
        Ok(self)
    }
}

impl Fragment for Union {
    fn to_sql(&self) -> String {
        let keyword = if self.all { " UNION ALL " } else { " UNION " };
        self.members.join(keyword)
    }

    fn bind_values(&self) -> BindValues {
        self.binds.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SqlError;

    #[test]
    fn subquery_parenthesizes_captured_sql() {
        let sub = SubQuery::new(|qb| {
            qb.table("users").column("id");
            Ok(qb.to_select_sql())
        })
        .unwrap();
        assert_eq!(sub.to_sql(), "(SELECT \"id\" FROM \"users\")");
    }

    #[test]
    fn subquery_alias() {
        let sub = SubQuery::new(|qb| {
            qb.table("users").column("id");
            Ok(qb.to_select_sql())
        })
        .unwrap()
        .alias("u");
        assert_eq!(sub.to_sql(), "(SELECT \"id\" FROM \"users\") AS \"u\"");
    }

    #[test]
    fn subquery_captures_inner_binds() {
        let sub = SubQuery::new(|qb| {
            qb.table("users").filter_on("status", "active");
            Ok(qb.to_select_sql())
        })
        .unwrap();
        let binds = sub.bind_values();
        assert_eq!(binds.len(), 1);
        let (name, value) = binds.iter().next().unwrap();
        assert!(sub.to_sql().contains(&format!(":{name}")));
        assert_eq!(value, &serde_json::Value::from("active"));
    }

    #[test]
    fn subquery_surfaces_callback_errors_at_construction() {
        let result = SubQuery::new(|qb| {
            qb.table("users");
            qb.to_delete_sql()
        });
        assert_eq!(result.err(), Some(SqlError::UnfilteredDelete));
    }

    #[test]
    fn union_joins_members() {
        let union = Union::distinct()
            .member(|qb| {
                qb.table("cats").column("name");
                Ok(qb.to_select_sql())
            })
            .unwrap()
            .member(|qb| {
                qb.table("dogs").column("name");
                Ok(qb.to_select_sql())
            })
            .unwrap();
        assert_eq!(
            union.to_sql(),
            "SELECT \"name\" FROM \"cats\" UNION SELECT \"name\" FROM \"dogs\""
        );
    }

    #[test]
    fn union_all_keyword() {
        let union = Union::all()
            .member(|qb| {
                qb.table("a");
                Ok(qb.to_select_sql())
            })
            .unwrap()
            .member(|qb| {
                qb.table("b");
                Ok(qb.to_select_sql())
            })
            .unwrap();
        assert_eq!(union.to_sql(), "SELECT * FROM \"a\" UNION ALL SELECT * FROM \"b\"");
    }

    #[test]
    fn union_aggregates_member_binds() {
        let union = Union::distinct()
            .member(|qb| {
                qb.table("a").filter_on("x", 1);
                Ok(qb.to_select_sql())
            })
            .unwrap()
            .member(|qb| {
                qb.table("b").filter_on("y", 2);
                Ok(qb.to_select_sql())
            })
            .unwrap();
        assert_eq!(union.bind_values().len(), 2);
    }
}
