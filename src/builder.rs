//! The statement assembler.
//!
//! [`QueryBuilder`] accumulates fragments into named slots and renders them
//! in a fixed clause order on demand. It has no terminal state: slots can be
//! extended and the statement re-rendered any number of times, and rendering
//! never mutates the builder.

use crate::bind::{self, BindValues, Value};
use crate::error::{SqlError, SqlResult};
use crate::frag::{Column, Fragment, Join, Operand, SqlNull, SqlPart, Where};

/// A mutable accumulator for one SELECT or DELETE statement.
///
/// Every mutator returns `&mut Self` for chaining. Each builder owns the
/// fragments added to it; nothing is shared between builder instances, so
/// concurrent use just means one builder per logical thread.
#[derive(Default)]
pub struct QueryBuilder {
    table: Option<Box<dyn Fragment>>,
    columns: Vec<Column>,
    joins: Vec<Join>,
    filters: Vec<Where>,
    order_parts: Vec<SqlPart>,
    group_parts: Vec<SqlPart>,
    limit: Option<i64>,
    offset: Option<i64>,
    binds: BindValues,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target table (bare name or fragment, e.g. a sub-statement).
    pub fn table(&mut self, table: impl Into<Operand>) -> &mut Self {
        self.table = Some(table.into().into_ident());
        self
    }

    /// Append a projected column.
    pub fn column(&mut self, column: impl Into<Operand>) -> &mut Self {
        self.columns.push(Column::new(column));
        self
    }

    /// Append several projected columns, preserving call order.
    pub fn columns<I>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        for column in columns {
            self.column(column);
        }
        self
    }

    /// Append an aliased projected column.
    pub fn column_as(&mut self, column: impl Into<Operand>, alias: impl Into<String>) -> &mut Self {
        self.columns.push(Column::aliased(column, alias));
        self
    }

    /// Append a pre-built filter clause.
    pub fn filter(&mut self, clause: Where) -> &mut Self {
        self.filters.push(clause);
        self
    }

    /// Append an equality filter: `left = right`.
    pub fn filter_on(&mut self, left: impl Into<Operand>, right: impl Into<Operand>) -> &mut Self {
        self.filter(Where::new(left, right))
    }

    /// Append a filter with an explicit operator token.
    pub fn filter_op(
        &mut self,
        left: impl Into<Operand>,
        op: impl Into<String>,
        right: impl Into<Operand>,
    ) -> &mut Self {
        self.filter(Where::with_op(left, op, right))
    }

    /// Soft-delete exclusion: `"deleted_at" IS NULL`.
    pub fn paranoid(&mut self) -> &mut Self {
        self.paranoid_column("deleted_at")
    }

    /// Soft-delete exclusion against a custom column.
    pub fn paranoid_column(&mut self, column: &str) -> &mut Self {
        self.filter(Where::with_op(column, "IS", SqlNull))
    }

    /// Append a pre-built join clause.
    pub fn join(&mut self, join: Join) -> &mut Self {
        self.joins.push(join);
        self
    }

    /// Append an ordinary inner join.
    pub fn join_on(&mut self, target: impl Into<Operand>, on: Where) -> &mut Self {
        self.join(Join::inner(target).on(on))
    }

    /// Append an ordering part. Raw strings pass through unquoted, so
    /// `created_at DESC` works without wrapping.
    pub fn order_by(&mut self, part: impl Into<SqlPart>) -> &mut Self {
        self.order_parts.push(part.into());
        self
    }

    /// Append a grouping part. Raw strings pass through unquoted.
    pub fn group_by(&mut self, part: impl Into<SqlPart>) -> &mut Self {
        self.group_parts.push(part.into());
        self
    }

    /// Set the row limit, overwriting any previous value.
    pub fn limit(&mut self, n: i64) -> &mut Self {
        self.limit = Some(n);
        self
    }

    /// Set the row offset, overwriting any previous value.
    pub fn offset(&mut self, n: i64) -> &mut Self {
        self.offset = Some(n);
        self
    }

    /// Capture a value in the builder's own bind map and return the `:name`
    /// token, for embedding in raw ordering/grouping text.
    pub fn bind(&mut self, value: impl Into<Value>) -> String {
        let name = bind::fresh_name("val");
        self.binds.insert(name.clone(), value);
        format!(":{name}")
    }

    /// Render the WHERE clause content: a single filter bare, several as one
    /// parenthesized AND group.
    fn where_sql(&self) -> Option<String> {
        let rendered: Vec<String> = self.filters.iter().map(|f| f.to_sql()).collect();
        match rendered.len() {
            0 => None,
            1 => Some(rendered.into_iter().next().unwrap()),
            _ => Some(format!("({})", rendered.join(" AND "))),
        }
    }

    /// Render the SELECT statement for the current slot contents.
    ///
    /// Clause order is fixed: columns, FROM, joins, WHERE, GROUP BY,
    /// ORDER BY, LIMIT, OFFSET; empty slots are omitted. An empty column
    /// slot renders `*`.
    pub fn to_select_sql(&self) -> String {
        let columns = if self.columns.is_empty() {
            "*".to_string()
        } else {
            let rendered: Vec<String> = self.columns.iter().map(|c| c.to_sql()).collect();
            rendered.join(", ")
        };

        let mut sql = format!("SELECT {columns}");

        if let Some(table) = &self.table {
            sql.push_str(" FROM ");
            sql.push_str(&table.to_sql());
        }

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(&join.to_sql());
        }

        if let Some(filters) = self.where_sql() {
            sql.push_str(" WHERE ");
            sql.push_str(&filters);
        }

        if !self.group_parts.is_empty() {
            let rendered: Vec<String> = self.group_parts.iter().map(|p| p.to_sql()).collect();
            sql.push_str(" GROUP BY ");
            sql.push_str(&rendered.join(", "));
        }

        if !self.order_parts.is_empty() {
            let rendered: Vec<String> = self.order_parts.iter().map(|p| p.to_sql()).collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&rendered.join(", "));
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %sql, "rendered SELECT");

        sql
    }

    /// Render the DELETE statement for the current slot contents.
    ///
    /// Fails with [`SqlError::UnfilteredDelete`] when the filter slot is
    /// empty.
    pub fn to_delete_sql(&self) -> SqlResult<String> {
        let filters = self.where_sql().ok_or(SqlError::UnfilteredDelete)?;

        let mut sql = String::from("DELETE");
        if let Some(table) = &self.table {
            sql.push_str(" FROM ");
            sql.push_str(&table.to_sql());
        }
        sql.push_str(" WHERE ");
        sql.push_str(&filters);

        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %sql, "rendered DELETE");

        Ok(sql)
    }

    /// Collect the full bound-value mapping: the builder's own map, then
    /// every fragment in the column, join, filter, ordering, and grouping
    /// slots, in that order, later entries winning.
    pub fn bind_values(&self) -> BindValues {
        let mut binds = self.binds.clone();
        for column in &self.columns {
            binds.merge(column.bind_values());
        }
        for join in &self.joins {
            binds.merge(join.bind_values());
        }
        for filter in &self.filters {
            binds.merge(filter.bind_values());
        }
        for part in &self.order_parts {
            binds.merge(part.bind_values());
        }
        for part in &self.group_parts {
            binds.merge(part.bind_values());
        }
        binds
    }
}
