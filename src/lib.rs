//! # sqlbind
//!
//! A composable SQL statement builder with named bind parameters.
//!
//! Statements are assembled from expression fragments instead of string
//! concatenation. Rendering produces two things: SQL text with `:name`
//! placeholders, and a flat mapping from placeholder name to the value the
//! execution layer must bind. Caller data never lands in the text itself.
//!
//! ## Features
//!
//! - **Closed fragment family**: identifiers, captured values, casts,
//!   function calls, AND/OR groups, filter clauses, joins, CASE expressions,
//!   sub-statements, UNIONs, and a raw escape hatch
//! - **Collision-free placeholders**: names come from a monotonic counter,
//!   tagged by origin for debuggability
//! - **Recursive statements**: sub-statement fragments embed fresh builders,
//!   their bound values bubbling up through the tree
//! - **Safe defaults**: DELETE requires at least one filter
//!
//! ## Usage
//!
//! ```
//! use sqlbind::QueryBuilder;
//!
//! let mut qb = QueryBuilder::new();
//! qb.table("users")
//!     .columns(["id", "name", "email"])
//!     .paranoid()
//!     .order_by("created_at DESC")
//!     .limit(20);
//!
//! assert_eq!(
//!     qb.to_select_sql(),
//!     "SELECT \"id\", \"name\", \"email\" FROM \"users\" \
//!      WHERE \"deleted_at\" IS NULL ORDER BY created_at DESC LIMIT 20"
//! );
//! assert!(qb.bind_values().is_empty());
//! ```
//!
//! Filters capture their right-hand values under fresh placeholder names:
//!
//! ```
//! use sqlbind::QueryBuilder;
//!
//! let mut qb = QueryBuilder::new();
//! qb.table("users").filter_on("status", "active");
//!
//! let binds = qb.bind_values();
//! let (name, value) = binds.iter().next().unwrap();
//! assert_eq!(qb.to_select_sql(), format!("SELECT * FROM \"users\" WHERE \"status\" = :{name}"));
//! assert_eq!(value, &sqlbind::Value::from("active"));
//! ```

pub mod bind;
pub mod builder;
pub mod error;
pub mod frag;

pub use bind::{BindValues, Value};
pub use builder::QueryBuilder;
pub use error::{SqlError, SqlResult};
pub use frag::{
    BindValue, Case, Cast, Column, Else, Fragment, Func, Group, GroupKind, Ident, Join,
    JoinKind, Operand, Raw, SqlNull, SqlPart, SubQuery, Union, When, Where,
};

/// Create a builder targeting the given table.
pub fn query(table: impl Into<Operand>) -> QueryBuilder {
    let mut qb = QueryBuilder::new();
    qb.table(table);
    qb
}
