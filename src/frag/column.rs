//! Projected columns and raw passthrough fragments.

use crate::bind::BindValues;
use crate::frag::ident::quote_segment;
use crate::frag::{Fragment, Operand, SqlPart};

/// A projected column with an optional alias: `col [AS "alias"]`.
pub struct Column {
    expr: Box<dyn Fragment>,
    alias: Option<String>,
}

impl Column {
    pub fn new(expr: impl Into<Operand>) -> Self {
        Self {
            expr: expr.into().into_ident(),
            alias: None,
        }
    }

    pub fn aliased(expr: impl Into<Operand>, alias: impl Into<String>) -> Self {
        Self {
            expr: expr.into().into_ident(),
            alias: Some(alias.into()),
        }
    }
}

impl Fragment for Column {
    fn to_sql(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} AS {}", self.expr.to_sql(), quote_segment(alias)),
            None => self.expr.to_sql(),
        }
    }

    fn bind_values(&self) -> BindValues {
        self.expr.bind_values()
    }
}

/// An escape hatch: ordered parts, space-joined.
///
/// Fragment parts are rendered and their bound values merged; string parts
/// pass through verbatim. For SQL the rest of the model cannot express.
pub struct Raw {
    parts: Vec<SqlPart>,
}

impl Raw {
    pub fn new(parts: Vec<SqlPart>) -> Self {
        Self { parts }
    }
}

impl Fragment for Raw {
    fn to_sql(&self) -> String {
        let rendered: Vec<String> = self.parts.iter().map(|part| part.to_sql()).collect();
        rendered.join(" ")
    }

    fn bind_values(&self) -> BindValues {
        let mut binds = BindValues::new();
        for part in &self.parts {
            binds.merge(part.bind_values());
        }
        binds
    }
}
