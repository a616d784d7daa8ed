//! SQL identifier fragments.
//!
//! An [`Ident`] is a dotted name (`schema.table.column`). Each dot-separated
//! segment renders double-quoted with embedded quotes escaped as `""`; the
//! wildcard segment `*` is never quoted. Identity is trusted from the caller,
//! there is no schema awareness here.

use crate::bind::BindValues;
use crate::frag::Fragment;

/// Quote a single identifier segment.
pub(crate) fn quote_segment(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Wildcard,
    Name(String),
}

/// A column, table, or schema name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    segments: Vec<Segment>,
}

impl Ident {
    /// Wrap a dotted name. A bare `*` short-circuits segment processing and
    /// renders as-is; `t.*` quotes the prefix and leaves the wildcard bare.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == "*" {
            return Self {
                segments: vec![Segment::Wildcard],
            };
        }
        let segments = name
            .split('.')
            .map(|part| {
                if part == "*" {
                    Segment::Wildcard
                } else {
                    Segment::Name(part.to_string())
                }
            })
            .collect();
        Self { segments }
    }
}

impl Fragment for Ident {
    fn to_sql(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            match segment {
                Segment::Wildcard => out.push('*'),
                Segment::Name(name) => out.push_str(&quote_segment(name)),
            }
        }
        out
    }

    fn bind_values(&self) -> BindValues {
        BindValues::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_name_is_quoted() {
        assert_eq!(Ident::new("users").to_sql(), "\"users\"");
    }

    #[test]
    fn dotted_name_quotes_each_segment() {
        assert_eq!(Ident::new("public.users").to_sql(), "\"public\".\"users\"");
        assert_eq!(
            Ident::new("s.t.c").to_sql(),
            "\"s\".\"t\".\"c\""
        );
    }

    #[test]
    fn bare_wildcard_is_untouched() {
        assert_eq!(Ident::new("*").to_sql(), "*");
    }

    #[test]
    fn wildcard_segment_stays_bare() {
        assert_eq!(Ident::new("t.*").to_sql(), "\"t\".*");
    }

    #[test]
    fn embedded_quote_is_escaped() {
        assert_eq!(Ident::new("we\"ird").to_sql(), "\"we\"\"ird\"");
    }

    #[test]
    fn contributes_no_bind_values() {
        assert!(Ident::new("users").bind_values().is_empty());
    }
}
