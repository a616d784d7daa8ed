//! The fragment family: composable, renderable SQL expression nodes.
//!
//! Every node implements [`Fragment`]: it can render itself to SQL text
//! (possibly containing `:name` placeholders) and report the bound values
//! those placeholders stand for. Fragments are immutable once constructed;
//! all validation and value capture happens in the constructors, so `to_sql`
//! and `bind_values` are pure and repeatable.

mod case;
mod column;
mod cond;
mod func;
mod ident;
mod join;
mod sub;
mod value;

pub use case::{Case, Else, When};
pub use column::{Column, Raw};
pub use cond::{Group, GroupKind, Where};
pub use func::{Cast, Func};
pub use ident::Ident;
pub use join::{Join, JoinKind};
pub use sub::{SubQuery, Union};
pub use value::{BindValue, SqlNull};

use crate::bind::{BindValues, Value};

/// A renderable SQL fragment.
pub trait Fragment {
    /// Render this fragment to SQL text.
    fn to_sql(&self) -> String;

    /// Collect the bound values this fragment (and everything it wraps)
    /// contributes, keyed by placeholder name.
    fn bind_values(&self) -> BindValues;
}

impl Fragment for Box<dyn Fragment> {
    fn to_sql(&self) -> String {
        (**self).to_sql()
    }

    fn bind_values(&self) -> BindValues {
        (**self).bind_values()
    }
}

/// An argument position that accepts a fragment or a bare value.
///
/// Bare strings name schema objects and promote to [`Ident`] in identifier
/// positions; any other bare value is data and promotes to a fresh
/// [`BindValue`] placeholder. Positions that only ever take data (filter
/// right sides, function arguments) promote bare strings to placeholders
/// as well.
pub enum Operand {
    /// An already-built fragment, forwarded as-is.
    Fragment(Box<dyn Fragment>),
    /// A bare string, assumed to name a column/table.
    Name(String),
    /// A bare non-string value, assumed to be data.
    Value(Value),
}

impl Operand {
    /// Promote for an identifier position: names become [`Ident`], values
    /// become placeholders.
    pub(crate) fn into_ident(self) -> Box<dyn Fragment> {
        match self {
            Operand::Fragment(frag) => frag,
            Operand::Name(name) => Box::new(Ident::new(name)),
            Operand::Value(value) => Box::new(BindValue::new(value)),
        }
    }

    /// Promote for a data position: everything bare becomes a placeholder
    /// tagged with `tag`.
    pub(crate) fn into_value(self, tag: &str) -> Box<dyn Fragment> {
        match self {
            Operand::Fragment(frag) => frag,
            Operand::Name(name) => Box::new(BindValue::tagged(tag, name)),
            Operand::Value(value) => Box::new(BindValue::tagged(tag, value)),
        }
    }
}

impl From<&str> for Operand {
    fn from(name: &str) -> Self {
        Operand::Name(name.to_string())
    }
}

impl From<String> for Operand {
    fn from(name: String) -> Self {
        Operand::Name(name)
    }
}

impl From<Box<dyn Fragment>> for Operand {
    fn from(frag: Box<dyn Fragment>) -> Self {
        Operand::Fragment(frag)
    }
}

macro_rules! impl_operand_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Value(Value::from(value))
                }
            }
        )+
    };
}

impl_operand_value!(i32, i64, u32, u64, f64, bool, Value);

/// A list element that is either a fragment or verbatim SQL text.
///
/// Used wherever the model deliberately lets strings through unquoted: raw
/// passthrough fragments, logical groups, and the assembler's ordering and
/// grouping slots (so `created_at DESC` works without wrapping).
pub enum SqlPart {
    /// A fragment, rendered and its bound values merged in.
    Fragment(Box<dyn Fragment>),
    /// Opaque text, passed through verbatim.
    Text(String),
}

impl SqlPart {
    pub fn to_sql(&self) -> String {
        match self {
            SqlPart::Fragment(frag) => frag.to_sql(),
            SqlPart::Text(text) => text.clone(),
        }
    }

    pub fn bind_values(&self) -> BindValues {
        match self {
            SqlPart::Fragment(frag) => frag.bind_values(),
            SqlPart::Text(_) => BindValues::new(),
        }
    }
}

impl From<&str> for SqlPart {
    fn from(text: &str) -> Self {
        SqlPart::Text(text.to_string())
    }
}

impl From<String> for SqlPart {
    fn from(text: String) -> Self {
        SqlPart::Text(text)
    }
}

impl From<Box<dyn Fragment>> for SqlPart {
    fn from(frag: Box<dyn Fragment>) -> Self {
        SqlPart::Fragment(frag)
    }
}

macro_rules! impl_from_fragment {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Operand {
                fn from(frag: $ty) -> Self {
                    Operand::Fragment(Box::new(frag))
                }
            }

            impl From<$ty> for SqlPart {
                fn from(frag: $ty) -> Self {
                    SqlPart::Fragment(Box::new(frag))
                }
            }
        )+
    };
}

impl_from_fragment!(
    Ident, BindValue, SqlNull, Cast, Func, Group, Where, Column, Raw, SubQuery, Union, Case,
);
