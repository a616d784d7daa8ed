//! Function calls and typed casts.

use crate::bind::BindValues;
use crate::frag::{Fragment, Operand};

/// A function call: `name(arg, ...)`.
///
/// Fragment arguments are forwarded as-is with their bound values merged in;
/// bare arguments (strings included) are captured as fresh `arg_*`
/// placeholders. Argument order is preserved in rendering and collection.
pub struct Func {
    name: String,
    args: Vec<Box<dyn Fragment>>,
}

impl Func {
    pub fn new(name: impl Into<String>, args: Vec<Operand>) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().map(|arg| arg.into_value("arg")).collect(),
        }
    }
}

impl Fragment for Func {
    fn to_sql(&self) -> String {
        let args: Vec<String> = self.args.iter().map(|arg| arg.to_sql()).collect();
        format!("{}({})", self.name, args.join(", "))
    }

    fn bind_values(&self) -> BindValues {
        let mut binds = BindValues::new();
        for arg in &self.args {
            binds.merge(arg.bind_values());
        }
        binds
    }
}

/// A typed cast: `expr::type`.
///
/// Bare names promote to identifiers; the wrapped fragment's bound values are
/// forwarded unchanged. No type compatibility checking happens here.
pub struct Cast {
    expr: Box<dyn Fragment>,
    ty: String,
}

impl Cast {
    pub fn new(expr: impl Into<Operand>, ty: impl Into<String>) -> Self {
        Self {
            expr: expr.into().into_ident(),
            ty: ty.into(),
        }
    }
}

impl Fragment for Cast {
    fn to_sql(&self) -> String {
        format!("{}::{}", self.expr.to_sql(), self.ty)
    }

    fn bind_values(&self) -> BindValues {
        self.expr.bind_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frag::Ident;

    #[test]
    fn func_with_ident_arg() {
        let f = Func::new("count", vec![Ident::new("id").into()]);
        assert_eq!(f.to_sql(), "count(\"id\")");
        assert!(f.bind_values().is_empty());
    }

    #[test]
    fn bare_args_become_placeholders_in_order() {
        let f = Func::new("coalesce", vec![1.into(), 2.into(), 3.into()]);
        let binds = f.bind_values();
        assert_eq!(binds.len(), 3);
        let names: Vec<&str> = binds.names().collect();
        assert_eq!(
            f.to_sql(),
            format!("coalesce(:{}, :{}, :{})", names[0], names[1], names[2])
        );
    }

    #[test]
    fn bare_string_arg_is_data_not_identifier() {
        let f = Func::new("lower", vec!["HELLO".into()]);
        let binds = f.bind_values();
        let (name, value) = binds.iter().next().unwrap();
        assert_eq!(f.to_sql(), format!("lower(:{name})"));
        assert_eq!(value, &serde_json::Value::from("HELLO"));
    }

    #[test]
    fn nested_call_forwards_inner_binds() {
        let inner = Func::new("lower", vec!["abc".into()]);
        let inner_binds = inner.bind_values();
        let outer = Func::new("concat", vec![inner.into(), "def".into()]);
        let binds = outer.bind_values();
        assert_eq!(binds.len(), 2);
        for (name, value) in inner_binds.iter() {
            assert_eq!(binds.get(name), Some(value));
        }
    }

    #[test]
    fn cast_promotes_bare_name() {
        let c = Cast::new("created_at", "date");
        assert_eq!(c.to_sql(), "\"created_at\"::date");
    }

    #[test]
    fn cast_forwards_wrapped_binds() {
        let c = Cast::new(crate::frag::BindValue::new("7"), "int");
        let binds = c.bind_values();
        assert_eq!(binds.len(), 1);
        let (name, _) = binds.iter().next().unwrap();
        assert_eq!(c.to_sql(), format!(":{name}::int"));
    }
}
