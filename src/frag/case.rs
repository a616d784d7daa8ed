//! Conditional `CASE` expressions.
//!
//! Branch shapes are enforced by the types: a [`When`] only accepts a filter
//! condition and a sub-statement, an [`Else`] only a sub-statement.

use crate::bind::BindValues;
use crate::frag::ident::quote_segment;
use crate::frag::{Fragment, SubQuery, Where};

/// A `WHEN <condition> THEN <sub-statement>` branch.
pub struct When {
    condition: Where,
    then: SubQuery,
}

impl When {
    pub fn new(condition: Where, then: SubQuery) -> Self {
        Self { condition, then }
    }
}

impl Fragment for When {
    fn to_sql(&self) -> String {
        format!("WHEN {} THEN {}", self.condition.to_sql(), self.then.to_sql())
    }

    fn bind_values(&self) -> BindValues {
        let mut binds = self.condition.bind_values();
        binds.merge(self.then.bind_values());
        binds
    }
}

/// An `ELSE <sub-statement>` branch.
pub struct Else {
    then: SubQuery,
}

impl Else {
    pub fn new(then: SubQuery) -> Self {
        Self { then }
    }
}

impl Fragment for Else {
    fn to_sql(&self) -> String {
        format!("ELSE {}", self.then.to_sql())
    }

    fn bind_values(&self) -> BindValues {
        self.then.bind_values()
    }
}

/// `CASE <when>... [<else>] END AS "<name>"`.
pub struct Case {
    name: String,
    whens: Vec<When>,
    otherwise: Option<Else>,
}

impl Case {
    pub fn new(name: impl Into<String>, whens: Vec<When>) -> Self {
        Self {
            name: name.into(),
            whens,
            otherwise: None,
        }
    }

    /// Attach the `ELSE` branch.
    pub fn otherwise(mut self, branch: Else) -> Self {
        self.otherwise = Some(branch);
        self
    }
}

impl Fragment for Case {
    fn to_sql(&self) -> String {
        let mut sql = String::from("CASE");
        for when in &self.whens {
            sql.push(' ');
            sql.push_str(&when.to_sql());
        }
        if let Some(otherwise) = &self.otherwise {
            sql.push(' ');
            sql.push_str(&otherwise.to_sql());
        }
        sql.push_str(" END AS ");
        sql.push_str(&quote_segment(&self.name));
        sql
    }

    fn bind_values(&self) -> BindValues {
        let mut binds = BindValues::new();
        for when in &self.whens {
            binds.merge(when.bind_values());
        }
        if let Some(otherwise) = &self.otherwise {
            binds.merge(otherwise.bind_values());
        }
        binds
    }
}
