use serde::{Deserialize, Serialize};

use crate::ast::{Expr, SelectStatement};

/// Table reference in a `FROM` clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRef {
    pub kind: TableRefKind,

    /// Alias from `AS name`, allowed on every variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableRefKind {
    /// Plain table, optionally schema qualified (`some_schema.students`)
    Name {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        schema: Option<String>,
    },

    /// Derived table (`(SELECT ...) AS t`)
    Select(Box<SelectStatement>),

    /// Join of two table references
    Join(Box<JoinDefinition>),

    /// Comma separated list (`FROM a, b, c`)
    CrossProduct(Vec<TableRef>),
}

/// A single join.
///
/// `left` may itself be a join: chains are built left associatively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinDefinition {
    pub kind: JoinKind,
    pub left: TableRef,
    pub right: TableRef,

    /// `ON` condition; absent for cross and natural joins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Outer,
    Left,
    Right,
    LeftOuter,
    RightOuter,
    Cross,
    Natural,

    /// Raw join tag outside the known set
    #[serde(untagged)]
    Unknown(i64),
}

impl From<TableRefKind> for TableRef {
    fn from(kind: TableRefKind) -> Self {
        TableRef { kind, alias: None }
    }
}

impl TableRef {
    pub fn named(name: impl Into<String>) -> Self {
        TableRefKind::Name {
            name: name.into(),
            schema: None,
        }
        .into()
    }

    /// `schema.name`
    pub fn qualified(schema: impl Into<String>, name: impl Into<String>) -> Self {
        TableRefKind::Name {
            name: name.into(),
            schema: Some(schema.into()),
        }
        .into()
    }

    /// Derived table from a nested `SELECT`
    pub fn subquery(query: SelectStatement) -> Self {
        TableRefKind::Select(Box::new(query)).into()
    }

    /// Join `self` (the chain built so far) with `right`.
    ///
    /// Calling this repeatedly yields a left-associative chain.
    pub fn join(self, kind: JoinKind, right: TableRef, condition: Option<Expr>) -> Self {
        TableRefKind::Join(Box::new(JoinDefinition {
            kind,
            left: self,
            right,
            condition,
        }))
        .into()
    }

    pub fn cross_product(tables: Vec<TableRef>) -> Self {
        TableRefKind::CrossProduct(tables).into()
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}
