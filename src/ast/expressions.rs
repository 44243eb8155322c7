use serde::{Deserialize, Serialize};

use crate::ast::{OperatorKind, SelectStatement};

/// Expression node.
///
/// Any expression may carry a display alias (`expr AS alias`), whatever its
/// kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    /// What kind of expression this is, with its payload
    pub kind: ExprKind,

    /// Display alias from `AS name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// The payload of an expression, one variant per expression kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExprKind {
    /// All columns (`*`)
    Star,

    /// Column reference, optionally qualified by a table
    ///
    /// # Examples
    /// ```text
    /// grade
    /// students.grade
    /// ```
    ColumnRef {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        table: Option<String>,
    },

    /// Integer literal
    LiteralInt(i64),

    /// Floating point literal
    LiteralFloat(f64),

    /// String literal
    ///
    /// # Example
    /// ```text
    /// 'foo'
    /// ```
    LiteralString(String),

    /// Bound parameter (`?`), holding its ordinal
    Parameter(i64),

    /// Function call
    ///
    /// # Examples
    /// ```text
    /// MAX(b)
    /// COUNT(DISTINCT grade)
    /// ```
    FunctionRef {
        name: String,
        distinct: bool,
        args: Vec<Expr>,
    },

    /// Operator application
    Operator(OperatorExpr),

    /// Scalar subquery
    ///
    /// # Example
    /// ```text
    /// (SELECT MIN(v) FROM tt)
    /// ```
    Select(Box<SelectStatement>),

    /// Array literal
    ///
    /// # Example
    /// ```text
    /// ARRAY[1, 2, 3]
    /// ```
    Array(Vec<Expr>),

    /// Array subscript (`arr[2]`)
    ArrayIndex {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        array: Option<Box<Expr>>,
        index: i64,
    },
}

/// Operator expression.
///
/// Binary operators fill `left` and `right`. Unary operators fill `left`
/// only. `BETWEEN`, `CASE` and `IN` put their first operand in `left` and the
/// rest in `operands`, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorExpr {
    pub op: OperatorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<Expr>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<Expr>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operands: Option<Vec<Expr>>,
}

impl From<ExprKind> for Expr {
    fn from(kind: ExprKind) -> Self {
        Expr { kind, alias: None }
    }
}

impl Expr {
    /// `*`
    pub fn star() -> Self {
        ExprKind::Star.into()
    }

    /// Unqualified column reference
    pub fn column(name: impl Into<String>) -> Self {
        ExprKind::ColumnRef {
            name: name.into(),
            table: None,
        }
        .into()
    }

    /// Column reference qualified by a table (`table.name`)
    pub fn qualified_column(table: impl Into<String>, name: impl Into<String>) -> Self {
        ExprKind::ColumnRef {
            name: name.into(),
            table: Some(table.into()),
        }
        .into()
    }

    pub fn int(value: i64) -> Self {
        ExprKind::LiteralInt(value).into()
    }

    pub fn float(value: f64) -> Self {
        ExprKind::LiteralFloat(value).into()
    }

    pub fn string(value: impl Into<String>) -> Self {
        ExprKind::LiteralString(value.into()).into()
    }

    pub fn parameter(ordinal: i64) -> Self {
        ExprKind::Parameter(ordinal).into()
    }

    /// Function call without `DISTINCT`
    pub fn function(name: impl Into<String>, args: Vec<Expr>) -> Self {
        ExprKind::FunctionRef {
            name: name.into(),
            distinct: false,
            args,
        }
        .into()
    }

    /// Function call over distinct values, e.g. `COUNT(DISTINCT grade)`
    pub fn distinct_function(name: impl Into<String>, args: Vec<Expr>) -> Self {
        ExprKind::FunctionRef {
            name: name.into(),
            distinct: true,
            args,
        }
        .into()
    }

    /// Binary operator application (`left op right`)
    pub fn binary(op: OperatorKind, left: Expr, right: Expr) -> Self {
        ExprKind::Operator(OperatorExpr {
            op,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
            operands: None,
        })
        .into()
    }

    /// Unary operator application (`NOT x`, `-x`, `x IS NULL`, `EXISTS (...)`)
    pub fn unary(op: OperatorKind, operand: Expr) -> Self {
        ExprKind::Operator(OperatorExpr {
            op,
            left: Some(Box::new(operand)),
            right: None,
            operands: None,
        })
        .into()
    }

    /// Operator with a leading operand followed by an ordered operand list
    pub fn variadic(op: OperatorKind, first: Option<Expr>, operands: Vec<Expr>) -> Self {
        ExprKind::Operator(OperatorExpr {
            op,
            left: first.map(Box::new),
            right: None,
            operands: Some(operands),
        })
        .into()
    }

    /// `expr BETWEEN low AND high`
    pub fn between(expr: Expr, low: Expr, high: Expr) -> Self {
        Self::variadic(OperatorKind::Between, Some(expr), vec![low, high])
    }

    /// `CASE WHEN condition THEN then ELSE otherwise END`
    pub fn case(condition: Expr, then: Expr, otherwise: Expr) -> Self {
        Self::variadic(OperatorKind::Case, Some(condition), vec![then, otherwise])
    }

    /// `expr IN (candidates...)`
    pub fn in_list(expr: Expr, candidates: Vec<Expr>) -> Self {
        Self::variadic(OperatorKind::In, Some(expr), candidates)
    }

    /// `EXISTS (query)`
    pub fn exists(query: SelectStatement) -> Self {
        Self::unary(OperatorKind::Exists, Self::subquery(query))
    }

    /// Scalar subquery `(query)`
    pub fn subquery(query: SelectStatement) -> Self {
        ExprKind::Select(Box::new(query)).into()
    }

    pub fn array(elements: Vec<Expr>) -> Self {
        ExprKind::Array(elements).into()
    }

    /// `array[index]`
    pub fn array_index(array: Expr, index: i64) -> Self {
        ExprKind::ArrayIndex {
            array: Some(Box::new(array)),
            index,
        }
        .into()
    }

    /// Attach a display alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}
