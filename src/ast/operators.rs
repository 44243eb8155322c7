use serde::{Deserialize, Serialize};

/// Operator carried by an operator expression.
///
/// Binary operators use the `left`/`right` slots of
/// [`OperatorExpr`](crate::ast::OperatorExpr); `Between`, `Case` and `In`
/// keep their extra operands in the ordered operand list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatorKind {
    /// No operator (parenthesised expression placeholder)
    None,

    // Ternary and variadic
    /// `x BETWEEN lo AND hi`
    Between,
    /// `CASE WHEN cond THEN a ELSE b END`
    Case,

    // Arithmetic
    /// Addition (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Asterisk,
    /// Division (`/`)
    Slash,
    /// Modulo (`%`)
    Percentage,
    /// Exponent (`^`)
    Caret,

    // Comparison
    /// Equal (`=`)
    Equals,
    /// Not equal (`<>` or `!=`)
    NotEquals,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEq,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEq,
    /// `LIKE`
    Like,
    /// `NOT LIKE`
    NotLike,
    /// Case-insensitive `ILIKE`
    ILike,

    // Logical
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `IN (...)` or `IN (SELECT ...)`
    In,
    /// String concatenation (`||`)
    Concat,

    // Unary
    /// `NOT`
    Not,
    /// Negation (`-x`)
    UnaryMinus,
    /// `IS NULL`
    IsNull,
    /// `EXISTS (SELECT ...)`
    Exists,

    /// Raw operator tag outside the known set.
    ///
    /// Only produced when decoding a tree from an external encoding.
    #[serde(untagged)]
    Unknown(i64),
}
