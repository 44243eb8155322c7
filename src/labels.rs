//! Canonical labels for every closed enumeration in the statement tree.
//!
//! Labels are what the serializer writes into `type` and `opType` fields.
//! Each known member maps to one stable string. Raw tags outside the known
//! set (only possible for operator and join kinds decoded from external
//! input) label as their decimal value and log a warning instead of failing.

use std::borrow::Cow;

use tracing::warn;

use crate::ast::{
    ExprKind, InsertKind, JoinKind, OperatorKind, OrderDirection, StatementKind, TableRefKind,
};

impl StatementKind {
    pub const ALL: [StatementKind; 13] = [
        StatementKind::Select,
        StatementKind::Import,
        StatementKind::Insert,
        StatementKind::Update,
        StatementKind::Delete,
        StatementKind::Create,
        StatementKind::Drop,
        StatementKind::Prepare,
        StatementKind::Execute,
        StatementKind::Export,
        StatementKind::Rename,
        StatementKind::Alter,
        StatementKind::Show,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatementKind::Select => "kStmtSelect",
            StatementKind::Import => "kStmtImport",
            StatementKind::Insert => "kStmtInsert",
            StatementKind::Update => "kStmtUpdate",
            StatementKind::Delete => "kStmtDelete",
            StatementKind::Create => "kStmtCreate",
            StatementKind::Drop => "kStmtDrop",
            StatementKind::Prepare => "kStmtPrepare",
            StatementKind::Execute => "kStmtExecute",
            StatementKind::Export => "kStmtExport",
            StatementKind::Rename => "kStmtRename",
            StatementKind::Alter => "kStmtAlter",
            StatementKind::Show => "kStmtShow",
        }
    }
}

impl ExprKind {
    /// Labels of all expression kinds, in declaration order
    pub const LABELS: [&'static str; 11] = [
        Self::STAR,
        Self::COLUMN_REF,
        Self::LITERAL_INT,
        Self::LITERAL_FLOAT,
        Self::LITERAL_STRING,
        Self::PARAMETER,
        Self::FUNCTION_REF,
        Self::OPERATOR,
        Self::SELECT,
        Self::ARRAY,
        Self::ARRAY_INDEX,
    ];

    const STAR: &'static str = "kExprStar";
    const COLUMN_REF: &'static str = "kExprColumnRef";
    const LITERAL_INT: &'static str = "kExprLiteralInt";
    const LITERAL_FLOAT: &'static str = "kExprLiteralFloat";
    const LITERAL_STRING: &'static str = "kExprLiteralString";
    const PARAMETER: &'static str = "kExprParameter";
    const FUNCTION_REF: &'static str = "kExprFunctionRef";
    const OPERATOR: &'static str = "kExprOperator";
    const SELECT: &'static str = "kExprSelect";
    const ARRAY: &'static str = "kExprArray";
    const ARRAY_INDEX: &'static str = "kExprArrayIndex";

    pub fn label(&self) -> &'static str {
        match self {
            ExprKind::Star => Self::STAR,
            ExprKind::ColumnRef { .. } => Self::COLUMN_REF,
            ExprKind::LiteralInt(_) => Self::LITERAL_INT,
            ExprKind::LiteralFloat(_) => Self::LITERAL_FLOAT,
            ExprKind::LiteralString(_) => Self::LITERAL_STRING,
            ExprKind::Parameter(_) => Self::PARAMETER,
            ExprKind::FunctionRef { .. } => Self::FUNCTION_REF,
            ExprKind::Operator(_) => Self::OPERATOR,
            ExprKind::Select(_) => Self::SELECT,
            ExprKind::Array(_) => Self::ARRAY,
            ExprKind::ArrayIndex { .. } => Self::ARRAY_INDEX,
        }
    }
}

impl TableRefKind {
    /// Labels of all table reference kinds, in declaration order
    pub const LABELS: [&'static str; 4] =
        [Self::NAME, Self::SELECT, Self::JOIN, Self::CROSS_PRODUCT];

    const NAME: &'static str = "kTableName";
    const SELECT: &'static str = "kTableSelect";
    const JOIN: &'static str = "kTableJoin";
    const CROSS_PRODUCT: &'static str = "kTableCrossProduct";

    pub fn label(&self) -> &'static str {
        match self {
            TableRefKind::Name { .. } => Self::NAME,
            TableRefKind::Select(_) => Self::SELECT,
            TableRefKind::Join(_) => Self::JOIN,
            TableRefKind::CrossProduct(_) => Self::CROSS_PRODUCT,
        }
    }
}

impl OperatorKind {
    pub const ALL: [OperatorKind; 26] = [
        OperatorKind::None,
        OperatorKind::Between,
        OperatorKind::Case,
        OperatorKind::Plus,
        OperatorKind::Minus,
        OperatorKind::Asterisk,
        OperatorKind::Slash,
        OperatorKind::Percentage,
        OperatorKind::Caret,
        OperatorKind::Equals,
        OperatorKind::NotEquals,
        OperatorKind::Less,
        OperatorKind::LessEq,
        OperatorKind::Greater,
        OperatorKind::GreaterEq,
        OperatorKind::Like,
        OperatorKind::NotLike,
        OperatorKind::ILike,
        OperatorKind::And,
        OperatorKind::Or,
        OperatorKind::In,
        OperatorKind::Concat,
        OperatorKind::Not,
        OperatorKind::UnaryMinus,
        OperatorKind::IsNull,
        OperatorKind::Exists,
    ];

    pub fn label(&self) -> Cow<'static, str> {
        let label = match self {
            OperatorKind::None => "kOpNone",
            OperatorKind::Between => "kOpBetween",
            OperatorKind::Case => "kOpCase",
            OperatorKind::Plus => "kOpPlus",
            OperatorKind::Minus => "kOpMinus",
            OperatorKind::Asterisk => "kOpAsterisk",
            OperatorKind::Slash => "kOpSlash",
            OperatorKind::Percentage => "kOpPercentage",
            OperatorKind::Caret => "kOpCaret",
            OperatorKind::Equals => "kOpEquals",
            OperatorKind::NotEquals => "kOpNotEquals",
            OperatorKind::Less => "kOpLess",
            OperatorKind::LessEq => "kOpLessEq",
            OperatorKind::Greater => "kOpGreater",
            OperatorKind::GreaterEq => "kOpGreaterEq",
            OperatorKind::Like => "kOpLike",
            OperatorKind::NotLike => "kOpNotLike",
            OperatorKind::ILike => "kOpILike",
            OperatorKind::And => "kOpAnd",
            OperatorKind::Or => "kOpOr",
            OperatorKind::In => "kOpIn",
            OperatorKind::Concat => "kOpConcat",
            OperatorKind::Not => "kOpNot",
            OperatorKind::UnaryMinus => "kOpUnaryMinus",
            OperatorKind::IsNull => "kOpIsNull",
            OperatorKind::Exists => "kOpExists",
            OperatorKind::Unknown(raw) => {
                warn!(raw = *raw, "unrecognized operator type");
                return Cow::Owned(raw.to_string());
            }
        };
        Cow::Borrowed(label)
    }
}

impl JoinKind {
    pub const ALL: [JoinKind; 8] = [
        JoinKind::Inner,
        JoinKind::Outer,
        JoinKind::Left,
        JoinKind::Right,
        JoinKind::LeftOuter,
        JoinKind::RightOuter,
        JoinKind::Cross,
        JoinKind::Natural,
    ];

    pub fn label(&self) -> Cow<'static, str> {
        let label = match self {
            JoinKind::Inner => "kJoinInner",
            JoinKind::Outer => "kJoinOuter",
            JoinKind::Left => "kJoinLeft",
            JoinKind::Right => "kJoinRight",
            JoinKind::LeftOuter => "kJoinLeftOuter",
            JoinKind::RightOuter => "kJoinRightOuter",
            JoinKind::Cross => "kJoinCross",
            JoinKind::Natural => "kJoinNatural",
            JoinKind::Unknown(raw) => {
                warn!(raw = *raw, "unrecognized join type");
                return Cow::Owned(raw.to_string());
            }
        };
        Cow::Borrowed(label)
    }
}

impl OrderDirection {
    pub const ALL: [OrderDirection; 2] = [OrderDirection::Asc, OrderDirection::Desc];

    pub fn label(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "kOrderAsc",
            OrderDirection::Desc => "kOrderDesc",
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, OrderDirection::Asc)
    }
}

impl InsertKind {
    pub const ALL: [InsertKind; 2] = [InsertKind::Values, InsertKind::Select];

    pub fn label(&self) -> &'static str {
        match self {
            InsertKind::Values => "kInsertValues",
            InsertKind::Select => "kInsertSelect",
        }
    }
}
