//! Label table listings for the `sqltree kinds` command

use super::CliError;
use crate::ast::{
    ExprKind, InsertKind, JoinKind, OperatorKind, OrderDirection, StatementKind, TableRefKind,
};

/// Available label tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindTable {
    Statements,
    Expressions,
    Tables,
    Operators,
    Joins,
    Orders,
    Inserts,
}

impl KindTable {
    pub const ALL: [KindTable; 7] = [
        KindTable::Statements,
        KindTable::Expressions,
        KindTable::Tables,
        KindTable::Operators,
        KindTable::Joins,
        KindTable::Orders,
        KindTable::Inserts,
    ];

    /// Parse table name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "statements" | "statement" | "stmt" => Some(Self::Statements),
            "expressions" | "expression" | "expr" => Some(Self::Expressions),
            "tables" | "table" | "table_refs" => Some(Self::Tables),
            "operators" | "operator" | "ops" => Some(Self::Operators),
            "joins" | "join" => Some(Self::Joins),
            "orders" | "order" => Some(Self::Orders),
            "inserts" | "insert" => Some(Self::Inserts),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Statements => "statements",
            Self::Expressions => "expressions",
            Self::Tables => "tables",
            Self::Operators => "operators",
            Self::Joins => "joins",
            Self::Orders => "orders",
            Self::Inserts => "inserts",
        }
    }

    fn summary(&self) -> &'static str {
        match self {
            Self::Statements => "Statement kinds (select, insert, create, import are rendered)",
            Self::Expressions => "Expression kinds, written to the `type` field of expressions",
            Self::Tables => "Table reference kinds, written to the `type` field of table refs",
            Self::Operators => "Operator kinds, written to `opType`",
            Self::Joins => "Join kinds, written to `join.type`",
            Self::Orders => "Order directions (rendered as the `ascending` flag)",
            Self::Inserts => "Insert forms (VALUES list or flat-merged SELECT)",
        }
    }

    /// Every label of this table, in declaration order
    pub fn labels(&self) -> Vec<String> {
        match self {
            Self::Statements => StatementKind::ALL.iter().map(|k| k.label().to_string()).collect(),
            Self::Expressions => ExprKind::LABELS.iter().map(|l| l.to_string()).collect(),
            Self::Tables => TableRefKind::LABELS.iter().map(|l| l.to_string()).collect(),
            Self::Operators => OperatorKind::ALL.iter().map(|k| k.label().into_owned()).collect(),
            Self::Joins => JoinKind::ALL.iter().map(|k| k.label().into_owned()).collect(),
            Self::Orders => OrderDirection::ALL.iter().map(|k| k.label().to_string()).collect(),
            Self::Inserts => InsertKind::ALL.iter().map(|k| k.label().to_string()).collect(),
        }
    }
}

/// Get the overview listing every label table
pub fn get_kinds_overview() -> String {
    let mut out = String::from("SQLTREE LABEL TABLES\n\n");
    for table in KindTable::ALL {
        out.push_str(&format!("  {:<14}{}\n", table.name(), table.summary()));
    }
    out.push_str("\nRun 'sqltree kinds <table>' to list the labels of one table.\n");
    out
}

/// Get the labels of one table, one per line
pub fn get_kind_table(name: &str) -> Result<String, CliError> {
    let table =
        KindTable::from_name(name).ok_or_else(|| CliError::UnknownTable(name.to_string()))?;

    let mut out = format!("{}\n\n", table.summary());
    for label in table.labels() {
        out.push_str("  ");
        out.push_str(&label);
        out.push('\n');
    }
    Ok(out)
}
