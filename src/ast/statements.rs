use serde::{Deserialize, Serialize};

use crate::ast::{Expr, TableRef};

/// Top-level SQL statement, the root of one serialization pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Select(SelectStatement),
    Insert(InsertStatement),
    Create(CreateStatement),
    Import(ImportStatement),

    /// A statement whose body is not rendered by this crate (`UPDATE`,
    /// `DROP`, ...). Only its kind is known.
    Other(StatementKind),
}

/// Every statement kind a SQL front end may hand over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementKind {
    Select,
    Import,
    Insert,
    Update,
    Delete,
    Create,
    Drop,
    Prepare,
    Execute,
    Export,
    Rename,
    Alter,
    Show,
}

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Select(_) => StatementKind::Select,
            Statement::Insert(_) => StatementKind::Insert,
            Statement::Create(_) => StatementKind::Create,
            Statement::Import(_) => StatementKind::Import,
            Statement::Other(kind) => *kind,
        }
    }
}

/// `SELECT` statement.
///
/// # Example
/// ```text
/// SELECT DISTINCT city, AVG(grade)
/// FROM students
/// WHERE grade > 1
/// GROUP BY city HAVING AVG(grade) < 4
/// ORDER BY city DESC
/// LIMIT 10 OFFSET 20
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectStatement {
    pub distinct: bool,
    pub select_list: Vec<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<TableRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupByClause>,

    /// Next query of a `UNION` chain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub union: Option<Box<SelectStatement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<OrderDescription>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<LimitClause>,
}

/// `GROUP BY columns [HAVING having]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupByClause {
    pub columns: Vec<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub having: Option<Expr>,
}

/// One `ORDER BY` item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDescription {
    pub expr: Expr,
    pub direction: OrderDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

/// `LIMIT limit [OFFSET offset]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitClause {
    pub limit: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

/// `INSERT` statement.
///
/// # Examples
/// ```text
/// INSERT INTO students (name, grade) VALUES ('Ann', 3)
/// INSERT INTO t SELECT * FROM u
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertStatement {
    pub table_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    pub source: InsertSource,
}

/// Where inserted rows come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InsertSource {
    Values(Vec<Expr>),
    Select(Box<SelectStatement>),
}

/// Tag of an [`InsertSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertKind {
    Values,
    Select,
}

impl InsertStatement {
    pub fn kind(&self) -> InsertKind {
        match self.source {
            InsertSource::Values(_) => InsertKind::Values,
            InsertSource::Select(_) => InsertKind::Select,
        }
    }
}

/// `CREATE TABLE name FROM TBL FILE 'path'`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateStatement {
    pub table_name: String,
    pub file_path: String,
}

/// `IMPORT FROM TBL FILE 'path' INTO name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportStatement {
    pub table_name: String,
    pub file_path: String,
}

impl SelectStatement {
    pub fn new(select_list: Vec<Expr>) -> Self {
        SelectStatement {
            select_list,
            ..Default::default()
        }
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn from(mut self, table: TableRef) -> Self {
        self.from = Some(table);
        self
    }

    /// Set the `WHERE` clause
    pub fn filter(mut self, condition: Expr) -> Self {
        self.where_clause = Some(condition);
        self
    }

    pub fn group_by(mut self, columns: Vec<Expr>, having: Option<Expr>) -> Self {
        self.group_by = Some(GroupByClause { columns, having });
        self
    }

    /// Chain `UNION next`
    pub fn union(mut self, next: SelectStatement) -> Self {
        self.union = Some(Box::new(next));
        self
    }

    /// Append one `ORDER BY` item
    pub fn order_by(mut self, expr: Expr, direction: OrderDirection) -> Self {
        self.order
            .get_or_insert_with(Vec::new)
            .push(OrderDescription { expr, direction });
        self
    }

    pub fn limit(mut self, limit: i64, offset: Option<i64>) -> Self {
        self.limit = Some(LimitClause { limit, offset });
        self
    }
}
