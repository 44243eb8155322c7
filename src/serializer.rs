//! Statement tree to JSON document serialization.
//!
//! One procedure per node family, each producing the document fragment for
//! its node and recursing into children. Field names are stable:
//!
//! - statements: `selectDistinct`, `selectList`, `fromTable`, `whereClause`,
//!   `groupBy`, `unionSelect`, `order`, `limit`, `tableName`, `columns`,
//!   `values`, `filePath`
//! - expressions: `type`, then kind-specific fields (`name`, `table`, `ival`,
//!   `fval`, `distinct`, `exprList`, `select`, `opType`, `expr`, `expr2`),
//!   then `alias`
//! - table references: `type`, then `name`/`schema`, `select`, `join`
//!   (`type`, `left`, `right`, `condition`) or `table`, then `alias`
//!
//! Optional parts of the tree that are absent are left out of the document.
//! The one exception is an absent expression where an expression is expected
//! (a join without `ON`), which renders as `null`.

use tracing::{debug, trace};

use crate::{
    ast::{
        CreateStatement, Expr, ExprKind, ImportStatement, InsertSource, InsertStatement,
        JoinDefinition, OperatorExpr, SelectStatement, Statement, TableRef, TableRefKind,
    },
    document::{self, Document, Object},
    error::SerializeError,
    output::{to_json, to_json_pretty},
};

/// Default nesting limit, counted in expressions, table references and
/// statements along one path from the root.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Rendering configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Indented output instead of a single line
    pub pretty: bool,
    /// Deepest nesting accepted before failing with [`SerializeError::TooDeep`]
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            pretty: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Serializes statement trees into documents and JSON text.
///
/// The serializer holds only its options, so one instance can be shared
/// freely and reused for any number of statements.
///
/// # Examples
///
/// ```
/// use sqltree_json::ast::{Expr, SelectStatement, Statement, TableRef};
/// use sqltree_json::serializer::Serializer;
///
/// let stmt = Statement::Select(
///     SelectStatement::new(vec![Expr::star()]).from(TableRef::named("students")),
/// );
///
/// let json = Serializer::default().render(Some(&stmt)).unwrap();
/// assert_eq!(
///     json,
///     r#"{"selectDistinct":false,"selectList":[{"type":"kExprStar","exp":"*"}],"fromTable":{"type":"kTableName","name":"students"}}"#
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Serializer {
    options: RenderOptions,
}

impl Serializer {
    pub fn new(options: RenderOptions) -> Self {
        Serializer { options }
    }

    /// Compact or pretty output with the default depth limit
    pub fn pretty(pretty: bool) -> Self {
        Serializer::new(RenderOptions {
            pretty,
            ..RenderOptions::default()
        })
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Render a statement to JSON text.
    ///
    /// `None` is a caller error and fails with [`SerializeError::NoStatement`].
    /// Statement kinds without a serializer render as `{}`.
    pub fn render(&self, statement: Option<&Statement>) -> Result<String, SerializeError> {
        let statement = statement.ok_or(SerializeError::NoStatement)?;
        let doc = self.to_document(statement)?;
        if self.options.pretty {
            Ok(to_json_pretty(&doc))
        } else {
            Ok(to_json(&doc))
        }
    }

    /// Build the document for a statement without rendering it.
    pub fn to_document(&self, statement: &Statement) -> Result<Document, SerializeError> {
        let mut root = Object::new();
        match statement {
            Statement::Select(stmt) => self.select_into(stmt, &mut root, 0)?,
            Statement::Insert(stmt) => self.insert_into(stmt, &mut root, 0)?,
            Statement::Create(stmt) => self.create_into(stmt, &mut root),
            Statement::Import(stmt) => self.import_into(stmt, &mut root),
            Statement::Other(kind) => {
                debug!(
                    kind = kind.label(),
                    "no serializer for statement kind, rendering empty document"
                );
            }
        }
        Ok(Document::Object(root))
    }

    fn descend(&self, depth: usize) -> Result<usize, SerializeError> {
        let next = depth + 1;
        if next > self.options.max_depth {
            debug!(limit = self.options.max_depth, "statement tree exceeds depth limit");
            return Err(SerializeError::TooDeep {
                limit: self.options.max_depth,
            });
        }
        Ok(next)
    }

    // Statements

    /// Write the fields of a `SELECT` into `root`.
    ///
    /// Writing into a caller-provided object lets `INSERT ... SELECT` merge
    /// the select fields flat into the insert document. `depth` is the
    /// nesting already used above this node; pass `0` for a root.
    pub fn select_into(
        &self,
        stmt: &SelectStatement,
        root: &mut Object,
        depth: usize,
    ) -> Result<(), SerializeError> {
        let depth = self.descend(depth)?;
        trace!(depth, "serializing select");

        root.insert("selectDistinct".into(), stmt.distinct.into());
        root.insert("selectList".into(), self.expr_list(&stmt.select_list, depth)?);

        if let Some(from) = &stmt.from {
            root.insert("fromTable".into(), self.table_ref(from, depth)?);
        }

        if let Some(condition) = &stmt.where_clause {
            root.insert("whereClause".into(), self.expr(Some(condition), depth)?);
        }

        if let Some(group_by) = &stmt.group_by {
            let mut group = Object::new();
            group.insert("columns".into(), self.expr_list(&group_by.columns, depth)?);
            if let Some(having) = &group_by.having {
                group.insert("having".into(), self.expr(Some(having), depth)?);
            }
            root.insert("groupBy".into(), group.into());
        }

        if let Some(next) = &stmt.union {
            let mut union = Object::new();
            self.select_into(next, &mut union, depth)?;
            root.insert("unionSelect".into(), union.into());
        }

        if let Some(order) = &stmt.order {
            let mut items = Vec::with_capacity(order.len());
            for description in order {
                let mut item = self.expr_object(&description.expr, depth)?;
                item.insert(
                    "ascending".into(),
                    description.direction.is_ascending().into(),
                );
                items.push(Document::Object(item));
            }
            root.insert("order".into(), items.into());
        }

        if let Some(limit) = &stmt.limit {
            root.insert("limit".into(), limit.limit.into());
            if let Some(offset) = limit.offset {
                root.insert("offset".into(), offset.into());
            }
        }

        Ok(())
    }

    fn insert_into(
        &self,
        stmt: &InsertStatement,
        root: &mut Object,
        depth: usize,
    ) -> Result<(), SerializeError> {
        root.insert("tableName".into(), stmt.table_name.as_str().into());

        if let Some(columns) = &stmt.columns {
            root.insert("columns".into(), columns.as_slice().into());
        }

        trace!(kind = stmt.kind().label(), "serializing insert");
        match &stmt.source {
            InsertSource::Values(values) => {
                root.insert("values".into(), self.expr_list(values, depth)?);
            }
            InsertSource::Select(select) => self.select_into(select, root, depth)?,
        }

        Ok(())
    }

    fn create_into(&self, stmt: &CreateStatement, root: &mut Object) {
        root.insert("tableName".into(), stmt.table_name.as_str().into());
        root.insert("filePath".into(), stmt.file_path.as_str().into());
    }

    fn import_into(&self, stmt: &ImportStatement, root: &mut Object) {
        root.insert("tableName".into(), stmt.table_name.as_str().into());
        root.insert("filePath".into(), stmt.file_path.as_str().into());
    }

    // Table references

    /// Document for one table reference.
    pub fn table_ref(&self, table: &TableRef, depth: usize) -> Result<Document, SerializeError> {
        let depth = self.descend(depth)?;
        let mut root = Object::new();
        root.insert("type".into(), table.kind.label().into());

        match &table.kind {
            TableRefKind::Name { name, schema } => {
                root.insert("name".into(), name.as_str().into());
                if let Some(schema) = schema {
                    root.insert("schema".into(), schema.as_str().into());
                }
            }
            TableRefKind::Select(select) => {
                let mut nested = Object::new();
                self.select_into(select, &mut nested, depth)?;
                root.insert("select".into(), nested.into());
            }
            TableRefKind::Join(join) => {
                root.insert("join".into(), self.join(join, depth)?);
            }
            TableRefKind::CrossProduct(tables) => {
                let mut list = Vec::with_capacity(tables.len());
                for t in tables {
                    list.push(self.table_ref(t, depth)?);
                }
                root.insert("table".into(), list.into());
            }
        }

        if let Some(alias) = &table.alias {
            root.insert("alias".into(), alias.as_str().into());
        }
        Ok(root.into())
    }

    fn join(&self, join: &JoinDefinition, depth: usize) -> Result<Document, SerializeError> {
        let mut root = Object::new();
        root.insert("type".into(), join.kind.label().into());
        // Plain structural recursion keeps left-associative chains nested
        root.insert("left".into(), self.table_ref(&join.left, depth)?);
        root.insert("right".into(), self.table_ref(&join.right, depth)?);
        root.insert("condition".into(), self.expr(join.condition.as_ref(), depth)?);
        Ok(root.into())
    }

    // Expressions

    /// Document for an expression; an absent expression is `null`.
    pub fn expr(&self, expr: Option<&Expr>, depth: usize) -> Result<Document, SerializeError> {
        match expr {
            Some(expr) => Ok(self.expr_object(expr, depth)?.into()),
            None => Ok(Document::Null),
        }
    }

    fn expr_object(&self, expr: &Expr, depth: usize) -> Result<Object, SerializeError> {
        let depth = self.descend(depth)?;

        let mut root = Object::new();
        root.insert("type".into(), expr.kind.label().into());

        match &expr.kind {
            ExprKind::Star => {
                root.insert("exp".into(), "*".into());
            }
            ExprKind::ColumnRef { name, table } => {
                root.insert("name".into(), name.as_str().into());
                if let Some(table) = table {
                    root.insert("table".into(), table.as_str().into());
                }
            }
            ExprKind::LiteralInt(value) => {
                root.insert("ival".into(), (*value).into());
            }
            ExprKind::LiteralFloat(value) => {
                root.insert("fval".into(), document::float(*value));
            }
            ExprKind::LiteralString(value) => {
                root.insert("name".into(), value.as_str().into());
            }
            ExprKind::Parameter(ordinal) => {
                root.insert("ival".into(), (*ordinal).into());
            }
            ExprKind::FunctionRef {
                name,
                distinct,
                args,
            } => {
                root.insert("distinct".into(), (*distinct).into());
                root.insert("name".into(), name.as_str().into());
                root.insert("exprList".into(), self.expr_list(args, depth)?);
            }
            ExprKind::Operator(op) => self.operator_into(op, &mut root, depth)?,
            ExprKind::Select(select) => {
                let mut nested = Object::new();
                self.select_into(select, &mut nested, depth)?;
                root.insert("select".into(), nested.into());
            }
            ExprKind::Array(elements) => {
                root.insert("exprList".into(), self.expr_list(elements, depth)?);
            }
            ExprKind::ArrayIndex { index, .. } => {
                // The indexed array expression is not part of the document
                root.insert("ival".into(), (*index).into());
            }
        }

        if let Some(alias) = &expr.alias {
            root.insert("alias".into(), alias.as_str().into());
        }
        Ok(root)
    }

    /// Operator fields: `opType`, then `expr`, then `expr2` or `exprList`.
    ///
    /// The binary slots and the operand list share one field scheme across
    /// every operator; `exprList` is only written when `right` is absent.
    fn operator_into(
        &self,
        op: &OperatorExpr,
        root: &mut Object,
        depth: usize,
    ) -> Result<(), SerializeError> {
        root.insert("opType".into(), op.op.label().into());

        if let Some(left) = &op.left {
            root.insert("expr".into(), self.expr(Some(left), depth)?);
        }

        if let Some(right) = &op.right {
            root.insert("expr2".into(), self.expr(Some(right), depth)?);
        } else if let Some(operands) = &op.operands {
            root.insert("exprList".into(), self.expr_list(operands, depth)?);
        }

        Ok(())
    }

    fn expr_list(&self, exprs: &[Expr], depth: usize) -> Result<Document, SerializeError> {
        let mut list = Vec::with_capacity(exprs.len());
        for expr in exprs {
            list.push(self.expr(Some(expr), depth)?);
        }
        Ok(Document::Array(list))
    }
}

// Convenience functions

/// Render a statement to compact (`pretty = false`) or indented JSON text.
pub fn render(statement: &Statement, pretty: bool) -> Result<String, SerializeError> {
    Serializer::pretty(pretty).render(Some(statement))
}

/// Build the document for a statement with default options.
pub fn to_document(statement: &Statement) -> Result<Document, SerializeError> {
    Serializer::default().to_document(statement)
}
