//! # SQL Statement Tree
//!
//! This module defines the read-only statement tree that the serializer walks.
//! A SQL front end produces one [`Statement`] per parsed query; this crate
//! never mutates it and never holds on to it after a call returns.
//!
//! ## Architecture Overview
//!
//! The tree is split into focused submodules:
//!
//! - **[expressions]** - Expression nodes (literals, column references, calls, operators, subqueries)
//! - **[operators]** - Operator tags carried by operator expressions
//! - **[tables]** - Table references and join definitions
//! - **[statements]** - Top-level statements and the clauses of a `SELECT`
//!
//! ## Node Families
//!
//! Every family is a closed sum type. Fields that may be absent in SQL are
//! `Option`s, so "not written" and "written but empty" stay distinct:
//!
//! ```text
//! SELECT a FROM t            -- where_clause: None
//! INSERT INTO t VALUES ()    -- source: Values(vec![])
//! ```
//!
//! ## Join Chains
//!
//! Joins are left associative. The query
//!
//! ```text
//! SELECT * FROM a JOIN b ON ... JOIN c ON ...
//! ```
//!
//! is represented as `Join(left = Join(left = a, right = b), right = c)`.
//!
//! ## Building Trees In Code
//!
//! The node types carry small constructors so trees can be assembled without a
//! parser:
//!
//! ```
//! use sqltree_json::ast::{Expr, OperatorKind, SelectStatement, TableRef};
//!
//! // SELECT name FROM students WHERE grade > 3
//! let stmt = SelectStatement::new(vec![Expr::column("name")])
//!     .from(TableRef::named("students"))
//!     .filter(Expr::binary(OperatorKind::Greater, Expr::column("grade"), Expr::int(3)));
//!
//! assert!(stmt.where_clause.is_some());
//! ```
pub mod expressions;
pub mod operators;
pub mod statements;
pub mod tables;

pub use expressions::{Expr, ExprKind, OperatorExpr};
pub use operators::OperatorKind;
pub use statements::{
    CreateStatement, GroupByClause, ImportStatement, InsertKind, InsertSource, InsertStatement,
    LimitClause, OrderDescription, OrderDirection, SelectStatement, Statement, StatementKind,
};
pub use tables::{JoinDefinition, JoinKind, TableRef, TableRefKind};
