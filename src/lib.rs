pub mod ast;
pub mod cli;
pub mod document;
pub mod error;
pub mod labels;
pub mod output;
pub mod serializer;

pub use ast::{Expr, ExprKind, SelectStatement, Statement, TableRef};
pub use document::Document;
pub use error::SerializeError;
pub use output::{to_json, to_json_pretty};
pub use serializer::{RenderOptions, Serializer, render, to_document};
