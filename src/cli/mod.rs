//! CLI support for sqltree-json
//!
//! Provides programmatic access to the `sqltree` commands so other tools can
//! embed them without spawning a process.

mod kinds;
mod render;

pub use kinds::{KindTable, get_kinds_overview, get_kind_table};
pub use render::{RenderInput, execute_render};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Serializer failure
    #[error("Render error: {0}")]
    Render(#[from] crate::SerializeError),

    /// The input was not a valid encoded statement tree
    #[error("Invalid statement tree: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No input provided
    #[error("No input provided. Use --input or pipe a statement tree to stdin.")]
    NoInput,

    /// Unknown label table
    #[error("Unknown kind table: '{0}'\nRun 'sqltree kinds' to see available tables.")]
    UnknownTable(String),
}
