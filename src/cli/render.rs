//! Render encoded statement trees as JSON documents

use serde::Deserialize;
use tracing::debug;

use super::CliError;
use crate::{
    ast::Statement,
    serializer::{RenderOptions, Serializer},
};

/// Options for the render command
#[derive(Debug, Clone, Default)]
pub struct RenderInput {
    /// serde JSON encoding of a [`Statement`]; `null` stands for "no statement"
    pub input: Option<String>,
    /// Output format and depth limit
    pub options: RenderOptions,
}

/// Decode a statement tree and render its document.
///
/// A JSON `null` input reaches the serializer as a missing statement and
/// fails with "no statement provided". Decoding accepts any nesting depth;
/// `options.max_depth` is the only limit on how deep a tree may be.
pub fn execute_render(request: &RenderInput) -> Result<String, CliError> {
    let text = request.input.as_deref().ok_or(CliError::NoInput)?;

    let statement = decode(text)?;
    if let Some(stmt) = &statement {
        debug!(kind = stmt.kind().label(), "decoded statement tree");
    }

    let json = Serializer::new(request.options).render(statement.as_ref())?;
    Ok(json)
}

fn decode(text: &str) -> Result<Option<Statement>, serde_json::Error> {
    let mut json = serde_json::Deserializer::from_str(text);
    json.disable_recursion_limit();
    // Grows the stack on demand while walking deeply nested input
    let stacked = serde_stacker::Deserializer::new(&mut json);
    let statement = Option::<Statement>::deserialize(stacked)?;
    json.end()?;
    Ok(statement)
}
