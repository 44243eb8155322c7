use thiserror::Error;

/// Errors that stop a serialization pass.
///
/// Malformed enum tags and statement kinds without a serializer are not
/// errors: they degrade to a raw label or an empty document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerializeError {
    /// The caller handed over no statement at all
    #[error("no statement provided")]
    NoStatement,

    /// Nesting went past the configured depth limit
    #[error("statement tree too deep: nesting exceeds {limit} levels")]
    TooDeep { limit: usize },
}
