//! Error types for the media catalog.

use thiserror::Error;

/// Field-level resolution error.
///
/// Every variant is local to the field being resolved: the executor turns it
/// into an entry of the response `errors` list and keeps resolving siblings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("{0} not found")]
    MissingArgument(String),

    #[error("password mismatch")]
    PasswordMismatch,

    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Cannot query field \"{name}\" on type \"{root}\"")]
    UnknownField { root: String, name: String },

    #[error("Cannot query field \"{name}\" on type \"{parent}\"")]
    UnknownSubfield { parent: String, name: String },

    #[error("Field \"{0}\" of type \"Media\" must have a selection of subfields")]
    MissingSelection(String),

    #[error("Field \"{0}\" must not have a selection since its type has no subfields")]
    ScalarSelection(String),

    #[error("Fields \"{0}\" conflict: the response key is used more than once")]
    ConflictingKey(String),
}

/// Document-level error: the query text could not be turned into fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("Must provide an operation.")]
    Empty,

    #[error("Syntax Error: {0}")]
    Syntax(String),

    #[error("Syntax Error at offset {offset}: document nested too deeply (limit {limit})")]
    TooDeep { offset: usize, limit: usize },

    #[error("Unsupported operation type: {0}")]
    UnsupportedOperation(String),

    #[error("{0} are not supported")]
    Unsupported(&'static str),

    #[error("There can be only one argument named \"{name}\" on field \"{field}\"")]
    DuplicateArgument { field: String, name: String },
}

/// Result type for resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;
