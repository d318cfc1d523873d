use thiserror::Error;

/// A string that could not be consumed by the semantic version grammar.
///
/// `offset` is the 0-based byte offset of the first character the grammar
/// could not consume (the length of the longest valid prefix).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid version '{input}' at offset {offset}")]
pub struct ParseError {
    pub input: String,
    pub offset: usize,
}

impl ParseError {
    pub fn new(input: impl Into<String>, offset: usize) -> Self {
        ParseError {
            input: input.into(),
            offset,
        }
    }
}

/// Unified error type for git-flux operations
#[derive(Error, Debug)]
pub enum FluxError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid ref construction: {0}")]
    Construction(String),

    #[error("Cannot determine version: {0}")]
    Selection(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-flux
pub type Result<T> = std::result::Result<T, FluxError>;

impl FluxError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        FluxError::Config(msg.into())
    }

    /// Create a construction error with context
    pub fn construction(msg: impl Into<String>) -> Self {
        FluxError::Construction(msg.into())
    }

    /// Create a selection error with context
    pub fn selection(msg: impl Into<String>) -> Self {
        FluxError::Selection(msg.into())
    }
}
