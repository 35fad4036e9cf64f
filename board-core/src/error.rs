use thiserror::Error;

/// Errors surfaced by board operations.
///
/// None of these leave the board modified: every check runs before the
/// first mutation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("task not found: {0}")]
    TaskNotFound(String),

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid configuration: {0}")]
    Config(String),
}
