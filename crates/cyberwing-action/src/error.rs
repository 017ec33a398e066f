//! Error types for task management.

use uuid::Uuid;

/// Errors from task lifecycle management.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("Invalid task number: {position} (have {len} tasks)")]
    InvalidPosition { position: usize, len: usize },
    #[error("Task not found: {0}")]
    NotFound(Uuid),
    #[error("Task title must not be empty")]
    EmptyTitle,
}

/// Errors from reminder duration parsing.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    #[error("no 'remind me in <number> <unit>' phrase found")]
    NoMatch,
    #[error("invalid reminder amount: {0}")]
    InvalidAmount(String),
    #[error("unknown time unit: {0}")]
    UnknownUnit(String),
}
