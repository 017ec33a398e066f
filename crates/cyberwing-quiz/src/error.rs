//! Error types for the quiz.

use cyberwing_core::CyberwingError;

/// Errors from loading or validating a question bank.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("question bank is empty")]
    EmptyBank,
    #[error("question {index} is invalid: {reason}")]
    InvalidQuestion { index: usize, reason: String },
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<QuizError> for CyberwingError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::Io(e) => CyberwingError::Io(e),
            other => CyberwingError::Config(other.to_string()),
        }
    }
}
