//! Error types for the dialogue engine.

use cyberwing_core::CyberwingError;
use cyberwing_quiz::QuizError;

/// Errors raised while building the response catalog or the engine.
///
/// Turn processing itself never fails; these only surface at startup.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("invalid pattern for topic '{topic}': {source}")]
    InvalidPattern {
        topic: String,
        #[source]
        source: regex::Error,
    },
    #[error("no responses defined for '{0}'")]
    EmptyResponses(String),
    #[error("duplicate topic key: {0}")]
    DuplicateTopic(String),
    #[error("quiz error: {0}")]
    Quiz(#[from] QuizError),
    #[error("config error: {0}")]
    Config(String),
}

impl From<CyberwingError> for ChatError {
    fn from(err: CyberwingError) -> Self {
        ChatError::Config(err.to_string())
    }
}
