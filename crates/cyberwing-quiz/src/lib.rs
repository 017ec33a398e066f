//! Cybersecurity quiz for Cyberwing.
//!
//! Holds the question bank and walks a user through it one answer at a
//! time, scoring as it goes.

pub mod engine;
pub mod error;
pub mod question;

pub use engine::{AnswerFeedback, QuizEngine, QuizRun, QuizScore, QuizState};
pub use error::QuizError;
pub use question::{QuestionBank, QuizQuestion};
