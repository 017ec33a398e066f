//! Quiz state machine.
//!
//! `Idle -> Running -> Complete`, and back to `Running` on the next start.
//! Answers are only scored while running; anything submitted afterwards gets
//! a fixed "already over" reply.

use std::sync::LazyLock;

use regex::Regex;

use crate::question::{QuestionBank, QuizQuestion};

/// Reply to an answer submitted when no quiz is running.
pub const QUIZ_ALREADY_OVER: &str = "📝 The quiz is already over.";

// Leading praise that reads wrong inside miss feedback.
static PRAISE_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(correct|exactly|good job|right)[!:\s-]*").expect("Invalid praise regex")
});

/// Progress through a running quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizRun {
    pub current_index: usize,
    pub score: usize,
}

/// Final result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub score: usize,
    pub total: usize,
}

impl QuizScore {
    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    Idle,
    Running(QuizRun),
    Complete(QuizScore),
}

/// Result of submitting one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    /// Feedback line plus either the next question or the final summary.
    pub text: String,
    /// Set when this answer finished the quiz.
    pub completed: Option<QuizScore>,
}

/// Sequences a user through a question bank.
pub struct QuizEngine {
    bank: QuestionBank,
    pass_ratio: f64,
    state: QuizState,
}

impl QuizEngine {
    pub fn new(bank: QuestionBank, pass_ratio: f64) -> Self {
        Self {
            bank,
            pass_ratio,
            state: QuizState::Idle,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, QuizState::Running(_))
    }

    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    /// Begin a fresh run and return the intro plus the first question.
    ///
    /// Starting while a run is in progress discards that run.
    pub fn start(&mut self) -> String {
        self.state = QuizState::Running(QuizRun {
            current_index: 0,
            score: 0,
        });
        tracing::info!(questions = self.bank.len(), "Quiz started");

        format!(
            "Starting Cybersecurity Quiz! You will be asked {} questions.\n\n{}",
            self.bank.len(),
            self.question_text(0)
        )
    }

    /// Score an answer and move to the next question.
    pub fn submit_answer(&mut self, answer: &str) -> AnswerFeedback {
        let QuizState::Running(mut run) = self.state else {
            return AnswerFeedback {
                text: QUIZ_ALREADY_OVER.to_string(),
                completed: None,
            };
        };
        let Some(question) = self.bank.get(run.current_index) else {
            // Index ran past the bank; treat the run as finished.
            let score = QuizScore { score: run.score, total: self.bank.len() };
            self.state = QuizState::Complete(score);
            return AnswerFeedback {
                text: QUIZ_ALREADY_OVER.to_string(),
                completed: None,
            };
        };

        let correct = answer.trim().to_lowercase() == question.correct_answer.trim().to_lowercase();
        let feedback = if correct {
            run.score += 1;
            format!("✅ {}", question.explanation)
        } else {
            format!(
                "❌ Incorrect. The correct answer was '{}'.\n💡 Tip: {}",
                question.correct_answer,
                strip_praise(&question.explanation)
            )
        };
        tracing::debug!(index = run.current_index, correct, "Quiz answer scored");

        run.current_index += 1;

        if run.current_index < self.bank.len() {
            self.state = QuizState::Running(run);
            AnswerFeedback {
                text: format!("{}\n\n{}", feedback, self.question_text(run.current_index)),
                completed: None,
            }
        } else {
            let score = QuizScore {
                score: run.score,
                total: self.bank.len(),
            };
            self.state = QuizState::Complete(score);
            tracing::info!(score = score.score, total = score.total, "Quiz completed");
            AnswerFeedback {
                text: format!("{}\n\n{}", feedback, self.summary(score)),
                completed: Some(score),
            }
        }
    }

    fn question_text(&self, index: usize) -> String {
        match self.bank.get(index) {
            Some(q) => render_question(index, q),
            None => String::new(),
        }
    }

    fn summary(&self, score: QuizScore) -> String {
        let band = if score.is_perfect() {
            "🎉 Perfect score! You're a cybersecurity pro!"
        } else if score.score as f64 + 1e-9 >= score.total as f64 * self.pass_ratio {
            "👍 Great job! You have a solid understanding of cybersecurity."
        } else {
            "📘 Keep learning to stay safe online. Practice makes perfect!"
        };

        format!(
            "🏁 Quiz Complete!\nYou scored {} out of {}.\n\n{}\n\nWould you like to do something else?",
            score.score, score.total, band
        )
    }
}

fn render_question(index: usize, question: &QuizQuestion) -> String {
    let mut lines = vec![format!("Question {}: {}", index + 1, question.text)];
    if question.is_true_false {
        lines.push("Please answer 'True' or 'False'.".to_string());
    } else {
        lines.extend(question.options.iter().cloned());
    }
    lines.join("\n")
}

fn strip_praise(explanation: &str) -> String {
    PRAISE_PREFIX_RE.replace(explanation, "").trim().to_string()
}
