//! Quiz questions and the question bank.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// One quiz question.
///
/// Multiple-choice answers are the option letter (`"C"`); true/false answers
/// are `"True"` or `"False"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    #[serde(default)]
    pub is_true_false: bool,
}

impl QuizQuestion {
    pub fn multiple_choice(text: &str, options: &[&str], correct: &str, explanation: &str) -> Self {
        Self {
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct.to_string(),
            explanation: explanation.to_string(),
            is_true_false: false,
        }
    }

    pub fn true_false(text: &str, correct: bool, explanation: &str) -> Self {
        Self {
            text: text.to_string(),
            options: Vec::new(),
            correct_answer: if correct { "True" } else { "False" }.to_string(),
            explanation: explanation.to_string(),
            is_true_false: true,
        }
    }

    fn validate(&self, index: usize) -> Result<(), QuizError> {
        let invalid = |reason: String| QuizError::InvalidQuestion { index, reason };

        if self.text.trim().is_empty() {
            return Err(invalid("question text is empty".to_string()));
        }
        let answer = self.correct_answer.trim();
        if answer.is_empty() {
            return Err(invalid("correct answer is empty".to_string()));
        }

        if self.is_true_false {
            if !answer.eq_ignore_ascii_case("true") && !answer.eq_ignore_ascii_case("false") {
                return Err(invalid(format!(
                    "true/false answer must be 'True' or 'False', got '{}'",
                    answer
                )));
            }
            return Ok(());
        }

        if self.options.is_empty() {
            return Err(invalid("multiple-choice question has no options".to_string()));
        }
        let prefix = format!("{})", answer.to_uppercase());
        if !self
            .options
            .iter()
            .any(|o| o.trim_start().to_uppercase().starts_with(&prefix))
        {
            return Err(invalid(format!(
                "answer '{}' is not one of the options",
                answer
            )));
        }
        Ok(())
    }
}

/// An ordered, validated, non-empty list of questions.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<QuizQuestion>,
}

impl QuestionBank {
    /// Build a bank, validating every question.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        for (i, q) in questions.iter().enumerate() {
            q.validate(i + 1)?;
        }
        Ok(Self { questions })
    }

    /// Parse a JSON array of questions.
    pub fn from_json_str(json: &str) -> Result<Self, QuizError> {
        let questions: Vec<QuizQuestion> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// Load a JSON question bank from disk.
    pub fn load(path: &Path) -> Result<Self, QuizError> {
        let content = std::fs::read_to_string(path)?;
        let bank = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            questions = bank.len(),
            "Question bank loaded"
        );
        Ok(bank)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// The built-in cybersecurity question bank.
    pub fn cybersecurity() -> Self {
        Self {
            questions: vec![
                QuizQuestion::multiple_choice(
                    "What should you do if you receive an email asking for your password?",
                    &[
                        "A) Reply with your password",
                        "B) Delete the email",
                        "C) Report the email as phishing",
                        "D) Ignore it",
                    ],
                    "C",
                    "Correct! Reporting phishing emails helps prevent scams.",
                ),
                QuizQuestion::true_false(
                    "True or False: Using the same password for multiple sites is safe.",
                    false,
                    "Correct! Using the same password across sites increases your security risk.",
                ),
                QuizQuestion::multiple_choice(
                    "What is phishing?",
                    &[
                        "A) A type of social engineering attack",
                        "B) A secure way to share passwords",
                        "C) A method of encrypting data",
                        "D) None of the above",
                    ],
                    "A",
                    "Right! Phishing is a social engineering technique to trick people into revealing sensitive info.",
                ),
                QuizQuestion::true_false(
                    "True or False: You should install software updates promptly.",
                    true,
                    "Correct! Updates often patch security vulnerabilities.",
                ),
                QuizQuestion::multiple_choice(
                    "What does two-factor authentication (2FA) provide?",
                    &[
                        "A) Faster login",
                        "B) An extra layer of security",
                        "C) Password recovery",
                        "D) Automatic updates",
                    ],
                    "B",
                    "Correct! 2FA adds an extra step to verify your identity, increasing security.",
                ),
                QuizQuestion::multiple_choice(
                    "Which of the following is a strong password?",
                    &["A) Password123", "B) qwerty", "C) 123456", "D) P@55w0rd!2025"],
                    "D",
                    "Right! Strong passwords include letters, numbers, and special characters.",
                ),
                QuizQuestion::multiple_choice(
                    "What should you do before clicking on a link in an email?",
                    &[
                        "A) Check the sender's email address",
                        "B) Click immediately",
                        "C) Forward to friends",
                        "D) Reply asking for verification",
                    ],
                    "A",
                    "Correct! Always verify the sender to avoid phishing scams.",
                ),
                QuizQuestion::multiple_choice(
                    "What is the purpose of a firewall?",
                    &[
                        "A) To cool down your computer",
                        "B) To prevent unauthorized access",
                        "C) To speed up internet",
                        "D) To store passwords",
                    ],
                    "B",
                    "Exactly! Firewalls help block unauthorized access to your network.",
                ),
                QuizQuestion::multiple_choice(
                    "Which of these is NOT a sign of a phishing attempt?",
                    &[
                        "A) Urgent requests for personal info",
                        "B) Poor grammar and spelling",
                        "C) Email from known contacts",
                        "D) Suspicious links",
                    ],
                    "C",
                    "Right! Emails from known contacts are usually safe, but always stay cautious.",
                ),
                QuizQuestion::multiple_choice(
                    "How often should you update your passwords?",
                    &["A) Never", "B) Every 1-3 months", "C) Once a year", "D) Only when hacked"],
                    "B",
                    "Good job! Regularly updating passwords reduces the risk of unauthorized access.",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_bank_is_valid() {
        let bank = QuestionBank::cybersecurity();
        assert_eq!(bank.len(), 10);
        let rebuilt = QuestionBank::new(bank.questions().to_vec());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_empty_bank_rejected() {
        assert!(matches!(QuestionBank::new(vec![]), Err(QuizError::EmptyBank)));
    }

    #[test]
    fn test_answer_must_match_an_option() {
        let q = QuizQuestion::multiple_choice("Q?", &["A) yes", "B) no"], "E", "Right!");
        let err = QuestionBank::new(vec![q]).unwrap_err();
        assert!(matches!(err, QuizError::InvalidQuestion { index: 1, .. }));
    }

    #[test]
    fn test_answer_letter_case_insensitive() {
        let q = QuizQuestion::multiple_choice("Q?", &["a) yes", "b) no"], "B", "Right!");
        assert!(QuestionBank::new(vec![q]).is_ok());
    }

    #[test]
    fn test_true_false_answer_checked() {
        let mut q = QuizQuestion::true_false("Q?", true, "Right!");
        q.correct_answer = "Maybe".to_string();
        assert!(QuestionBank::new(vec![q]).is_err());
    }

    #[test]
    fn test_multiple_choice_without_options_rejected() {
        let q = QuizQuestion::multiple_choice("Q?", &[], "A", "Right!");
        assert!(QuestionBank::new(vec![q]).is_err());
    }

    #[test]
    fn test_blank_text_rejected() {
        let q = QuizQuestion::true_false("   ", true, "Right!");
        let err = QuestionBank::new(vec![q]).unwrap_err();
        assert!(err.to_string().contains("question text is empty"));
    }

    #[test]
    fn test_from_json_defaults_optional_fields() {
        let json = r#"[
            {"text": "Is HTTPS encrypted?", "correct_answer": "True",
             "explanation": "Correct! TLS encrypts traffic.", "is_true_false": true},
            {"text": "Best place for passwords?", "options": ["A) Sticky note", "B) Password manager"],
             "correct_answer": "B", "explanation": "Right! Managers encrypt them."}
        ]"#;
        let bank = QuestionBank::from_json_str(json).unwrap();
        assert_eq!(bank.len(), 2);
        assert!(bank.get(0).unwrap().options.is_empty());
        assert!(!bank.get(1).unwrap().is_true_false);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            QuestionBank::from_json_str("{not json"),
            Err(QuizError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(QuestionBank::cybersecurity().questions()).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        let bank = QuestionBank::load(file.path()).unwrap();
        assert_eq!(bank.len(), 10);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = QuestionBank::load(&dir.path().join("none.json")).unwrap_err();
        assert!(matches!(err, QuizError::Io(_)));
    }
}
