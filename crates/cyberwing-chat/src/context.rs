//! Per-session conversation state.
//!
//! Tracks the user's name, the last and favorite topics, how often each
//! topic has been matched, and where the reminder sub-dialogue stands.

use std::collections::HashMap;

use uuid::Uuid;

// =============================================================================
// ReminderPrompt
// =============================================================================

/// Progress of the "Would you like a reminder?" exchange for the most
/// recently added task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReminderPrompt {
    #[default]
    Idle,
    /// A reminder was offered for `task`; waiting for yes or no.
    Offered { task: Uuid },
    /// The user accepted; waiting for "remind me in ...".
    AwaitingTime { task: Uuid },
}

impl ReminderPrompt {
    pub fn pending_task(&self) -> Option<Uuid> {
        match *self {
            ReminderPrompt::Idle => None,
            ReminderPrompt::Offered { task } | ReminderPrompt::AwaitingTime { task } => Some(task),
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// Mutable conversation context for one user.
#[derive(Debug, Default)]
pub struct Session {
    user_name: String,
    current_topic: Option<String>,
    favorite_topic: Option<String>,
    topic_request_counts: HashMap<String, u32>,
    reminder_prompt: ReminderPrompt,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn has_user_name(&self) -> bool {
        !self.user_name.trim().is_empty()
    }

    pub fn set_user_name(&mut self, name: String) {
        self.user_name = name;
    }

    /// Key of the most recently matched topic.
    pub fn current_topic(&self) -> Option<&str> {
        self.current_topic.as_deref()
    }

    pub fn favorite_topic(&self) -> Option<&str> {
        self.favorite_topic.as_deref()
    }

    /// Replace the favorite topic.
    pub fn set_favorite_topic(&mut self, key: &str) {
        self.favorite_topic = Some(key.to_string());
    }

    pub fn is_favorite(&self, key: &str) -> bool {
        self.favorite_topic
            .as_deref()
            .is_some_and(|f| f.eq_ignore_ascii_case(key))
    }

    /// Record a topic match: bump its counter and make it current.
    ///
    /// Returns the updated count.
    pub fn record_topic_match(&mut self, key: &str) -> u32 {
        let count = self
            .topic_request_counts
            .entry(key.to_lowercase())
            .or_insert(0);
        *count = count.saturating_add(1);
        self.current_topic = Some(key.to_string());
        *count
    }

    /// How many turns matched `key`, ignoring case.
    pub fn topic_request_count(&self, key: &str) -> u32 {
        self.topic_request_counts
            .get(&key.to_lowercase())
            .copied()
            .unwrap_or(0)
    }

    pub fn reminder_prompt(&self) -> ReminderPrompt {
        self.reminder_prompt
    }

    pub fn set_reminder_prompt(&mut self, prompt: ReminderPrompt) {
        self.reminder_prompt = prompt;
    }

    /// Task currently going through the reminder exchange, if any.
    pub fn pending_task(&self) -> Option<Uuid> {
        self.reminder_prompt.pending_task()
    }

    pub fn awaiting_reminder_time(&self) -> bool {
        matches!(self.reminder_prompt, ReminderPrompt::AwaitingTime { .. })
    }
}
