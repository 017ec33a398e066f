//! Bounded log of recent user-visible actions.
//!
//! Holds at most `max_entries` timestamped lines. When full, the oldest entry
//! is evicted before a new one is pushed.

use std::collections::VecDeque;

use cyberwing_core::Timestamp;
use serde::{Deserialize, Serialize};

/// Placeholder shown when nothing has been logged.
pub const EMPTY_ACTIVITY_LOG: &str = "📝 No recent activities logged yet.";

/// One logged action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub at: Timestamp,
    pub message: String,
}

#[derive(Debug)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    max_entries: usize,
}

impl ActivityLog {
    /// Create an empty log. A capacity of zero is treated as one.
    pub fn new(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    pub fn log(&mut self, message: impl Into<String>) {
        self.log_at(message, Timestamp::now());
    }

    pub fn log_at(&mut self, message: impl Into<String>, at: Timestamp) {
        while self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        let message = message.into();
        tracing::debug!(message = %message, "Activity logged");
        self.entries.push_back(ActivityEntry { at, message });
    }

    /// Append `extra` to the newest entry, separated by a space.
    pub fn append_to_last(&mut self, extra: &str) {
        if let Some(last) = self.entries.back_mut() {
            last.message.push(' ');
            last.message.push_str(extra);
        }
    }

    /// Numbered summary of the retained entries, oldest first.
    pub fn recent_summary(&self) -> String {
        if self.entries.is_empty() {
            return EMPTY_ACTIVITY_LOG.to_string();
        }

        let lines: Vec<String> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{}. [{}] {}", i + 1, e.at.format_local(), e.message))
            .collect();
        format!("📜 Here's a summary of recent actions:\n{}", lines.join("\n"))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn entries(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let log = ActivityLog::new(10);
        assert!(log.is_empty());
        assert_eq!(log.recent_summary(), EMPTY_ACTIVITY_LOG);
    }

    #[test]
    fn test_summary_numbers_entries() {
        let mut log = ActivityLog::new(10);
        log.log("Task added: 'a'");
        log.log("Quiz started");
        let summary = log.recent_summary();
        assert!(summary.starts_with("📜 Here's a summary of recent actions:\n1. ["));
        assert!(summary.contains("] Task added: 'a'"));
        assert!(summary.contains("\n2. ["));
        assert!(summary.ends_with("] Quiz started"));
    }

    #[test]
    fn test_evicts_oldest_first() {
        let mut log = ActivityLog::new(3);
        for i in 1..=5 {
            log.log_at(format!("entry {}", i), Timestamp(i));
        }
        assert_eq!(log.len(), 3);
        let messages: Vec<&str> = log.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["entry 3", "entry 4", "entry 5"]);
    }

    #[test]
    fn test_append_to_last() {
        let mut log = ActivityLog::new(10);
        log.log("first");
        log.log("Task added: 'b'");
        log.append_to_last("(Reminder set for tomorrow)");
        let last = log.entries().last().unwrap();
        assert_eq!(last.message, "Task added: 'b' (Reminder set for tomorrow)");
        assert_eq!(log.entries().next().unwrap().message, "first");
    }

    #[test]
    fn test_append_to_last_on_empty_is_noop() {
        let mut log = ActivityLog::new(10);
        log.append_to_last("extra");
        assert!(log.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut log = ActivityLog::new(2);
        log.log("x");
        log.clear();
        assert_eq!(log.len(), 0);
        assert_eq!(log.recent_summary(), EMPTY_ACTIVITY_LOG);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut log = ActivityLog::new(0);
        log.log("a");
        log.log("b");
        assert_eq!(log.max_entries(), 1);
        assert_eq!(log.entries().next().unwrap().message, "b");
    }
}
