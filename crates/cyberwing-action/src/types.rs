use std::fmt;

use cyberwing_core::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A to-do item created from the conversation.
///
/// Users refer to tasks by their 1-based position in the store; `id` is
/// internal and stays stable when earlier tasks are deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub reminder: Option<Timestamp>,
    pub completed: bool,
    pub created_at: Timestamp,
}

impl Task {
    pub fn new(title: String, description: String, reminder: Option<Timestamp>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            reminder,
            completed: false,
            created_at: Timestamp::now(),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed { "[✓ Completed]" } else { "[ ]" };
        write!(f, "{} {}: {}", status, self.title, self.description)?;
        if let Some(reminder) = self.reminder {
            write!(f, " (Remind: {})", reminder.format_local())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Patch router".to_string(), "Firmware update".to_string(), None);
        assert!(!task.completed);
        assert!(task.reminder.is_none());
        assert_ne!(task.id, Uuid::nil());
    }

    #[test]
    fn test_display_open_task() {
        let task = Task::new("Patch router".to_string(), "Firmware update".to_string(), None);
        assert_eq!(task.to_string(), "[ ] Patch router: Firmware update");
    }

    #[test]
    fn test_display_completed_task_with_reminder() {
        let mut task = Task::new("Rotate keys".to_string(), "Rotate keys".to_string(), None);
        task.completed = true;
        task.reminder = Some(Timestamp(1_700_000_000));
        let text = task.to_string();
        assert!(text.starts_with("[✓ Completed] Rotate keys: Rotate keys (Remind: "));
        assert!(text.ends_with(')'));
    }

    #[test]
    fn test_task_serializes() {
        let task = Task::new("a".to_string(), "b".to_string(), Some(Timestamp(5)));
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["title"], "a");
        assert_eq!(json["reminder"], 5);
        assert_eq!(json["completed"], false);
    }
}
