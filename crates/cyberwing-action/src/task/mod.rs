//! Task list management.
//!
//! Tasks are addressed by their current 1-based position. Deleting a task
//! shifts every later task down by one; a position remembered across turns
//! can therefore go stale, which is accepted behavior.

use cyberwing_core::Timestamp;
use uuid::Uuid;

use crate::error::TaskError;
use crate::types::Task;

/// Message returned for any out-of-range task position.
pub const INVALID_TASK_NUMBER: &str = "Invalid task number.";

/// In-memory ordered task list owned by one session.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create a new empty TaskStore.
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// The most recently added task still in the list.
    pub fn last_task(&self) -> Option<&Task> {
        self.tasks.last()
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Task at a 1-based position.
    pub fn at_position(&self, position: usize) -> Result<&Task, TaskError> {
        let index = self.index_of(position)?;
        Ok(&self.tasks[index])
    }

    /// Append a task and return it. A blank description defaults to the title.
    pub fn add(
        &mut self,
        title: &str,
        description: Option<&str>,
        reminder: Option<Timestamp>,
    ) -> Result<&Task, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        let description = match description.map(str::trim) {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => title.to_string(),
        };

        self.tasks
            .push(Task::new(title.to_string(), description, reminder));
        tracing::info!(title = %title, count = self.tasks.len(), "Task added");
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Attach a reminder to the task with the given id.
    pub fn set_reminder(&mut self, id: Uuid, when: Timestamp) -> Result<&Task, TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        task.reminder = Some(when);
        tracing::info!(title = %task.title, reminder = when.0, "Reminder set");
        Ok(&*task)
    }

    /// Add a task and describe the result for the user.
    pub fn add_task(
        &mut self,
        title: &str,
        description: Option<&str>,
        reminder: Option<Timestamp>,
    ) -> String {
        match self.add(title, description, reminder) {
            Ok(task) => match task.reminder {
                Some(when) => format!(
                    "Task '{}' added with a reminder set for {}.",
                    task.title,
                    when.format_local()
                ),
                None => format!("Task '{}' added without a reminder.", task.title),
            },
            Err(e) => format!("Could not add task: {}.", e),
        }
    }

    /// Numbered list of every task, or a placeholder when there are none.
    pub fn view_tasks(&self) -> String {
        if self.tasks.is_empty() {
            return "You don't have any tasks at the moment.".to_string();
        }

        let lines: Vec<String> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, task)| format!("{}. {}", i + 1, task))
            .collect();
        format!("Here are your tasks:\n\n{}", lines.join("\n"))
    }

    /// Mark the task at a 1-based position as completed.
    pub fn complete_task(&mut self, position: usize) -> String {
        let index = match self.index_of(position) {
            Ok(i) => i,
            Err(_) => return INVALID_TASK_NUMBER.to_string(),
        };

        let task = &mut self.tasks[index];
        if task.completed {
            return format!("Task '{}' is already completed.", task.title);
        }
        task.completed = true;
        tracing::info!(title = %task.title, position, "Task completed");
        format!("Task '{}' marked as completed.", task.title)
    }

    /// Remove the task at a 1-based position.
    pub fn delete_task(&mut self, position: usize) -> String {
        let index = match self.index_of(position) {
            Ok(i) => i,
            Err(_) => return INVALID_TASK_NUMBER.to_string(),
        };

        let task = self.tasks.remove(index);
        tracing::info!(title = %task.title, position, "Task deleted");
        format!("Task '{}' has been deleted.", task.title)
    }

    fn index_of(&self, position: usize) -> Result<usize, TaskError> {
        if position == 0 || position > self.tasks.len() {
            return Err(TaskError::InvalidPosition {
                position,
                len: self.tasks.len(),
            });
        }
        Ok(position - 1)
    }
}
