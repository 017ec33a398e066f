//! Task management for Cyberwing.
//!
//! Keeps the user's to-do list, and parses the "remind me in ..." phrases
//! used to attach reminders to tasks.

pub mod error;
pub mod intent;
pub mod task;
pub mod types;

pub use error::{TaskError, TimeParseError};
pub use intent::time_parser::{parse_reminder_request, ReminderRequest, ReminderUnit};
pub use task::TaskStore;
pub use types::Task;
