//! Conversational core for Cyberwing.
//!
//! Classifies each user turn against an ordered set of intents, keeps the
//! per-session conversation state, and composes replies from the response
//! catalog, the task list, the quiz and the activity log.

pub mod activity;
pub mod catalog;
pub mod context;
pub mod error;
pub mod orchestrator;
pub mod parser;
pub mod response;

pub use activity::{ActivityEntry, ActivityLog};
pub use catalog::{CatalogDef, MenuChoice, ResponseCatalog, Topic, TopicDef};
pub use context::{ReminderPrompt, Session};
pub use error::ChatError;
pub use orchestrator::{DialogueEngine, Intent, Reply};
pub use parser::{MalformedTask, TaskCommand};
pub use response::TopicReply;
