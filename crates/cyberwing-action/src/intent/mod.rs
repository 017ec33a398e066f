//! Intent parsing for task-related phrases.
//!
//! Turns reminder replies such as "remind me in 3 days" into structured
//! durations.

pub mod time_parser;
