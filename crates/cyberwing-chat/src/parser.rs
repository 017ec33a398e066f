//! Input classification helpers.
//!
//! Small, stateless predicates and extractors used by the dialogue engine.
//! None of them look at session state; ordering between them is the
//! engine's job.

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Compiled patterns (compiled once, reused across calls)
// =============================================================================

struct TaskPatterns {
    add: Regex,
    complete: Regex,
    delete: Regex,
}

static TASK_PATTERNS: LazyLock<TaskPatterns> = LazyLock::new(|| {
    let mk = |p: &str| Regex::new(p).expect("Invalid task command regex");
    TaskPatterns {
        add: mk(r"(?i)^add\s+task\b(.*)$"),
        complete: mk(r"(?i)^complete\s+task\b(.*)$"),
        delete: mk(r"(?i)^delete\s+task\b(.*)$"),
    }
});

static NON_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("Invalid digit regex"));

const QUIT_WORDS: &[&str] = &["exit", "quit", "bye"];

const VIEW_TASK_PHRASES: &[&str] = &[
    "view tasks",
    "view task",
    "show tasks",
    "see tasks",
    "list tasks",
    "show me the tasks",
    "my tasks",
    "tasks",
];

const FAVORITE_MARKERS: &[&str] = &["favorite", "favourite", "interested in"];

const FOLLOW_UP_PHRASES: &[&str] = &["tell me more", "what else"];

// =============================================================================
// Task commands
// =============================================================================

/// A task command recognized in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    Add(String),
    View,
    /// 1-based position.
    Complete(usize),
    /// 1-based position.
    Delete(usize),
    /// Recognized command with an unusable argument.
    Malformed(MalformedTask),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedTask {
    MissingTitle,
    BadCompleteNumber,
    BadDeleteNumber,
}

impl MalformedTask {
    /// Corrective text shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            MalformedTask::MissingTitle => "Please provide a task title after 'add task'.",
            MalformedTask::BadCompleteNumber => "Please provide a valid task number to complete.",
            MalformedTask::BadDeleteNumber => "Please provide a valid task number to delete.",
        }
    }
}

/// Recognize `add task <text>`, the view phrasings, `complete task <n>` and
/// `delete task <n>`, case-insensitively.
pub fn parse_task_command(input: &str) -> Option<TaskCommand> {
    let input = input.trim();
    let patterns = &*TASK_PATTERNS;

    if let Some(caps) = patterns.add.captures(input) {
        let title = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        if title.is_empty() {
            return Some(TaskCommand::Malformed(MalformedTask::MissingTitle));
        }
        return Some(TaskCommand::Add(title.to_string()));
    }

    let lower = input.to_lowercase();
    if VIEW_TASK_PHRASES.contains(&lower.as_str()) {
        return Some(TaskCommand::View);
    }

    if let Some(caps) = patterns.complete.captures(input) {
        return Some(match parse_position(caps.get(1).map(|m| m.as_str())) {
            Some(n) => TaskCommand::Complete(n),
            None => TaskCommand::Malformed(MalformedTask::BadCompleteNumber),
        });
    }

    if let Some(caps) = patterns.delete.captures(input) {
        return Some(match parse_position(caps.get(1).map(|m| m.as_str())) {
            Some(n) => TaskCommand::Delete(n),
            None => TaskCommand::Malformed(MalformedTask::BadDeleteNumber),
        });
    }

    None
}

fn parse_position(arg: Option<&str>) -> Option<usize> {
    arg.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<usize>().ok())
}

// =============================================================================
// Other intents
// =============================================================================

/// Normalize a name: trimmed, first character uppercased, rest lowercased.
/// A blank name becomes `placeholder`.
pub fn sanitize_name(input: &str, placeholder: &str) -> String {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        None => placeholder.to_string(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
    }
}

pub fn is_quit(input: &str) -> bool {
    let lower = input.trim().to_lowercase();
    QUIT_WORDS.contains(&lower.as_str())
}

pub fn is_start_quiz(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("start quiz")
}

pub fn mentions_quiz(input: &str) -> bool {
    input.to_lowercase().contains("quiz")
}

/// Whether the input talks about a favorite or an interest. The topic itself
/// is matched separately against the catalog.
pub fn is_favorite_declaration(input: &str) -> bool {
    let lower = input.to_lowercase();
    FAVORITE_MARKERS.iter().any(|m| lower.contains(m))
}

pub fn is_help(input: &str) -> bool {
    let lower = input.trim().to_lowercase();
    lower == "?" || lower.contains("help") || lower.contains("menu")
}

pub fn is_follow_up(input: &str) -> bool {
    let lower = input.to_lowercase();
    FOLLOW_UP_PHRASES.iter().any(|p| lower.contains(p))
}

/// The input with everything but ASCII digits removed.
pub fn menu_digits(input: &str) -> String {
    NON_DIGIT_RE.replace_all(input, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- task commands ----

    #[test]
    fn test_add_task() {
        assert_eq!(
            parse_task_command("Add Task buy milk"),
            Some(TaskCommand::Add("buy milk".to_string()))
        );
        assert_eq!(
            parse_task_command("add task   Enable 2FA  "),
            Some(TaskCommand::Add("Enable 2FA".to_string()))
        );
    }

    #[test]
    fn test_add_task_without_title() {
        assert_eq!(
            parse_task_command("add task"),
            Some(TaskCommand::Malformed(MalformedTask::MissingTitle))
        );
        assert_eq!(
            parse_task_command("ADD TASK    "),
            Some(TaskCommand::Malformed(MalformedTask::MissingTitle))
        );
    }

    #[test]
    fn test_add_tasks_is_not_add_task() {
        assert_eq!(parse_task_command("add tasks for later"), None);
    }

    #[test]
    fn test_view_phrasings() {
        for phrase in [
            "view tasks",
            "View Task",
            "show tasks",
            "see tasks",
            "list tasks",
            "Show me the tasks",
            "my tasks",
            "TASKS",
        ] {
            assert_eq!(parse_task_command(phrase), Some(TaskCommand::View), "{}", phrase);
        }
        assert_eq!(parse_task_command("show me my tasks please"), None);
    }

    #[test]
    fn test_complete_and_delete() {
        assert_eq!(parse_task_command("complete task 2"), Some(TaskCommand::Complete(2)));
        assert_eq!(parse_task_command("Delete Task 10"), Some(TaskCommand::Delete(10)));
        assert_eq!(parse_task_command("complete task 0"), Some(TaskCommand::Complete(0)));
    }

    #[test]
    fn test_malformed_numbers() {
        assert_eq!(
            parse_task_command("complete task two"),
            Some(TaskCommand::Malformed(MalformedTask::BadCompleteNumber))
        );
        assert_eq!(
            parse_task_command("complete task"),
            Some(TaskCommand::Malformed(MalformedTask::BadCompleteNumber))
        );
        assert_eq!(
            parse_task_command("delete task -1"),
            Some(TaskCommand::Malformed(MalformedTask::BadDeleteNumber))
        );
    }

    #[test]
    fn test_malformed_messages_name_the_command() {
        assert!(MalformedTask::BadCompleteNumber.message().ends_with("to complete."));
        assert!(MalformedTask::BadDeleteNumber.message().ends_with("to delete."));
        assert!(MalformedTask::MissingTitle.message().contains("'add task'"));
    }

    #[test]
    fn test_unrelated_input_is_not_a_task_command() {
        assert_eq!(parse_task_command("how do I complete a backup?"), None);
    }

    // ---- names ----

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("  aLiCe ", "Friend"), "Alice");
        assert_eq!(sanitize_name("bob", "Friend"), "Bob");
        assert_eq!(sanitize_name("", "Friend"), "Friend");
        assert_eq!(sanitize_name("   ", "Pal"), "Pal");
        assert_eq!(sanitize_name("élodie", "Friend"), "Élodie");
    }

    // ---- simple intents ----

    #[test]
    fn test_quit_is_exact() {
        assert!(is_quit("exit"));
        assert!(is_quit("  BYE "));
        assert!(is_quit("Quit"));
        assert!(!is_quit("bye for now"));
        assert!(!is_quit("exit the quiz"));
    }

    #[test]
    fn test_quiz_phrases() {
        assert!(is_start_quiz("Start Quiz"));
        assert!(!is_start_quiz("start quiz now"));
        assert!(mentions_quiz("is there a QUIZ?"));
        assert!(!mentions_quiz("quick question"));
    }

    #[test]
    fn test_favorite_markers() {
        assert!(is_favorite_declaration("My favourite is VPNs"));
        assert!(is_favorite_declaration("I'm interested in privacy"));
        assert!(!is_favorite_declaration("tell me about privacy"));
    }

    #[test]
    fn test_help() {
        assert!(is_help("?"));
        assert!(is_help("Can you help me"));
        assert!(is_help("show the menu"));
        assert!(!is_help("what?"));
    }

    #[test]
    fn test_follow_up() {
        assert!(is_follow_up("Tell me more"));
        assert!(is_follow_up("ok, what else?"));
        assert!(!is_follow_up("more"));
    }

    #[test]
    fn test_menu_digits() {
        assert_eq!(menu_digits("option 3!"), "3");
        assert_eq!(menu_digits("1 and 2"), "12");
        assert_eq!(menu_digits("none"), "");
    }
}
