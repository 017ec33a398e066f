//! Response text composition.
//!
//! Fixed reply texts and the formatting of multi-part replies. Nothing here
//! chooses randomly or touches session state; the engine picks the variants
//! and passes them in.

/// First message of every conversation.
pub const OPENING_PROMPT: &str = "👋 Hello! Welcome to CyberSecurityBot.\nWhat's your name?";

pub const REMINDER_TIME_PROMPT: &str =
    "Great! Please tell me how long, e.g. 'Remind me in 3 days.'";

pub const REMINDER_CLARIFY: &str = "Sorry, I couldn't understand that. Please say something like \
'Remind me in 5 minutes' or 'Remind me in 3 days.'";

pub const REMINDER_DECLINED: &str = "No problem! Let me know if you need anything else.";

const FAVORITE_EXTRA: &str = "And since this is your favorite topic, here's something extra valuable:";

pub fn greeting(name: &str, menu: &str) -> String {
    format!(
        "Nice to meet you, {}! How can I assist you with cybersecurity today?\n{}",
        name, menu
    )
}

pub fn favorite_acknowledgement(name: &str, label: &str) -> String {
    format!(
        "{}, got it! I'll remember that you're especially interested in {}. 😊",
        name, label
    )
}

/// The menu, plus a reminder line when the user has a favorite topic.
pub fn menu(menu_text: &str, favorite_label: Option<&str>) -> String {
    match favorite_label {
        Some(label) => format!(
            "{}\n⭐ I'll keep in mind your favorite topic is {}.",
            menu_text, label
        ),
        None => menu_text.to_string(),
    }
}

pub fn quiz_ended(menu_text: &str) -> String {
    format!(
        "The quiz has ended. If you'd like to try it again, just say 'start quiz'.\n\n{}",
        menu_text
    )
}

/// Completed quiz summary followed by the menu.
pub fn quiz_finished(feedback: &str, menu_text: &str) -> String {
    format!("{}\n{}", feedback, menu_text)
}

pub fn task_added(confirmation: &str) -> String {
    format!("{} Would you like a reminder?", confirmation)
}

pub fn reminder_set(amount: &str) -> String {
    format!("Got it! I'll remind you in {}.", amount)
}

pub fn addressed(name: &str, text: &str) -> String {
    format!("{}, {}", name, text)
}

pub fn follow_up(name: &str, label: &str, variant: &str) -> String {
    format!("{}, here's more on {}:\n{}", name, label, variant)
}

pub fn follow_up_unknown(name: &str) -> String {
    format!(
        "{}, could you remind me which topic you'd like to continue with?",
        name
    )
}

pub fn fallback(name: &str) -> String {
    format!(
        "Sorry {}, I'm not sure I understand. Try asking about topics like passwords, phishing, or privacy.",
        name
    )
}

// =============================================================================
// TopicReply
// =============================================================================

/// Parts of a reply to a matched topic.
///
/// Renders as `[<name>, <sentiment>\n\n][<nudge>\n][<favorite line>\n]<advice>`.
/// When there is no sentiment but `addressed` is set, the name is prefixed
/// as `<name>, `.
#[derive(Debug, Clone, Default)]
pub struct TopicReply<'a> {
    pub user_name: &'a str,
    pub advice: &'a str,
    pub sentiment: Option<&'a str>,
    pub nudge: Option<&'a str>,
    pub favorite: bool,
    pub addressed: bool,
}

impl TopicReply<'_> {
    pub fn render(&self) -> String {
        let mut intro = String::new();
        if let Some(nudge) = self.nudge {
            intro.push_str(nudge);
            intro.push('\n');
        }
        if self.favorite {
            intro.push_str(FAVORITE_EXTRA);
            intro.push('\n');
        }

        match self.sentiment {
            Some(sentiment) => format!(
                "{}, {}\n\n{}{}",
                self.user_name, sentiment, intro, self.advice
            ),
            None if self.addressed => format!("{}, {}{}", self.user_name, intro, self.advice),
            None => format!("{}{}", intro, self.advice),
        }
    }
}
