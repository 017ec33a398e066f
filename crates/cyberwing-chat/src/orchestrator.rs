//! Dialogue engine: the per-session coordinator.
//!
//! Each turn is classified against a fixed, ordered list of intents and the
//! first one that applies consumes the turn. The engine owns the session,
//! the task list, the quiz and the activity log; the response catalog is
//! shared read-only.

use std::path::Path;
use std::sync::Arc;

use cyberwing_action::{parse_reminder_request, TaskStore};
use cyberwing_core::{CyberwingConfig, Timestamp};
use cyberwing_quiz::{QuestionBank, QuizEngine};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::activity::ActivityLog;
use crate::catalog::{MenuChoice, ResponseCatalog, Topic};
use crate::context::{ReminderPrompt, Session};
use crate::error::ChatError;
use crate::parser::{self, TaskCommand};
use crate::response::{self, TopicReply};

/// Name used when the configured placeholder is blank.
const FALLBACK_USER_NAME: &str = "Friend";

/// Outcome of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    /// The user asked to leave; the caller says goodbye and exits.
    Terminate,
}

impl Reply {
    pub fn text(&self) -> Option<&str> {
        match self {
            Reply::Text(t) => Some(t),
            Reply::Terminate => None,
        }
    }

    pub fn is_terminate(&self) -> bool {
        matches!(self, Reply::Terminate)
    }
}

/// Classification assigned to a turn, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    NameCapture,
    QuizAnswer,
    Thanks,
    Quit,
    FavoriteDeclaration,
    QuizStart,
    QuizEnded,
    Task,
    ReminderReply,
    ActivityLog,
    Status,
    Help,
    Sentiment,
    Topic,
    MenuShortcut,
    FollowUp,
    Continuation,
    Fallback,
}

pub struct DialogueEngine {
    catalog: Arc<ResponseCatalog>,
    session: Session,
    tasks: TaskStore,
    quiz: QuizEngine,
    activity: ActivityLog,
    rng: StdRng,
    default_user_name: String,
    escalation_threshold: u32,
}

impl DialogueEngine {
    /// Build an engine from explicit parts.
    ///
    /// Uses the dialogue, activity and quiz sections of `config`; the RNG is
    /// seeded from `dialogue.seed` when set.
    pub fn new(catalog: Arc<ResponseCatalog>, bank: QuestionBank, config: &CyberwingConfig) -> Self {
        let rng = match config.dialogue.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let default_user_name = match config.dialogue.default_user_name.trim() {
            "" => FALLBACK_USER_NAME.to_string(),
            name => name.to_string(),
        };

        Self {
            catalog,
            session: Session::new(),
            tasks: TaskStore::new(),
            quiz: QuizEngine::new(bank, config.quiz.pass_ratio),
            activity: ActivityLog::new(config.activity.max_entries),
            rng,
            default_user_name,
            escalation_threshold: config.dialogue.escalation_threshold.max(1),
        }
    }

    /// Build an engine with the built-in catalog and either the configured
    /// question bank file or the built-in one.
    pub fn from_config(config: &CyberwingConfig) -> Result<Self, ChatError> {
        config.validate()?;
        let catalog = Arc::new(ResponseCatalog::cybersecurity()?);
        let bank = match config.quiz.question_bank.as_deref() {
            Some(path) => QuestionBank::load(Path::new(path))?,
            None => QuestionBank::cybersecurity(),
        };
        info!(
            topics = catalog.topics().len(),
            questions = bank.len(),
            threshold = config.dialogue.escalation_threshold,
            "Dialogue engine ready"
        );
        Ok(Self::new(catalog, bank, config))
    }

    /// Opening line asking for the user's name.
    pub fn start_conversation(&self) -> &'static str {
        response::OPENING_PROMPT
    }

    pub fn has_user_name(&self) -> bool {
        self.session.has_user_name()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn quiz(&self) -> &QuizEngine {
        &self.quiz
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn catalog(&self) -> &ResponseCatalog {
        &self.catalog
    }

    /// Handle one user turn.
    pub fn process_input(&mut self, input: &str) -> Reply {
        self.process_input_at(input, Timestamp::now())
    }

    /// Handle one user turn as if it happened at `now`.
    pub fn process_input_at(&mut self, input: &str, now: Timestamp) -> Reply {
        let (intent, reply) = self.route(input.trim(), now);
        debug!(intent = ?intent, "Turn classified");
        reply
    }

    // =========================================================================
    // Routing
    // =========================================================================

    fn route(&mut self, input: &str, now: Timestamp) -> (Intent, Reply) {
        let catalog = Arc::clone(&self.catalog);

        if !self.session.has_user_name() {
            let name = parser::sanitize_name(input, &self.default_user_name);
            let text = response::greeting(&name, catalog.menu_text());
            self.session.set_user_name(name);
            return (Intent::NameCapture, Reply::Text(text));
        }

        // A running quiz takes every input as an answer.
        if self.quiz.is_active() {
            return (Intent::QuizAnswer, Reply::Text(self.answer_quiz(input, now)));
        }

        if catalog.is_gratitude(input) {
            let text = pick(&mut self.rng, catalog.thanks_responses()).to_string();
            return (Intent::Thanks, Reply::Text(text));
        }

        if parser::is_quit(input) {
            info!("User ended the session");
            return (Intent::Quit, Reply::Terminate);
        }

        if parser::is_favorite_declaration(input) {
            if let Some(topic) = catalog.match_topic(input) {
                self.session.set_favorite_topic(topic.key());
                self.activity
                    .log_at(format!("Favorite topic set: {}", topic.label()), now);
                let text = response::favorite_acknowledgement(self.session.user_name(), topic.label());
                return (Intent::FavoriteDeclaration, Reply::Text(text));
            }
        }

        if parser::is_start_quiz(input) {
            return (Intent::QuizStart, Reply::Text(self.start_quiz(now)));
        }
        if parser::mentions_quiz(input) {
            let text = response::quiz_ended(catalog.menu_text());
            return (Intent::QuizEnded, Reply::Text(text));
        }

        if let Some(command) = parser::parse_task_command(input) {
            return (Intent::Task, Reply::Text(self.handle_task_command(command, now)));
        }

        if let Some(text) = self.handle_reminder_reply(&catalog, input, now) {
            return (Intent::ReminderReply, Reply::Text(text));
        }

        if catalog.is_activity_log_request(input) {
            return (Intent::ActivityLog, Reply::Text(self.activity.recent_summary()));
        }

        if let Some(variants) = catalog.status_responses_for(input) {
            let variant = pick(&mut self.rng, variants);
            let text = response::addressed(self.session.user_name(), variant);
            return (Intent::Status, Reply::Text(text));
        }

        if parser::is_help(input) {
            let favorite = self
                .session
                .favorite_topic()
                .and_then(|key| catalog.topic(key))
                .map(Topic::label);
            let text = response::menu(catalog.menu_text(), favorite);
            return (Intent::Help, Reply::Text(text));
        }

        let sentiment = catalog.sentiment_for(input);
        if let Some(topic) = catalog.match_topic(input) {
            let text = self.topic_reply(topic, sentiment, false);
            return (Intent::Topic, Reply::Text(text));
        }
        if let Some(sentiment) = sentiment {
            let text = response::addressed(self.session.user_name(), sentiment);
            return (Intent::Sentiment, Reply::Text(text));
        }

        match catalog.menu_choice(&parser::menu_digits(input)) {
            Some(MenuChoice::Quiz) => {
                return (Intent::MenuShortcut, Reply::Text(self.start_quiz(now)));
            }
            Some(MenuChoice::Topic(key)) => {
                if let Some(topic) = catalog.topic(key) {
                    let text = self.topic_reply(topic, None, true);
                    return (Intent::MenuShortcut, Reply::Text(text));
                }
            }
            None => {}
        }

        if parser::is_follow_up(input) {
            let resumed = self
                .session
                .current_topic()
                .or(self.session.favorite_topic())
                .and_then(|key| catalog.topic(key));
            let name = self.session.user_name();
            let text = match resumed {
                Some(topic) => {
                    response::follow_up(name, topic.label(), pick(&mut self.rng, topic.responses()))
                }
                None => response::follow_up_unknown(name),
            };
            return (Intent::FollowUp, Reply::Text(text));
        }

        if let Some(topic) = self.session.current_topic().and_then(|key| catalog.topic(key)) {
            let variant = pick(&mut self.rng, topic.responses());
            let text = response::addressed(self.session.user_name(), variant);
            return (Intent::Continuation, Reply::Text(text));
        }

        (
            Intent::Fallback,
            Reply::Text(response::fallback(self.session.user_name())),
        )
    }

    // =========================================================================
    // Topics
    // =========================================================================

    /// Count the match, make the topic current and compose the reply.
    fn topic_reply(&mut self, topic: &Topic, sentiment: Option<&str>, addressed: bool) -> String {
        let count = self.session.record_topic_match(topic.key());
        let nudge = if count >= self.escalation_threshold && !topic.nudges().is_empty() {
            Some(pick(&mut self.rng, topic.nudges()))
        } else {
            None
        };
        debug!(topic = topic.key(), count, escalated = nudge.is_some(), "Topic matched");

        TopicReply {
            user_name: self.session.user_name(),
            advice: pick(&mut self.rng, topic.responses()),
            sentiment,
            nudge,
            favorite: self.session.is_favorite(topic.key()),
            addressed,
        }
        .render()
    }

    // =========================================================================
    // Quiz
    // =========================================================================

    fn start_quiz(&mut self, now: Timestamp) -> String {
        let text = self.quiz.start();
        self.activity.log_at("Quiz started", now);
        text
    }

    fn answer_quiz(&mut self, input: &str, now: Timestamp) -> String {
        let feedback = self.quiz.submit_answer(input);
        match feedback.completed {
            Some(score) => {
                self.activity.log_at(
                    format!("Quiz completed: scored {} out of {}", score.score, score.total),
                    now,
                );
                response::quiz_finished(&feedback.text, self.catalog.menu_text())
            }
            None => feedback.text,
        }
    }

    // =========================================================================
    // Tasks and reminders
    // =========================================================================

    fn handle_task_command(&mut self, command: TaskCommand, now: Timestamp) -> String {
        match command {
            TaskCommand::Add(title) => self.add_task(&title, now),
            TaskCommand::View => self.tasks.view_tasks(),
            TaskCommand::Complete(position) => {
                let open_title = self
                    .tasks
                    .at_position(position)
                    .ok()
                    .filter(|t| !t.completed)
                    .map(|t| t.title.clone());
                let text = self.tasks.complete_task(position);
                if let Some(title) = open_title {
                    self.activity
                        .log_at(format!("Task marked as completed: '{}'", title), now);
                }
                text
            }
            TaskCommand::Delete(position) => {
                let title = self
                    .tasks
                    .at_position(position)
                    .ok()
                    .map(|t| t.title.clone());
                let text = self.tasks.delete_task(position);
                if let Some(title) = title {
                    self.activity.log_at(format!("Task deleted: '{}'", title), now);
                }
                text
            }
            TaskCommand::Malformed(problem) => problem.message().to_string(),
        }
    }

    fn add_task(&mut self, title: &str, now: Timestamp) -> String {
        let description = format!("Review or perform task: {}", title);
        let before = self.tasks.len();
        let confirmation = self.tasks.add_task(title, Some(&description), None);
        if self.tasks.len() == before {
            return confirmation;
        }

        if let Some(task) = self.tasks.last_task() {
            self.session
                .set_reminder_prompt(ReminderPrompt::Offered { task: task.id });
        }
        self.activity.log_at(format!("Task added: '{}'", title), now);
        response::task_added(&confirmation)
    }

    /// Drive the reminder exchange for the pending task.
    ///
    /// Returns `None` when the input is not part of the exchange and should
    /// fall through to the remaining intents.
    fn handle_reminder_reply(
        &mut self,
        catalog: &ResponseCatalog,
        input: &str,
        now: Timestamp,
    ) -> Option<String> {
        let prompt = self.session.reminder_prompt();
        let task = prompt.pending_task()?;

        let still_pending = self
            .tasks
            .get(task)
            .is_some_and(|t| t.reminder.is_none());
        if !still_pending {
            debug!(%task, "Pending task gone or already reminded; dropping prompt");
            self.session.set_reminder_prompt(ReminderPrompt::Idle);
            return None;
        }

        match prompt {
            ReminderPrompt::Offered { task } => {
                if catalog.is_affirmative(input) {
                    self.session
                        .set_reminder_prompt(ReminderPrompt::AwaitingTime { task });
                    Some(response::REMINDER_TIME_PROMPT.to_string())
                } else if catalog.is_negative(input) {
                    self.session.set_reminder_prompt(ReminderPrompt::Idle);
                    Some(response::REMINDER_DECLINED.to_string())
                } else {
                    None
                }
            }
            ReminderPrompt::AwaitingTime { task } => Some(self.set_reminder(task, input, now)),
            ReminderPrompt::Idle => None,
        }
    }

    fn set_reminder(&mut self, task: Uuid, input: &str, now: Timestamp) -> String {
        let request = match parse_reminder_request(input) {
            Ok(request) => request,
            Err(e) => {
                debug!(error = %e, "Reminder reply not understood");
                return response::REMINDER_CLARIFY.to_string();
            }
        };
        let Some(when) = request.deadline_from(now) else {
            warn!(amount = request.amount, "Reminder deadline out of range");
            return response::REMINDER_CLARIFY.to_string();
        };

        if let Err(e) = self.tasks.set_reminder(task, when) {
            warn!(error = %e, "Could not attach reminder");
            self.session.set_reminder_prompt(ReminderPrompt::Idle);
            return response::fallback(self.session.user_name());
        }

        self.session.set_reminder_prompt(ReminderPrompt::Idle);
        self.activity
            .append_to_last(&format!("(Reminder set for {})", when.format_local()));
        response::reminder_set(&request.to_string())
    }
}

/// Uniform choice from `items`; empty slices yield an empty string.
fn pick<'a>(rng: &mut StdRng, items: &'a [String]) -> &'a str {
    items.choose(rng).map(String::as_str).unwrap_or_default()
}
