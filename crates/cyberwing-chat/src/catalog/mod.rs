//! Response catalog: the static tables the dialogue engine reads from.
//!
//! Topics are kept in declaration order; the first topic whose pattern
//! matches wins, so order is part of the catalog's behavior. Everything here
//! is validated and compiled once in [`ResponseCatalog::new`] and read-only
//! afterwards.

mod cybersecurity;

use std::collections::HashSet;

use regex::Regex;

use crate::error::ChatError;

// =============================================================================
// Definitions (uncompiled input)
// =============================================================================

/// Uncompiled description of one topic.
#[derive(Debug, Clone)]
pub struct TopicDef {
    pub key: String,
    pub label: String,
    pub pattern: String,
    pub responses: Vec<String>,
    pub nudges: Vec<String>,
}

/// What a numeric menu selection leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Topic(String),
    Quiz,
}

/// Everything needed to build a [`ResponseCatalog`].
#[derive(Debug, Clone, Default)]
pub struct CatalogDef {
    pub topics: Vec<TopicDef>,
    /// Keyword -> fixed empathetic response, in match order.
    pub sentiments: Vec<(String, String)>,
    /// Phrase -> response variants, in match order.
    pub status_phrases: Vec<(String, Vec<String>)>,
    pub menu_text: String,
    pub menu_choices: Vec<(String, MenuChoice)>,
    pub affirmative: Vec<String>,
    pub negative: Vec<String>,
    /// Inputs that count as thanks when matched exactly.
    pub gratitude: Vec<String>,
    /// Inputs that count as thanks when they start with one of these.
    pub gratitude_prefixes: Vec<String>,
    pub thanks_responses: Vec<String>,
    pub activity_triggers: Vec<String>,
}

// =============================================================================
// Compiled catalog
// =============================================================================

/// A compiled topic.
#[derive(Debug, Clone)]
pub struct Topic {
    key: String,
    label: String,
    pattern: Regex,
    responses: Vec<String>,
    nudges: Vec<String>,
}

impl Topic {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// User-facing name, e.g. "phishing and scams".
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    /// Escalation nudges; may be empty.
    pub fn nudges(&self) -> &[String] {
        &self.nudges
    }
}

#[derive(Debug, Clone)]
pub struct ResponseCatalog {
    topics: Vec<Topic>,
    sentiments: Vec<(String, String)>,
    status_phrases: Vec<(String, Vec<String>)>,
    menu_text: String,
    menu_choices: Vec<(String, MenuChoice)>,
    affirmative: Option<Regex>,
    negative: Option<Regex>,
    gratitude: Vec<String>,
    gratitude_prefixes: Vec<String>,
    thanks_responses: Vec<String>,
    activity_triggers: Vec<String>,
}

impl ResponseCatalog {
    /// Validate and compile a catalog definition.
    ///
    /// Topic keys must be unique (case-insensitive), every topic and status
    /// phrase needs at least one response, and menu choices may only point
    /// at declared topics.
    pub fn new(def: CatalogDef) -> Result<Self, ChatError> {
        let mut seen = HashSet::new();
        let mut topics = Vec::with_capacity(def.topics.len());
        for t in def.topics {
            if !seen.insert(t.key.to_lowercase()) {
                return Err(ChatError::DuplicateTopic(t.key));
            }
            if t.responses.is_empty() {
                return Err(ChatError::EmptyResponses(t.key));
            }
            let pattern = Regex::new(&format!("(?i){}", t.pattern)).map_err(|source| {
                ChatError::InvalidPattern {
                    topic: t.key.clone(),
                    source,
                }
            })?;
            topics.push(Topic {
                key: t.key,
                label: t.label,
                pattern,
                responses: t.responses,
                nudges: t.nudges,
            });
        }

        for (phrase, variants) in &def.status_phrases {
            if variants.is_empty() {
                return Err(ChatError::EmptyResponses(phrase.clone()));
            }
        }
        if def.thanks_responses.is_empty() {
            return Err(ChatError::EmptyResponses("thanks".to_string()));
        }
        for (digits, choice) in &def.menu_choices {
            if let MenuChoice::Topic(key) = choice {
                if !seen.contains(&key.to_lowercase()) {
                    return Err(ChatError::Config(format!(
                        "menu choice {} refers to unknown topic '{}'",
                        digits, key
                    )));
                }
            }
        }

        let catalog = Self {
            topics,
            sentiments: lowercase_keys(def.sentiments),
            status_phrases: lowercase_keys(def.status_phrases),
            menu_text: def.menu_text,
            menu_choices: def.menu_choices,
            affirmative: word_set("affirmative", &def.affirmative)?,
            negative: word_set("negative", &def.negative)?,
            gratitude: lowercase_all(def.gratitude),
            gratitude_prefixes: lowercase_all(def.gratitude_prefixes),
            thanks_responses: def.thanks_responses,
            activity_triggers: lowercase_all(def.activity_triggers),
        };
        tracing::debug!(topics = catalog.topics.len(), "Response catalog compiled");
        Ok(catalog)
    }

    /// The built-in cybersecurity awareness catalog.
    pub fn cybersecurity() -> Result<Self, ChatError> {
        Self::new(cybersecurity::definition())
    }

    // ---- topics ----

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Look up a topic by key, ignoring case.
    pub fn topic(&self, key: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.key.eq_ignore_ascii_case(key))
    }

    /// First topic, in catalog order, whose pattern matches.
    pub fn match_topic(&self, text: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.is_match(text))
    }

    // ---- phrase tables ----

    /// Fixed response for the first sentiment keyword contained in `text`.
    pub fn sentiment_for(&self, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        self.sentiments
            .iter()
            .find(|(keyword, _)| lower.contains(keyword.as_str()))
            .map(|(_, response)| response.as_str())
    }

    /// Variants for the first status phrase contained in `text`.
    pub fn status_responses_for(&self, text: &str) -> Option<&[String]> {
        let lower = text.to_lowercase();
        self.status_phrases
            .iter()
            .find(|(phrase, _)| lower.contains(phrase.as_str()))
            .map(|(_, variants)| variants.as_slice())
    }

    pub fn menu_text(&self) -> &str {
        &self.menu_text
    }

    pub fn menu_choice(&self, digits: &str) -> Option<&MenuChoice> {
        self.menu_choices
            .iter()
            .find(|(d, _)| d == digits)
            .map(|(_, choice)| choice)
    }

    /// Whole-word match against the affirmative set, so "yes" matches
    /// "yes please" but "sure" does not match "insurance".
    pub fn is_affirmative(&self, text: &str) -> bool {
        self.affirmative.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// Whole-word match against the negative set; "know" is not "no".
    pub fn is_negative(&self, text: &str) -> bool {
        self.negative.as_ref().is_some_and(|re| re.is_match(text))
    }

    pub fn is_gratitude(&self, text: &str) -> bool {
        let lower = text.trim().to_lowercase();
        self.gratitude.iter().any(|g| *g == lower)
            || self
                .gratitude_prefixes
                .iter()
                .any(|p| lower.starts_with(p.as_str()))
    }

    pub fn thanks_responses(&self) -> &[String] {
        &self.thanks_responses
    }

    pub fn is_activity_log_request(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.activity_triggers
            .iter()
            .any(|phrase| lower.contains(phrase.as_str()))
    }
}

fn lowercase_keys<T>(pairs: Vec<(String, T)>) -> Vec<(String, T)> {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_lowercase(), v))
        .collect()
}

fn lowercase_all(items: Vec<String>) -> Vec<String> {
    items.into_iter().map(|s| s.to_lowercase()).collect()
}

/// Compile a phrase list into one case-insensitive whole-word regex.
fn word_set(name: &str, words: &[String]) -> Result<Option<Regex>, ChatError> {
    if words.is_empty() {
        return Ok(None);
    }
    let alternatives: Vec<String> = words.iter().map(|w| regex::escape(w.trim())).collect();
    let pattern = format!(r"(?i)\b(?:{})\b", alternatives.join("|"));
    Regex::new(&pattern)
        .map(Some)
        .map_err(|source| ChatError::InvalidPattern {
            topic: name.to_string(),
            source,
        })
}
