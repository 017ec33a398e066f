use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{CyberwingError, Result};

/// Number of matches of the same topic after which an escalation nudge is
/// prepended to the topic response.
pub const DEFAULT_ESCALATION_THRESHOLD: u32 = 3;

/// Number of entries kept by the activity log.
pub const DEFAULT_ACTIVITY_LOG_ENTRIES: usize = 10;

/// Top-level configuration for the Cyberwing application.
///
/// Loaded from `~/.cyberwing/config.toml` by default. Each section corresponds
/// to one component of the conversation engine or the shell around it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CyberwingConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub dialogue: DialogueConfig,
    #[serde(default)]
    pub activity: ActivityConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub shell: ShellConfig,
}

impl CyberwingConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CyberwingConfig = toml::from_str(&content)?;
        config.validate()?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    ///
    /// A missing file is the normal first-run case and is not warned about.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.dialogue.escalation_threshold == 0 {
            return Err(CyberwingError::Config(
                "dialogue.escalation_threshold must be at least 1".to_string(),
            ));
        }
        if self.activity.max_entries == 0 {
            return Err(CyberwingError::Config(
                "activity.max_entries must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.quiz.pass_ratio) {
            return Err(CyberwingError::Config(format!(
                "quiz.pass_ratio must be between 0 and 1, got {}",
                self.quiz.pass_ratio
            )));
        }
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Dialogue engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogueConfig {
    /// Name used when the user answers the name prompt with nothing.
    pub default_user_name: String,
    /// Matches of one topic before the "you asked again" nudge kicks in.
    pub escalation_threshold: u32,
    /// Fixed RNG seed for reproducible sessions. OS-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            default_user_name: "Friend".to_string(),
            escalation_threshold: DEFAULT_ESCALATION_THRESHOLD,
            seed: None,
        }
    }
}

/// Activity log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityConfig {
    /// Maximum entries retained; the oldest is evicted first.
    pub max_entries: usize,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_ACTIVITY_LOG_ENTRIES,
        }
    }
}

/// Quiz settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Path to a JSON question bank. The built-in bank is used when absent.
    pub question_bank: Option<String>,
    /// Fraction of correct answers for the "solid understanding" band.
    pub pass_ratio: f64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_bank: None,
            pass_ratio: 0.7,
        }
    }
}

/// Terminal shell settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Delay between revealed characters, in milliseconds. 0 prints at once.
    pub typing_delay_ms: u64,
    /// Print the ASCII banner on startup.
    pub show_banner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: 20,
            show_banner: true,
        }
    }
}
