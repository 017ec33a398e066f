//! CLI argument definitions for the Cyberwing shell.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

use cyberwing_core::CyberwingConfig;

/// Cyberwing: a terminal chatbot for everyday cybersecurity advice.
#[derive(Parser, Debug)]
#[command(name = "cyberwing", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Seed for response selection, for reproducible sessions.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Print replies at once instead of revealing them character by character.
    #[arg(long = "no-typing")]
    pub no_typing: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long = "write-config")]
    pub write_config: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > CYBERWING_CONFIG env var > ~/.cyberwing/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("CYBERWING_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Apply flag overrides on top of a loaded configuration.
    pub fn apply(&self, config: &mut CyberwingConfig) {
        if let Some(ref level) = self.log_level {
            config.general.log_level = level.clone();
        }
        if let Some(seed) = self.seed {
            config.dialogue.seed = Some(seed);
        }
        if self.no_typing {
            config.shell.typing_delay_ms = 0;
        }
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".cyberwing").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".cyberwing").join("config.toml");
    }
    PathBuf::from("config.toml")
}
