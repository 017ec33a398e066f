//! Cyberwing binary - composition root.
//!
//! 1. Parse CLI flags and initialize tracing on stderr
//! 2. Load configuration from TOML and apply flag overrides
//! 3. Build the dialogue engine
//! 4. Run the terminal conversation on stdin/stdout

mod cli;
mod shell;

use clap::Parser;
use cyberwing_chat::DialogueEngine;
use cyberwing_core::CyberwingConfig;
use tokio::io::BufReader;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter};

use crate::cli::CliArgs;
use crate::shell::Shell;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Tracing. Logs go to stderr so they never interleave with the chat.
    // RUST_LOG wins; otherwise the level is swapped in once config is read.
    let env_filter = EnvFilter::try_from_default_env().ok();
    let filter_from_env = env_filter.is_some();
    let initial_filter = env_filter.unwrap_or_else(|| {
        let fallback = CyberwingConfig::default().general.log_level;
        EnvFilter::new(args.log_level.as_deref().unwrap_or(&fallback))
    });
    let (filter, filter_handle) = reload::Layer::new(initial_filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Cyberwing v{}", env!("CARGO_PKG_VERSION"));

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = CyberwingConfig::load_or_default(&config_file);
    args.apply(&mut config);
    if !filter_from_env {
        if let Err(e) = filter_handle.reload(EnvFilter::new(&config.general.log_level)) {
            tracing::warn!(error = %e, "Failed to apply configured log level");
        }
    }
    tracing::info!(path = %config_file.display(), "Configuration resolved");

    if args.write_config {
        config.save(&config_file)?;
        println!("Configuration written to {}", config_file.display());
        return Ok(());
    }

    let engine = DialogueEngine::from_config(&config)?;
    let mut shell = Shell::new(engine, &config.shell);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    shell.run(stdin, &mut stdout).await?;

    tracing::info!("Cyberwing stopped");
    Ok(())
}
