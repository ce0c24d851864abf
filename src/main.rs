//! Locus - manager locator and bootstrapper
//!
//! Main entry point for the Locus CLI.

mod cli;
mod cmd_boot;
mod cmd_validate;
mod demo;

use std::path::PathBuf;

use clap::Parser;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use locus_config::{Config, ConfigLoader, LOG_LEVELS, LogFormat, LoggingConfig};

use cli::{Cli, Commands, OutputFormat};

/// Get the Locus home directory (~/.locus).
fn locus_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".locus"))
        .unwrap_or_else(|| PathBuf::from(".locus"))
}

/// The configured level as a filter directive; unknown levels fall back to `info`.
fn filter_level(level: &str) -> String {
    let level = level.trim().to_ascii_lowercase();
    if LOG_LEVELS.contains(&level.as_str()) {
        level
    } else {
        "info".to_string()
    }
}

/// Initialize tracing with console and optional file output.
///
/// `RUST_LOG` takes precedence over the configured level. When a log
/// directory is configured, logs are also written there with daily rotation.
fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_level(&logging.level)));

    // Console goes to stderr so command output on stdout stays parseable
    let (text_layer, json_layer) = match logging.format {
        LogFormat::Text => (
            Some(fmt::layer().with_target(true).with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Json => (None, Some(fmt::layer().json().with_writer(std::io::stderr))),
    };

    let file_layer = match &logging.directory {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)?;
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("locus")
                .filename_suffix("log")
                .max_log_files(14)
                .build(log_dir)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Keep the writer alive for the program duration
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .with(file_layer)
        .init();

    Ok(())
}

/// Load the config, falling back to defaults when the default path is missing.
fn load_config(path: Option<&PathBuf>) -> Result<Config, locus_config::ConfigError> {
    match path {
        Some(path) => ConfigLoader::load(path),
        None => ConfigLoader::load_or_default(&locus_dir().join("config.toml")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    init_tracing(&config.logging)?;

    match cli.command {
        None => cmd_boot::handle_boot(&config, false, Vec::new(), OutputFormat::Table),
        Some(Commands::Boot {
            include_self,
            components,
            format,
        }) => cmd_boot::handle_boot(&config, include_self, components, format),
        Some(Commands::Validate) => cmd_validate::handle_validate(&config),
    }
}
