//! Boot subcommand handler for Locus.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, warn};

use locus_config::{Config, ConfigValidator};
use locus_core::{AwakeOutcome, BootstrapOptions, GameContext, GameManager};

use crate::cli::OutputFormat;
use crate::demo::build_root;

/// Summary of a bootstrap run.
#[derive(Debug, Serialize)]
pub(crate) struct BootReport {
    pub root: String,
    pub state: String,
    pub loaded: Vec<&'static str>,
    pub registered_types: Vec<&'static str>,
}

/// Handle the boot subcommand.
pub(crate) fn handle_boot(
    config: &Config,
    include_self: bool,
    components: Vec<String>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    // Command-line overrides are validated together with the file
    let mut config = config.clone();
    config.bootstrap.include_self_in_enumeration |= include_self;
    if !components.is_empty() {
        config.root.components = components;
    }

    for warning in ConfigValidator::validate(&config).into_result()? {
        warn!("{}: {}", warning.path, warning.message);
    }

    let options = BootstrapOptions {
        include_self_in_enumeration: config.bootstrap.include_self_in_enumeration,
        persist_across_scenes: config.bootstrap.persist_across_scenes,
    };

    let report = run_boot(&config.root.name, options, &config.root.components)?;
    print_report(&report, format)
}

/// Bootstrap a fresh context and collect what ended up registered.
pub(crate) fn run_boot(
    root_name: &str,
    options: BootstrapOptions,
    components: &[String],
) -> Result<BootReport, Box<dyn std::error::Error>> {
    info!("Starting Locus v{}", env!("CARGO_PKG_VERSION"));

    let ctx = GameContext::new();
    let root = Arc::new(GameManager::new(options));
    let object = build_root(root_name, &root, components)?;

    let loaded = match root.awake(&ctx, &object) {
        Ok(AwakeOutcome::Initialized { registered }) => registered,
        Ok(AwakeOutcome::Duplicate) => Vec::new(),
        Err(e) => {
            error!("Bootstrap of {} failed: {}", root_name, e);
            return Err(e.into());
        }
    };

    Ok(BootReport {
        root: root_name.to_string(),
        state: root.state().to_string(),
        loaded,
        registered_types: ctx.locator().registered_types(),
    })
}

fn print_report(report: &BootReport, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Table => {
            println!("Root: {} ({})", report.root, report.state);
            println!("{:<4} {}", "#", "REGISTERED TYPE");
            println!("{}", "-".repeat(60));
            for (i, name) in report.registered_types.iter().enumerate() {
                println!("{:<4} {}", i + 1, name);
            }
            if !report.loaded.is_empty() {
                println!();
                println!("Loaded in order: {}", report.loaded.join(", "));
            }
        }
    }
    Ok(())
}
