//! Validate subcommand handler for Locus.

use locus_config::{Config, ConfigValidator};

/// Handle the validate subcommand.
pub(crate) fn handle_validate(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let result = ConfigValidator::validate(config);

    for warning in &result.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for error in &result.errors {
        println!("error: {}: {}", error.path, error.message);
    }

    if result.is_valid() {
        println!("Configuration is valid.");
        Ok(())
    } else {
        Err(format!("{} validation error(s)", result.errors.len()).into())
    }
}
