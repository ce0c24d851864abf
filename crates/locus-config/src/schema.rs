//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bootstrap: BootstrapConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub root: RootConfig,
}

/// Bootstrapper configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Register host components of the bootstrapper's own type as well.
    #[serde(default)]
    pub include_self_in_enumeration: bool,

    /// Keep the root object alive across scene loads.
    #[serde(default = "default_true")]
    pub persist_across_scenes: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            include_self_in_enumeration: false,
            persist_across_scenes: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// Directory for daily rolling log files. Console only when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            directory: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Levels accepted by `logging.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Component names accepted in `root.components`.
pub const ROOT_COMPONENTS: &[&str] = &["audio", "input", "scene", "save"];

/// Canonical form of a component name: trimmed and lowercased.
pub fn normalize_component_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Root object configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootConfig {
    /// Name of the root object.
    #[serde(default = "default_root_name")]
    pub name: String,

    /// Manager components attached to the root, in attach order.
    #[serde(default = "default_components")]
    pub components: Vec<String>,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            name: default_root_name(),
            components: default_components(),
        }
    }
}

fn default_root_name() -> String {
    "GameManager".to_string()
}

fn default_components() -> Vec<String> {
    vec!["audio".to_string(), "input".to_string(), "scene".to_string()]
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
