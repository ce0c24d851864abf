//! Configuration validation.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::schema::{Config, LOG_LEVELS, ROOT_COMPONENTS, normalize_component_name};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Fail on the first error, otherwise hand back the warnings.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_bootstrap(config, &mut result);
        Self::validate_logging(config, &mut result);
        Self::validate_root(config, &mut result);

        result
    }

    fn validate_bootstrap(config: &Config, result: &mut ValidationResult) {
        if config.bootstrap.include_self_in_enumeration {
            result.add_warning(ValidationWarning::new(
                "bootstrap.include_self_in_enumeration",
                "the root registers itself first; listing it as a component will fail with a duplicate registration",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            result.add_error(ValidationError::new(
                "logging.level",
                format!(
                    "unknown level '{}', expected one of: {}",
                    config.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            ));
        }
    }

    fn validate_root(config: &Config, result: &mut ValidationResult) {
        if config.root.name.trim().is_empty() {
            result.add_error(ValidationError::new("root.name", "Root name cannot be empty"));
        }

        if config.root.components.is_empty() {
            result.add_warning(ValidationWarning::new(
                "root.components",
                "No components attached; only the root will be registered",
            ));
        }

        let mut seen = HashSet::new();
        for component in &config.root.components {
            let name = normalize_component_name(component);
            if name.is_empty() {
                result.add_error(ValidationError::new(
                    "root.components",
                    "Component names cannot be empty",
                ));
            } else if !ROOT_COMPONENTS.contains(&name.as_str()) {
                result.add_error(ValidationError::new(
                    "root.components",
                    format!(
                        "unknown component '{}', expected one of: {}",
                        component.trim(),
                        ROOT_COMPONENTS.join(", ")
                    ),
                ));
            } else if !seen.insert(name) {
                result.add_warning(ValidationWarning::new(
                    "root.components",
                    format!(
                        "'{}' is listed more than once and will fail with a duplicate registration",
                        component.trim()
                    ),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
