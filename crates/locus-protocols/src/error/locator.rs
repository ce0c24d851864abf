//! Locator-related errors.

use thiserror::Error;

/// Failures surfaced by the manager locator.
///
/// Each variant carries the full type name of the key involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocatorError {
    #[error("Can't register null for type {0}")]
    NullArgument(String),

    #[error("Manager of type {0} is already registered")]
    DuplicateRegistration(String),

    #[error("Manager of type {0} is not registered")]
    NotRegistered(String),
}

impl LocatorError {
    /// The type name the error refers to.
    pub fn type_name(&self) -> &str {
        match self {
            Self::NullArgument(name)
            | Self::DuplicateRegistration(name)
            | Self::NotRegistered(name) => name,
        }
    }
}
