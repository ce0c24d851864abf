//! Bootstrap-related errors.

use thiserror::Error;

use super::LocatorError;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Locator(#[from] LocatorError),

    #[error("Cannot awake from state: {0}")]
    InvalidState(String),
}
