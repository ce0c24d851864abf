//! Error types for the Locus protocol layer.

mod bootstrap;
mod locator;

pub use bootstrap::*;
pub use locator::*;
