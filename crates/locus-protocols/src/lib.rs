//! # Locus Protocols
//!
//! Core protocol definitions (traits) for the Locus manager locator.
//! Contains only interface definitions and shared types - no registry or
//! bootstrapper implementations.
//!
//! ## Core Traits
//!
//! - [`Manager`] - Base trait for all manager components
//! - [`ManagerRegistrar`] - Type-erased registration seam implemented by the locator
//! - [`ComponentHost`] - The engine object a bootstrapper is attached to

pub mod error;
pub mod host;
pub mod manager;
pub mod types;

// Re-export core traits
pub use error::{BootstrapError, LocatorError};
pub use host::ComponentHost;
pub use manager::{Manager, ManagerComponent, ManagerRegistrar};
pub use types::*;
