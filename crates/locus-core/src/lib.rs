//! # Locus Core
//!
//! Service-locator core for the Locus framework.
//!
//! ## Components
//!
//! - [`ManagerLocator`] - Registry mapping a concrete type to its single instance
//! - [`GameManager`] - Root bootstrapper that registers and loads co-located managers
//! - [`GameContext`] - Process-scoped state owning the locator and the root slot
//! - [`GameObject`] - In-memory host object for running outside an engine

pub mod context;
pub mod game_manager;
pub mod host;
pub mod lifecycle;
pub mod registry;

pub use context::{GameContext, InstanceClaim};
pub use game_manager::GameManager;
pub use host::GameObject;
pub use lifecycle::{AwakeOutcome, BootstrapOptions, BootstrapState};
pub use registry::ManagerLocator;
