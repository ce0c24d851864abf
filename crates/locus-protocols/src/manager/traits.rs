//! Manager trait definitions.

use std::any::Any;

use tracing::info;

use super::ManagerComponent;
use crate::error::LocatorError;
use crate::types::short_type_name;

/// Core trait for all managers.
///
/// A manager is registered exactly once under its concrete type and is
/// notified through [`Manager::loaded`] right after that registration.
pub trait Manager: Any + Send + Sync {
    /// Display name used in logs. Defaults to the concrete type name.
    fn manager_name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Called once, immediately after the manager has been registered.
    fn loaded(&self) {
        info!("Loaded: {}", self.manager_name());
    }
}

/// Type-erased registration seam.
///
/// Implemented by the locator so that a bootstrapper can register components
/// whose concrete type is only known where they were attached.
pub trait ManagerRegistrar: Send + Sync {
    /// Register a component under the type key it captured.
    fn register_component(&self, component: &ManagerComponent) -> Result<(), LocatorError>;
}
