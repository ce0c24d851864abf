//! Manager components attached to a host object.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::Manager;
use crate::types::TypeKey;

/// A manager together with the concrete type it was attached as.
///
/// The type key is captured at construction, so registering the component
/// later needs no runtime lookup of the concrete type.
#[derive(Clone)]
pub struct ManagerComponent {
    key: TypeKey,
    instance: Arc<dyn Any + Send + Sync>,
    manager: Arc<dyn Manager>,
}

impl ManagerComponent {
    /// Wrap a manager under its concrete type `M`.
    pub fn new<M: Manager>(manager: Arc<M>) -> Self {
        Self {
            key: TypeKey::of::<M>(),
            instance: manager.clone(),
            manager,
        }
    }

    /// The concrete type this component registers under.
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// The instance as stored in the locator.
    pub fn instance(&self) -> Arc<dyn Any + Send + Sync> {
        self.instance.clone()
    }

    /// The instance as a manager, for lifecycle hooks.
    pub fn manager(&self) -> &Arc<dyn Manager> {
        &self.manager
    }

    pub fn name(&self) -> &'static str {
        self.manager.manager_name()
    }

    /// Downcast back to a concrete manager type.
    pub fn downcast<M: Manager>(&self) -> Option<Arc<M>> {
        self.instance.clone().downcast::<M>().ok()
    }
}

impl<M: Manager> From<Arc<M>> for ManagerComponent {
    fn from(manager: Arc<M>) -> Self {
        Self::new(manager)
    }
}

impl fmt::Debug for ManagerComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagerComponent")
            .field("key", &self.key.name())
            .field("name", &self.name())
            .finish()
    }
}
