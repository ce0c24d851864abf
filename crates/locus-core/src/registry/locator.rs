//! Manager locator.
//!
//! Maps the exact concrete type of a manager to the single instance
//! registered for it. Every operation holds the map lock for its whole
//! read-modify-write, so register-once and exact lookup stay atomic when the
//! locator is shared between threads.

use std::any::{Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use locus_protocols::error::LocatorError;
use locus_protocols::manager::{ManagerComponent, ManagerRegistrar};
use locus_protocols::types::TypeKey;

struct Registration {
    key: TypeKey,
    instance: Arc<dyn Any + Send + Sync>,
}

/// Registry of managers keyed by concrete type.
///
/// The locator holds shared handles for lookup only; entries are added by
/// explicit registration and removed by [`deregister`](Self::deregister) or
/// [`clear_all`](Self::clear_all), never implicitly.
pub struct ManagerLocator {
    managers: RwLock<HashMap<TypeId, Registration>>,
}

impl ManagerLocator {
    /// Create a new empty locator.
    pub fn new() -> Self {
        Self {
            managers: RwLock::new(HashMap::new()),
        }
    }

    /// Register a manager under its type `T`.
    ///
    /// Returns an error if a manager of type `T` is already registered. The
    /// existing entry is left untouched.
    pub fn register<T: Any + Send + Sync>(&self, manager: Arc<T>) -> Result<(), LocatorError> {
        self.register_optional(Some(manager))
    }

    /// Register a possibly absent manager under type `T`.
    ///
    /// `None` fails with [`LocatorError::NullArgument`] and leaves the
    /// locator unchanged.
    pub fn register_optional<T: Any + Send + Sync>(
        &self,
        manager: Option<Arc<T>>,
    ) -> Result<(), LocatorError> {
        let key = TypeKey::of::<T>();
        let manager = manager.ok_or_else(|| LocatorError::NullArgument(key.name().to_string()))?;
        self.insert(key, manager)
    }

    /// Get the manager registered under type `T`.
    ///
    /// Lookup is by exact type identity.
    pub fn get<T: Any + Send + Sync>(&self) -> Result<Arc<T>, LocatorError> {
        let key = TypeKey::of::<T>();
        let instance = self
            .managers
            .read()
            .get(&key.id())
            .map(|registration| registration.instance.clone())
            .ok_or_else(|| LocatorError::NotRegistered(key.name().to_string()))?;

        instance
            .downcast::<T>()
            .map_err(|_| LocatorError::NotRegistered(key.name().to_string()))
    }

    /// Remove the manager registered under type `T`.
    ///
    /// Returns whether an entry was removed.
    pub fn deregister<T: Any + Send + Sync>(&self) -> bool {
        let key = TypeKey::of::<T>();
        let removed = self.managers.write().remove(&key.id()).is_some();
        if removed {
            debug!("Deregistered manager: {}", key.short_name());
        }
        removed
    }

    /// Remove every registered manager.
    pub fn clear_all(&self) {
        let mut managers = self.managers.write();
        let count = managers.len();
        managers.clear();
        debug!("Cleared {} managers", count);
    }

    /// Check if a manager of type `T` is registered.
    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.managers.read().contains_key(&TypeId::of::<T>())
    }

    /// List the full type names of all registered managers, sorted.
    pub fn registered_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .managers
            .read()
            .values()
            .map(|registration| registration.key.name())
            .collect();
        names.sort_unstable();
        names
    }

    /// Get the number of registered managers.
    pub fn len(&self) -> usize {
        self.managers.read().len()
    }

    /// Check if the locator is empty.
    pub fn is_empty(&self) -> bool {
        self.managers.read().is_empty()
    }

    fn insert(&self, key: TypeKey, instance: Arc<dyn Any + Send + Sync>) -> Result<(), LocatorError> {
        match self.managers.write().entry(key.id()) {
            Entry::Occupied(_) => Err(LocatorError::DuplicateRegistration(key.name().to_string())),
            Entry::Vacant(slot) => {
                slot.insert(Registration { key, instance });
                debug!("Registered type: {}", key.short_name());
                Ok(())
            }
        }
    }
}

impl ManagerRegistrar for ManagerLocator {
    fn register_component(&self, component: &ManagerComponent) -> Result<(), LocatorError> {
        self.insert(component.key(), component.instance())
    }
}

impl Default for ManagerLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "locator_tests.rs"]
mod tests;
