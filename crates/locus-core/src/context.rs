//! Process-scoped game context.
//!
//! Owns the locator and the root bootstrapper slot. Construct one at process
//! start and pass it by reference to everything that needs a manager.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::game_manager::GameManager;
use crate::registry::ManagerLocator;

/// Outcome of claiming the root slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceClaim {
    /// The slot was empty and now holds the caller.
    Claimed,
    /// The caller already holds the slot.
    AlreadyOwned,
    /// A different instance holds the slot.
    Taken,
}

/// Shared state for one game process.
pub struct GameContext {
    locator: Arc<ManagerLocator>,
    instance: RwLock<Option<Arc<GameManager>>>,
}

impl GameContext {
    /// Create a context with an empty locator and no root.
    pub fn new() -> Self {
        Self::with_locator(Arc::new(ManagerLocator::new()))
    }

    /// Create a context around an existing locator.
    pub fn with_locator(locator: Arc<ManagerLocator>) -> Self {
        Self {
            locator,
            instance: RwLock::new(None),
        }
    }

    pub fn locator(&self) -> &Arc<ManagerLocator> {
        &self.locator
    }

    /// The bootstrapper that owns the root slot, if any.
    pub fn instance(&self) -> Option<Arc<GameManager>> {
        self.instance.read().clone()
    }

    /// Atomically claim the root slot for `manager`.
    pub fn claim_instance(&self, manager: &Arc<GameManager>) -> InstanceClaim {
        let mut slot = self.instance.write();
        match slot.as_ref() {
            Some(current) if Arc::ptr_eq(current, manager) => InstanceClaim::AlreadyOwned,
            Some(_) => InstanceClaim::Taken,
            None => {
                *slot = Some(manager.clone());
                InstanceClaim::Claimed
            }
        }
    }

    /// Drop the root claim and clear every registered manager.
    pub fn reset(&self) {
        self.instance.write().take();
        self.locator.clear_all();
        debug!("Game context reset");
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new()
    }
}
