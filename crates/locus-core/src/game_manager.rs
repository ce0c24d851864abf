//! Root bootstrapper.
//!
//! The first [`GameManager`] to awake in a [`GameContext`] becomes the root:
//! it registers itself, then every manager attached to its host object, and
//! notifies each manager once it is registered. Later instances are destroyed.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use locus_protocols::error::BootstrapError;
use locus_protocols::host::ComponentHost;
use locus_protocols::manager::{Manager, ManagerComponent, ManagerRegistrar};
use locus_protocols::types::TypeKey;

use crate::context::{GameContext, InstanceClaim};
use crate::lifecycle::{AwakeOutcome, BootstrapOptions, BootstrapState};

/// The root bootstrapper.
///
/// A game can attach its own root manager with [`GameManager::with_root`];
/// it is registered under its own type right after the bootstrapper.
pub struct GameManager {
    options: BootstrapOptions,
    root: Option<ManagerComponent>,
    state: AtomicU8,
    loaded: RwLock<Vec<&'static str>>,
}

impl Manager for GameManager {}

impl GameManager {
    /// Create a new bootstrapper.
    pub fn new(options: BootstrapOptions) -> Self {
        Self {
            options,
            root: None,
            state: AtomicU8::new(BootstrapState::Uninitialized as u8),
            loaded: RwLock::new(Vec::new()),
        }
    }

    /// Create a bootstrapper that also registers a game-specific root.
    ///
    /// The root counts as part of the bootstrapper: it is registered during
    /// self-registration and skipped in enumeration like the bootstrapper.
    pub fn with_root<R: Manager>(options: BootstrapOptions, root: Arc<R>) -> Self {
        Self {
            root: Some(ManagerComponent::new(root)),
            ..Self::new(options)
        }
    }

    /// Type the game-specific root is registered under, if any.
    pub fn root_key(&self) -> Option<TypeKey> {
        self.root.as_ref().map(ManagerComponent::key)
    }

    /// Get current state.
    pub fn state(&self) -> BootstrapState {
        BootstrapState::from(self.state.load(Ordering::SeqCst))
    }

    pub fn is_initialized(&self) -> bool {
        self.state() == BootstrapState::Initialized
    }

    pub fn options(&self) -> &BootstrapOptions {
        &self.options
    }

    /// Names of the managers loaded by this bootstrapper, in load order.
    pub fn loaded_managers(&self) -> Vec<&'static str> {
        self.loaded.read().clone()
    }

    /// Run the one-time bootstrap against `host`.
    ///
    /// Registration failures stop processing immediately. Managers already
    /// registered stay in the locator until the context is reset.
    pub fn awake(
        self: &Arc<Self>,
        ctx: &GameContext,
        host: &dyn ComponentHost,
    ) -> Result<AwakeOutcome, BootstrapError> {
        if let Err(current) = self.state.compare_exchange(
            BootstrapState::Uninitialized as u8,
            BootstrapState::Initializing as u8,
            Ordering::SeqCst,
            Ordering::SeqCst,
        ) {
            return Err(BootstrapError::InvalidState(
                BootstrapState::from(current).to_string(),
            ));
        }

        if ctx.claim_instance(self) == InstanceClaim::Taken {
            warn!("Root already initialized, destroying {}", host.name());
            host.destroy();
            self.set_state(BootstrapState::Destroyed);
            return Ok(AwakeOutcome::Duplicate);
        }

        if self.options.persist_across_scenes {
            host.persist_across_scenes();
        }

        match self.register_all(ctx, host) {
            Ok(registered) => {
                self.set_state(BootstrapState::Initialized);
                info!("{} initialized with {} managers", host.name(), registered.len());
                Ok(AwakeOutcome::Initialized { registered })
            }
            Err(e) => {
                self.set_state(BootstrapState::Failed);
                Err(e)
            }
        }
    }

    fn register_all(
        self: &Arc<Self>,
        ctx: &GameContext,
        host: &dyn ComponentHost,
    ) -> Result<Vec<&'static str>, BootstrapError> {
        let locator = ctx.locator();
        locator.register(self.clone())?;
        if let Some(root) = &self.root {
            locator.register_component(root)?;
            info!("Registered root: {}", root.name());
        }

        let own_key = TypeKey::of::<Self>();
        let is_self = |key: TypeKey| key == own_key || self.root_key() == Some(key);
        let mut registered = Vec::new();

        for component in host.managers() {
            if is_self(component.key()) && !self.options.include_self_in_enumeration {
                debug!("Skipping {} in manager enumeration", component.name());
                continue;
            }

            locator.register_component(&component)?;
            info!("Registered manager: {}", component.name());

            component.manager().loaded();
            self.loaded.write().push(component.name());
            registered.push(component.name());
        }

        Ok(registered)
    }

    fn set_state(&self, state: BootstrapState) {
        self.state.store(state as u8, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "game_manager_tests.rs"]
mod tests;
