//! In-memory host object.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use locus_protocols::host::ComponentHost;
use locus_protocols::manager::{Manager, ManagerComponent};

/// A named object with an ordered list of attached manager components.
///
/// Stands in for an engine object when running outside an engine, and in tests.
pub struct GameObject {
    name: String,
    components: RwLock<Vec<ManagerComponent>>,
    persistent: AtomicBool,
    destroyed: AtomicBool,
}

impl GameObject {
    /// Create an object with no components.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: RwLock::new(Vec::new()),
            persistent: AtomicBool::new(false),
            destroyed: AtomicBool::new(false),
        }
    }

    /// Builder-style attach.
    pub fn with_manager<M: Manager>(self, manager: Arc<M>) -> Self {
        self.attach(manager);
        self
    }

    /// Attach a manager under its concrete type.
    pub fn attach<M: Manager>(&self, manager: Arc<M>) {
        self.attach_component(ManagerComponent::new(manager));
    }

    /// Attach an already wrapped component.
    pub fn attach_component(&self, component: ManagerComponent) {
        debug!("Attached {} to {}", component.name(), self.name);
        self.components.write().push(component);
    }

    pub fn component_count(&self) -> usize {
        self.components.read().len()
    }

    /// Whether the host was asked to keep this object across scene loads.
    pub fn is_persistent(&self) -> bool {
        self.persistent.load(Ordering::SeqCst)
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }
}

impl ComponentHost for GameObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn managers(&self) -> Vec<ManagerComponent> {
        self.components.read().clone()
    }

    fn persist_across_scenes(&self) {
        self.persistent.store(true, Ordering::SeqCst);
    }

    fn destroy(&self) {
        self.destroyed.store(true, Ordering::SeqCst);
    }
}
