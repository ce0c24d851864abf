//! Host runtime collaborator.

use crate::manager::ManagerComponent;

/// The engine object a bootstrapper is attached to.
///
/// The host owns the manager instances and decides how objects survive scene
/// transitions; the bootstrapper only calls into it.
pub trait ComponentHost: Send + Sync {
    /// Object name, used in logs.
    fn name(&self) -> &str;

    /// All manager components attached to this object, in attach order.
    fn managers(&self) -> Vec<ManagerComponent>;

    /// Keep this object alive across scene loads.
    fn persist_across_scenes(&self);

    /// Destroy this object. Called on a duplicate root.
    fn destroy(&self);
}
