//! Bootstrap lifecycle types.

use std::fmt;

/// Bootstrapper state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BootstrapState {
    /// Initial state, awake not called yet.
    Uninitialized = 0,
    /// Registering itself and its managers.
    Initializing = 1,
    /// Every manager registered and loaded. Terminal for the process.
    Initialized = 2,
    /// A registration failed; bootstrap stopped.
    Failed = 3,
    /// Lost the root claim to an earlier instance.
    Destroyed = 4,
}

impl From<u8> for BootstrapState {
    fn from(v: u8) -> Self {
        match v {
            0 => BootstrapState::Uninitialized,
            1 => BootstrapState::Initializing,
            2 => BootstrapState::Initialized,
            3 => BootstrapState::Failed,
            4 => BootstrapState::Destroyed,
            _ => BootstrapState::Uninitialized,
        }
    }
}

impl fmt::Display for BootstrapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Options controlling a bootstrap run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapOptions {
    /// Also register host components of the bootstrapper's own type.
    ///
    /// The bootstrapper always registers itself first, so enabling this makes
    /// awake fail with a duplicate registration when the host lists it.
    pub include_self_in_enumeration: bool,

    /// Ask the host to keep the root object alive across scene loads.
    pub persist_across_scenes: bool,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            include_self_in_enumeration: false,
            persist_across_scenes: true,
        }
    }
}

/// Result of a successful awake call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AwakeOutcome {
    /// This instance became the root and loaded the listed managers, in order.
    Initialized { registered: Vec<&'static str> },
    /// Another instance already owns the root; this one was destroyed.
    Duplicate,
}
