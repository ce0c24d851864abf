//! Manager protocol definitions.
//!
//! Managers are the components a bootstrapper discovers and publishes
//! through the locator.

mod component;
mod traits;

pub use component::*;
pub use traits::*;
