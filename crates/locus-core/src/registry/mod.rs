//! Type-keyed manager registry.

mod locator;

pub use locator::ManagerLocator;
