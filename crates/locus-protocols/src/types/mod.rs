//! Common types used across the Locus crates.

mod type_key;

pub use type_key::*;
