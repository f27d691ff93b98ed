//! Patterns sub-module: slot, singleton, registry.

pub mod registry;
pub mod singleton;
pub mod slot;
