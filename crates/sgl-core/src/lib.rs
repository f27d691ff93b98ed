//! # sgl-core
//!
//! Core types and error definitions for singleton-rs.
//!
//! This crate provides the building blocks shared by every singleton in the
//! workspace: the populate-once [`InstanceSlot`], the [`Singleton`] trait and
//! its [`impl_singleton!`] / [`define_singleton!`] macros, the per-type
//! [`Registry`], and the error taxonomy.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `fail!` macro.
pub mod errors;

/// Instance slot, `Singleton` trait, per-type registry.
pub mod patterns;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use patterns::registry::Registry;
pub use patterns::singleton::{same_instance, Global, Singleton};
pub use patterns::slot::{InstanceSlot, SlotState};
