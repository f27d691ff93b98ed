//! # singleton
//!
//! Process-wide single-instance access for Rust types.
//!
//! This crate is a **façade** over [`sgl_core`] plus a set of demonstration
//! singletons, each showing one way the single-instance contract is kept:
//!
//! | Type | Shows |
//! |------|-------|
//! | [`Holder`] | a private `static` holder, created on first access |
//! | [`Guarded`] | deserialization rejected with an explicit error |
//! | [`Stamped`] | creation timestamp; deserialization redirected to the shared instance |
//! | [`Registered`] | one instance per type through the global [`Registry`](crate::core::Registry) |
//!
//! None of them implement `Clone`, and none can be built outside their
//! module. The first call to an accessor logs `"<Type> instance created!"`;
//! later calls are silent.
//!
//! ## Quick start
//!
//! ```rust
//! use singleton::core::Singleton;
//! use singleton::Holder;
//!
//! let a = Holder::instance();
//! let b = Holder::instance();
//! assert!(std::ptr::eq(a, b));
//! assert_eq!(a.do_something(), "Holder is doing something!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Instance slots, the `Singleton` trait, registry, and errors.
pub use sgl_core as core;

/// Demonstration singletons.
pub mod variants;

pub use variants::guarded::Guarded;
pub use variants::holder::Holder;
pub use variants::registered::{shared, Registered};
pub use variants::stamped::Stamped;
