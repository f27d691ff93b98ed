//! Singletons kept in the global per-type registry.
//!
//! [`Registered`] has no slot of its own; its instance lives in
//! [`Registry::global`] under its `TypeId`. [`shared`] applies the same
//! treatment to any `Default` type, turning it into a process-wide instance
//! without touching its definition.

use std::any::Any;

use sgl_core::Registry;

use super::announce;

/// A singleton stored in the global [`Registry`].
#[derive(Debug)]
pub struct Registered {
    _private: (),
}

impl Registered {
    /// The one instance, created on the first call.
    pub fn instance() -> &'static Registered {
        Registry::global().get_or_create(|| Registered { _private: () })
    }

    /// Example behavior method.
    pub fn do_something(&self) -> &'static str {
        announce("Registered is doing something!")
    }
}

/// The process-wide instance of `T`, built with `T::default()` on first use.
///
/// ```
/// #[derive(Default)]
/// struct Metrics { hits: u64 }
///
/// let a = singleton::shared::<Metrics>();
/// let b = singleton::shared::<Metrics>();
/// assert!(std::ptr::eq(a, b));
/// assert_eq!(a.hits, 0);
/// ```
pub fn shared<T>() -> &'static T
where
    T: Default + Any + Send + Sync,
{
    Registry::global().get_or_create(T::default)
}
