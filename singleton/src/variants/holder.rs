//! Statically-held singleton.
//!
//! The instance lives in a private `static` [`Global`], so it is created the
//! first time [`Holder::instance`] runs and never before.

use sgl_core::patterns::slot::InstanceSlot;
use sgl_core::{Global, Singleton};

use super::announce;

static HOLDER: Global<Holder> = Global::new("Holder", || Holder { _private: () });

/// A singleton held in a private `static`.
///
/// ```compile_fail
/// // No public constructor, no public fields.
/// let rogue = singleton::Holder { _private: () };
/// ```
#[derive(Debug)]
pub struct Holder {
    _private: (),
}

impl Singleton for Holder {
    fn slot() -> &'static InstanceSlot<Self> {
        HOLDER.slot()
    }

    fn instance() -> &'static Self {
        HOLDER.get()
    }
}

impl Holder {
    /// Example behavior method.
    pub fn do_something(&self) -> &'static str {
        announce("Holder is doing something!")
    }

    /// Greeting identifying the one instance.
    pub fn show_message(&self) -> &'static str {
        announce("Hello, I am the one and only instance of the Holder singleton!")
    }
}
