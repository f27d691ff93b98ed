//! Singleton pattern.
//!
//! Two ways to declare a process-wide single instance are provided:
//!
//! * [`Singleton`] + [`impl_singleton!`] for a type you own. The type keeps
//!   its fields private, so the only route to a value from outside its module
//!   is [`Singleton::instance`].
//! * [`Global<T>`] + [`define_singleton!`] for a named `static` holding any
//!   `T`, initialised on first dereference.
//!
//! Both are backed by an [`InstanceSlot`], which performs the populate-once
//! transition atomically.

use std::fmt;
use std::ops::Deref;

use super::slot::InstanceSlot;

/// A type with exactly one instance per process.
///
/// Implement this with [`impl_singleton!`] rather than by hand: the macro
/// generates the backing `static` slot and routes construction through
/// [`populate`], which emits the construction diagnostic.
///
/// Implementors should not derive `Clone` or `Copy`. Copying the returned
/// `&'static Self` is the only way to share the instance.
///
/// # Example
/// ```
/// use sgl_core::impl_singleton;
/// use sgl_core::patterns::singleton::Singleton;
///
/// pub struct Counter { start: u32 }
/// impl_singleton!(Counter, Counter { start: 10 });
///
/// let a = Counter::instance();
/// let b = Counter::instance();
/// assert!(std::ptr::eq(a, b));
/// assert_eq!(a.start, 10);
/// assert_eq!(Counter::slot().construction_count(), 1);
/// ```
pub trait Singleton: Sized + Send + Sync + 'static {
    /// The slot holding the instance.
    fn slot() -> &'static InstanceSlot<Self>;

    /// The one instance, created on the first call.
    fn instance() -> &'static Self;

    /// `true` once [`instance`](Self::instance) has been called.
    fn is_created() -> bool {
        Self::slot().is_populated()
    }

    /// `true` if `self` is the shared instance.
    fn is_instance(&self) -> bool {
        Self::slot().get().is_some_and(|held| std::ptr::eq(held, self))
    }
}

/// Populate `slot` with `init` if it is empty, logging the construction.
///
/// The diagnostic `"<label> instance created!"` is emitted once, by the
/// thread whose `init` actually ran.
pub fn populate<'a, T, F>(slot: &'a InstanceSlot<T>, label: &str, init: F) -> &'a T
where
    F: FnOnce() -> T,
{
    slot.get_or_init(|| {
        let value = init();
        log::info!("{label} instance created!");
        value
    })
}

/// `true` if `a` and `b` are the same object (not merely equal).
pub fn same_instance<T>(a: &T, b: &T) -> bool {
    std::ptr::eq(a, b)
}

/// Implement [`Singleton`] for `$ty`, constructing it with `$init`.
///
/// `$init` is evaluated in the invoking module, so it may use private fields;
/// callers elsewhere cannot.
///
/// ```compile_fail
/// mod config {
///     pub struct Config { level: u8 }
///     sgl_core::impl_singleton!(Config, Config { level: 1 });
/// }
/// // Fields are private: no second instance can be built here.
/// let rogue = config::Config { level: 2 };
/// ```
#[macro_export]
macro_rules! impl_singleton {
    ($ty:ty, $init:expr) => {
        impl $crate::patterns::singleton::Singleton for $ty {
            fn slot() -> &'static $crate::patterns::slot::InstanceSlot<Self> {
                static SLOT: $crate::patterns::slot::InstanceSlot<$ty> =
                    $crate::patterns::slot::InstanceSlot::new();
                &SLOT
            }

            fn instance() -> &'static Self {
                $crate::patterns::singleton::populate(
                    <Self as $crate::patterns::singleton::Singleton>::slot(),
                    stringify!($ty),
                    || $init,
                )
            }
        }
    };
}

/// A named `static` singleton, lazily initialised on first dereference.
///
/// Declare one with [`define_singleton!`].
pub struct Global<T> {
    slot: InstanceSlot<T>,
    label: &'static str,
    init: fn() -> T,
}

impl<T> Global<T> {
    /// Create an empty holder that will run `init` on first access.
    pub const fn new(label: &'static str, init: fn() -> T) -> Self {
        Self {
            slot: InstanceSlot::new(),
            label,
            init,
        }
    }

    /// The one instance, created on the first call.
    pub fn get(&self) -> &T {
        populate(&self.slot, self.label, self.init)
    }

    /// The slot backing this holder.
    pub fn slot(&self) -> &InstanceSlot<T> {
        &self.slot
    }

    /// Name used in the construction diagnostic.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<T> Deref for Global<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T> fmt::Debug for Global<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Global")
            .field("label", &self.label)
            .field("state", &self.slot.state())
            .finish()
    }
}

/// Define a singleton `static` named `$name` of type `$ty`.
///
/// The instance is lazily initialised on first access.
///
/// # Example
/// ```
/// use sgl_core::define_singleton;
///
/// struct Greeter { greeting: &'static str }
/// define_singleton!(GREETER, Greeter, Greeter { greeting: "hello" });
///
/// assert_eq!(GREETER.slot().construction_count(), 0);
/// assert_eq!(GREETER.greeting, "hello");
/// assert!(std::ptr::eq(GREETER.get(), &*GREETER));
/// assert_eq!(GREETER.slot().construction_count(), 1);
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($name:ident, $ty:ty, $init:expr) => {
        /// Lazily-initialised global singleton.
        pub static $name: $crate::patterns::singleton::Global<$ty> =
            $crate::patterns::singleton::Global::new(stringify!($name), || $init);
    };
}
