//! Per-type instance registry.
//!
//! A [`Registry`] remembers one instance per Rust type, keyed by `TypeId`.
//! This suits types that cannot carry their own `static` slot, such as types
//! declared generically or inside functions.
//!
//! Each type gets its own leaked [`InstanceSlot`]. The registry mutex only
//! guards the lookup of that slot; construction happens afterwards, on the
//! slot itself. Each type is therefore still built exactly once when several
//! threads race, and a constructor may ask the registry for other types.
//!
//! Slots are leaked on insertion and never removed, which is what lets the
//! registry hand out `&'static T`.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use super::slot::InstanceSlot;
use crate::errors::Result;
use crate::fail;

/// Type-erased view of an `InstanceSlot<T>` held by the registry.
trait ErasedSlot: Send + Sync {
    fn is_populated(&self) -> bool;
    fn as_any(&self) -> &(dyn Any + Send + Sync);
}

impl<T: Any + Send + Sync> ErasedSlot for InstanceSlot<T> {
    fn is_populated(&self) -> bool {
        InstanceSlot::is_populated(self)
    }

    fn as_any(&self) -> &(dyn Any + Send + Sync) {
        self
    }
}

type Entry = &'static dyn ErasedSlot;

/// A table of singletons, one per type.
pub struct Registry {
    slots: Mutex<HashMap<TypeId, Entry>>,
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Return a reference to the process-wide registry.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::new)
    }

    /// Return the instance of `T`, building it with `init` if this registry
    /// has none yet.
    ///
    /// `init` runs without the registry locked, so it may itself fetch other
    /// types from the same registry. It must not ask for `T` again.
    ///
    /// # Example
    /// ```
    /// use sgl_core::patterns::registry::Registry;
    ///
    /// struct Cache { capacity: usize }
    ///
    /// let registry = Registry::new();
    /// let a = registry.get_or_create(|| Cache { capacity: 64 });
    /// let b = registry.get_or_create(|| Cache { capacity: 128 });
    /// assert!(std::ptr::eq(a, b));
    /// assert_eq!(b.capacity, 64);
    /// ```
    pub fn get_or_create<T, F>(&self, init: F) -> &'static T
    where
        T: Any + Send + Sync,
        F: FnOnce() -> T,
    {
        self.slot::<T>().get_or_init(|| {
            let value = init();
            log::info!("{} instance created!", short_type_name::<T>());
            value
        })
    }

    /// Store an already-built `value` as the instance of `T`.
    ///
    /// Fails with [`Error::ConstructionBypass`](crate::Error::ConstructionBypass)
    /// if `T` already has an instance; the existing one is left untouched and
    /// `value` is dropped.
    pub fn register<T: Any + Send + Sync>(&self, value: T) -> Result<&'static T> {
        match self.slot::<T>().set(value) {
            Ok(held) => {
                log::info!("{} instance registered!", short_type_name::<T>());
                Ok(held)
            }
            Err(_) => fail!(
                ConstructionBypass,
                "a {} instance already exists",
                short_type_name::<T>()
            ),
        }
    }

    /// Return the instance of `T` if it has been created.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<&'static T> {
        let entry = self.lock().get(&TypeId::of::<T>()).copied()?;
        downcast::<T>(entry).get()
    }

    /// `true` if an instance of `T` has been created.
    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.get::<T>().is_some()
    }

    /// Number of types with an instance.
    pub fn len(&self) -> usize {
        self.lock().values().filter(|slot| slot.is_populated()).count()
    }

    /// `true` if no instance has been created yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The slot for `T`, inserted empty on first request. The lock is
    /// released before this returns.
    fn slot<T: Any + Send + Sync>(&self) -> &'static InstanceSlot<T> {
        let entry = *self.lock().entry(TypeId::of::<T>()).or_insert_with(|| {
            let slot: Entry = Box::leak(Box::new(InstanceSlot::<T>::new()));
            slot
        });
        downcast(entry)
    }

    // No user code runs under the lock, so a poisoned map is still intact.
    fn lock(&self) -> MutexGuard<'_, HashMap<TypeId, Entry>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").field("len", &self.len()).finish()
    }
}

fn downcast<T: Any + Send + Sync>(entry: Entry) -> &'static InstanceSlot<T> {
    match entry.as_any().downcast_ref::<InstanceSlot<T>>() {
        Some(slot) => slot,
        // Slots are keyed by their own TypeId.
        None => unreachable!("registry slot stored under the wrong TypeId"),
    }
}

/// Last path segment of `T`'s type name, e.g. `Registered` for
/// `singleton::variants::Registered`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
