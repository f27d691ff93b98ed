//! Instance holder slot.
//!
//! An [`InstanceSlot<T>`] is the process-wide storage behind every singleton
//! in this workspace. It starts [`Empty`](SlotState::Empty), becomes
//! [`Populated`](SlotState::Populated) on the first access, and never goes
//! back. The populate-once transition is delegated to `std::sync::OnceLock`,
//! so any number of threads racing on the first access observe exactly one
//! construction and the same resulting reference.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// The two states a slot can be in. `Populated` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotState {
    /// No instance has been created yet.
    Empty,
    /// The one instance exists and will be returned from now on.
    Populated,
}

/// Storage for at most one value of type `T`.
///
/// `new` is `const`, so a slot can live directly in a `static`:
///
/// ```
/// use sgl_core::patterns::slot::{InstanceSlot, SlotState};
///
/// static SLOT: InstanceSlot<String> = InstanceSlot::new();
///
/// assert_eq!(SLOT.state(), SlotState::Empty);
/// let a = SLOT.get_or_init(|| "first".to_owned());
/// let b = SLOT.get_or_init(|| "second".to_owned());
/// assert!(std::ptr::eq(a, b));
/// assert_eq!(b, "first");
/// assert_eq!(SLOT.construction_count(), 1);
/// ```
pub struct InstanceSlot<T> {
    cell: OnceLock<T>,
    constructions: AtomicUsize,
}

impl<T> InstanceSlot<T> {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            constructions: AtomicUsize::new(0),
        }
    }

    /// Return the held value, running `init` first if the slot is empty.
    ///
    /// `init` runs at most once over the lifetime of the slot, even when
    /// several threads call this concurrently; the losers block until the
    /// winner has stored its value. If `init` panics the slot stays empty and
    /// a later call may try again.
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(|| {
            let value = init();
            self.constructions.fetch_add(1, Ordering::AcqRel);
            log::debug!("populated slot for {}", std::any::type_name::<T>());
            value
        })
    }

    /// Store an already-built `value` if the slot is empty.
    ///
    /// Returns the held value on success, or hands `value` back if the slot
    /// was already populated.
    pub fn set(&self, value: T) -> Result<&T, T> {
        let mut pending = Some(value);
        let held = self.get_or_init(|| match pending.take() {
            Some(value) => value,
            None => unreachable!("slot initialiser ran twice"),
        });
        match pending {
            None => Ok(held),
            Some(rejected) => Err(rejected),
        }
    }

    /// Return the held value without constructing one.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Current state of the slot.
    pub fn state(&self) -> SlotState {
        match self.cell.get() {
            Some(_) => SlotState::Populated,
            None => SlotState::Empty,
        }
    }

    /// `true` once the instance exists.
    pub fn is_populated(&self) -> bool {
        self.state() == SlotState::Populated
    }

    /// How many times the constructor actually ran: `0` or `1`.
    pub fn construction_count(&self) -> usize {
        self.constructions.load(Ordering::Acquire)
    }
}

impl<T> Default for InstanceSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for InstanceSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceSlot")
            .field("type", &std::any::type_name::<T>())
            .field("state", &self.state())
            .finish()
    }
}
