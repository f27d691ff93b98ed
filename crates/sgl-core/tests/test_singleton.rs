//! Integration tests for the single-instance contract.
//!
//! Every type declared here is used by exactly one test so that the
//! "first access" in each test really is the first for that slot.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;

use proptest::prelude::*;
use sgl_core::{define_singleton, impl_singleton};
use sgl_core::{same_instance, Registry, Singleton, SlotState};

// ─── Sequential access ────────────────────────────────────────────────────────

struct Repeated {
    label: &'static str,
}
impl_singleton!(Repeated, Repeated { label: "repeated" });

proptest! {
    #[test]
    fn any_number_of_calls_returns_one_object(n in 1usize..256) {
        let first = Repeated::instance();
        for _ in 0..n {
            prop_assert!(same_instance(first, Repeated::instance()));
        }
        prop_assert_eq!(first.label, "repeated");
        prop_assert_eq!(Repeated::slot().construction_count(), 1);
    }
}

// ─── State machine ────────────────────────────────────────────────────────────

struct Lifecycle;
impl_singleton!(Lifecycle, Lifecycle);

#[test]
fn empty_then_populated_forever() {
    assert_eq!(Lifecycle::slot().state(), SlotState::Empty);
    assert!(Lifecycle::slot().get().is_none());

    let held = Lifecycle::instance();
    assert_eq!(Lifecycle::slot().state(), SlotState::Populated);

    for _ in 0..10 {
        Lifecycle::instance();
        assert_eq!(Lifecycle::slot().state(), SlotState::Populated);
    }
    assert!(same_instance(held, Lifecycle::slot().get().unwrap()));
}

// ─── Concurrent first access ──────────────────────────────────────────────────

static RACED_BUILDS: AtomicUsize = AtomicUsize::new(0);

struct Raced {
    payload: Vec<u64>,
}
impl_singleton!(Raced, {
    RACED_BUILDS.fetch_add(1, Ordering::SeqCst);
    // Widen the window in which a second thread could slip in.
    std::thread::yield_now();
    Raced { payload: (0..32).collect() }
});

#[test]
fn concurrent_first_calls_build_once() {
    const THREADS: usize = 32;
    let barrier = Barrier::new(THREADS);

    let addrs: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    Raced::instance() as *const Raced as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(RACED_BUILDS.load(Ordering::SeqCst), 1);
    assert_eq!(Raced::slot().construction_count(), 1);
    assert!(addrs.iter().all(|&a| a == addrs[0]));
    assert_eq!(Raced::instance().payload.len(), 32);
}

static GLOBAL_BUILDS: AtomicUsize = AtomicUsize::new(0);

define_singleton!(SHARED_TABLE, Vec<u32>, {
    GLOBAL_BUILDS.fetch_add(1, Ordering::SeqCst);
    vec![1, 2, 3]
});

#[test]
fn concurrent_global_derefs_build_once() {
    const THREADS: usize = 16;
    let barrier = Barrier::new(THREADS);

    std::thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                barrier.wait();
                assert_eq!(SHARED_TABLE.iter().sum::<u32>(), 6);
            });
        }
    });

    assert_eq!(GLOBAL_BUILDS.load(Ordering::SeqCst), 1);
}

// ─── Registry ─────────────────────────────────────────────────────────────────

struct Catalogued(u8);

#[test]
fn global_registry_is_itself_a_singleton() {
    assert!(same_instance(Registry::global(), Registry::global()));

    let a = Registry::global().get_or_create(|| Catalogued(1));
    let b = Registry::global().get_or_create(|| Catalogued(2));
    assert!(same_instance(a, b));
    assert_eq!(b.0, 1);
    assert!(Registry::global().contains::<Catalogued>());
}
