//! Racing first access to the demonstration singletons.
//!
//! This file holds a single test so that nothing else in this binary has
//! populated `Guarded` or `Stamped` before the threads are released.

use std::sync::Barrier;

use singleton::core::{Singleton, SlotState};
use singleton::{Guarded, Registered, Stamped};

#[test]
fn concurrent_first_calls_agree() {
    const THREADS: usize = 16;
    assert_eq!(Guarded::slot().state(), SlotState::Empty);
    assert_eq!(Stamped::slot().state(), SlotState::Empty);

    let barrier = Barrier::new(THREADS);
    let seen: Vec<(usize, usize, usize)> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    (
                        Guarded::instance() as *const Guarded as usize,
                        Stamped::instance() as *const Stamped as usize,
                        Registered::instance() as *const Registered as usize,
                    )
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(seen.iter().all(|&triple| triple == seen[0]));
    assert_eq!(Guarded::slot().construction_count(), 1);
    assert_eq!(Stamped::slot().construction_count(), 1);
    assert_eq!(Stamped::slot().state(), SlotState::Populated);
}
