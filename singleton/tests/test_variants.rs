//! Integration tests for the demonstration singletons.

use proptest::prelude::*;
use singleton::core::{same_instance, Singleton};
use singleton::{Guarded, Holder, Registered, Stamped};

// ─── Identity ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn repeated_calls_share_identity(n in 1usize..64) {
        let h = Holder::instance();
        let g = Guarded::instance();
        let s = Stamped::instance();
        let r = Registered::instance();
        for _ in 0..n {
            prop_assert!(same_instance(h, Holder::instance()));
            prop_assert!(same_instance(g, Guarded::instance()));
            prop_assert!(same_instance(s, Stamped::instance()));
            prop_assert!(same_instance(r, Registered::instance()));
        }
    }
}

// ─── Serialized forms ────────────────────────────────────────────────────────

#[test]
fn guarded_round_trip_is_refused() {
    let text = toml::to_string(Guarded::instance()).unwrap();
    assert!(text.contains("kind = \"Guarded\""));

    let err = toml::from_str::<Guarded>(&text).unwrap_err();
    assert!(
        err.to_string()
            .contains("cannot deserialize singleton: Guarded must not be rehydrated"),
        "unexpected error: {err}"
    );
}

#[test]
fn stamped_round_trip_yields_the_shared_instance() {
    let original = Stamped::instance();
    let text = toml::to_string(original).unwrap();
    assert!(text.starts_with("created_at = "));

    let revived: &'static Stamped = toml::from_str(&text).unwrap();
    assert!(same_instance(original, revived));
    assert_eq!(Stamped::slot().construction_count(), 1);
}

// ─── Behavior ────────────────────────────────────────────────────────────────

#[test]
fn behavior_methods_report_their_variant() {
    assert_eq!(Holder::instance().do_something(), "Holder is doing something!");
    assert_eq!(Guarded::instance().do_something(), "Guarded is doing something!");
    assert_eq!(Stamped::instance().do_something(), "Stamped is doing something!");
    assert_eq!(
        Registered::instance().do_something(),
        "Registered is doing something!"
    );
    assert_eq!(
        Holder::instance().show_message(),
        "Hello, I am the one and only instance of the Holder singleton!"
    );
}
