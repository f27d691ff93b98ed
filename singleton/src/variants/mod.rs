//! Demonstration singletons.

pub mod guarded;
pub mod holder;
pub mod registered;
pub mod stamped;

/// Log `message` as the output of a behavior call and hand it back.
pub(crate) fn announce(message: &'static str) -> &'static str {
    log::info!("{message}");
    message
}
