//! Error types for singleton-rs.
//!
//! Only two things can go wrong around a singleton: somebody tries to make a
//! second one by hand, or somebody tries to rebuild one from serialized data.
//! Both are rejections rather than recoverable conditions, so callers are
//! expected to stop doing the prohibited thing instead of retrying.

use thiserror::Error;

/// The top-level error type used throughout singleton-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An instance was requested through a path other than the accessor.
    #[error("construction bypass: {0}")]
    ConstructionBypass(String),

    /// An instance was reconstituted from serialized data.
    #[error("cannot deserialize singleton: {0}")]
    Deserialization(String),
}

/// Shorthand `Result` type used throughout singleton-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with the given [`Error`] variant and a formatted message.
///
/// # Example
/// ```
/// use sgl_core::{fail, errors::Error};
/// fn rehydrate() -> sgl_core::errors::Result<()> {
///     fail!(Deserialization, "{} must not be rehydrated", "Guarded");
/// }
/// assert_eq!(
///     rehydrate(),
///     Err(Error::Deserialization("Guarded must not be rehydrated".into()))
/// );
/// ```
#[macro_export]
macro_rules! fail {
    ($kind:ident, $($msg:tt)*) => {
        return Err($crate::errors::Error::$kind(format!($($msg)*)))
    };
}
