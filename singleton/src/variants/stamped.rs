//! Singleton carrying its creation time.
//!
//! Deserializing a [`Stamped`] does not build a new value: the payload is
//! read and discarded, and the shared instance is returned instead. For that
//! reason `Deserialize` is implemented for `&'static Stamped` only.

use chrono::{DateTime, Utc};
use serde::de::{Deserialize, Deserializer, IgnoredAny};
use serde::Serialize;
use sgl_core::{impl_singleton, Singleton};

use super::announce;

/// A singleton that remembers when it was created.
#[derive(Debug, Serialize)]
pub struct Stamped {
    created_at: DateTime<Utc>,
}

impl_singleton!(
    Stamped,
    Stamped {
        created_at: Utc::now(),
    }
);

impl Stamped {
    /// Moment the instance was constructed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Example behavior method.
    pub fn do_something(&self) -> &'static str {
        announce("Stamped is doing something!")
    }
}

impl<'de> Deserialize<'de> for &'static Stamped {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        log::debug!("redirected Stamped deserialization to the shared instance");
        Ok(Stamped::instance())
    }
}
