//! Singleton that refuses to be rehydrated.
//!
//! [`Guarded`] can be serialized, but any attempt to deserialize one fails
//! with [`Error::Deserialization`]. A deserialized value would be a second
//! live instance.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use sgl_core::{impl_singleton, Error};

use super::announce;

/// A singleton that can be written out but never read back in.
///
/// Cloning is not offered; the only copy is of the reference:
///
/// ```compile_fail
/// use singleton::core::Singleton;
/// let copy: singleton::Guarded = singleton::Guarded::instance().clone();
/// ```
#[derive(Debug)]
pub struct Guarded {
    _private: (),
}

impl_singleton!(Guarded, Guarded { _private: () });

impl Guarded {
    /// Example behavior method.
    pub fn do_something(&self) -> &'static str {
        announce("Guarded is doing something!")
    }
}

impl Serialize for Guarded {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Guarded", 1)?;
        state.serialize_field("kind", "Guarded")?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Guarded {
    fn deserialize<D: Deserializer<'de>>(_deserializer: D) -> Result<Self, D::Error> {
        log::warn!("rejected attempt to deserialize the Guarded singleton");
        Err(de::Error::custom(Error::Deserialization(
            "Guarded must not be rehydrated".into(),
        )))
    }
}
