//! Plain records are the wire/fixture form of entities.
//!
//! They are produced by `#[hunt_derive::plain_model]`, which also emits a companion patch
//! type implementing [`Patch`].

use serde::{Deserialize, Deserializer};

/// A partial override of a plain record.
pub trait Patch<P> {
    /// Shallow-merges every present field onto `target`.
    fn apply(self, target: &mut P);

    /// Consuming variant of [`Patch::apply`].
    fn merged(self, mut base: P) -> P
    where
        Self: Sized,
    {
        self.apply(&mut base);
        base
    }
}

/// Reads a patch key that is present in the input, keeping an explicit `null` as an override.
///
/// Absent keys fall back to the patch's `Default` and never reach this function.
///
/// # Errors
/// Propagates the value's own deserialization error.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
