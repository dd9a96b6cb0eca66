//! Mock factories: fixed defaults shallow-merged with partial overrides.

use hunt_domain::entity::Entity;
use hunt_domain::plain::Patch;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;

#[hunt_derive::hunt_error]
pub enum FixtureError {
    #[error("Invalid fixture override{}: {source}", format_context(.context))]
    Override { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

/// A factory producing entities from default records and partial overrides.
///
/// Defaults are fixed constants except for identity and timestamps, which are produced
/// fresh for every instance.
pub trait Fixture {
    type Entity: Entity;
    type Patch: Patch<<Self::Entity as Entity>::Plain> + Default + DeserializeOwned;

    /// The complete default record.
    fn defaults() -> <Self::Entity as Entity>::Plain;

    /// Defaults with `patch` applied on top.
    fn plain(patch: Self::Patch) -> <Self::Entity as Entity>::Plain {
        patch.merged(Self::defaults())
    }

    /// One entity built from the defaults overridden by `patch`.
    fn build(patch: Self::Patch) -> Self::Entity {
        Self::Entity::from_plain(Self::plain(patch))
    }

    /// One entity per patch; no patches yields a single default entity.
    fn build_many<I>(patches: I) -> Vec<Self::Entity>
    where
        I: IntoIterator<Item = Self::Patch>,
    {
        let mut built: Vec<_> = patches.into_iter().map(Self::build).collect();
        if built.is_empty() {
            built.push(Self::build(Self::Patch::default()));
        }
        debug!(kind = Self::Entity::KIND, count = built.len(), "Built fixtures");
        built
    }

    /// Like [`Fixture::build_many`], with overrides given as untyped JSON objects.
    ///
    /// # Errors
    /// Returns [`FixtureError::Override`] if an override has the wrong shape.
    fn build_from_values<I>(overrides: I) -> Result<Vec<Self::Entity>, FixtureError>
    where
        I: IntoIterator<Item = Value>,
    {
        let patches = overrides
            .into_iter()
            .map(serde_json::from_value::<Self::Patch>)
            .collect::<Result<Vec<_>, _>>()
            .context(format!("Parsing {} override", Self::Entity::KIND))?;
        Ok(Self::build_many(patches))
    }
}
