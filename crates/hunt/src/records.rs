//! Untyped access to entity records, dispatched by entity kind.
//!
//! Used by tooling that receives plain JSON (fixture files, previews) and does not know the
//! concrete entity type at compile time.

use crate::aspects::{forums, launches, products, reviews, upvotes, users};
use hunt_domain::entities::{Forum, Launch, Product, Review, Upvote, User};
use hunt_domain::entity::{Entity, EntityError};
use hunt_kernel::fixtures::{Fixture, FixtureError};
use serde_json::Value;
use std::borrow::Cow;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

#[hunt_derive::hunt_error]
pub enum RecordError {
    #[error("Record error{}: {source}", format_context(.context))]
    Entity { source: EntityError, context: Option<Cow<'static, str>> },
    #[error("Fixture error{}: {source}", format_context(.context))]
    Fixture { source: FixtureError, context: Option<Cow<'static, str>> },
}

/// The entity types of the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EntityKind {
    User,
    Product,
    Launch,
    Review,
    Forum,
    Upvote,
}

impl EntityKind {
    /// Required keys of this kind's plain record.
    #[must_use]
    pub const fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::User => User::REQUIRED_FIELDS,
            Self::Product => Product::REQUIRED_FIELDS,
            Self::Launch => Launch::REQUIRED_FIELDS,
            Self::Review => Review::REQUIRED_FIELDS,
            Self::Forum => Forum::REQUIRED_FIELDS,
            Self::Upvote => Upvote::REQUIRED_FIELDS,
        }
    }

    /// Passes one plain record through `from_value` and `to_value`.
    ///
    /// The result carries generated identity and defaulted fields.
    ///
    /// # Errors
    /// Returns the [`EntityError`] raised by the shape checks.
    pub fn normalize(self, value: Value) -> Result<Value, EntityError> {
        match self {
            Self::User => normalize_as::<User>(value),
            Self::Product => normalize_as::<Product>(value),
            Self::Launch => normalize_as::<Launch>(value),
            Self::Review => normalize_as::<Review>(value),
            Self::Forum => normalize_as::<Forum>(value),
            Self::Upvote => normalize_as::<Upvote>(value),
        }
    }

    /// Builds fixtures from JSON overrides; no overrides yields one default record.
    ///
    /// # Errors
    /// Returns [`RecordError::Fixture`] if an override has the wrong shape.
    pub fn mock(self, overrides: Vec<Value>) -> Result<Vec<Value>, RecordError> {
        match self {
            Self::User => mock_as::<users::mock::UserFixture>(overrides),
            Self::Product => mock_as::<products::mock::ProductFixture>(overrides),
            Self::Launch => mock_as::<launches::mock::LaunchFixture>(overrides),
            Self::Review => mock_as::<reviews::mock::ReviewFixture>(overrides),
            Self::Forum => mock_as::<forums::mock::ForumFixture>(overrides),
            Self::Upvote => mock_as::<upvotes::mock::UpvoteFixture>(overrides),
        }
    }
}

fn normalize_as<E: Entity>(value: Value) -> Result<Value, EntityError> {
    E::from_value(value)?.to_value()
}

fn mock_as<F: Fixture>(overrides: Vec<Value>) -> Result<Vec<Value>, RecordError> {
    let kind = F::Entity::KIND;
    F::build_from_values(overrides)?
        .iter()
        .map(|entity| entity.to_value().context(format!("Encoding {kind} fixture")))
        .collect()
}
