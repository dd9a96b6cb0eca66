//! Aspect handles and the set of aspects enabled for a platform build.

use crate::constants::{FORUMS, LAUNCHES, PRODUCTS, REVIEWS, UPVOTES, USERS};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::any::{Any, TypeId};
use std::fmt::Debug;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// State exposed by an initialized aspect.
///
/// Implemented by `#[hunt_derive::aspect]`.
pub trait Aspect: Any + Debug + Send + Sync {
    /// Canonical aspect name, also used as the slot registration key.
    fn name(&self) -> &'static str;

    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A container for an initialized aspect.
#[derive(Debug)]
pub struct InitializedAspect {
    pub id: TypeId,
    pub name: &'static str,
    pub state: Box<dyn Aspect>,
}

impl InitializedAspect {
    /// Create a new initialized aspect from a concrete handle.
    pub fn new<T: Aspect>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), name: state.name(), state: Box::new(state) }
    }
}

/// The aspects shipped with the platform, in canonical composition order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum AspectKind {
    Users,
    Products,
    Launches,
    Reviews,
    Forums,
    Upvotes,
}

impl AspectKind {
    #[must_use]
    pub const fn flag(self) -> AspectSet {
        match self {
            Self::Users => AspectSet::USERS,
            Self::Products => AspectSet::PRODUCTS,
            Self::Launches => AspectSet::LAUNCHES,
            Self::Reviews => AspectSet::REVIEWS,
            Self::Forums => AspectSet::FORUMS,
            Self::Upvotes => AspectSet::UPVOTES,
        }
    }
}

bitflags! {
    /// Represents a set of enabled aspects.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct AspectSet: u32 {
        const USERS = 1 << 0;
        const PRODUCTS = 1 << 1;
        const LAUNCHES = 1 << 2;
        const REVIEWS = 1 << 3;
        const FORUMS = 1 << 4;
        const UPVOTES = 1 << 5;

        const ALL = Self::USERS.bits()
            | Self::PRODUCTS.bits()
            | Self::LAUNCHES.bits()
            | Self::REVIEWS.bits()
            | Self::FORUMS.bits()
            | Self::UPVOTES.bits();
    }
}

impl Default for AspectSet {
    fn default() -> Self {
        Self::ALL
    }
}

impl AspectSet {
    /// Parses one aspect name; `"*"` and `"all"` select every aspect.
    #[must_use]
    pub fn parse_name(name: &str) -> Option<Self> {
        match name.trim() {
            USERS => Some(Self::USERS),
            PRODUCTS => Some(Self::PRODUCTS),
            LAUNCHES => Some(Self::LAUNCHES),
            REVIEWS => Some(Self::REVIEWS),
            FORUMS => Some(Self::FORUMS),
            UPVOTES => Some(Self::UPVOTES),
            "all" | "*" => Some(Self::ALL),
            _ => None,
        }
    }

    /// Enabled aspects in canonical composition order.
    pub fn kinds(self) -> impl Iterator<Item = AspectKind> {
        AspectKind::iter().filter(move |kind| self.contains(kind.flag()))
    }

    #[must_use]
    pub fn includes(self, kind: AspectKind) -> bool {
        self.contains(kind.flag())
    }

    fn from_names<'a, E: serde::de::Error>(
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, E> {
        names.into_iter().filter(|n| !n.trim().is_empty()).try_fold(Self::empty(), |set, name| {
            Self::parse_name(name)
                .map(|flag| set | flag)
                .ok_or_else(|| E::custom(format!("unknown aspect '{}'", name.trim())))
        })
    }
}

impl Serialize for AspectSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.kinds().map(|kind| kind.to_string()))
    }
}

impl<'de> Deserialize<'de> for AspectSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // A list of names, one comma-separated string (env overrides), or raw bits.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Names(Vec<String>),
            Joined(String),
            Bits(u32),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Names(names) => Self::from_names(names.iter().map(String::as_str)),
            Raw::Joined(joined) => Self::from_names(joined.split(',')),
            Raw::Bits(bits) => Ok(Self::from_bits_truncate(bits)),
        }
    }
}
