use crate::entity::Entity;
use crate::ids::generate_id;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Lifecycle of a launch.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LaunchStatus {
    #[default]
    Scheduled,
    Live,
    Ended,
}

/// Plain record of a [`Launch`].
#[hunt_derive::plain_model]
pub struct LaunchPlain {
    pub id: Option<String>,
    pub product_id: String,
    pub launch_date: String,
    #[serde(default)]
    pub status: LaunchStatus,
    #[serde(default)]
    pub featured: bool,
    pub rank: Option<u32>,
    pub created_at: String,
}

/// A dated launch of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    id: String,
    product_id: String,
    launch_date: String,
    status: LaunchStatus,
    featured: bool,
    rank: Option<u32>,
    created_at: String,
}

impl Launch {
    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    #[must_use]
    pub fn launch_date(&self) -> &str {
        &self.launch_date
    }

    #[must_use]
    pub const fn status(&self) -> LaunchStatus {
        self.status
    }

    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self.status, LaunchStatus::Live)
    }

    #[must_use]
    pub const fn featured(&self) -> bool {
        self.featured
    }

    /// Daily leaderboard position, once ranked.
    #[must_use]
    pub const fn rank(&self) -> Option<u32> {
        self.rank
    }

    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl Entity for Launch {
    const KIND: &'static str = "launch";
    const REQUIRED_FIELDS: &'static [&'static str] = &["productId", "launchDate", "createdAt"];

    type Plain = LaunchPlain;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_plain(plain: LaunchPlain) -> Self {
        Self {
            id: plain.id.unwrap_or_else(generate_id),
            product_id: plain.product_id,
            launch_date: plain.launch_date,
            status: plain.status,
            featured: plain.featured,
            rank: plain.rank,
            created_at: plain.created_at,
        }
    }

    fn to_plain(&self) -> LaunchPlain {
        LaunchPlain {
            id: Some(self.id.clone()),
            product_id: self.product_id.clone(),
            launch_date: self.launch_date.clone(),
            status: self.status,
            featured: self.featured,
            rank: self.rank,
            created_at: self.created_at.clone(),
        }
    }
}
