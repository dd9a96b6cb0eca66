use crate::entity::Entity;
use crate::ids::generate_id;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Moderation state of a review.
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
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Plain record of a [`Review`].
#[hunt_derive::plain_model]
pub struct ReviewPlain {
    pub id: Option<String>,
    pub product_id: String,
    pub user_id: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub status: ReviewStatus,
}

/// A user's rating and comment on a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    id: String,
    product_id: String,
    user_id: String,
    rating: u8,
    comment: String,
    created_at: String,
    updated_at: String,
    status: ReviewStatus,
}

impl Review {
    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub const fn rating(&self) -> u8 {
        self.rating
    }

    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    #[must_use]
    pub const fn status(&self) -> ReviewStatus {
        self.status
    }

    /// Only approved reviews are shown publicly.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self.status, ReviewStatus::Approved)
    }
}

impl Entity for Review {
    const KIND: &'static str = "review";
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["productId", "userId", "rating", "comment", "createdAt", "updatedAt"];

    type Plain = ReviewPlain;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_plain(plain: ReviewPlain) -> Self {
        Self {
            id: plain.id.unwrap_or_else(generate_id),
            product_id: plain.product_id,
            user_id: plain.user_id,
            rating: plain.rating,
            comment: plain.comment,
            created_at: plain.created_at,
            updated_at: plain.updated_at,
            status: plain.status,
        }
    }

    fn to_plain(&self) -> ReviewPlain {
        ReviewPlain {
            id: Some(self.id.clone()),
            product_id: self.product_id.clone(),
            user_id: self.user_id.clone(),
            rating: self.rating,
            comment: self.comment.clone(),
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
            status: self.status,
        }
    }
}
