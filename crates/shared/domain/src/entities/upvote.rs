use crate::entity::Entity;
use crate::ids::generate_id;

/// Plain record of an [`Upvote`].
#[hunt_derive::plain_model]
pub struct UpvotePlain {
    pub id: Option<String>,
    pub product_id: String,
    pub user_id: String,
    pub created_at: String,
}

/// One user's vote for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upvote {
    id: String,
    product_id: String,
    user_id: String,
    created_at: String,
}

impl Upvote {
    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl Entity for Upvote {
    const KIND: &'static str = "upvote";
    const REQUIRED_FIELDS: &'static [&'static str] = &["productId", "userId", "createdAt"];

    type Plain = UpvotePlain;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_plain(plain: UpvotePlain) -> Self {
        Self {
            id: plain.id.unwrap_or_else(generate_id),
            product_id: plain.product_id,
            user_id: plain.user_id,
            created_at: plain.created_at,
        }
    }

    fn to_plain(&self) -> UpvotePlain {
        UpvotePlain {
            id: Some(self.id.clone()),
            product_id: self.product_id.clone(),
            user_id: self.user_id.clone(),
            created_at: self.created_at.clone(),
        }
    }
}
