use crate::entity::Entity;
use crate::ids::generate_id;

/// Plain record of a [`Product`].
#[hunt_derive::plain_model]
pub struct ProductPlain {
    pub id: Option<String>,
    pub name: String,
    pub tagline: String,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub maker_id: String,
    #[serde(default)]
    pub upvote_count: u32,
    pub created_at: String,
    pub updated_at: String,
}

/// A product submitted by a maker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: String,
    name: String,
    tagline: String,
    description: Option<String>,
    website_url: Option<String>,
    thumbnail_url: Option<String>,
    topics: Vec<String>,
    maker_id: String,
    upvote_count: u32,
    created_at: String,
    updated_at: String,
}

impl Product {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn website_url(&self) -> Option<&str> {
        self.website_url.as_deref()
    }

    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }

    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    #[must_use]
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t.eq_ignore_ascii_case(topic))
    }

    /// Identifier of the [`User`](crate::entities::User) who made the product.
    #[must_use]
    pub fn maker_id(&self) -> &str {
        &self.maker_id
    }

    #[must_use]
    pub const fn upvote_count(&self) -> u32 {
        self.upvote_count
    }

    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }
}

impl Entity for Product {
    const KIND: &'static str = "product";
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["name", "tagline", "makerId", "createdAt", "updatedAt"];

    type Plain = ProductPlain;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_plain(plain: ProductPlain) -> Self {
        Self {
            id: plain.id.unwrap_or_else(generate_id),
            name: plain.name,
            tagline: plain.tagline,
            description: plain.description,
            website_url: plain.website_url,
            thumbnail_url: plain.thumbnail_url,
            topics: plain.topics,
            maker_id: plain.maker_id,
            upvote_count: plain.upvote_count,
            created_at: plain.created_at,
            updated_at: plain.updated_at,
        }
    }

    fn to_plain(&self) -> ProductPlain {
        ProductPlain {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            tagline: self.tagline.clone(),
            description: self.description.clone(),
            website_url: self.website_url.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            topics: self.topics.clone(),
            maker_id: self.maker_id.clone(),
            upvote_count: self.upvote_count,
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
        }
    }
}
