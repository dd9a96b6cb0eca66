use crate::entity::Entity;
use crate::ids::generate_id;

/// Plain record of a [`Forum`].
#[hunt_derive::plain_model]
pub struct ForumPlain {
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub product_id: Option<String>,
    #[serde(default)]
    pub thread_count: u32,
    pub created_at: String,
}

/// A discussion board, either general or attached to a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forum {
    id: String,
    name: String,
    slug: String,
    description: Option<String>,
    product_id: Option<String>,
    thread_count: u32,
    created_at: String,
}

impl Forum {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// `None` for platform-wide forums.
    #[must_use]
    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }

    #[must_use]
    pub const fn thread_count(&self) -> u32 {
        self.thread_count
    }

    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl Entity for Forum {
    const KIND: &'static str = "forum";
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "slug", "createdAt"];

    type Plain = ForumPlain;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_plain(plain: ForumPlain) -> Self {
        Self {
            id: plain.id.unwrap_or_else(generate_id),
            name: plain.name,
            slug: plain.slug,
            description: plain.description,
            product_id: plain.product_id,
            thread_count: plain.thread_count,
            created_at: plain.created_at,
        }
    }

    fn to_plain(&self) -> ForumPlain {
        ForumPlain {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            product_id: self.product_id.clone(),
            thread_count: self.thread_count,
            created_at: self.created_at.clone(),
        }
    }
}
