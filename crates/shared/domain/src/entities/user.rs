use crate::entity::Entity;
use crate::ids::generate_id;

/// Plain record of a [`User`].
///
/// On output `id` always mirrors `userId`; on input `id` is accepted when `userId` is absent.
/// When both are present and differ, `userId` is the identity and the output `id` takes its value.
#[hunt_derive::plain_model]
pub struct UserPlain {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub email: String,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub created_at: Option<String>,
}

/// A registered member of the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    user_id: String,
    email: String,
    username: String,
    display_name: Option<String>,
    avatar_url: Option<String>,
    bio: Option<String>,
    website: Option<String>,
    created_at: Option<String>,
}

impl User {
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Display name, falling back to the username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }

    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    #[must_use]
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

impl Entity for User {
    const KIND: &'static str = "user";
    const REQUIRED_FIELDS: &'static [&'static str] = &["email", "username"];

    type Plain = UserPlain;

    fn id(&self) -> &str {
        &self.user_id
    }

    fn from_plain(plain: UserPlain) -> Self {
        Self {
            user_id: plain.user_id.or(plain.id).unwrap_or_else(generate_id),
            email: plain.email,
            username: plain.username,
            display_name: plain.display_name,
            avatar_url: plain.avatar_url,
            bio: plain.bio,
            website: plain.website,
            created_at: plain.created_at,
        }
    }

    fn to_plain(&self) -> UserPlain {
        UserPlain {
            id: Some(self.user_id.clone()),
            user_id: Some(self.user_id.clone()),
            email: self.email.clone(),
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            avatar_url: self.avatar_url.clone(),
            bio: self.bio.clone(),
            website: self.website.clone(),
            created_at: self.created_at.clone(),
        }
    }
}
