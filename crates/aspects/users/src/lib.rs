//! Users aspect: member profiles.

mod error;
pub mod mock;

pub use crate::error::{UsersError, UsersErrorExt};
use hunt_kernel::domain::aspect::InitializedAspect;
use hunt_kernel::domain::entities::User;
use hunt_kernel::domain::registry::SlotRegistry;
use hunt_kernel::domain::slots::{HeaderLinks, NavLink, ProfileCard, UserProfileCards};

/// Users aspect state.
#[hunt_derive::aspect(name = "users")]
pub struct Users {
    /// Route prefix of public profile pages.
    pub profile_prefix: &'static str,
}

impl Users {
    /// Public profile route of `user`.
    #[must_use]
    pub fn profile_path(&self, user: &User) -> String {
        format!("{}{}", self.profile_prefix, user.username())
    }
}

/// Initialize the users aspect.
///
/// # Errors
/// Currently infallible; the signature matches every other aspect.
pub fn init(slots: &mut SlotRegistry) -> Result<InitializedAspect, UsersError> {
    let contributions = slots.register::<HeaderLinks, _>(
        Users::NAME,
        [NavLink::builder().name("profile").label("Profile").href("/me").build()],
    ) + slots.register::<UserProfileCards, _>(
        Users::NAME,
        [ProfileCard::builder().name("about").component("users.AboutCard").title("About").build()],
    );

    tracing::info!(aspect = Users::NAME, contributions, "Users aspect initialized");

    Ok(InitializedAspect::new(Users::new(UsersInner { profile_prefix: "/@" })))
}
