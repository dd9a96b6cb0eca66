//! Fixtures for [`User`] records.

use hunt_kernel::clock::now_iso8601;
use hunt_kernel::domain::entities::{User, UserPatch, UserPlain};
use hunt_kernel::fixtures::Fixture;

#[derive(Debug)]
pub enum UserFixture {}

impl Fixture for UserFixture {
    type Entity = User;
    type Patch = UserPatch;

    fn defaults() -> UserPlain {
        UserPlain {
            id: None,
            user_id: None,
            email: "maker@example.com".to_owned(),
            username: "maker".to_owned(),
            display_name: Some("Demo Maker".to_owned()),
            avatar_url: None,
            bio: Some("Shipping side projects since forever.".to_owned()),
            website: Some("https://maker.example.com".to_owned()),
            created_at: Some(now_iso8601()),
        }
    }
}

/// The default user record.
#[must_use]
pub fn defaults() -> UserPlain {
    UserFixture::defaults()
}

#[must_use]
pub fn user(patch: UserPatch) -> User {
    UserFixture::build(patch)
}

/// One user per patch, or a single default user when `patches` is empty.
#[must_use]
pub fn users<I: IntoIterator<Item = UserPatch>>(patches: I) -> Vec<User> {
    UserFixture::build_many(patches)
}
