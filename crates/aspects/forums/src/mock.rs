//! Fixtures for [`Forum`] records.

use hunt_kernel::clock::now_iso8601;
use hunt_kernel::domain::entities::{Forum, ForumPatch, ForumPlain};
use hunt_kernel::fixtures::Fixture;

#[derive(Debug)]
pub enum ForumFixture {}

impl Fixture for ForumFixture {
    type Entity = Forum;
    type Patch = ForumPatch;

    fn defaults() -> ForumPlain {
        ForumPlain {
            id: None,
            name: "General".to_owned(),
            slug: "general".to_owned(),
            description: Some("Anything about making and launching products.".to_owned()),
            product_id: None,
            thread_count: 0,
            created_at: now_iso8601(),
        }
    }
}

/// The default forum record.
#[must_use]
pub fn defaults() -> ForumPlain {
    ForumFixture::defaults()
}

#[must_use]
pub fn forum(patch: ForumPatch) -> Forum {
    ForumFixture::build(patch)
}

/// One forum per patch, or a single default forum when `patches` is empty.
#[must_use]
pub fn forums<I: IntoIterator<Item = ForumPatch>>(patches: I) -> Vec<Forum> {
    ForumFixture::build_many(patches)
}
