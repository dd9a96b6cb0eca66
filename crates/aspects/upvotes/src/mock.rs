//! Fixtures for [`Upvote`] records.

use hunt_kernel::clock::now_iso8601;
use hunt_kernel::domain::entities::{Upvote, UpvotePatch, UpvotePlain};
use hunt_kernel::fixtures::Fixture;

#[derive(Debug)]
pub enum UpvoteFixture {}

impl Fixture for UpvoteFixture {
    type Entity = Upvote;
    type Patch = UpvotePatch;

    fn defaults() -> UpvotePlain {
        UpvotePlain {
            id: None,
            product_id: "product-1".to_owned(),
            user_id: "user-1".to_owned(),
            created_at: now_iso8601(),
        }
    }
}

/// The default upvote record.
#[must_use]
pub fn defaults() -> UpvotePlain {
    UpvoteFixture::defaults()
}

#[must_use]
pub fn upvote(patch: UpvotePatch) -> Upvote {
    UpvoteFixture::build(patch)
}

/// One upvote per patch, or a single default upvote when `patches` is empty.
#[must_use]
pub fn upvotes<I: IntoIterator<Item = UpvotePatch>>(patches: I) -> Vec<Upvote> {
    UpvoteFixture::build_many(patches)
}
