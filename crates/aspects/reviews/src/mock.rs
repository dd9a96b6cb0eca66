//! Fixtures for [`Review`] records.

use hunt_kernel::clock::now_iso8601;
use hunt_kernel::domain::entities::{Review, ReviewPatch, ReviewPlain, ReviewStatus};
use hunt_kernel::fixtures::Fixture;

#[derive(Debug)]
pub enum ReviewFixture {}

impl Fixture for ReviewFixture {
    type Entity = Review;
    type Patch = ReviewPatch;

    fn defaults() -> ReviewPlain {
        let now = now_iso8601();
        ReviewPlain {
            id: None,
            product_id: "product-1".to_owned(),
            user_id: "user-1".to_owned(),
            rating: 5,
            comment: "Great product, would hunt again.".to_owned(),
            created_at: now.clone(),
            updated_at: now,
            status: ReviewStatus::Approved,
        }
    }
}

/// The default review record.
#[must_use]
pub fn defaults() -> ReviewPlain {
    ReviewFixture::defaults()
}

#[must_use]
pub fn review(patch: ReviewPatch) -> Review {
    ReviewFixture::build(patch)
}

/// One review per patch, or a single default review when `patches` is empty.
#[must_use]
pub fn reviews<I: IntoIterator<Item = ReviewPatch>>(patches: I) -> Vec<Review> {
    ReviewFixture::build_many(patches)
}
