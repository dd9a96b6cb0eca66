//! Fixtures for [`Launch`] records.

use hunt_kernel::clock::now_iso8601;
use hunt_kernel::domain::entities::{Launch, LaunchPatch, LaunchPlain, LaunchStatus};
use hunt_kernel::fixtures::Fixture;

#[derive(Debug)]
pub enum LaunchFixture {}

impl Fixture for LaunchFixture {
    type Entity = Launch;
    type Patch = LaunchPatch;

    fn defaults() -> LaunchPlain {
        let now = now_iso8601();
        LaunchPlain {
            id: None,
            product_id: "product-1".to_owned(),
            launch_date: now.clone(),
            status: LaunchStatus::Scheduled,
            featured: false,
            rank: None,
            created_at: now,
        }
    }
}

/// The default launch record.
#[must_use]
pub fn defaults() -> LaunchPlain {
    LaunchFixture::defaults()
}

#[must_use]
pub fn launch(patch: LaunchPatch) -> Launch {
    LaunchFixture::build(patch)
}

/// One launch per patch, or a single default launch when `patches` is empty.
#[must_use]
pub fn launches<I: IntoIterator<Item = LaunchPatch>>(patches: I) -> Vec<Launch> {
    LaunchFixture::build_many(patches)
}
