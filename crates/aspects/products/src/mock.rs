//! Fixtures for [`Product`] records.

use hunt_kernel::clock::now_iso8601;
use hunt_kernel::domain::entities::{Product, ProductPatch, ProductPlain};
use hunt_kernel::fixtures::Fixture;

#[derive(Debug)]
pub enum ProductFixture {}

impl Fixture for ProductFixture {
    type Entity = Product;
    type Patch = ProductPatch;

    fn defaults() -> ProductPlain {
        let now = now_iso8601();
        ProductPlain {
            id: None,
            name: "Hunt Demo".to_owned(),
            tagline: "The best new products, every day".to_owned(),
            description: Some("A demo product used in previews and tests.".to_owned()),
            website_url: Some("https://demo.example.com".to_owned()),
            thumbnail_url: None,
            topics: vec!["productivity".to_owned(), "developer tools".to_owned()],
            maker_id: "maker-1".to_owned(),
            upvote_count: 0,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// The default product record.
#[must_use]
pub fn defaults() -> ProductPlain {
    ProductFixture::defaults()
}

#[must_use]
pub fn product(patch: ProductPatch) -> Product {
    ProductFixture::build(patch)
}

/// One product per patch, or a single default product when `patches` is empty.
#[must_use]
pub fn products<I: IntoIterator<Item = ProductPatch>>(patches: I) -> Vec<Product> {
    ProductFixture::build_many(patches)
}
