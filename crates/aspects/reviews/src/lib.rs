//! Reviews aspect: product ratings and their moderation state.

mod error;
pub mod mock;

pub use crate::error::{ReviewsError, ReviewsErrorExt};
use hunt_kernel::domain::aspect::InitializedAspect;
use hunt_kernel::domain::entities::Review;
use hunt_kernel::domain::registry::SlotRegistry;
use hunt_kernel::domain::slots::{ProductTab, ProductTabs, ProfileCard, UserProfileCards};

/// Reviews aspect state.
#[hunt_derive::aspect(name = "reviews")]
pub struct Reviews {
    /// Highest rating a review can carry; larger values are clamped.
    pub max_rating: u8,
}

impl Reviews {
    /// Mean rating of the publicly visible reviews of `product_id`.
    #[must_use]
    pub fn average_rating(&self, reviews: &[Review], product_id: &str) -> Option<f64> {
        let (sum, count) = reviews
            .iter()
            .filter(|r| r.product_id() == product_id && r.is_visible())
            .fold((0u32, 0u32), |(sum, count), r| {
                (sum + u32::from(r.rating().min(self.max_rating)), count + 1)
            });

        (count > 0).then(|| f64::from(sum) / f64::from(count))
    }
}

/// Initialize the reviews aspect.
///
/// # Errors
/// Currently infallible; the signature matches every other aspect.
pub fn init(slots: &mut SlotRegistry) -> Result<InitializedAspect, ReviewsError> {
    let contributions = slots.register::<ProductTabs, _>(
        Reviews::NAME,
        [ProductTab::builder()
            .name("reviews")
            .label("Reviews")
            .component("reviews.ReviewList")
            .weight(10)
            .build()],
    ) + slots.register::<UserProfileCards, _>(
        Reviews::NAME,
        [ProfileCard::builder()
            .name("reviews")
            .component("reviews.RecentReviews")
            .title("Reviews")
            .build()],
    );

    tracing::info!(aspect = Reviews::NAME, contributions, "Reviews aspect initialized");

    Ok(InitializedAspect::new(Reviews::new(ReviewsInner { max_rating: 5 })))
}
