//! Upvotes aspect: votes on products and the trending tally.

mod error;
pub mod mock;

pub use crate::error::{UpvotesError, UpvotesErrorExt};
use hunt_kernel::domain::aspect::InitializedAspect;
use hunt_kernel::domain::entities::Upvote;
use hunt_kernel::domain::registry::SlotRegistry;
use hunt_kernel::domain::slots::{DashboardWidget, DashboardWidgets, ProfileCard, UserProfileCards};
use std::collections::BTreeMap;

/// Upvotes aspect state.
#[hunt_derive::aspect(name = "upvotes")]
pub struct Upvotes {
    /// Length of the trending list.
    pub trending_limit: usize,
}

impl Upvotes {
    /// Products ranked by vote count; ties ordered by product id.
    #[must_use]
    pub fn trending(&self, upvotes: &[Upvote]) -> Vec<(String, usize)> {
        let mut tally = BTreeMap::<&str, usize>::new();
        for upvote in upvotes {
            *tally.entry(upvote.product_id()).or_default() += 1;
        }

        let mut ranked: Vec<_> =
            tally.into_iter().map(|(product, votes)| (product.to_owned(), votes)).collect();
        ranked.sort_by_key(|(_, votes)| std::cmp::Reverse(*votes));
        ranked.truncate(self.trending_limit);
        ranked
    }

    /// Whether `user_id` already voted for `product_id`.
    #[must_use]
    pub fn has_voted(&self, upvotes: &[Upvote], user_id: &str, product_id: &str) -> bool {
        upvotes.iter().any(|u| u.user_id() == user_id && u.product_id() == product_id)
    }
}

/// Initialize the upvotes aspect.
///
/// # Errors
/// Currently infallible; the signature matches every other aspect.
pub fn init(slots: &mut SlotRegistry) -> Result<InitializedAspect, UpvotesError> {
    let contributions = slots.register::<UserProfileCards, _>(
        Upvotes::NAME,
        [ProfileCard::builder().name("upvotes").component("upvotes.UpvotedProducts").build()],
    ) + slots.register::<DashboardWidgets, _>(
        Upvotes::NAME,
        [DashboardWidget::builder()
            .name("trending")
            .component("upvotes.Trending")
            .label("Trending")
            .weight(-5)
            .build()],
    );

    tracing::info!(aspect = Upvotes::NAME, contributions, "Upvotes aspect initialized");

    Ok(InitializedAspect::new(Upvotes::new(UpvotesInner { trending_limit: 10 })))
}
