//! Forums aspect: discussion boards, optionally attached to a product.

mod error;
pub mod mock;

pub use crate::error::{ForumsError, ForumsErrorExt};
use hunt_kernel::domain::aspect::InitializedAspect;
use hunt_kernel::domain::entities::Forum;
use hunt_kernel::domain::registry::SlotRegistry;
use hunt_kernel::domain::slots::{HeaderLinks, NavLink, ProductTab, ProductTabs};

/// Forums aspect state.
#[hunt_derive::aspect(name = "forums")]
pub struct Forums {
    pub route_prefix: &'static str,
}

impl Forums {
    #[must_use]
    pub fn forum_path(&self, forum: &Forum) -> String {
        format!("{}{}", self.route_prefix, forum.slug())
    }

    /// Boards attached to `product_id`, busiest first.
    #[must_use]
    pub fn for_product<'a>(&self, forums: &'a [Forum], product_id: &str) -> Vec<&'a Forum> {
        let mut boards: Vec<_> =
            forums.iter().filter(|f| f.product_id() == Some(product_id)).collect();
        boards.sort_by_key(|f| std::cmp::Reverse(f.thread_count()));
        boards
    }
}

/// Initialize the forums aspect.
///
/// # Errors
/// Currently infallible; the signature matches every other aspect.
pub fn init(slots: &mut SlotRegistry) -> Result<InitializedAspect, ForumsError> {
    let contributions = slots.register::<HeaderLinks, _>(
        Forums::NAME,
        [NavLink::builder().name("forums").label("Forums").href("/forums").weight(30).build()],
    ) + slots.register::<ProductTabs, _>(
        Forums::NAME,
        [ProductTab::builder()
            .name("discussion")
            .label("Discussion")
            .component("forums.ProductDiscussion")
            .build()],
    );

    tracing::info!(aspect = Forums::NAME, contributions, "Forums aspect initialized");

    Ok(InitializedAspect::new(Forums::new(ForumsInner { route_prefix: "/forums/" })))
}
