//! Products aspect: the product catalog.

mod error;
pub mod mock;

pub use crate::error::{ProductsError, ProductsErrorExt};
use hunt_kernel::domain::aspect::InitializedAspect;
use hunt_kernel::domain::entities::Product;
use hunt_kernel::domain::entity::Entity;
use hunt_kernel::domain::registry::SlotRegistry;
use hunt_kernel::domain::slots::{
    DashboardWidget, DashboardWidgets, HeaderLinks, NavLink, ProductTab, ProductTabs,
};

/// Products aspect state.
#[hunt_derive::aspect(name = "products")]
pub struct Products {
    pub route_prefix: &'static str,
}

impl Products {
    #[must_use]
    pub fn product_path(&self, product: &Product) -> String {
        format!("{}{}", self.route_prefix, product.id())
    }

    /// Products tagged with `topic`, most upvoted first.
    #[must_use]
    pub fn by_topic<'a>(&self, products: &'a [Product], topic: &str) -> Vec<&'a Product> {
        let mut matching: Vec<_> = products.iter().filter(|p| p.has_topic(topic)).collect();
        matching.sort_by_key(|p| std::cmp::Reverse(p.upvote_count()));
        matching
    }
}

/// Initialize the products aspect.
///
/// # Errors
/// Currently infallible; the signature matches every other aspect.
pub fn init(slots: &mut SlotRegistry) -> Result<InitializedAspect, ProductsError> {
    let mut contributions = slots.register::<HeaderLinks, _>(
        Products::NAME,
        [NavLink::builder().name("products").label("Products").href("/products").weight(10).build()],
    );
    contributions += slots.register::<ProductTabs, _>(
        Products::NAME,
        [ProductTab::builder()
            .name("overview")
            .label("Overview")
            .component("products.Overview")
            .weight(-10)
            .build()],
    );
    contributions += slots.register::<DashboardWidgets, _>(
        Products::NAME,
        [DashboardWidget::builder()
            .name("my-products")
            .component("products.MyProducts")
            .label("My products")
            .span(2)
            .build()],
    );

    tracing::info!(aspect = Products::NAME, contributions, "Products aspect initialized");

    Ok(InitializedAspect::new(Products::new(ProductsInner { route_prefix: "/products/" })))
}
