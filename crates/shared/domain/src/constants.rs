//! Well-known names shared between aspects, the composition root and tooling.

// Aspects
pub const USERS: &str = "users";
pub const PRODUCTS: &str = "products";
pub const LAUNCHES: &str = "launches";
pub const REVIEWS: &str = "reviews";
pub const FORUMS: &str = "forums";
pub const UPVOTES: &str = "upvotes";

// Extension points
pub const HEADER_LINKS: &str = "header.links";
pub const PRODUCT_TABS: &str = "product.tabs";
pub const USER_PROFILE_CARDS: &str = "user.profile.cards";
pub const DASHBOARD_WIDGETS: &str = "dashboard.widgets";

/// Every well-known extension point, in declaration order.
pub const SLOTS: &[&str] = &[HEADER_LINKS, PRODUCT_TABS, USER_PROFILE_CARDS, DASHBOARD_WIDGETS];
