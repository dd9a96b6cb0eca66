//! Facade crate for the platform's aspects and shared modules.
//! Re-exports domain/kernel primitives and composes the enabled aspects.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust
//! use hunt::domain::config::HuntConfig;
//! use hunt::domain::slots::HeaderLinks;
//!
//! let platform = hunt::compose(&HuntConfig::default()).unwrap();
//! let links: Vec<_> =
//!     platform.slots.contributions::<HeaderLinks>().iter().map(|l| l.name.as_str()).collect();
//! assert_eq!(links, ["profile", "products", "launches", "forums"]);
//! ```

mod compose;
pub mod records;

pub use crate::compose::{ComposeError, ComposeErrorExt, compose};
pub use hunt_domain as domain;
pub use hunt_kernel as kernel;

/// The aspects shipped with the platform.
pub mod aspects {
    pub use hunt_forums as forums;
    pub use hunt_launches as launches;
    pub use hunt_products as products;
    pub use hunt_reviews as reviews;
    pub use hunt_upvotes as upvotes;
    pub use hunt_users as users;
}
