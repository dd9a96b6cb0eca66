//! Domain entities of the platform.
//!
//! Relations are expressed with string identifiers (`product_id`, `user_id`, ...); no entity
//! owns another. Timestamps are ISO-8601 strings kept verbatim so records round-trip exactly.

mod forum;
mod launch;
mod product;
mod review;
mod upvote;
mod user;

pub use forum::{Forum, ForumPatch, ForumPlain};
pub use launch::{Launch, LaunchPatch, LaunchPlain, LaunchStatus};
pub use product::{Product, ProductPatch, ProductPlain};
pub use review::{Review, ReviewPatch, ReviewPlain, ReviewStatus};
pub use upvote::{Upvote, UpvotePatch, UpvotePlain};
pub use user::{User, UserPatch, UserPlain};
