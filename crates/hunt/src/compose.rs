use crate::aspects::{forums, launches, products, reviews, upvotes, users};
use hunt_domain::aspect::AspectKind;
use hunt_domain::config::HuntConfig;
use hunt_domain::registry::SlotRegistry;
use hunt_kernel::platform::{Platform, PlatformError};
use std::borrow::Cow;
use tracing::info;

#[hunt_derive::hunt_error]
pub enum ComposeError {
    #[error("Users aspect failed{}: {source}", format_context(.context))]
    Users { source: users::UsersError, context: Option<Cow<'static, str>> },
    #[error("Products aspect failed{}: {source}", format_context(.context))]
    Products { source: products::ProductsError, context: Option<Cow<'static, str>> },
    #[error("Launches aspect failed{}: {source}", format_context(.context))]
    Launches { source: launches::LaunchesError, context: Option<Cow<'static, str>> },
    #[error("Reviews aspect failed{}: {source}", format_context(.context))]
    Reviews { source: reviews::ReviewsError, context: Option<Cow<'static, str>> },
    #[error("Forums aspect failed{}: {source}", format_context(.context))]
    Forums { source: forums::ForumsError, context: Option<Cow<'static, str>> },
    #[error("Upvotes aspect failed{}: {source}", format_context(.context))]
    Upvotes { source: upvotes::UpvotesError, context: Option<Cow<'static, str>> },
    #[error("Platform assembly failed{}: {source}", format_context(.context))]
    Platform { source: PlatformError, context: Option<Cow<'static, str>> },
}

/// Initializes every enabled aspect in canonical order and freezes the result.
///
/// Each aspect receives the same [`SlotRegistry`], so contributions of equal weight
/// enumerate in the order users, products, launches, reviews, forums, upvotes.
///
/// # Errors
/// Returns the first aspect initialization failure, or a [`PlatformError`] from assembly.
pub fn compose(config: &HuntConfig) -> Result<Platform, ComposeError> {
    let mut slots = SlotRegistry::new();
    let mut builder = Platform::builder().config(config.clone());

    for kind in config.aspects.kinds() {
        let initialized = match kind {
            AspectKind::Users => users::init(&mut slots)?,
            AspectKind::Products => products::init(&mut slots)?,
            AspectKind::Launches => launches::init(&mut slots)?,
            AspectKind::Reviews => reviews::init(&mut slots)?,
            AspectKind::Forums => forums::init(&mut slots)?,
            AspectKind::Upvotes => upvotes::init(&mut slots)?,
        };
        builder = builder.register_aspect(initialized);
    }

    let platform = builder.slots(slots).build().context("Freezing composition")?;

    info!(
        platform = %config.platform.name,
        aspects = platform.aspect_count(),
        contributions = platform.slots.len(),
        "Platform composed"
    );

    Ok(platform)
}
