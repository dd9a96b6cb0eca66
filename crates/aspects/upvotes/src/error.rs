use std::borrow::Cow;

/// A specialized [`UpvotesError`] enum of this crate.
#[hunt_derive::hunt_error]
pub enum UpvotesError {
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal upvotes error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
