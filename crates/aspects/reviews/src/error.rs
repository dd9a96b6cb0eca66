use std::borrow::Cow;

/// A specialized [`ReviewsError`] enum of this crate.
#[hunt_derive::hunt_error]
pub enum ReviewsError {
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal reviews error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
