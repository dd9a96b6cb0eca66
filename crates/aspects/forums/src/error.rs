use std::borrow::Cow;

/// A specialized [`ForumsError`] enum of this crate.
#[hunt_derive::hunt_error]
pub enum ForumsError {
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal forums error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
