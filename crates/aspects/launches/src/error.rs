use std::borrow::Cow;

/// A specialized [`LaunchesError`] enum of this crate.
#[hunt_derive::hunt_error]
pub enum LaunchesError {
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal launches error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
