use std::borrow::Cow;

/// A specialized [`UsersError`] enum of this crate.
#[hunt_derive::hunt_error]
pub enum UsersError {
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal users error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
