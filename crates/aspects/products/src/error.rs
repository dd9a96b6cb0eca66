use std::borrow::Cow;

/// A specialized [`ProductsError`] enum of this crate.
#[hunt_derive::hunt_error]
pub enum ProductsError {
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal products error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
