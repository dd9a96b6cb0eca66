use hunt_derive::hunt_error;
use std::borrow::Cow;

#[hunt_error]
pub enum SlotError {
    #[cfg(not(any()))]
    #[error("Unknown slot{}: {message}", format_context(.context))]
    UnknownSlot { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Plain slot error: {message}")]
    Plain { message: Cow<'static, str> },
}

fn main() {
    let err: Result<(), SlotError> =
        Err(SlotError::UnknownSlot { message: "header.links".into(), context: None });
    let _ = err.context("Enumerating slots");
}
