use hunt_derive::hunt_error;
use std::borrow::Cow;

#[hunt_error]
pub enum FixtureError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<String, FixtureError> {
    std::fs::read_to_string("missing.json").context("Reading fixture")
}

fn main() {
    let _ = read();
    let _: FixtureError = "boom".into();
}
