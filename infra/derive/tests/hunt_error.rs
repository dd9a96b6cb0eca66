use hunt_derive::hunt_error;
use std::borrow::Cow;

#[hunt_error]
pub enum LoadError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Internal load error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse_weight(raw: &str) -> Result<i32, LoadError> {
    raw.parse::<i32>().context("Parsing slot weight")
}

#[test]
fn hunt_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/hunt_error_pass.rs");
    t.pass("tests/ui/hunt_error_cfg_variant.rs");
}

#[test]
fn source_errors_convert_with_context() {
    let err = parse_weight("heavy").unwrap_err();
    assert!(matches!(err, LoadError::Parse { context: Some(ref c), .. } if c == "Parsing slot weight"));
    assert!(err.to_string().starts_with("Parse error (Parsing slot weight): "));
}

#[test]
fn question_mark_uses_from_without_context() {
    fn run() -> Result<i32, LoadError> {
        Ok("x".parse::<i32>()?)
    }

    let err = run().unwrap_err();
    assert!(matches!(err, LoadError::Parse { context: None, .. }));
}

#[test]
fn internal_variant_accepts_strings_and_late_context() {
    let err: Result<(), LoadError> = Err("registry frozen".into());
    let err = err.context("Registering header links").unwrap_err();
    assert_eq!(err.to_string(), "Internal load error (Registering header links): registry frozen");

    let owned: LoadError = String::from("dynamic").into();
    assert_eq!(owned.to_string(), "Internal load error: dynamic");
}
