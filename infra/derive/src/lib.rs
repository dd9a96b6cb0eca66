#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the platform.
//!
//! * [`hunt_error`] wires an error enum to `thiserror` and adds `.context(...)` support.
//! * [`plain_model`] turns a struct into a camelCase plain record with a companion patch type.
//! * [`aspect`] turns a struct into a cheaply clonable aspect handle.
//!
//! Examples are `ignore`d here because the generated code refers to `hunt_domain` paths;
//! the crate's `tests/ui` directory compiles real usages.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro for domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context(...)`
///   to `Result<T, Name>` and to `Result<T, Source>` for every source-carrying variant.
/// * **Standard Conversions**: Implements `From<Source>` for variants with a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling `?`.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant exists.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Variants must use named fields.
/// 3. A variant with a source must carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[hunt_derive::hunt_error]
/// pub enum StoreError {
///     #[error("Decode error{}: {source}", format_context(.context))]
///     Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<serde_json::Value, StoreError> {
///     serde_json::from_str(raw).context("Parsing fixture file")
/// }
/// ```
#[proc_macro_attribute]
pub fn hunt_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_error(input).into()
}

/// Attribute macro for plain records, the JSON-compatible form of an entity.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Clone`, `PartialEq`, `Serialize`, `Deserialize` when missing.
/// * **Serde Policy**: `rename_all = "camelCase"` unless overridden; `Option` fields without
///   their own `#[serde(...)]` get `default` and `skip_serializing_if = "Option::is_none"`,
///   so an absent optional key stays absent on output.
/// * **Patch Type**: A companion `<Name>Patch` (the `Plain` suffix is replaced) with every
///   field wrapped in `Option`, deriving `Default` and `Deserialize`, implementing
///   `hunt_domain::plain::Patch<Name>` as a shallow merge.
///
/// # Arguments
///
/// * `rename_all = "snake_case"` - Overrides the default rename policy.
/// * `deny_unknown_fields = true` - Rejects unknown keys (off by default).
///
/// # Example
///
/// ```rust,ignore
/// #[hunt_derive::plain_model]
/// pub struct TagPlain {
///     pub id: Option<String>,
///     pub label: String,
/// }
///
/// let patch = TagPatch { label: Some("rust".to_owned()), ..TagPatch::default() };
/// ```
#[proc_macro_attribute]
pub fn plain_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::plain::expand_plain_model(attr.into(), input).into()
}

/// Attribute macro to define an aspect handle.
///
/// 1. Moves the declared fields into a `<Name>Inner` struct.
/// 2. Generates a thread-safe `Arc` wrapper with `Deref` to the inner state.
/// 3. Implements `hunt_domain::aspect::Aspect` using the `name = "..."` argument
///    (defaults to the lowercased struct name).
///
/// # Example
/// ```rust,ignore
/// #[hunt_derive::aspect(name = "reviews")]
/// pub struct Reviews {
///     pub max_rating: u8,
/// }
///
/// let handle = Reviews::new(ReviewsInner { max_rating: 5 });
/// ```
#[proc_macro_attribute]
pub fn aspect(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::aspect::expand_aspect(attr.into(), input).into()
}
