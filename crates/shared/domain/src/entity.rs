//! The `from(plain)` / `to_plain()` convention shared by every entity.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;

/// Failures at the plain-record boundary.
#[hunt_derive::hunt_error]
pub enum EntityError {
    /// A required key is absent (or `null`) in the plain record.
    #[error("Missing required field `{field}` for {entity}{}", format_context(.context))]
    MissingField {
        entity: Cow<'static, str>,
        field: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// The plain record is not a JSON object.
    #[error("Plain record is not an object{}: {message}", format_context(.context))]
    NotAnObject { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A key is present but has the wrong type.
    #[error("Plain record shape mismatch{}: {source}", format_context(.context))]
    Shape { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

/// An immutable value object with a plain (JSON-compatible) representation.
///
/// `from_plain` and `to_plain` form a round trip: for a well-formed record `p`,
/// `E::from_plain(p).to_plain()` equals `p` except for generated identity, defaulted
/// fields, and any renaming documented on the entity.
pub trait Entity: Sized {
    /// Lowercase entity name used in messages and fixtures.
    const KIND: &'static str;

    /// Keys that must be present and non-null in a plain record, in declaration order.
    const REQUIRED_FIELDS: &'static [&'static str];

    /// The plain record type.
    type Plain: Serialize + DeserializeOwned;

    /// Stable identity of the entity.
    fn id(&self) -> &str;

    /// Builds the entity, generating identity when the record has none.
    fn from_plain(plain: Self::Plain) -> Self;

    /// Returns the plain record holding exactly the entity's field values.
    fn to_plain(&self) -> Self::Plain;

    /// Builds the entity from untyped JSON.
    ///
    /// # Errors
    /// * [`EntityError::NotAnObject`] if `value` is not an object.
    /// * [`EntityError::MissingField`] naming the first absent required key.
    /// * [`EntityError::Shape`] if a present key has the wrong type.
    fn from_value(value: Value) -> Result<Self, EntityError> {
        let Value::Object(fields) = &value else {
            return Err(EntityError::NotAnObject {
                message: format!("{} record must be an object, got {}", Self::KIND, json_kind(&value))
                    .into(),
                context: None,
            });
        };

        if let Some(missing) =
            Self::REQUIRED_FIELDS.iter().find(|key| fields.get(**key).is_none_or(Value::is_null))
        {
            return Err(EntityError::MissingField {
                entity: Self::KIND.into(),
                field: (*missing).into(),
                context: None,
            });
        }

        let plain = serde_json::from_value::<Self::Plain>(value)
            .context(format!("Decoding {} record", Self::KIND))?;
        Ok(Self::from_plain(plain))
    }

    /// Serializes the plain record into untyped JSON.
    ///
    /// # Errors
    /// Returns [`EntityError::Shape`] if the record cannot be represented as JSON.
    fn to_value(&self) -> Result<Value, EntityError> {
        serde_json::to_value(self.to_plain()).context(format!("Encoding {} record", Self::KIND))
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
