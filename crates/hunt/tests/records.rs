use hunt::records::{EntityKind, RecordError};
use proptest::prelude::*;
use serde_json::{Map, Value, json};

fn string_overrides() -> impl Strategy<Value = Map<String, Value>> {
    let keys = prop::sample::subsequence(vec!["name", "tagline", "makerId", "description"], 0..=4);
    (keys, prop::collection::vec("[a-zA-Z0-9 ]{1,24}", 4)).prop_map(|(keys, values)| {
        keys.into_iter().zip(values).map(|(k, v)| (k.to_owned(), Value::String(v))).collect()
    })
}

proptest! {
    #[test]
    fn product_mock_agrees_with_overrides_and_defaults(
        overrides in string_overrides(),
        upvotes in proptest::option::of(0u32..10_000),
    ) {
        let mut overrides = overrides;
        if let Some(count) = upvotes {
            overrides.insert("upvoteCount".to_owned(), json!(count));
        }

        let defaults = EntityKind::Product.mock(Vec::new()).unwrap().remove(0);
        let record = EntityKind::Product.mock(vec![Value::Object(overrides.clone())]).unwrap().remove(0);

        for (key, value) in &overrides {
            prop_assert_eq!(&record[key], value);
        }
        for key in ["name", "tagline", "makerId", "description", "upvoteCount", "topics", "websiteUrl"] {
            if !overrides.contains_key(key) {
                prop_assert_eq!(&record[key], &defaults[key]);
            }
        }
        prop_assert_ne!(&record["id"], &defaults["id"]);
    }
}

#[test]
fn several_overrides_build_several_records() {
    let records = EntityKind::Review
        .mock(vec![json!({ "rating": 1 }), json!({ "rating": 2, "status": "pending" })])
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["rating"], json!(1));
    assert_eq!(records[1]["status"], json!("pending"));
}

#[test]
fn mistyped_override_is_a_fixture_error() {
    let err = EntityKind::Launch.mock(vec![json!({ "featured": "yes" })]).unwrap_err();
    assert!(matches!(err, RecordError::Fixture { .. }));
}

#[test]
fn user_normalization_surfaces_id() {
    let value = EntityKind::User
        .normalize(json!({ "userId": "u1", "email": "a@b.com", "username": "u" }))
        .unwrap();
    assert_eq!(value, json!({ "id": "u1", "userId": "u1", "email": "a@b.com", "username": "u" }));
}

#[test]
fn null_override_clears_an_optional_default() {
    let defaults = EntityKind::User.mock(Vec::new()).unwrap().remove(0);
    assert!(defaults.get("bio").is_some());

    let record = EntityKind::User.mock(vec![json!({ "bio": null, "website": null })]).unwrap().remove(0);
    assert_eq!(record.get("bio"), None);
    assert_eq!(record.get("website"), None);
    assert_eq!(record["displayName"], defaults["displayName"]);
}

#[test]
fn null_override_of_a_required_field_is_rejected() {
    let err = EntityKind::User.mock(vec![json!({ "email": null })]).unwrap_err();
    assert!(matches!(err, RecordError::Fixture { .. }));
    assert!(err.to_string().contains("user"));
}
