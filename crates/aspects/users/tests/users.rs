use hunt_kernel::domain::aspect::Aspect;
use hunt_kernel::domain::constants::USERS;
use hunt_kernel::domain::entities::UserPatch;
use hunt_kernel::domain::entity::Entity;
use hunt_kernel::domain::registry::SlotRegistry;
use hunt_kernel::domain::slots::{HeaderLinks, UserProfileCards};
use hunt_users::{Users, init, mock};
use serde_json::json;

#[test]
fn init_registers_header_link_and_profile_card() {
    let mut slots = SlotRegistry::new();
    let initialized = init(&mut slots).expect("users init");

    assert_eq!(initialized.name, USERS);
    assert_eq!(Users::NAME, USERS);

    let links = slots.contributions_by::<HeaderLinks>(USERS);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].href, "/me");

    let cards = slots.contributions::<UserProfileCards>();
    assert_eq!(cards[0].name, "about");
    assert_eq!(cards[0].component.as_str(), "users.AboutCard");
}

#[test]
fn profile_path_uses_username() {
    let mut slots = SlotRegistry::new();
    let initialized = init(&mut slots).unwrap();
    let users = initialized.state.as_any().downcast_ref::<Users>().expect("users handle");

    let user = mock::user(UserPatch { username: Some("ada".to_owned()), ..UserPatch::default() });
    assert_eq!(users.profile_path(&user), "/@ada");
    assert_eq!(users.name(), "users");
}

#[test]
fn mock_user_agrees_with_overrides_and_defaults() {
    let user = mock::user(UserPatch {
        user_id: Some(Some("u-42".to_owned())),
        bio: Some(None),
        ..UserPatch::default()
    });
    let value = user.to_value().unwrap();

    assert_eq!(value["userId"], json!("u-42"));
    assert_eq!(value["id"], json!("u-42"));
    assert!(value.get("bio").is_none());
    assert_eq!(value["email"], json!(mock::defaults().email));
    assert_eq!(value["displayName"], json!("Demo Maker"));
    assert!(value["createdAt"].as_str().is_some_and(|ts| ts.ends_with('Z')));
}

#[test]
fn mock_users_generate_distinct_identities() {
    let users = mock::users([UserPatch::default(), UserPatch::default()]);
    assert_eq!(users.len(), 2);
    assert_ne!(users[0].id(), users[1].id());

    let single = mock::users([]);
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].username(), "maker");
}
