use hunt_domain::aspect::{AspectKind, AspectSet};
use hunt_domain::config::{HuntConfig, LoggingConfig, PlatformConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let platform = PlatformConfig::default();
    assert_eq!(platform.name, "hunt");
    assert!(platform.base_url.is_none());

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(!logging.json);
    assert!(logging.path.is_none());

    let cfg = HuntConfig::default();
    assert_eq!(cfg.aspects, AspectSet::ALL);
}

#[test]
fn hunt_config_deserializes() {
    let raw = json!({
        "platform": { "name": "preview", "base_url": "https://preview.hunt.dev" },
        "aspects": ["products", "reviews"],
        "logging": { "level": "debug", "json": true, "path": "/tmp/hunt-logs" }
    });

    let cfg: HuntConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.platform.name, "preview");
    assert_eq!(cfg.platform.base_url.as_deref(), Some("https://preview.hunt.dev"));
    assert_eq!(cfg.aspects, AspectSet::PRODUCTS | AspectSet::REVIEWS);
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
    assert!(cfg.logging.console);
    assert_eq!(cfg.logging.path, Some(std::path::PathBuf::from("/tmp/hunt-logs")));
}

#[test]
fn aspects_accept_a_joined_string() {
    let cfg: HuntConfig =
        serde_json::from_value(json!({ "aspects": "users, upvotes" })).expect("config deserialize");
    let kinds: Vec<_> = cfg.aspects.kinds().collect();
    assert_eq!(kinds, vec![AspectKind::Users, AspectKind::Upvotes]);
}

#[test]
fn unknown_aspect_is_rejected() {
    let err = serde_json::from_value::<HuntConfig>(json!({ "aspects": ["products", "comments"] }));
    assert!(err.is_err());
}

#[test]
fn config_clones_share_until_mutated() {
    let base = HuntConfig::default();
    let mut tuned = base.clone();
    tuned.aspects = AspectSet::USERS;

    assert_eq!(base.aspects, AspectSet::ALL);
    assert_eq!(tuned.aspects, AspectSet::USERS);
}
