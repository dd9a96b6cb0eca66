use hunt_kernel::config::{ConfigError, load_config};
use hunt_kernel::domain::aspect::AspectSet;
use hunt_kernel::domain::config::HuntConfig;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).expect("write config");
    path
}

#[test]
#[serial]
fn loads_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "hunt.toml",
        r#"
aspects = ["users", "products"]

[platform]
name = "staging"
base_url = "https://staging.hunt.dev"

[logging]
level = "debug"
json = true
"#,
    );

    let cfg: HuntConfig = load_config(Some(&path)).expect("config loads");
    assert_eq!(cfg.platform.name, "staging");
    assert_eq!(cfg.platform.base_url.as_deref(), Some("https://staging.hunt.dev"));
    assert_eq!(cfg.aspects, AspectSet::USERS | AspectSet::PRODUCTS);
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
}

#[test]
#[serial]
fn missing_sections_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "partial.toml", "[platform]\nname = \"partial\"\n");

    let cfg: HuntConfig = load_config(Some(&path)).expect("config loads");
    assert_eq!(cfg.platform.name, "partial");
    assert_eq!(cfg.aspects, AspectSet::ALL);
    assert_eq!(cfg.logging.level, "info");
}

#[test]
#[serial]
fn explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_config::<HuntConfig>(Some(dir.path().join("absent.toml"))).unwrap_err();

    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    assert!(err.to_string().starts_with("Config error (Failed to build config)"));
}

#[test]
#[serial]
fn unknown_aspect_fails_deserialization() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "bad.toml", "aspects = [\"comments\"]\n");

    let err = load_config::<HuntConfig>(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Failed to deserialize config"));
}
