use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides (`HUNT__LOGGING__LEVEL=debug`).
pub const ENV_PREFIX: &str = "HUNT";

/// File stem looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_STEM: &str = "hunt";

#[hunt_derive::hunt_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file layered under environment overrides.
///
/// 1. **Base file**: an explicit `path` must exist. Without one, an optional `hunt.*` file
///    (any format the `config` crate recognizes) is read from the working directory.
/// 2. **Environment**: variables prefixed with `HUNT__` override file values. Nested keys are
///    separated by double underscores (`HUNT__PLATFORM__NAME` maps to `platform.name`).
///
/// # Errors
/// * The explicit file is missing or unreadable.
/// * The merged values do not match the structure of `T`.
///
/// # Example
/// ```rust
/// use hunt_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_STEM), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
