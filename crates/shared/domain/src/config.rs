use crate::aspect::AspectSet;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level platform configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HuntConfigInner {
    pub platform: PlatformConfig,
    pub aspects: AspectSet,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into aspects.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct HuntConfig {
    #[serde(flatten, default)]
    inner: Arc<HuntConfigInner>,
}

impl Deref for HuntConfig {
    type Target = HuntConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for HuntConfig {
    fn deref_mut(&mut self) -> &mut HuntConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Identity of the composed platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub name: String,
    /// Public origin used when rendering absolute links.
    pub base_url: Option<String>,
}

/// Logging knobs consumed by the application entry points.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub console: bool,
    pub json: bool,
    pub path: Option<PathBuf>,
    pub env_filter: Option<String>,
}

// --- Default ---

impl Default for PlatformConfig {
    fn default() -> Self {
        Self { name: "hunt".to_owned(), base_url: None }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, json: false, path: None, env_filter: None }
    }
}
