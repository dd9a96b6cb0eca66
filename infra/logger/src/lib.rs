//! # Logger
//!
//! Installs the global `tracing` subscriber for applications of the platform.
//!
//! * Console output goes to **stderr**, leaving stdout free for command output.
//! * Optional rolling file output through a non-blocking writer ([`FileSink`]).
//! * `json` switches every enabled layer to structured JSON lines.
//! * [`LoggerBuilder::env_filter`] sets module directives (`"hunt=debug,config=warn"`);
//!   without one, `RUST_LOG` is honored on top of the configured level.
//!
//! ## Example
//!
//! ```rust
//! # use hunt_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("hunt")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;
mod sink;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use crate::sink::FileSink;
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::str::FromStr;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    json: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileSink>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { console: true, json: false, level: LevelFilter::INFO, env_filter: None, file: None }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for configuring and initializing the global tracing subscriber.
///
/// A name is required before [`LoggerBuilder::init`] becomes available.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the name of the logger, also used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { name: WithName(name.into()), config: self.config }
    }
}

impl<N: Sealed> LoggerBuilder<N> {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Sets the level from its textual form (`"warn"`, `"debug"`, `"off"`, ...).
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an unknown level.
    pub fn level_str(self, level: &str) -> Result<Self, LoggerError> {
        let parsed = LevelFilter::from_str(level).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid log level '{level}': {e}").into(),
            context: None,
        })?;
        Ok(self.level(parsed))
    }

    /// Adds an explicit env filter (e.g., `hunt=debug,config=warn`).
    ///
    /// Invalid filters cause [`LoggerBuilder::init`] to fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Emits JSON lines instead of the compact human format.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }

    /// Writes logs to a rolling file sink.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn file(mut self, sink: FileSink) -> Self {
        self.config.file = Some(sink);
        self
    }

    /// Shorthand for [`LoggerBuilder::file`] with default rotation.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn path(self, path: impl Into<std::path::PathBuf>) -> Self {
        self.file(FileSink::new(path))
    }
}

impl LoggerBuilder<WithName> {
    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's [`WorkerGuard`]; keep it alive for
    /// the lifetime of the program so buffered lines are flushed.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, a bad filter, zero
    ///   retained files, or no enabled output.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] if the file sink cannot be created.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { config, name: WithName(name) } = self;
        validate_config(&config, &name)?;

        let env_filter = build_env_filter(&config)?;
        let mut layers = Vec::new();

        if config.console {
            layers.push(console_layer(config.json));
        }

        let guard = match config.file {
            Some(sink) => {
                fs::create_dir_all(&sink.path)
                    .context(format!("Failed to create path: {}", sink.path.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(sink.rotation)
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(sink.max_files)
                    .build(&sink.path)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if config.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry()
            .with(env_filter)
            .with(layers)
            .try_init()
            .context(format!("Installing subscriber for {name}"))?;

        Ok(Logger { guard })
    }
}

fn console_layer<S>(json: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let base = layer().with_writer(std::io::stderr);
    if json { base.json().boxed() } else { base.compact().with_ansi(true).boxed() }
}

/// A handle to the initialized logging system.
///
/// Holds the background writer guard; drop it only when the application shuts down.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    ///
    /// ```rust
    /// use hunt_logger::{FileSink, LevelFilter, Logger, Rotation};
    ///
    /// let dir = std::env::temp_dir().join("hunt-doc-logs");
    /// let _logger = Logger::builder()
    ///     .name("hunt")
    ///     .console(false)
    ///     .file(FileSink::new(dir).rotation(Rotation::HOURLY).max_files(3))
    ///     .level(LevelFilter::DEBUG)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    /// Whether a file writer is attached.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers");
        }
    }
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.file.as_ref().is_some_and(|sink| sink.max_files == 0) {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("hunt-test").env_filter("hunt=debug");
        assert!(builder.config.console);
        assert!(!builder.config.json);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.env_filter.as_deref(), Some("hunt=debug"));
        assert!(builder.config.file.is_none());
    }

    #[test]
    fn file_sink_settings_are_kept() {
        let builder = Logger::builder()
            .name("hunt-test")
            .file(FileSink::new("logs").rotation(Rotation::NEVER).max_files(5))
            .json(true);

        let sink = builder.config.file.as_ref().unwrap();
        assert_eq!(sink.max_files, 5);
        assert_eq!(sink.path(), std::path::Path::new("logs"));
        assert!(builder.config.json);
    }

    #[test]
    fn level_is_parsed_from_text() {
        let builder = Logger::builder().level_str("warn").unwrap();
        assert_eq!(builder.config.level, LevelFilter::WARN);

        let err = Logger::builder().level_str("loud").unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn invalid_settings_are_rejected_before_install() {
        let err = Logger::builder().name("  ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("hunt-test").console(false).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder()
            .name("hunt-test")
            .file(FileSink::new("unused").max_files(0))
            .init()
            .unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("hunt-test").env_filter("hunt=loudest").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
