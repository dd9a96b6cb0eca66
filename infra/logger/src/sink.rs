use std::path::PathBuf;
use tracing_appender::rolling::Rotation;

pub(crate) const DEFAULT_MAX_FILES: usize = 10;

/// Rolling log file destination.
#[derive(Debug)]
pub struct FileSink {
    pub(crate) path: PathBuf,
    pub(crate) rotation: Rotation,
    pub(crate) max_files: usize,
}

impl FileSink {
    /// Daily rotation into `path`, keeping the ten most recent files.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), rotation: Rotation::DAILY, max_files: DEFAULT_MAX_FILES }
    }

    #[must_use]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}
