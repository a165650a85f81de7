//! Error types shared across the ucdgen crates.

use std::{
    io,
    path::{Path, PathBuf},
};

/// Various error variants for filesystem operations that serve as an addition to the io::Error
/// which does not provide any information about the path.
#[derive(Debug, thiserror::Error)]
pub enum FsPathError {
    /// Provides additional path context for [`std::fs::write`].
    #[error("failed to write to {path:?}: {source}")]
    Write {
        /// The underlying io error.
        source: io::Error,
        /// The path being written.
        path: PathBuf,
    },
    /// Provides additional path context for [`std::fs::read`].
    #[error("failed to read from {path:?}: {source}")]
    Read {
        /// The underlying io error.
        source: io::Error,
        /// The path being read.
        path: PathBuf,
    },
    /// Provides additional path context for [`std::fs::File::open`].
    #[error("failed to open file {path:?}: {source}")]
    Open {
        /// The underlying io error.
        source: io::Error,
        /// The path being opened.
        path: PathBuf,
    },
}

impl FsPathError {
    /// Returns the complementary error variant for a failed write.
    pub fn write(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Write { source, path: path.into() }
    }

    /// Returns the complementary error variant for a failed read.
    pub fn read(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Read { source, path: path.into() }
    }

    /// Returns the complementary error variant for a failed open.
    pub fn open(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Open { source, path: path.into() }
    }
}

impl AsRef<Path> for FsPathError {
    fn as_ref(&self) -> &Path {
        match self {
            Self::Write { path, .. } | Self::Read { path, .. } | Self::Open { path, .. } => path,
        }
    }
}

impl From<FsPathError> for io::Error {
    fn from(value: FsPathError) -> Self {
        match value {
            FsPathError::Write { source, .. }
            | FsPathError::Read { source, .. }
            | FsPathError::Open { source, .. } => source,
        }
    }
}
