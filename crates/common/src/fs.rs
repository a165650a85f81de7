//! Contains various `std::fs` wrapper functions that also contain the target path in their errors.

use crate::errors::FsPathError;
use std::{
    fs::{File, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

type Result<T> = std::result::Result<T, FsPathError>;

/// Wrapper for [`std::fs::read_to_string`].
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|err| FsPathError::read(err, path))
}

/// A generated output file, held open read-write for the duration of a run.
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    file: File,
}

impl OutputFile {
    /// Opens `path` read-write, creating the file if it does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|err| FsPathError::open(err, &path))?;
        Ok(Self { path, file })
    }

    /// The path this file was opened at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the file contents with `contents`, unless they already match.
    ///
    /// Returns `true` if the file was rewritten. Skipping the write keeps the modification time
    /// stable, which downstream build systems rely on to avoid rebuild cascades.
    pub fn write_if_different(&mut self, contents: &str) -> Result<bool> {
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(|err| FsPathError::read(err, &self.path))?;
        let mut current = Vec::new();
        self.file
            .read_to_end(&mut current)
            .map_err(|err| FsPathError::read(err, &self.path))?;
        if current == contents.as_bytes() {
            return Ok(false);
        }

        self.file
            .seek(SeekFrom::Start(0))
            .map_err(|err| FsPathError::write(err, &self.path))?;
        self.file.set_len(0).map_err(|err| FsPathError::write(err, &self.path))?;
        self.file
            .write_all(contents.as_bytes())
            .map_err(|err| FsPathError::write(err, &self.path))?;
        Ok(true)
    }
}
