//! Append-only writer for the generated declaration file.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::WriteError;

/// Writes declarations to the target file, one append per declaration.
///
/// [`append`](Self::append) opens the file in append mode, writes, and
/// flushes before returning; the handle is closed again when the call ends,
/// so declarations never interleave and an aborted run leaves only whole
/// declarations behind.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    path: PathBuf,
}

impl OutputWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the declarations are written to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove a leftover file from a previous run so the first append
    /// starts from an empty file. A missing file is fine.
    pub fn reset(&self) -> Result<(), WriteError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Removed existing output file.");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(WriteError::Remove {
                path: self.path.clone(),
                source: err,
            }),
        }
    }

    /// Append one declaration and flush it before returning.
    pub fn append(&self, text: &str) -> Result<(), WriteError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| WriteError::Append {
                path: self.path.clone(),
                source: err,
            })?;
        file.write_all(text.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|err| WriteError::Append {
                path: self.path.clone(),
                source: err,
            })
    }
}
