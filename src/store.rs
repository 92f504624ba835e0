//! Whole-file access to the JSON document backing a collection.
//!
//! Reads create the file when it is missing; writes truncate and replace the
//! entire contents. There is no locking and no atomic rename: two processes
//! writing the same file race, and the last writer wins.

use crate::error::{Error, Result};
use log::debug;
use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

/// A named file holding one encoded collection.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the given path. Nothing is touched on disk yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full contents of the file.
    ///
    /// A missing file is created empty and yields an empty buffer. Any other
    /// failure (permissions, the path being a directory) is an I/O error.
    pub fn read(&self) -> Result<Vec<u8>> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist, creating it", self.path.display());
                File::create(&self.path).map_err(|e| Error::io(&self.path, e))?;
                return Ok(Vec::new());
            }
            Err(e) => return Err(Error::io(&self.path, e)),
        };

        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| Error::io(&self.path, e))?;
        debug!("read {} bytes from {}", data.len(), self.path.display());
        Ok(data)
    }

    /// Replace the file contents with `data`.
    pub fn write(&self, data: &[u8]) -> Result<()> {
        fs::write(&self.path, data).map_err(|e| Error::io(&self.path, e))?;
        debug!("wrote {} bytes to {}", data.len(), self.path.display());
        Ok(())
    }
}
