//! File persistence for rendered data files.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::datafile::DataFile;
use crate::error::{Error, Result};

const DEFAULT_TEMP_PREFIX: &str = "opldat-data-";

impl DataFile {
    /// Render and write to `path`, creating missing parent directories.
    /// An existing file is overwritten without confirmation.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        write_file(path.as_ref(), &self.render())
    }

    /// Render and write to a generated temporary file named
    /// `opldat-data-*.dat`. The file persists after the call; the caller
    /// owns its lifetime. Returns the generated path.
    pub fn write_temp(&self) -> Result<PathBuf> {
        self.write_temp_with_prefix(DEFAULT_TEMP_PREFIX)
    }

    /// Like [`DataFile::write_temp`], with a custom file name prefix.
    pub fn write_temp_with_prefix(&self, prefix: &str) -> Result<PathBuf> {
        let mut file = tempfile::Builder::new()
            .prefix(prefix)
            .suffix(".dat")
            .tempfile()
            .map_err(|source| Error::Temp { source })?;
        file.write_all(self.render().as_bytes())
            .map_err(|source| Error::Write {
                path: file.path().to_path_buf(),
                source,
            })?;
        let (_, path) = file
            .keep()
            .map_err(|err| Error::Temp { source: err.error })?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
