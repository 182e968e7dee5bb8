use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for opldat operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to write data file '{path}'")]
    #[diagnostic(help("check that the target directory exists and is writable"))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create temporary data file")]
    #[diagnostic(help("check the permissions of the system temp directory"))]
    Temp {
        #[source]
        source: io::Error,
    },
}
