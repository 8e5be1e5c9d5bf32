//! Errors of the convergence plotter.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Result type alias for convplot operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Possible errors when loading data or drawing figures.
#[derive(Debug, Error)]
pub enum Error {
    /// An input file is absent or unreadable.
    #[error("{}: cannot access file: {source}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A data line does not hold exactly two numbers.
    #[error("{}:{line}: expected two numbers, found {content:?}",
            path.display())]
    MalformedRow {
        path: PathBuf,
        /// 1-based line number in the file.
        line: usize,
        content: String,
    },

    /// The Python library "matplotlib" was not found.
    #[cfg(feature = "matplotlib")]
    #[error("The matplotlib library has not been found.\n\
             Please install it.  See https://matplotlib.org/\n\
             If you use Anaconda, see https://github.com/PyO3/pyo3/issues/1554")]
    NoMatplotlib,

    /// The output path contains an element that is not a directory or
    /// does not exist.
    #[cfg(feature = "matplotlib")]
    #[error("A path contains an element that is not a directory or \
             does not exist")]
    FileNotFound,

    /// Permission denied to access or create the output path.
    #[cfg(feature = "matplotlib")]
    #[error("Permission denied to access or create the filesystem path")]
    PermissionDenied,

    /// Other Python errors.
    #[cfg(feature = "matplotlib")]
    #[error("Python error: {0}")]
    Python(#[from] pyo3::PyErr),
}

impl Error {
    pub(crate) fn missing_file(path: impl Into<PathBuf>, source: io::Error)
                               -> Self {
        Self::MissingFile { path: path.into(), source }
    }

    pub(crate) fn malformed_row(path: impl Into<PathBuf>, line: usize,
                                content: impl Into<String>) -> Self {
        Self::MalformedRow { path: path.into(), line,
                             content: content.into() }
    }
}
