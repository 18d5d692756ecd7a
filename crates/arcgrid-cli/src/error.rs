//! Errors of the command-line front end.

use std::{io, path::PathBuf};

use arcgrid_core::DividerError;
use arcgrid_puzzle::{ParseError, TaskError};

/// Errors reported by the command-line front end.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// A file could not be read.
    #[display("failed to read {}: {source}", path.display())]
    #[from(skip)]
    Read {
        /// The file being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A file or directory could not be written.
    #[display("failed to write {}: {source}", path.display())]
    #[from(skip)]
    Write {
        /// The file or directory being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Puzzle text could not be parsed.
    #[display("{_0}")]
    Parse(#[from] ParseError),
    /// An ARC task could not be loaded or rendered.
    #[display("{_0}")]
    Task(#[from] TaskError),
    /// Divider detection failed.
    #[display("{_0}")]
    Divider(#[from] DividerError),
    /// A result could not be encoded as JSON.
    #[display("failed to encode result: {_0}")]
    Json(#[from] serde_json::Error),
    /// The worker pool could not be configured.
    #[display("failed to configure worker threads: {_0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
