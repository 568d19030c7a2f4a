//! Error type for the command-line front end.

use std::path::PathBuf;

use thiserror::Error;
use turnpath_core::GridError;
use turnpath_paths::PathError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("no '{0}' found in input")]
    MissingSymbol(char),

    #[error("square size {0} out of range (0..{max})", max = i32::MAX)]
    InvalidSize(i32),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type Result<T> = std::result::Result<T, CliError>;
