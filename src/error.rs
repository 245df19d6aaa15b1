//! Error types for the eight_puzzle crate

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the eight_puzzle crate.
///
/// An exhausted search is not an error; see [`crate::solver::SolveOutcome`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid heuristic option {option} (expected 1, 2 or 3)")]
    InvalidHeuristicOption { option: u8 },

    #[error("malformed board: {reason}")]
    MalformedBoard { reason: String },

    #[error("invalid puzzle definition at line {line}: {reason}")]
    InvalidDefinition { line: usize, reason: String },

    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedBoard {
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
