use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while building a `NumberSequence`. All of them abort the load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid number in source at line {line}: {token:?}")]
    MalformedNumber { token: String, line: usize },

    #[error("error reading source: {0}")]
    ReadFailure(#[from] io::Error),
}

/// Outcomes of a lookup that did not produce a result.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LookupError {
    /// No exact match and the threshold was zero.
    #[error("number not found")]
    NotFound,

    /// No exact match and neither neighbour of the insertion point was close enough.
    #[error("number not found within acceptable threshold")]
    OutOfThreshold,

    #[error("threshold percentage must be a finite, non-negative number (got {0})")]
    InvalidThreshold(f64),
}

impl LookupError {
    /// `true` for the routine "value absent" outcomes.
    pub fn is_absent(&self) -> bool {
        matches!(self, LookupError::NotFound | LookupError::OutOfThreshold)
    }
}
