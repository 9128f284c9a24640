//! Errors of the budget procedure.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Errors that abort a budget search.
///
/// Missing the budget is not an error; see
/// [`SearchOutcome::Exhausted`](crate::search::SearchOutcome::Exhausted).
#[derive(Debug, Error)]
pub enum BudgetError {
    /// The search configuration is unusable
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The source could not be read or decoded
    #[error("Failed to decode source: {0}")]
    Decode(#[from] DecodeError),

    /// The destination could not be written or measured
    #[error("Failed to write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// The encoder could not produce the output
    #[error("Failed to encode output: {0}")]
    Encode(#[from] EncodeError),
}

/// Coarse classification of a [`BudgetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The configuration was rejected before any work.
    Config,
    /// Unreadable, corrupt or unsupported input.
    Decode,
    /// The output could not be produced.
    Io,
}

impl BudgetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BudgetError::Io {
            path: path.into(),
            source,
        }
    }

    /// Which side of the procedure failed.
    ///
    /// Encoder failures count as `Io`: no output could be written.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BudgetError::Config(_) => ErrorKind::Config,
            BudgetError::Decode(_) => ErrorKind::Decode,
            BudgetError::Io { .. } | BudgetError::Encode(_) => ErrorKind::Io,
        }
    }
}
