//! Error types for the file bridge.
//!
//! The user never sees these: every variant collapses to the same generic
//! alert. They exist for logging and for callers that need to branch.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8", .path.display())]
    Encoding { path: PathBuf },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `persist` was called before any document was opened or created.
    #[error("no document is open")]
    NoActiveDocument,

    /// The edit belongs to a document that has since been replaced.
    #[error("{} is no longer the open document", .path.display())]
    Superseded { path: PathBuf },
}

impl BridgeError {
    /// Whether this failure came from the disk (and was reported to the user).
    pub fn is_io_failure(&self) -> bool {
        !matches!(
            self,
            BridgeError::NoActiveDocument | BridgeError::Superseded { .. }
        )
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;
