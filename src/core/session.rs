//! Session state: which document is currently active.

use std::path::{Path, PathBuf};

/// Process-wide editing session. Created empty at startup and never persisted.
///
/// At most one file is active at a time; every content write targets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    opened_file_path: Option<PathBuf>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the active document, if one was opened or created.
    pub fn opened_file_path(&self) -> Option<&Path> {
        self.opened_file_path.as_deref()
    }

    /// Whether a document has been opened or created in this session.
    pub fn is_active(&self) -> bool {
        self.opened_file_path.is_some()
    }

    /// Make `path` the active document, replacing any previous one.
    pub fn activate(&mut self, path: PathBuf) {
        self.opened_file_path = Some(path);
    }
}
