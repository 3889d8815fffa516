//! Messages crossing the window <-> shell boundary.
//!
//! The window raises [`Command`]s and [`ContentUpdate`]s; the shell answers
//! with [`ShellEvent`]s. Each message owns its payload and is moved, never
//! shared.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// User-triggered menu actions handled by the file bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Command {
    #[serde(rename = "open-document-triggered")]
    OpenFile,
    #[serde(rename = "create-document-triggered")]
    CreateFile,
}

impl Command {
    /// Channel name of the command on the window -> shell boundary.
    pub fn channel(self) -> &'static str {
        match self {
            Command::OpenFile => "open-document-triggered",
            Command::CreateFile => "create-document-triggered",
        }
    }
}

/// `file-content-updated`: the whole text of the editing surface.
///
/// `file_path` is the document the surface showed when the edit was made.
/// It stays off the wire; the bridge uses it to refuse writes for a document
/// that is no longer active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "channel", rename = "file-content-updated")]
pub struct ContentUpdate {
    #[serde(skip)]
    pub file_path: PathBuf,
    pub content: String,
}

impl ContentUpdate {
    pub fn new(file_path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            content: content.into(),
        }
    }
}

/// Notifications pushed from the shell to the editing surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "channel", rename_all = "kebab-case")]
pub enum ShellEvent {
    #[serde(rename_all = "camelCase")]
    DocumentOpened { file_path: PathBuf, content: String },
    /// Content of a created document is empty.
    #[serde(rename_all = "camelCase")]
    DocumentCreated { file_path: PathBuf },
}

impl ShellEvent {
    pub fn channel(&self) -> &'static str {
        match self {
            ShellEvent::DocumentOpened { .. } => "document-opened",
            ShellEvent::DocumentCreated { .. } => "document-created",
        }
    }

    pub fn file_path(&self) -> &Path {
        match self {
            ShellEvent::DocumentOpened { file_path, .. }
            | ShellEvent::DocumentCreated { file_path } => file_path,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            ShellEvent::DocumentOpened { content, .. } => content,
            ShellEvent::DocumentCreated { .. } => "",
        }
    }
}
