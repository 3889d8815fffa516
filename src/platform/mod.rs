//! Native services the file bridge depends on: dialogs, the error alert and
//! the recent-documents list.
//!
//! Each service sits behind a trait so the bridge can run against fakes.

pub mod dialogs;
pub mod notify;
pub mod recent;

use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub use dialogs::RfdDialogs;
pub use notify::AlertNotifier;
pub use recent::RecentStore;

/// Native open/save pickers. `None` means the user dismissed the dialog.
#[async_trait]
pub trait Dialogs: Send + Sync {
    async fn pick_open_path(&self) -> Option<PathBuf>;
    async fn pick_save_path(&self) -> Option<PathBuf>;
}

/// Generic, detail-free error alert. Must not block the caller.
pub trait Notifier: Send + Sync {
    fn notify_error(&self);
}

/// Recently accessed documents.
pub trait RecentDocuments: Send + Sync {
    fn add(&self, path: &Path);
}
