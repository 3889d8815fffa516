//! Native file pickers backed by rfd.

use super::Dialogs;
use async_trait::async_trait;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use rfd::AsyncFileDialog;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

const FILTER_NAME: &str = "text files";
const FILTER_EXTENSIONS: &[&str] = &["txt"];

/// Open and save pickers restricted to `.txt`. The save picker still accepts
/// any name the user types.
///
/// Built with [`RfdDialogs::with_parent`], both pickers are modal to the main
/// window.
#[derive(Debug)]
pub struct RfdDialogs {
    // rfd dialogs are Send but not Sync
    template: Mutex<AsyncFileDialog>,
}

impl Default for RfdDialogs {
    fn default() -> Self {
        Self::from_template(AsyncFileDialog::new())
    }
}

impl RfdDialogs {
    pub fn with_parent<W>(parent: &W) -> Self
    where
        W: HasWindowHandle + HasDisplayHandle,
    {
        Self::from_template(AsyncFileDialog::new().set_parent(parent))
    }

    fn from_template(template: AsyncFileDialog) -> Self {
        Self {
            template: Mutex::new(template.add_filter(FILTER_NAME, FILTER_EXTENSIONS)),
        }
    }

    fn dialog(&self) -> AsyncFileDialog {
        self.template
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Dialogs for RfdDialogs {
    async fn pick_open_path(&self) -> Option<PathBuf> {
        let dialog = self.dialog().set_title("Open File");
        dialog
            .pick_file()
            .await
            .map(|handle| handle.path().to_path_buf())
    }

    async fn pick_save_path(&self) -> Option<PathBuf> {
        let dialog = self.dialog().set_title("Create New File");
        dialog
            .save_file()
            .await
            .map(|handle| handle.path().to_path_buf())
    }
}
