//! Serialized writes of `file-content-updated` messages.
//!
//! One writer task drains an unbounded channel, so saves complete in the
//! order the editing surface emitted them and the last edit is what ends up
//! on disk. Each update carries the document it was made in, so a backlog
//! drained after another document was opened is refused, not redirected.

use crate::core::bridge::FileBridge;
use crate::core::error::BridgeResult;
use crate::core::messages::ContentUpdate;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use tokio::task::JoinHandle;

pub struct PersistQueue {
    sender: UnboundedSender<ContentUpdate>,
    worker: JoinHandle<()>,
}

impl PersistQueue {
    /// Start the writer task on `runtime`. `on_done` receives the outcome of
    /// every write.
    pub fn spawn<F>(runtime: &Handle, bridge: Arc<FileBridge>, on_done: F) -> Self
    where
        F: Fn(BridgeResult<PathBuf>) + Send + Sync + 'static,
    {
        let (sender, mut receiver) = unbounded_channel::<ContentUpdate>();

        let worker = runtime.spawn(async move {
            while let Some(update) = receiver.recv().await {
                on_done(bridge.persist(&update).await);
            }
            tracing::debug!("Persist queue closed");
        });

        Self { sender, worker }
    }

    pub fn push(&self, update: ContentUpdate) {
        if self.sender.send(update).is_err() {
            tracing::error!("Persist queue worker is gone, edit not saved");
        }
    }

    /// Stop accepting updates and wait for queued writes to finish.
    pub async fn close(self) {
        drop(self.sender);
        if let Err(e) = self.worker.await {
            tracing::error!("Persist queue worker failed: {}", e);
        }
    }
}
