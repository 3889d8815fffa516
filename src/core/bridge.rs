//! File bridge: dialogs, disk I/O and the active session path.
//!
//! The bridge is the only owner of [`Session`]. Successful opens and creates
//! register the path as a recent document and activate it; `persist` writes
//! an edit only while the document it was made in is still the active one.
//! Any disk failure raises the generic alert once,
//! leaves the session untouched and is returned to the caller.

use crate::core::error::{BridgeError, BridgeResult};
use crate::core::messages::{Command, ContentUpdate, ShellEvent};
use crate::core::session::Session;
use crate::platform::{Dialogs, Notifier, RecentDocuments};
use crate::utils::file_helper;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub struct FileBridge {
    session: Mutex<Session>,
    dialogs: Box<dyn Dialogs>,
    notifier: Box<dyn Notifier>,
    recent: Arc<dyn RecentDocuments>,
}

impl FileBridge {
    pub fn new(
        dialogs: Box<dyn Dialogs>,
        notifier: Box<dyn Notifier>,
        recent: Arc<dyn RecentDocuments>,
    ) -> Self {
        Self {
            session: Mutex::new(Session::new()),
            dialogs,
            notifier,
            recent,
        }
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the active document path.
    pub fn active_path(&self) -> Option<PathBuf> {
        self.session().opened_file_path().map(Path::to_path_buf)
    }

    /// Whether `event` names the active document. Opens racing each other
    /// can deliver their events out of order; only the current one should
    /// reach the editing surface.
    pub fn is_current(&self, event: &ShellEvent) -> bool {
        self.session().opened_file_path() == Some(event.file_path())
    }

    /// Run a menu command. `Ok(None)` means the dialog was dismissed.
    pub async fn dispatch(&self, command: Command) -> BridgeResult<Option<ShellEvent>> {
        tracing::debug!(channel = command.channel(), "Dispatching command");
        match command {
            Command::OpenFile => self.request_open().await,
            Command::CreateFile => self.request_create().await,
        }
    }

    /// Pick an existing `.txt` file and load it.
    pub async fn request_open(&self) -> BridgeResult<Option<ShellEvent>> {
        let Some(path) = self.dialogs.pick_open_path().await else {
            tracing::debug!("Open dialog dismissed");
            return Ok(None);
        };

        self.open_path(path).await.map(Some)
    }

    /// Pick a save path and create (or truncate) an empty file there.
    pub async fn request_create(&self) -> BridgeResult<Option<ShellEvent>> {
        let Some(path) = self.dialogs.pick_save_path().await else {
            tracing::debug!("Save dialog dismissed");
            return Ok(None);
        };

        if let Err(e) = file_helper::write_text(&path, "").await {
            return Err(self.report(e));
        }

        tracing::info!("Created {}", path.display());
        self.activate(&path);
        Ok(Some(ShellEvent::DocumentCreated { file_path: path }))
    }

    /// Load a file the host asked us to open ("open with", drag and drop,
    /// recent documents menu). Any extension is accepted.
    pub async fn open_from_host(&self, path: PathBuf) -> BridgeResult<ShellEvent> {
        self.open_path(path).await
    }

    /// Overwrite the document `update` was made in with its content.
    ///
    /// Without touching the disk or alerting, fails with
    /// [`BridgeError::NoActiveDocument`] when nothing was opened or created
    /// yet, and with [`BridgeError::Superseded`] when another document has
    /// become active since the edit.
    pub async fn persist(&self, update: &ContentUpdate) -> BridgeResult<PathBuf> {
        let active = self.active_path().ok_or(BridgeError::NoActiveDocument)?;
        if active != update.file_path {
            return Err(BridgeError::Superseded {
                path: update.file_path.clone(),
            });
        }

        let path = update.file_path.clone();
        if let Err(e) = file_helper::write_text(&path, &update.content).await {
            return Err(self.report(e));
        }

        tracing::trace!(bytes = update.content.len(), "Saved {}", path.display());
        Ok(path)
    }

    async fn open_path(&self, path: PathBuf) -> BridgeResult<ShellEvent> {
        let content = match file_helper::read_text(&path).await {
            Ok(content) => content,
            Err(e) => return Err(self.report(e)),
        };

        tracing::info!("Opened {}", path.display());
        self.activate(&path);
        Ok(ShellEvent::DocumentOpened {
            file_path: path,
            content,
        })
    }

    fn activate(&self, path: &Path) {
        self.recent.add(path);
        let mut session = self.session();
        if session.is_active() {
            tracing::debug!("Replacing active document with {}", path.display());
        }
        session.activate(path.to_path_buf());
    }

    fn report(&self, error: BridgeError) -> BridgeError {
        tracing::warn!("{}", error);
        self.notifier.notify_error();
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::RecentStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct FakeDialogs {
        open: Arc<Mutex<Option<PathBuf>>>,
        save: Arc<Mutex<Option<PathBuf>>>,
    }

    impl FakeDialogs {
        fn choosing_open(path: PathBuf) -> Self {
            let dialogs = Self::default();
            *dialogs.open.lock().unwrap() = Some(path);
            dialogs
        }

        fn choosing_save(path: PathBuf) -> Self {
            let dialogs = Self::default();
            *dialogs.save.lock().unwrap() = Some(path);
            dialogs
        }
    }

    #[async_trait]
    impl Dialogs for FakeDialogs {
        async fn pick_open_path(&self) -> Option<PathBuf> {
            self.open.lock().unwrap().clone()
        }

        async fn pick_save_path(&self) -> Option<PathBuf> {
            self.save.lock().unwrap().clone()
        }
    }

    #[derive(Clone, Default)]
    struct CountingNotifier(Arc<AtomicUsize>);

    impl CountingNotifier {
        fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl Notifier for CountingNotifier {
        fn notify_error(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Harness {
        bridge: FileBridge,
        dialogs: FakeDialogs,
        alerts: CountingNotifier,
        recent: Arc<RecentStore>,
    }

    fn harness(dialogs: FakeDialogs) -> Harness {
        let alerts = CountingNotifier::default();
        let recent = Arc::new(RecentStore::in_memory(10));
        let bridge = FileBridge::new(
            Box::new(dialogs.clone()),
            Box::new(alerts.clone()),
            recent.clone(),
        );
        Harness {
            bridge,
            dialogs,
            alerts,
            recent,
        }
    }

    #[tokio::test]
    async fn test_open_then_edit_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let notes = dir.path().join("notes.txt");
        std::fs::write(&notes, "hello").unwrap();

        let h = harness(FakeDialogs::choosing_open(notes.clone()));
        let event = h.bridge.request_open().await.unwrap();
        assert_eq!(
            event,
            Some(ShellEvent::DocumentOpened {
                file_path: notes.clone(),
                content: "hello".to_string(),
            })
        );
        assert_eq!(h.bridge.active_path(), Some(notes.clone()));
        assert_eq!(h.recent.entries(), vec![notes.clone()]);

        let saved = h
            .bridge
            .persist(&ContentUpdate::new(notes.clone(), "hello world"))
            .await
            .unwrap();
        assert_eq!(saved, notes);
        assert_eq!(std::fs::read_to_string(&notes).unwrap(), "hello world");
        assert_eq!(h.alerts.count(), 0);
    }

    #[tokio::test]
    async fn test_open_preserves_utf8_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.txt");
        let text = "\u{FEFF}naïve café\r\n日本語\n\tend";
        std::fs::write(&path, text).unwrap();

        let h = harness(FakeDialogs::choosing_open(path));
        let event = h.bridge.request_open().await.unwrap().unwrap();
        assert_eq!(event.content(), text);
    }

    #[tokio::test]
    async fn test_create_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.txt");

        let h = harness(FakeDialogs::choosing_save(path.clone()));
        let event = h.bridge.request_create().await.unwrap();
        assert_eq!(
            event,
            Some(ShellEvent::DocumentCreated {
                file_path: path.clone()
            })
        );
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
        assert_eq!(h.bridge.active_path(), Some(path.clone()));
        assert_eq!(h.recent.entries(), vec![path]);
    }

    #[tokio::test]
    async fn test_create_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("existing.txt");
        std::fs::write(&path, "old content").unwrap();

        let h = harness(FakeDialogs::choosing_save(path.clone()));
        h.bridge.request_create().await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), Vec::<u8>::new());
    }

    #[tokio::test]
    async fn test_cancelled_dialogs_are_silent() {
        let h = harness(FakeDialogs::default());

        assert_eq!(h.bridge.request_open().await.unwrap(), None);
        assert_eq!(h.bridge.request_create().await.unwrap(), None);
        assert_eq!(h.bridge.active_path(), None);
        assert_eq!(h.alerts.count(), 0);
        assert!(h.recent.entries().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_keeps_previous_session() {
        let dir = tempfile::tempdir().unwrap();
        let notes = dir.path().join("notes.txt");
        std::fs::write(&notes, "x").unwrap();

        let h = harness(FakeDialogs::choosing_open(notes.clone()));
        h.bridge.request_open().await.unwrap();

        // create dialog has no choice configured, i.e. dismissed
        assert_eq!(h.bridge.request_create().await.unwrap(), None);
        assert_eq!(h.bridge.active_path(), Some(notes));
        assert_eq!(h.alerts.count(), 0);
    }

    #[tokio::test]
    async fn test_read_failure_alerts_once_and_keeps_session() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        std::fs::write(&good, "kept").unwrap();

        let h = harness(FakeDialogs::choosing_open(good.clone()));
        h.bridge.request_open().await.unwrap();

        // reading a directory fails like a permission error would
        *h.dialogs.open.lock().unwrap() = Some(dir.path().to_path_buf());
        let err = h.bridge.request_open().await.unwrap_err();
        assert!(matches!(err, BridgeError::Read { .. }));
        assert_eq!(h.alerts.count(), 1);
        assert_eq!(h.bridge.active_path(), Some(good.clone()));
        assert_eq!(h.recent.entries(), vec![good]);
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, [b'c', b'a', b'f', 0xE9]).unwrap();

        let h = harness(FakeDialogs::choosing_open(path));
        let err = h.bridge.request_open().await.unwrap_err();
        assert!(matches!(err, BridgeError::Encoding { .. }));
        assert_eq!(h.alerts.count(), 1);
        assert_eq!(h.bridge.active_path(), None);
    }

    #[tokio::test]
    async fn test_create_failure_alerts_and_keeps_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("new.txt");

        let h = harness(FakeDialogs::choosing_save(path.clone()));
        let err = h.bridge.request_create().await.unwrap_err();
        assert!(matches!(err, BridgeError::Write { .. }));
        assert_eq!(h.alerts.count(), 1);
        assert_eq!(h.bridge.active_path(), None);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_persist_without_document_is_rejected() {
        let h = harness(FakeDialogs::default());
        let err = h
            .bridge
            .persist(&ContentUpdate::new("orphan.txt", "orphan text"))
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::NoActiveDocument));
        assert!(!err.is_io_failure());
        assert_eq!(h.alerts.count(), 0);
    }

    #[tokio::test]
    async fn test_edit_for_replaced_document_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        std::fs::write(&first, "first original").unwrap();
        std::fs::write(&second, "second original").unwrap();

        let h = harness(FakeDialogs::default());
        h.bridge.open_from_host(first.clone()).await.unwrap();
        h.bridge.open_from_host(second.clone()).await.unwrap();

        let err = h
            .bridge
            .persist(&ContentUpdate::new(first.clone(), "typed into first"))
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::Superseded { ref path } if *path == first));
        assert!(!err.is_io_failure());
        assert_eq!(h.alerts.count(), 0);
        assert_eq!(std::fs::read_to_string(&first).unwrap(), "first original");
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "second original");
    }

    #[tokio::test]
    async fn test_out_of_order_events_are_not_current() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        std::fs::write(&first, "1").unwrap();
        std::fs::write(&second, "2").unwrap();

        let h = harness(FakeDialogs::default());
        let stale = h.bridge.open_from_host(first).await.unwrap();
        let current = h.bridge.open_from_host(second).await.unwrap();

        // the first event arriving last must not win the editor
        assert!(h.bridge.is_current(&current));
        assert!(!h.bridge.is_current(&stale));
    }

    #[tokio::test]
    async fn test_persist_failure_alerts_without_retry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.txt");

        let h = harness(FakeDialogs::choosing_save(path.clone()));
        h.bridge.request_create().await.unwrap();

        // replace the file with a directory so the overwrite fails
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let err = h
            .bridge
            .persist(&ContentUpdate::new(path.clone(), "lost"))
            .await
            .unwrap_err();
        assert!(err.is_io_failure());
        assert_eq!(h.alerts.count(), 1);
        assert_eq!(h.bridge.active_path(), Some(path));
    }

    #[tokio::test]
    async fn test_open_from_host_accepts_any_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        std::fs::write(&path, "# title").unwrap();

        let h = harness(FakeDialogs::default());
        let event = h.bridge.open_from_host(path.clone()).await.unwrap();
        assert_eq!(event.channel(), "document-opened");
        assert_eq!(event.content(), "# title");
        assert_eq!(h.bridge.active_path(), Some(path));
    }

    #[tokio::test]
    async fn test_dispatch_routes_commands() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routed.txt");

        let h = harness(FakeDialogs::choosing_save(path.clone()));
        let created = h.bridge.dispatch(Command::CreateFile).await.unwrap();
        assert_eq!(created.map(|e| e.channel()), Some("document-created"));
        assert_eq!(h.bridge.dispatch(Command::OpenFile).await.unwrap(), None);
    }
}
