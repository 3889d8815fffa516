//! Recent documents list, persisted as JSON next to the config file.

use super::RecentDocuments;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default, Serialize, Deserialize)]
struct RecentFile {
    #[serde(default)]
    documents: Vec<PathBuf>,
}

/// Most-recent-first, deduplicated and capped list of document paths.
#[derive(Debug)]
pub struct RecentStore {
    file_path: Option<PathBuf>,
    limit: usize,
    entries: Mutex<Vec<PathBuf>>,
}

impl RecentStore {
    /// Load the list from `file_path`. A missing or unreadable file starts
    /// an empty list.
    pub fn load(file_path: PathBuf, limit: usize) -> Self {
        let mut entries = Self::try_load(&file_path).unwrap_or_default();
        entries.truncate(limit);

        Self {
            file_path: Some(file_path),
            limit,
            entries: Mutex::new(entries),
        }
    }

    /// A list that is never written to disk.
    pub fn in_memory(limit: usize) -> Self {
        Self {
            file_path: None,
            limit,
            entries: Mutex::new(Vec::new()),
        }
    }

    fn try_load(file_path: &Path) -> Option<Vec<PathBuf>> {
        let content = fs::read_to_string(file_path).ok()?;
        match serde_json::from_str::<RecentFile>(&content) {
            Ok(file) => Some(file.documents),
            Err(e) => {
                tracing::warn!("Ignoring corrupt recent documents file {}: {}", file_path.display(), e);
                None
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<PathBuf>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn entries(&self) -> Vec<PathBuf> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        let mut entries = self.lock();
        entries.clear();
        self.save(&entries);
    }

    fn save(&self, entries: &[PathBuf]) {
        let Some(file_path) = &self.file_path else {
            return;
        };

        let file = RecentFile {
            documents: entries.to_vec(),
        };
        let result = serde_json::to_string_pretty(&file)
            .map_err(std::io::Error::other)
            .and_then(|json| fs::write(file_path, json));

        if let Err(e) = result {
            tracing::warn!("Failed to save recent documents to {}: {}", file_path.display(), e);
        }
    }
}

impl RecentDocuments for RecentStore {
    fn add(&self, path: &Path) {
        let mut entries = self.lock();
        entries.retain(|existing| existing != path);
        entries.insert(0, path.to_path_buf());
        entries.truncate(self.limit);
        self.save(&entries);
    }
}
