//! Async file system helpers used by the file bridge.

use crate::core::error::{BridgeError, BridgeResult};
use crate::utils::encoding;
use std::path::Path;

/// Read a whole file as UTF-8 text.
pub async fn read_text(path: &Path) -> BridgeResult<String> {
    let bytes = tokio::fs::read(path).await.map_err(|source| BridgeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    encoding::decode_utf8(&bytes).ok_or_else(|| BridgeError::Encoding {
        path: path.to_path_buf(),
    })
}

/// Create or truncate `path` and write `content` into it.
pub async fn write_text(path: &Path, content: &str) -> BridgeResult<()> {
    tokio::fs::write(path, content.as_bytes())
        .await
        .map_err(|source| BridgeError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// File name component for display, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
