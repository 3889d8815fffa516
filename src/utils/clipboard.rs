//! Cross-platform clipboard utilities.
//!
//! Uses arboard crate for clipboard access (works with GNU toolchain).

use arboard::Clipboard;

/// Read UTF-8 text from the clipboard.
///
/// Returns `None` when the clipboard is unavailable or holds no text.
pub fn read_from_clipboard() -> Option<String> {
    // arboard requires a new Clipboard instance for each operation
    match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!("No clipboard text: {}", e);
                None
            }
        },
        Err(e) => {
            tracing::warn!("Failed to initialize clipboard: {}", e);
            None
        }
    }
}
