//! Clipboard handling for the copy-text action.
//!
//! The write is best effort: failures (no display server, denied access) are
//! logged and otherwise ignored, with no user-visible feedback.

/// Write `text` to the system clipboard.
///
/// # Platform Support
/// * Native (Windows, macOS, Linux): via the arboard crate
/// * Web (WASM): not supported - the async browser clipboard API needs a
///   secure context; this build targets native
#[cfg(not(target_arch = "wasm32"))]
pub fn copy_text(text: &str) {
    use arboard::Clipboard;

    match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text.to_owned()) {
            Ok(()) => log::debug!("copied {} bytes to clipboard", text.len()),
            Err(e) => log::warn!("failed to write clipboard text: {e}"),
        },
        Err(e) => log::warn!("failed to access clipboard: {e}"),
    }
}

/// Stub implementation for WASM targets.
#[cfg(target_arch = "wasm32")]
pub fn copy_text(_text: &str) {}
