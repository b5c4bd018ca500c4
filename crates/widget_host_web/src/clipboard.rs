//! Clipboard host-service adapter for browser contexts.

use widget_host::{clipboard_copy_with, ClipboardFuture, ClipboardService, HostError};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser clipboard adapter backed by `navigator.clipboard.writeText`.
///
/// Browsers may reject the write without a recent user gesture or permission grant; the
/// rejection is returned as [`HostError::Clipboard`].
pub struct WebClipboardService;

impl ClipboardService for WebClipboardService {
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), HostError>> {
        Box::pin(async move { bridge::write_clipboard_text(text).await })
    }
}

/// Copies `text` to the browser clipboard.
///
/// # Errors
///
/// Returns [`HostError::Clipboard`] when the browser rejects the write, or
/// [`HostError::Unavailable`] off `wasm32`.
pub async fn clipboard_copy(text: &str) -> Result<(), HostError> {
    clipboard_copy_with(&WebClipboardService, text).await
}
