//! Clipboard host-service contracts and adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use crate::HostError;

/// Object-safe boxed future used by [`ClipboardService`].
pub type ClipboardFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for writing plain text to the system clipboard.
pub trait ClipboardService {
    /// Writes `text` to the clipboard, resolving once the host accepts or rejects the write.
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), HostError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Clipboard adapter for targets without clipboard access; every write is reported unavailable.
pub struct NoopClipboardService;

impl ClipboardService for NoopClipboardService {
    fn write_text<'a>(&'a self, _text: &'a str) -> ClipboardFuture<'a, Result<(), HostError>> {
        Box::pin(async {
            Err(HostError::Unavailable {
                capability: "clipboard",
            })
        })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory clipboard holding the most recent write.
pub struct MemoryClipboardService {
    inner: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboardService {
    /// Returns the last text written, if any.
    pub fn contents(&self) -> Option<String> {
        self.inner.borrow().clone()
    }
}

impl ClipboardService for MemoryClipboardService {
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), HostError>> {
        Box::pin(async move {
            *self.inner.borrow_mut() = Some(text.to_string());
            Ok(())
        })
    }
}

/// Copies `text` through a [`ClipboardService`] implementation.
///
/// # Errors
///
/// Returns the host's error unchanged when the write is denied or fails.
pub async fn clipboard_copy_with<C: ClipboardService + ?Sized>(
    clipboard: &C,
    text: &str,
) -> Result<(), HostError> {
    clipboard.write_text(text).await
}
