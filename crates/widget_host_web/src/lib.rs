//! Browser (`wasm32`) implementations of [`widget_host`] service contracts.
//!
//! Clipboard writes go through `navigator.clipboard`, digests through `crypto.subtle`, and the
//! comment textarea is wrapped so the shared auto-resize helper can drive it. The JS calls live in
//! `bridge`, which swaps in a native shim off `wasm32` so the adapters stay testable.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Adapter factories and the host bundle for the current build target.
pub mod adapters;
mod bridge;
pub mod clipboard;
pub mod digest;
mod js_error;
pub mod textarea;

pub use adapters::{build_host_services, clipboard_service, digest_service, host_capabilities};
pub use clipboard::{clipboard_copy, WebClipboardService};
pub use digest::WebDigestService;
pub use textarea::WebTextArea;
