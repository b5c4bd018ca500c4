//! Target-specific transport for browser capabilities.
//!
//! Routes each call to the `wasm32` implementation or to the native shim while keeping a single
//! API for the adapter modules.

use widget_host::{DigestAlgorithm, HostError};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn write_clipboard_text(text: &str) -> Result<(), HostError> {
    imp::write_clipboard_text(text).await
}

pub async fn digest(algorithm: &str, data: &[u8]) -> Result<Vec<u8>, HostError> {
    let algorithm: DigestAlgorithm = algorithm.parse()?;
    imp::digest(algorithm, data).await
}
