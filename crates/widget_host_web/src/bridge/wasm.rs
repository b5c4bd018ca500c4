use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;

use super::*;
use crate::js_error::describe;

fn window() -> Result<web_sys::Window, HostError> {
    web_sys::window().ok_or(HostError::Unavailable {
        capability: "window",
    })
}

pub async fn write_clipboard_text(text: &str) -> Result<(), HostError> {
    let clipboard = window()?.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| HostError::Clipboard(describe(&err)))
}

pub async fn digest(algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, HostError> {
    let subtle = window()?
        .crypto()
        .map_err(|_| HostError::Unavailable {
            capability: "crypto",
        })?
        .subtle();
    let bytes = Uint8Array::from(data);
    let promise = subtle
        .digest_with_str_and_buffer_source(algorithm.name(), &bytes)
        .map_err(|err| HostError::Digest(describe(&err)))?;
    let buffer = JsFuture::from(promise)
        .await
        .map_err(|err| HostError::Digest(describe(&err)))?;
    Ok(Uint8Array::new(&buffer).to_vec())
}
