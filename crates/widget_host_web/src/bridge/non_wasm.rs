use super::*;

pub async fn write_clipboard_text(_text: &str) -> Result<(), HostError> {
    Err(HostError::Unavailable {
        capability: "clipboard",
    })
}

pub async fn digest(algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, HostError> {
    Ok(algorithm.digest(data))
}
