//! Digest host-service adapter backed by WebCrypto.

use widget_host::{DigestFuture, DigestService, HostError};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser digest adapter backed by `crypto.subtle.digest`.
///
/// Algorithm names are checked against [`widget_host::DigestAlgorithm`] before reaching the
/// browser, so unknown names fail the same way as with the native provider. Off `wasm32` the
/// native provider computes the digest.
pub struct WebDigestService;

impl DigestService for WebDigestService {
    fn digest<'a>(
        &'a self,
        algorithm: &'a str,
        data: &'a [u8],
    ) -> DigestFuture<'a, Result<Vec<u8>, HostError>> {
        Box::pin(async move { bridge::digest(algorithm, data).await })
    }
}
