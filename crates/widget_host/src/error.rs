//! Typed errors surfaced by host-capability operations.

use thiserror::Error;

/// Failure reported by a host capability (clipboard, digest, element styling).
///
/// Malformed URLs never produce this error; the URL helpers fall back to defined values instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The requested digest algorithm is not recognized by the provider.
    #[error("unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),
    /// The host denied or failed a clipboard write.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
    /// The host digest primitive failed after accepting the algorithm.
    #[error("digest failed: {0}")]
    Digest(String),
    /// Updating an element style property failed.
    #[error("style update failed: {0}")]
    Style(String),
    /// The capability does not exist on the active host.
    #[error("capability unavailable: {capability}")]
    Unavailable {
        /// Stable capability identifier used in diagnostics.
        capability: &'static str,
    },
}

impl HostError {
    /// Returns whether the error means the capability is missing rather than failing.
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
