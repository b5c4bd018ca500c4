//! Message digest contracts, the native digest provider, and hex formatting.

use std::{fmt, future::Future, pin::Pin, str::FromStr};

use serde::{Deserialize, Serialize};
use sha2::Digest as _;

use crate::HostError;

/// Algorithm used by [`digest_message`] when the caller does not name one.
pub const DEFAULT_DIGEST_ALGORITHM: &str = "SHA-1";

/// Object-safe boxed future used by [`DigestService`].
pub type DigestFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Digest algorithms understood by the widget, named after their WebCrypto identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DigestAlgorithm {
    /// SHA-1 (20 bytes).
    #[default]
    Sha1,
    /// SHA-256 (32 bytes).
    Sha256,
    /// SHA-384 (48 bytes).
    Sha384,
    /// SHA-512 (64 bytes).
    Sha512,
}

impl DigestAlgorithm {
    /// Length of the raw digest in bytes.
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Length of the hex representation.
    pub const fn hex_len(self) -> usize {
        self.digest_len() * 2
    }

    /// WebCrypto algorithm identifier.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Looks up an algorithm by WebCrypto identifier, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Sha1, Self::Sha256, Self::Sha384, Self::Sha512]
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name))
    }

    /// Hashes `data` with the native RustCrypto implementation.
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha1 => sha1::Sha1::digest(data).to_vec(),
            Self::Sha256 => sha2::Sha256::digest(data).to_vec(),
            Self::Sha384 => sha2::Sha384::digest(data).to_vec(),
            Self::Sha512 => sha2::Sha512::digest(data).to_vec(),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = HostError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name).ok_or_else(|| HostError::UnsupportedAlgorithm(name.to_string()))
    }
}

impl TryFrom<String> for DigestAlgorithm {
    type Error = HostError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<DigestAlgorithm> for String {
    fn from(algorithm: DigestAlgorithm) -> Self {
        algorithm.name().to_string()
    }
}

/// Host service computing raw message digests.
pub trait DigestService {
    /// Hashes `data` with the algorithm named `algorithm`.
    fn digest<'a>(
        &'a self,
        algorithm: &'a str,
        data: &'a [u8],
    ) -> DigestFuture<'a, Result<Vec<u8>, HostError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Digest provider backed by the `sha1`/`sha2` crates, usable on every target.
pub struct SoftwareDigestService;

impl DigestService for SoftwareDigestService {
    fn digest<'a>(
        &'a self,
        algorithm: &'a str,
        data: &'a [u8],
    ) -> DigestFuture<'a, Result<Vec<u8>, HostError>> {
        Box::pin(async move {
            let algorithm: DigestAlgorithm = algorithm.parse()?;
            Ok(algorithm.digest(data))
        })
    }
}

/// Hashes the UTF-8 bytes of `message` and returns the digest as lowercase hex.
///
/// `None` selects [`DEFAULT_DIGEST_ALGORITHM`].
///
/// # Errors
///
/// Returns [`HostError::UnsupportedAlgorithm`] when the algorithm name is not recognized.
pub async fn digest_message(message: &str, algorithm: Option<&str>) -> Result<String, HostError> {
    digest_message_with(&SoftwareDigestService, message, algorithm).await
}

/// Hashes the UTF-8 bytes of `message` through a [`DigestService`] and hex-encodes the result.
///
/// # Errors
///
/// Returns the provider's error unchanged.
pub async fn digest_message_with<D: DigestService + ?Sized>(
    digests: &D,
    message: &str,
    algorithm: Option<&str>,
) -> Result<String, HostError> {
    let algorithm = algorithm.unwrap_or(DEFAULT_DIGEST_ALGORITHM);
    tracing::trace!(algorithm, len = message.len(), "digesting message");
    let raw = digests.digest(algorithm, message.as_bytes()).await?;
    Ok(hex::encode(raw))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sha1_of_abc_matches_known_vector() {
        let hex = block_on(digest_message("abc", None)).expect("digest");
        assert_eq!(hex, "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_eq!(hex.len(), DigestAlgorithm::Sha1.hex_len());
    }

    #[test]
    fn digest_is_deterministic() {
        let first = block_on(digest_message("https://a.com/page", None)).expect("digest");
        let second = block_on(digest_message("https://a.com/page", None)).expect("digest");
        assert_eq!(first, second);
        assert!(first
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn empty_message_and_other_algorithms() {
        assert_eq!(
            block_on(digest_message("", Some("SHA-1"))).expect("digest"),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
        assert_eq!(
            block_on(digest_message("abc", Some("sha-256"))).expect("digest"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            block_on(digest_message("abc", Some("SHA-512")))
                .expect("digest")
                .len(),
            128
        );
    }

    #[test]
    fn multibyte_messages_hash_their_utf8_bytes() {
        let from_text = block_on(digest_message("é", None)).expect("digest");
        let from_bytes = hex::encode(DigestAlgorithm::Sha1.digest(&[0xc3, 0xa9]));
        assert_eq!(from_text, from_bytes);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let err = block_on(digest_message("abc", Some("MD5"))).unwrap_err();
        assert_eq!(err, HostError::UnsupportedAlgorithm("MD5".to_string()));
    }

    #[test]
    fn algorithm_names_round_trip_through_serde() {
        let parsed: DigestAlgorithm = serde_json::from_str("\"sha-384\"").expect("parse");
        assert_eq!(parsed, DigestAlgorithm::Sha384);
        assert_eq!(
            serde_json::to_string(&parsed).expect("serialize"),
            "\"SHA-384\""
        );
        assert!(serde_json::from_str::<DigestAlgorithm>("\"MD5\"").is_err());
    }

    #[test]
    fn digest_lengths_match_output() {
        for algorithm in [
            DigestAlgorithm::Sha1,
            DigestAlgorithm::Sha256,
            DigestAlgorithm::Sha384,
            DigestAlgorithm::Sha512,
        ] {
            assert_eq!(algorithm.digest(b"x").len(), algorithm.digest_len());
        }
    }
}
