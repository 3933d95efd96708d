//! # Digest Algorithms and Values
//!
//! Defines `DigestAlgorithm`, the closed set of supported hash functions, and
//! `TextDigest`, the immutable result of hashing one normalized input.
//!
//! The wire identifiers (`md5`, `sha1`, `sha256`, `sha512`) are the only
//! accepted spellings. Labels such as `SHA-256` exist for presentation and are
//! never parsed back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DigestError;

/// The hash algorithm used to produce a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// MD5 (RFC 1321), computed by the in-tree engine.
    Md5,
    /// SHA-1 (FIPS 180-4), delegated to a provider.
    Sha1,
    /// SHA-256 (FIPS 180-4), delegated to a provider.
    Sha256,
    /// SHA-512 (FIPS 180-4), delegated to a provider.
    Sha512,
}

impl DigestAlgorithm {
    /// Every supported algorithm, in declaration order.
    pub const ALL: [DigestAlgorithm; 4] = [Self::Md5, Self::Sha1, Self::Sha256, Self::Sha512];

    /// Returns the algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Human-facing label, e.g. for column headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Digest size in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| DigestError::UnsupportedAlgorithm(s.to_string()))
    }
}

/// A digest together with the algorithm that produced it.
///
/// Produced once per call and never mutated. Digests returned by the
/// dispatcher are always `algorithm.output_len()` bytes long; this type does
/// not check that itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextDigest {
    /// The hash algorithm that produced this digest.
    pub algorithm: DigestAlgorithm,
    /// The raw digest value.
    pub bytes: Vec<u8>,
}

impl TextDigest {
    /// Create a digest value from raw bytes and algorithm.
    pub fn new(algorithm: DigestAlgorithm, bytes: Vec<u8>) -> Self {
        Self { algorithm, bytes }
    }

    /// Render the digest as a lowercase hex string, most-significant byte first.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TextDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.bytes.iter().try_for_each(|b| write!(f, "{b:02x}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_identifiers() {
        for alg in DigestAlgorithm::ALL {
            assert_eq!(alg.as_str().parse::<DigestAlgorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn parse_rejects_unknown_identifier() {
        let err = "md7".parse::<DigestAlgorithm>().unwrap_err();
        assert_eq!(err, DigestError::UnsupportedAlgorithm("md7".to_string()));
    }

    #[test]
    fn parse_does_not_fold_case_or_accept_labels() {
        for s in ["MD5", "Sha256", "SHA-1", "sha-512", " md5", ""] {
            assert!(
                matches!(s.parse::<DigestAlgorithm>(), Err(DigestError::UnsupportedAlgorithm(_))),
                "{s:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(DigestAlgorithm::Md5.display_name(), "MD5");
        assert_eq!(DigestAlgorithm::Sha1.display_name(), "SHA-1");
        assert_eq!(DigestAlgorithm::Sha256.display_name(), "SHA-256");
        assert_eq!(DigestAlgorithm::Sha512.display_name(), "SHA-512");
    }

    #[test]
    fn output_lengths() {
        let lens: Vec<usize> = DigestAlgorithm::ALL.iter().map(|a| a.output_len()).collect();
        assert_eq!(lens, vec![16, 20, 32, 64]);
    }

    #[test]
    fn serde_uses_identifier() {
        let json = serde_json::to_string(&DigestAlgorithm::Sha512).unwrap();
        assert_eq!(json, "\"sha512\"");
        let back: DigestAlgorithm = serde_json::from_str("\"sha1\"").unwrap();
        assert_eq!(back, DigestAlgorithm::Sha1);
    }

    #[test]
    fn hex_is_lowercase_and_zero_padded() {
        let d = TextDigest::new(DigestAlgorithm::Md5, vec![0x00, 0x0f, 0xab, 0xff]);
        assert_eq!(d.to_hex(), "000fabff");
        assert_eq!(d.to_string(), d.to_hex());
    }

    #[test]
    fn empty_digest_renders_empty_hex() {
        let d = TextDigest::new(DigestAlgorithm::Sha1, Vec::new());
        assert_eq!(d.to_hex(), "");
        assert_eq!(d.to_string(), "");
    }

    #[test]
    fn hex_has_two_chars_per_byte() {
        let d = TextDigest::new(DigestAlgorithm::Sha256, (0..=255).collect());
        let hex = d.to_hex();
        assert_eq!(hex.len(), 512);
        assert!(hex.starts_with("000102"));
        assert!(hex.ends_with("fdfeff"));
        assert_eq!(hex, d.to_string());
    }
}
