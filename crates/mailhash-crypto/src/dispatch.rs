//! # Digest Dispatcher
//!
//! The function boundary consumed by callers:
//! `digest(text, "md5" | "sha1" | "sha256" | "sha512") -> lowercase hex`.
//!
//! ## Pipeline
//!
//! 1. Parse the algorithm identifier. Unknown identifiers fail with
//!    [`DigestError::UnsupportedAlgorithm`] before any work is done.
//! 2. Normalize the text exactly once ([`NormalizedInput::new`]).
//! 3. Route: MD5 to the in-tree engine, everything else to the
//!    [`DigestProvider`].
//! 4. Check the digest length and render hex.
//!
//! The dispatcher holds no mutable state. Independent calls may run
//! concurrently against a shared instance.

use mailhash_core::{DigestAlgorithm, DigestError, NormalizedInput, TextDigest};

use crate::md5::md5;
use crate::provider::{DigestProvider, RustCryptoProvider};

/// Normalizes input and routes it to the right digest implementation.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher<P = RustCryptoProvider> {
    provider: P,
}

impl<P: DigestProvider> Dispatcher<P> {
    /// Create a dispatcher that delegates the SHA family to `provider`.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The backend used for non-MD5 algorithms.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Digest `text` with the algorithm named by `algorithm` and return hex.
    ///
    /// # Errors
    ///
    /// [`DigestError::UnsupportedAlgorithm`] for an unknown identifier; any
    /// provider error is returned unchanged.
    pub fn digest(&self, text: &str, algorithm: &str) -> Result<String, DigestError> {
        let algorithm: DigestAlgorithm = algorithm.parse()?;
        Ok(self.digest_with(text, algorithm)?.to_hex())
    }

    /// Digest `text` with an already-parsed algorithm.
    pub fn digest_with(
        &self,
        text: &str,
        algorithm: DigestAlgorithm,
    ) -> Result<TextDigest, DigestError> {
        self.digest_normalized(&NormalizedInput::new(text), algorithm)
    }

    /// Digest input that has already been normalized.
    pub fn digest_normalized(
        &self,
        input: &NormalizedInput,
        algorithm: DigestAlgorithm,
    ) -> Result<TextDigest, DigestError> {
        tracing::debug!(
            algorithm = %algorithm,
            input_len = input.len(),
            provider = self.provider.provider_name(),
            "computing digest"
        );

        let bytes = match algorithm {
            DigestAlgorithm::Md5 => md5(input.as_bytes()).to_vec(),
            DigestAlgorithm::Sha1 | DigestAlgorithm::Sha256 | DigestAlgorithm::Sha512 => {
                self.provider.digest(algorithm, input.as_bytes())?
            }
        };

        if bytes.len() != algorithm.output_len() {
            tracing::warn!(
                algorithm = %algorithm,
                expected = algorithm.output_len(),
                actual = bytes.len(),
                "digest provider returned wrong-length output"
            );
            return Err(DigestError::OutputLength {
                algorithm,
                expected: algorithm.output_len(),
                actual: bytes.len(),
            });
        }

        Ok(TextDigest::new(algorithm, bytes))
    }
}

/// Digest `text` with the default provider and return lowercase hex.
///
/// Convenience wrapper around [`Dispatcher::digest`].
pub fn digest(text: &str, algorithm: &str) -> Result<String, DigestError> {
    Dispatcher::<RustCryptoProvider>::default().digest(text, algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider that always fails, counting how often it is called.
    #[derive(Default)]
    struct FailingProvider {
        calls: AtomicUsize,
    }

    impl DigestProvider for FailingProvider {
        fn digest(&self, algorithm: DigestAlgorithm, _data: &[u8]) -> Result<Vec<u8>, DigestError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(DigestError::PrimitiveFailure {
                algorithm,
                reason: "unavailable".to_string(),
            })
        }

        fn provider_name(&self) -> &str {
            "FailingProvider"
        }
    }

    /// Provider that returns a truncated digest.
    struct ShortProvider;

    impl DigestProvider for ShortProvider {
        fn digest(&self, _algorithm: DigestAlgorithm, _data: &[u8]) -> Result<Vec<u8>, DigestError> {
            Ok(vec![0xab; 3])
        }

        fn provider_name(&self) -> &str {
            "ShortProvider"
        }
    }

    /// Provider that records the bytes it was given.
    #[derive(Default)]
    struct RecordingProvider {
        seen: std::sync::Mutex<Vec<Vec<u8>>>,
    }

    impl DigestProvider for RecordingProvider {
        fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, DigestError> {
            if let Ok(mut seen) = self.seen.lock() {
                seen.push(data.to_vec());
            }
            RustCryptoProvider.digest(algorithm, data)
        }

        fn provider_name(&self) -> &str {
            "RecordingProvider"
        }
    }

    #[test]
    fn md5_of_empty_string() {
        assert_eq!(digest("", "md5").unwrap(), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn md5_of_blank_string_equals_empty() {
        assert_eq!(digest("  \t\n", "md5").unwrap(), digest("", "md5").unwrap());
    }

    #[test]
    fn md5_of_address() {
        assert_eq!(
            digest("user@example.com", "md5").unwrap(),
            "b58996c504c5638798eb6b511e6f49af"
        );
    }

    #[test]
    fn md5_normalizes_before_hashing() {
        assert_eq!(
            digest(" MyEmailAddress@example.com ", "md5").unwrap(),
            "0bc83cb571cd1c50ba6f3e8a78ef1346"
        );
    }

    #[test]
    fn sha_family_of_address() {
        assert_eq!(
            digest("user@example.com", "sha1").unwrap(),
            "63a710569261a24b3766275b7000ce8d7b32e2f7"
        );
        assert_eq!(
            digest("user@example.com", "sha256").unwrap(),
            "b4c9a289323b21a01c3e940f150eb9b8c542587f1abfd8f0e1cc1ffc5e475514"
        );
        assert_eq!(
            digest("user@example.com", "sha512").unwrap(),
            "6db185971e8d3b52426ff4a1c1ec499abda4a6d0bd47e4f3843a771203c5a408\
             3abfc3db61a61da548c8fed8c035e779b35016c87589f017064680b83e36f228"
        );
    }

    #[test]
    fn case_and_whitespace_invariance_for_every_algorithm() {
        for alg in DigestAlgorithm::ALL {
            assert_eq!(
                digest(" USER@Example.com ", alg.as_str()).unwrap(),
                digest("user@example.com", alg.as_str()).unwrap(),
                "{alg}"
            );
        }
    }

    #[test]
    fn byte_order_mark_is_trimmed_before_hashing() {
        for alg in DigestAlgorithm::ALL {
            assert_eq!(
                digest("\u{feff}user@example.com", alg.as_str()).unwrap(),
                digest("user@example.com", alg.as_str()).unwrap(),
                "{alg}"
            );
        }
    }

    #[test]
    fn next_line_is_hashed_not_trimmed() {
        assert_eq!(
            digest("\u{0085}user@example.com", "md5").unwrap(),
            "634a6eedaf400036f4696045f1a194d3"
        );
    }

    #[test]
    fn hex_length_matches_algorithm() {
        for alg in DigestAlgorithm::ALL {
            let hex = digest("someone@example.org", alg.as_str()).unwrap();
            assert_eq!(hex.len(), alg.output_len() * 2);
            assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn unsupported_algorithm_is_rejected() {
        assert_eq!(
            digest("user@example.com", "md7"),
            Err(DigestError::UnsupportedAlgorithm("md7".to_string()))
        );
        assert!(matches!(
            digest("user@example.com", "SHA-256"),
            Err(DigestError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn unsupported_algorithm_never_reaches_provider() {
        let dispatcher = Dispatcher::new(FailingProvider::default());
        let err = dispatcher.digest("x@y.z", "sha384").unwrap_err();
        assert!(matches!(err, DigestError::UnsupportedAlgorithm(_)));
        assert_eq!(dispatcher.provider().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn provider_failure_propagates_unchanged_without_retry() {
        let dispatcher = Dispatcher::new(FailingProvider::default());
        let err = dispatcher.digest("x@y.z", "sha256").unwrap_err();
        assert_eq!(
            err,
            DigestError::PrimitiveFailure {
                algorithm: DigestAlgorithm::Sha256,
                reason: "unavailable".to_string(),
            }
        );
        assert_eq!(dispatcher.provider().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn md5_does_not_use_provider() {
        let dispatcher = Dispatcher::new(FailingProvider::default());
        assert_eq!(
            dispatcher.digest("", "md5").unwrap(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert_eq!(dispatcher.provider().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn wrong_length_provider_output_is_rejected() {
        let dispatcher = Dispatcher::new(ShortProvider);
        let err = dispatcher.digest("a@b.c", "sha1").unwrap_err();
        assert_eq!(
            err,
            DigestError::OutputLength {
                algorithm: DigestAlgorithm::Sha1,
                expected: 20,
                actual: 3,
            }
        );
    }

    #[test]
    fn provider_sees_normalized_bytes() {
        let dispatcher = Dispatcher::new(RecordingProvider::default());
        dispatcher.digest("  Alice@Example.ORG\n", "sha1").unwrap();
        dispatcher.digest("alice@example.org", "sha512").unwrap();
        let seen = dispatcher.provider().seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], b"alice@example.org");
        assert_eq!(seen[0], seen[1]);
    }

    #[test]
    fn digest_with_carries_algorithm_tag() {
        let d = Dispatcher::<RustCryptoProvider>::default()
            .digest_with("a@b.c", DigestAlgorithm::Sha256)
            .unwrap();
        assert_eq!(d.algorithm, DigestAlgorithm::Sha256);
        assert_eq!(d.bytes.len(), 32);
    }

    #[test]
    fn algorithms_are_independent() {
        let dispatcher = Dispatcher::<RustCryptoProvider>::default();
        let before = dispatcher.digest("a@b.c", "md5").unwrap();
        for alg in DigestAlgorithm::ALL {
            dispatcher.digest("a@b.c", alg.as_str()).unwrap();
        }
        assert_eq!(dispatcher.digest("a@b.c", "md5").unwrap(), before);
    }

    #[test]
    fn shared_dispatcher_across_threads() {
        let dispatcher = Dispatcher::<RustCryptoProvider>::default();
        let expected = dispatcher.digest("t@example.com", "sha256").unwrap();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    assert_eq!(dispatcher.digest("t@example.com", "sha256").unwrap(), expected);
                });
            }
        });
    }
}
