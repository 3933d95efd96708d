//! # Digest Provider Abstraction
//!
//! Abstracts the SHA family behind a trait so the dispatcher does not care
//! which library computes them:
//!
//! - [`RustCryptoProvider`]: SHA-1 via the `sha1` crate, SHA-256 and SHA-512
//!   via `sha2`. The default backend.
//!
//! MD5 never goes through a provider; it is always computed by
//! [`crate::md5`].
//!
//! ## Contract
//!
//! - Implementations must be deterministic and standards-compliant.
//! - `DigestProvider` is `Send + Sync` so one instance can serve concurrent
//!   callers.
//! - Failures are reported as [`DigestError::PrimitiveFailure`]; the caller
//!   propagates them unchanged.

use mailhash_core::{DigestAlgorithm, DigestError};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

/// A backend able to compute digests over a byte sequence.
pub trait DigestProvider: Send + Sync {
    /// Compute the raw digest of `data` with `algorithm`.
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, DigestError>;

    /// Human-readable name for this provider (for diagnostics/logging).
    fn provider_name(&self) -> &str;
}

impl<P: DigestProvider + ?Sized> DigestProvider for &P {
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, DigestError> {
        (**self).digest(algorithm, data)
    }

    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }
}

impl<P: DigestProvider + ?Sized> DigestProvider for Box<P> {
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, DigestError> {
        (**self).digest(algorithm, data)
    }

    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }
}

// ─── RustCryptoProvider ──────────────────────────────────────────────────

/// SHA-1/SHA-256/SHA-512 backed by the RustCrypto hash crates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoProvider;

impl DigestProvider for RustCryptoProvider {
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, DigestError> {
        match algorithm {
            DigestAlgorithm::Sha1 => Ok(Sha1::digest(data).to_vec()),
            DigestAlgorithm::Sha256 => Ok(Sha256::digest(data).to_vec()),
            DigestAlgorithm::Sha512 => Ok(Sha512::digest(data).to_vec()),
            DigestAlgorithm::Md5 => Err(DigestError::PrimitiveFailure {
                algorithm,
                reason: "md5 is not offered by this provider".to_string(),
            }),
        }
    }

    fn provider_name(&self) -> &str {
        "RustCryptoProvider"
    }
}
