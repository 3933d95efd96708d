//! # Error Types
//!
//! Structured errors for digest dispatch and batch parsing. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - The MD5 engine is total and has no error type of its own.
//! - Provider failures are carried through unchanged; nothing retries.
//! - No error path ever carries a partial digest.

use thiserror::Error;

use crate::digest::DigestAlgorithm;

/// Error raised while producing a digest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// The algorithm identifier is not one of `md5`, `sha1`, `sha256`, `sha512`.
    #[error("unsupported hash algorithm: {0:?}")]
    UnsupportedAlgorithm(String),

    /// The external digest primitive reported a failure.
    #[error("{algorithm} primitive failed: {reason}")]
    PrimitiveFailure {
        /// Algorithm the primitive was asked to compute.
        algorithm: DigestAlgorithm,
        /// Failure description reported by the primitive.
        reason: String,
    },

    /// The external digest primitive returned a digest of the wrong size.
    #[error("{algorithm} primitive returned {actual} bytes, expected {expected}")]
    OutputLength {
        /// Algorithm the primitive was asked to compute.
        algorithm: DigestAlgorithm,
        /// Digest length defined for the algorithm.
        expected: usize,
        /// Length actually returned.
        actual: usize,
    },
}

/// Error while turning free-form batch input into address candidates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// The input had no non-blank lines.
    #[error("no email addresses in input")]
    Empty,

    /// Every candidate failed the email-shape check.
    #[error("no valid email addresses found ({} invalid)", .invalid.len())]
    NoValidAddresses {
        /// The rejected candidates, in input order.
        invalid: Vec<String>,
    },
}
