//! # mailhash-crypto: Digest Engine
//!
//! Provides the digest building blocks for mailhash:
//!
//! - **MD5** computed by a from-scratch RFC 1321 implementation with explicit
//!   wrapping 32-bit arithmetic.
//! - **SHA-1 / SHA-256 / SHA-512** delegated to a [`DigestProvider`]
//!   (RustCrypto by default), so the backend can be swapped per target.
//! - **Dispatcher** that normalizes input once and routes it to the right
//!   implementation, returning lowercase hex.
//!
//! ## Crate Policy
//!
//! - Depends only on `mailhash-core` internally.
//! - Known-answer tests use published vectors, not mocks, for every algorithm.
//! - No `unsafe`.

pub mod dispatch;
pub mod md5;
pub mod provider;

pub use dispatch::{digest, Dispatcher};
pub use md5::{md5, MD5_OUTPUT_LEN};
pub use provider::{DigestProvider, RustCryptoProvider};
