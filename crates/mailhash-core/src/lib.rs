//! # mailhash-core: Foundational Types
//!
//! Leaf crate of the mailhash workspace. Defines the types every digest path
//! flows through; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`NormalizedInput` newtype.** ALL digest computation takes
//!    `&NormalizedInput`. The only constructor trims and lowercases, so
//!    un-normalized bytes cannot reach an algorithm.
//!
//! 2. **Closed `DigestAlgorithm` enum.** Four variants, exhaustive `match`
//!    everywhere. Parsing an unknown identifier is an error, never a default.
//!
//! 3. **Hex is the only outward representation.** `TextDigest::to_hex()` and
//!    its `Display` impl render lowercase hex with no prefix or separators.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mailhash-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod batch;
pub mod digest;
pub mod email;
pub mod error;
pub mod normalize;

// Re-export primary types for ergonomic imports.
pub use batch::{parse_batch, InputFormat, ParsedBatch};
pub use digest::{DigestAlgorithm, TextDigest};
pub use email::is_plausible_email;
pub use error::{BatchError, DigestError};
pub use normalize::{is_trimmed_whitespace, NormalizedInput};
