//! # Input Normalization
//!
//! Defines `NormalizedInput`, the sole construction path for bytes handed to
//! any digest algorithm.
//!
//! ## Invariant
//!
//! The inner buffer is private. The only way to build one is
//! `NormalizedInput::new()`, which removes surrounding whitespace, applies
//! full Unicode lowercase folding, and keeps the UTF-8 encoding. Any function
//! that hashes text therefore accepts `&NormalizedInput`, which makes it
//! impossible for two algorithms to see different bytes for the same source
//! string.
//!
//! Normalization is idempotent: `NormalizedInput::new(n.as_str()) == n`.
//!
//! ## Whitespace
//!
//! "Whitespace" is the set [`is_trimmed_whitespace`] accepts: the Unicode
//! space separators, the ASCII controls TAB/LF/VT/FF/CR, U+2028, U+2029, and
//! the byte-order mark U+FEFF. U+0085 (NEL) is *not* in the set, even though
//! `char::is_whitespace` reports it. Existing hashes were produced with this
//! set, so `str::trim` cannot be used here.

use std::fmt;

/// Returns true for characters stripped from both ends of the input.
///
/// Also used by the email-shape check, so "no whitespace inside an address"
/// and "trimmed" agree on every code point.
pub fn is_trimmed_whitespace(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{0085}' => false,
        c => c.is_whitespace(),
    }
}

/// UTF-8 bytes of trimmed, lowercased input text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedInput(String);

impl NormalizedInput {
    /// Normalize arbitrary input text.
    ///
    /// Leading and trailing whitespace (see [`is_trimmed_whitespace`]) is
    /// removed, then every character is mapped through its lowercase form.
    pub fn new(text: &str) -> Self {
        Self(text.trim_matches(is_trimmed_whitespace).to_lowercase())
    }

    /// Access the normalized bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the normalized byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing remains after normalization.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for NormalizedInput {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for NormalizedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
