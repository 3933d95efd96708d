//! Email-shape check used to filter batch input.
//!
//! This is a plausibility filter, not RFC 5322 validation. It accepts
//! exactly what the pattern `^[^\s@]+@[^\s@]+\.[^\s@]+$` accepts, where
//! `\s` is the set [`is_trimmed_whitespace`] accepts.

use crate::normalize::is_trimmed_whitespace;

/// Returns true if `candidate` looks like `local@domain.tld`.
pub fn is_plausible_email(candidate: &str) -> bool {
    if candidate.chars().any(is_trimmed_whitespace) {
        return false;
    }
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Some '.' must have at least one character on each side.
    let mut chars = domain.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return false;
    }
    chars.as_str().contains('.')
}
