//! Candidate preprocessing: fold once, rank many times.
//!
//! Folding here is deliberately simpler than `str::to_lowercase`. Each code point
//! maps to exactly one code point, so the folded sequence stays index-aligned with
//! the original and the scorer can look back at the original casing:
//!
//! - "sendMessage" → "sendmessage"
//! - "Über" → "über"
//! - "İ" → "İ" (lowercases to two code points, left as-is)
//!
//! No locale is consulted. Turkish dotless-i rules and final-sigma context are
//! out of scope.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::types::Candidate;

/// Fold a single code point.
///
/// Returns the lowercase form when it is a single code point, otherwise the
/// input unchanged.
#[inline]
pub fn fold_char(c: char) -> char {
    // INVARIANT: exactly one code point out per code point in
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Fold a whole string with [`fold_char`].
pub fn fold(value: &str) -> String {
    value.chars().map(fold_char).collect()
}

/// Build a [`Candidate`] for every raw string, preserving order.
pub fn preprocess<S: AsRef<str>>(raw: &[S]) -> Vec<Candidate> {
    raw.iter().map(|s| Candidate::new(s.as_ref())).collect()
}

/// Parallel version of [`preprocess`].
///
/// Candidates don't depend on each other, so this is a straight `par_iter`.
/// Output order matches input order.
#[cfg(feature = "parallel")]
pub fn preprocess_parallel<S: AsRef<str> + Sync>(raw: &[S]) -> Vec<Candidate> {
    raw.par_iter().map(|s| Candidate::new(s.as_ref())).collect()
}
