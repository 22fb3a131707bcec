// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for single-pair scoring.
//!
//! Arbitrary Unicode on both sides: combining marks, characters whose lowercase
//! is several code points, empty strings. Scoring must never panic, and whatever
//! it returns must be consistent with plain subsequence containment.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use fuzzrank::{fold, score, ScoringConfig, DEFAULT_EXACT_BONUS, DEFAULT_PREFIX_BONUS};

#[derive(Arbitrary, Debug)]
struct Pair<'a> {
    query: &'a str,
    candidate: &'a str,
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack.chars();
    needle.chars().all(|c| rest.any(|h| h == c))
}

fuzz_target!(|pair: Pair<'_>| {
    let cfg = ScoringConfig::default();
    let result = score(pair.query, pair.candidate, &cfg);

    // Deterministic
    assert_eq!(result, score(pair.query, pair.candidate, &cfg));

    let q = fold(pair.query);
    let c = fold(pair.candidate);
    assert_eq!(q.chars().count(), pair.query.chars().count());

    match result {
        None => {
            // Rejection is fine for anything that isn't a fast-path hit
            assert!(q.is_empty() || q != c, "exact match rejected");
        }
        Some(s) => {
            assert!(s > 0, "non-positive score {} escaped", s);
            assert!(is_subsequence(&q, &c), "{:?} scored against {:?}", q, c);
            if q == c {
                assert_eq!(s, DEFAULT_EXACT_BONUS);
            } else if c.starts_with(&q) {
                assert_eq!(s, DEFAULT_PREFIX_BONUS);
            } else if q.chars().count() <= 64 {
                assert!(s < DEFAULT_PREFIX_BONUS, "fuzzy score {} in prefix tier", s);
            }
        }
    }
});
