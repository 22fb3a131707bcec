// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for top-K selection.
//!
//! Random corpora, random queries, random limits. The bounded heap must agree
//! with the dumbest possible implementation: score everything, sort, truncate.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use fuzzrank::{rank, score, ScoringConfig};

#[derive(Arbitrary, Debug)]
struct Input {
    query: String,
    candidates: Vec<String>,
    limit: u8,
}

fuzz_target!(|input: Input| {
    let limit = usize::from(input.limit);
    let ranking = rank(&input.query, &input.candidates, limit);

    if input.query.is_empty() || limit == 0 {
        assert!(ranking.matches.is_empty());
        assert_eq!(ranking.total, 0);
        return;
    }

    let cfg = ScoringConfig::default();
    let mut expected: Vec<(usize, i64)> = input
        .candidates
        .iter()
        .enumerate()
        .filter_map(|(i, c)| score(&input.query, c, &cfg).map(|s| (i, s)))
        .collect();
    assert_eq!(ranking.total, expected.len());

    expected.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    expected.truncate(limit);

    let got: Vec<(usize, i64)> = ranking.matches.iter().map(|m| (m.index, m.score)).collect();
    assert_eq!(got, expected);

    for m in &ranking.matches {
        assert_eq!(m.item, input.candidates[m.index]);
    }
});
