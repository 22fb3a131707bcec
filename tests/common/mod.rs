//! Shared test utilities and fixtures.

#![allow(dead_code)]

use fuzzrank::{Candidate, Ranking};
use std::sync::LazyLock;

// Re-export canonical test utilities from fuzzrank::testing
pub use fuzzrank::testing::{api_methods, is_subsequence, service_methods};

// ============================================================================
// CACHED CORPORA
// ============================================================================

/// The 100k `api.v1.service.method_<i>` corpus, preprocessed once per test binary.
pub static SERVICE_100K: LazyLock<Vec<Candidate>> =
    LazyLock::new(|| fuzzrank::preprocess(&service_methods(100_000)));

/// The small API corpus, preprocessed.
pub static API: LazyLock<Vec<Candidate>> = LazyLock::new(|| fuzzrank::preprocess(&api_methods()));

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert every ranking invariant, with messages that say which one broke.
pub fn assert_ranking_well_formed(ranking: &Ranking<'_>, limit: usize) {
    // Invariant: len <= limit
    assert!(
        ranking.matches.len() <= limit,
        "INVARIANT VIOLATED: {} matches > limit {}",
        ranking.matches.len(),
        limit
    );

    // Invariant: len <= total
    assert!(
        ranking.matches.len() <= ranking.total,
        "INVARIANT VIOLATED: {} matches > total {}",
        ranking.matches.len(),
        ranking.total
    );

    // Invariant: descending scores, all positive
    for (i, pair) in ranking.matches.windows(2).enumerate() {
        assert!(
            pair[0].score >= pair[1].score,
            "INVARIANT VIOLATED: matches[{}].score {} < matches[{}].score {}",
            i,
            pair[0].score,
            i + 1,
            pair[1].score
        );
    }
    for m in &ranking.matches {
        assert!(m.score > 0, "INVARIANT VIOLATED: {:?} has non-positive score", m);
    }
}

/// Display texts of a ranking, best first.
pub fn items<'a>(ranking: &Ranking<'a>) -> Vec<&'a str> {
    ranking.items().collect()
}
