// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the ranking invariants.
//!
//! This module provides debug-mode assertions that verify the properties the
//! rest of the crate relies on. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Run on every ranking call in debug builds, including the test suite
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Property                                          |
//! |------------------------------|---------------------------------------------------|
//! | `check_candidate_aligned`    | original and folded code points line up           |
//! | `check_config_dominance`     | `exact_bonus > prefix_bonus`                      |
//! | `check_ranking_well_formed`  | `len ≤ limit`, `len ≤ total`, descending scores   |
//!
//! # Usage
//!
//! ```ignore
//! use fuzzrank::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_ranking_well_formed(&ranking, limit);
//!
//! // In release builds, this is a no-op
//! ```

use crate::config::ScoringConfig;
use crate::scoring::{
    DEFAULT_BASE_SCORE, DEFAULT_BOUNDARY_BONUS, DEFAULT_CONSECUTIVE_BONUS, DEFAULT_EXACT_BONUS,
    DEFAULT_MAX_SEQ_BONUS, DEFAULT_PREFIX_BONUS, DEFAULT_UPPERCASE_BONUS,
};
use crate::types::{Candidate, Ranking};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Longest query for which the default weights guarantee prefix > best fuzzy.
pub const TIER_DOMINANCE_QUERY_LEN: i64 = 64;

/// Static assertion that tier dominance holds for the default weights.
/// If it fails, the crate won't build.
const _: () = {
    // INVARIANT: exact_beats_prefix
    assert!(DEFAULT_EXACT_BONUS > DEFAULT_PREFIX_BONUS);
    assert!(DEFAULT_PREFIX_BONUS > 0);

    // INVARIANT: prefix_beats_fuzzy (for queries up to TIER_DOMINANCE_QUERY_LEN)
    // Best case scan: every character matched adjacently on a boundary, uppercase,
    // no skips, no length penalty. Streak k adds k * consecutive.
    const M: i64 = TIER_DOMINANCE_QUERY_LEN;
    const PER_CHAR: i64 = DEFAULT_BASE_SCORE + DEFAULT_BOUNDARY_BONUS + DEFAULT_UPPERCASE_BONUS;
    const STREAK: i64 = DEFAULT_CONSECUTIVE_BONUS * M * (M + 1) / 2;
    const BEST_FUZZY: i64 = M * PER_CHAR + STREAK + M * DEFAULT_MAX_SEQ_BONUS;
    assert!(BEST_FUZZY < DEFAULT_PREFIX_BONUS); // 12832 < 50000
};

// ============================================================================
// CANDIDATE CONTRACTS
// ============================================================================

/// Check that a candidate's original and folded code points are index-aligned.
///
/// # Panics (debug builds only)
/// Panics if the two sequences differ in length.
#[inline]
pub fn check_candidate_aligned(candidate: &Candidate) {
    debug_assert_eq!(
        candidate.chars().len(),
        candidate.folded_chars().len(),
        "Contract violation: Candidate.Aligned - {:?} has {} original vs {} folded code points",
        candidate.text(),
        candidate.chars().len(),
        candidate.folded_chars().len()
    );
}

// ============================================================================
// CONFIG CONTRACTS
// ============================================================================

/// Check that exact matches outrank prefix matches under `config`.
///
/// Ranking still runs with an inverted config; this only flags it in debug builds.
/// Use [`ScoringConfig::validate`] to refuse such configs up front.
///
/// # Panics (debug builds only)
/// Panics if `exact_bonus <= prefix_bonus`.
#[inline]
pub fn check_config_dominance(config: &ScoringConfig) {
    debug_assert!(
        config.exact_bonus > config.prefix_bonus,
        "Contract violation: exact_beats_prefix - exact_bonus {} <= prefix_bonus {}",
        config.exact_bonus,
        config.prefix_bonus
    );
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that a ranking respects its limit, its total, and its order.
///
/// # Panics (debug builds only)
/// Panics if any of the three properties fail.
#[inline]
pub fn check_ranking_well_formed(ranking: &Ranking<'_>, limit: usize) {
    debug_assert!(
        ranking.matches.len() <= limit,
        "Contract violation: Ranking.LimitRespected - {} matches > limit {}",
        ranking.matches.len(),
        limit
    );
    debug_assert!(
        ranking.matches.len() <= ranking.total,
        "Contract violation: Ranking.TotalCovers - {} matches > total {}",
        ranking.matches.len(),
        ranking.total
    );
    for (i, pair) in ranking.matches.windows(2).enumerate() {
        debug_assert!(
            pair[0].score >= pair[1].score,
            "Contract violation: Ranking.Descending - matches[{}].score {} < matches[{}].score {}",
            i,
            pair[0].score,
            i + 1,
            pair[1].score
        );
    }
}
