// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a fuzzy score.
//!
//! Three tiers, checked in order:
//!
//! 1. **Exact**: folded candidate == folded query → `exact_bonus`
//! 2. **Prefix**: folded candidate starts with folded query → `prefix_bonus`
//! 3. **Scan**: greedy leftmost subsequence match with positional bonuses
//!
//! The fast paths return flat constants that sit far above anything the scan can
//! reach for realistic queries, so exact > prefix > fuzzy holds without comparing
//! scan internals.
//!
//! # The scan
//!
//! One forward pass over the folded candidate. Every matched query character earns
//! `base_score`, plus:
//!
//! | Bonus               | When                                                    |
//! |---------------------|---------------------------------------------------------|
//! | `boundary_bonus`    | position 0, or the previous character is `_ . - /`      |
//! | `streak * consecutive_bonus` | the match is adjacent to the previous match    |
//! | `uppercase_bonus`   | the *original* character is uppercase (camelCase humps) |
//!
//! Every skipped candidate character costs 1 and breaks the streak. When the query
//! is consumed the scan stops and settles up:
//! `+ longest_streak * max_seq_bonus − (candidate_len − query_len) * length_penalty`.
//!
//! All lengths are in code points. Greedy leftmost means "the first place it fits",
//! not "the best place it fits": `"ab"` against `"a_xab"` matches the leading `a`.

use serde::Serialize;

use crate::config::ScoringConfig;
use crate::contracts::check_candidate_aligned;
use crate::types::Candidate;

// =============================================================================
// DEFAULT WEIGHTS
// =============================================================================
// exact > prefix is pinned by a compile-time assertion in contracts.rs.

/// Points per matched query character.
pub const DEFAULT_BASE_SCORE: i64 = 10;

/// Bonus for matching at the start of a word segment.
pub const DEFAULT_BOUNDARY_BONUS: i64 = 15;

/// Per-streak-step bonus for adjacent matches.
pub const DEFAULT_CONSECUTIVE_BONUS: i64 = 5;

/// Multiplier for the longest streak, applied once at the end.
pub const DEFAULT_MAX_SEQ_BONUS: i64 = 10;

/// Cost per unmatched trailing code point of candidate length.
pub const DEFAULT_LENGTH_PENALTY: i64 = 1;

/// Fixed score for a case-insensitive exact match.
pub const DEFAULT_EXACT_BONUS: i64 = 100_000;

/// Fixed score for a case-insensitive prefix match.
pub const DEFAULT_PREFIX_BONUS: i64 = 50_000;

/// Bonus when the matched original character is uppercase.
pub const DEFAULT_UPPERCASE_BONUS: i64 = 3;

/// Word-segment separators: `_ . - /`.
#[inline]
pub fn is_boundary(c: char) -> bool {
    matches!(c, '_' | '.' | '-' | '/')
}

/// Which tier produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Prefix,
    Fuzzy,
}

/// Run the exact and prefix fast paths on folded strings.
///
/// Both are plain O(length) string comparisons; no scan state involved.
#[inline]
pub fn fast_path(
    folded_query: &str,
    candidate: &Candidate,
    config: &ScoringConfig,
) -> Option<(MatchKind, i64)> {
    let folded = candidate.folded();
    if folded == folded_query {
        Some((MatchKind::Exact, config.exact_bonus))
    } else if folded.starts_with(folded_query) {
        Some((MatchKind::Prefix, config.prefix_bonus))
    } else {
        None
    }
}

/// Raw subsequence scan.
///
/// `query` must already be folded (see [`crate::fold`]). Returns `None` when the
/// query is not a subsequence of the candidate. A `Some` score can be zero or
/// negative for long candidates with scattered matches; the selector drops those,
/// but callers building their own ranking get the unfiltered number.
///
/// An empty query has nothing to consume and is rejected.
///
/// All arithmetic saturates: extreme weights pin the score at `i64::MIN` or
/// `i64::MAX` instead of wrapping.
pub fn scan_score(query: &[char], candidate: &Candidate, config: &ScoringConfig) -> Option<i64> {
    check_candidate_aligned(candidate);

    let text = candidate.folded_chars();
    let original = candidate.chars();
    let n = text.len();
    let m = query.len();

    if m == 0 || m > n {
        return None;
    }

    let mut qi = 0usize;
    let mut score = 0i64;
    let mut streak = 0i64;
    let mut longest = 0i64;
    let mut last_match: Option<usize> = None;

    for ti in 0..n {
        // INVARIANT: qi < m here; the scan returns as soon as qi reaches m
        // Not enough candidate left to finish the query
        if n - ti < m - qi {
            break;
        }

        if text[ti] == query[qi] {
            let mut current = config.base_score;

            if ti == 0 || is_boundary(text[ti - 1]) {
                current = current.saturating_add(config.boundary_bonus);
            }

            // "No previous match" behaves like a match at -1: position 0 continues it
            let adjacent = match last_match {
                Some(prev) => prev + 1 == ti,
                None => ti == 0,
            };
            if adjacent {
                streak += 1;
                current = current.saturating_add(streak.saturating_mul(config.consecutive_bonus));
            } else {
                streak = 1;
            }

            if original[ti].is_uppercase() {
                current = current.saturating_add(config.uppercase_bonus);
            }

            score = score.saturating_add(current);
            last_match = Some(ti);
            qi += 1;
            longest = longest.max(streak);

            if qi == m {
                let penalty = ((n - m) as i64).saturating_mul(config.length_penalty);
                let score = score
                    .saturating_add(longest.saturating_mul(config.max_seq_bonus))
                    .saturating_sub(penalty);
                return Some(score);
            }
        } else {
            streak = 0;
            score = score.saturating_sub(1);
        }
    }

    None
}

/// Score a preprocessed candidate against a folded query: exact, then prefix, then scan.
///
/// Returns `None` unless the result is positive. `folded_query` and `query_chars`
/// must describe the same folded query.
#[inline]
pub fn score_candidate_with_kind(
    folded_query: &str,
    query_chars: &[char],
    candidate: &Candidate,
    config: &ScoringConfig,
) -> Option<(MatchKind, i64)> {
    if query_chars.is_empty() {
        return None;
    }
    if let Some(hit) = fast_path(folded_query, candidate, config) {
        return Some(hit).filter(|&(_, s)| s > 0);
    }
    scan_score(query_chars, candidate, config)
        .filter(|&s| s > 0)
        .map(|s| (MatchKind::Fuzzy, s))
}

/// Like [`score_candidate_with_kind`], for callers holding only the folded code points.
pub fn score_candidate(
    query_chars: &[char],
    candidate: &Candidate,
    config: &ScoringConfig,
) -> Option<i64> {
    let folded_query: String = query_chars.iter().collect();
    score_candidate_with_kind(&folded_query, query_chars, candidate, config).map(|(_, s)| s)
}

/// Score one raw query against one raw candidate.
///
/// `None` means rejected: empty query, not a subsequence, or a non-positive scan
/// score. A `Some` here is exactly what the selector would count toward `total`.
///
/// ```
/// use fuzzrank::{score, ScoringConfig};
///
/// let cfg = ScoringConfig::default();
/// assert_eq!(score("messages.sendMessage", "messages.sendMessage", &cfg), Some(100_000));
/// assert_eq!(score("messages.send", "messages.sendMessage", &cfg), Some(50_000));
/// assert!(score("sndmsg", "messages.sendMessage", &cfg).is_some());
/// assert_eq!(score("xyz", "messages.sendMessage", &cfg), None);
/// ```
pub fn score(query: &str, candidate: &str, config: &ScoringConfig) -> Option<i64> {
    score_with_kind(query, candidate, config).map(|(_, s)| s)
}

/// [`score`], plus the tier that produced the number.
///
/// A custom config can make a fuzzy score collide with `prefix_bonus`; the kind
/// is the only reliable way to tell them apart.
pub fn score_with_kind(
    query: &str,
    candidate: &str,
    config: &ScoringConfig,
) -> Option<(MatchKind, i64)> {
    let candidate = Candidate::new(candidate);
    let folded_query = crate::preprocess::fold(query);
    let query_chars: Vec<char> = folded_query.chars().collect();
    score_candidate_with_kind(&folded_query, &query_chars, &candidate, config)
}
