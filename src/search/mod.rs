// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking: score everything, keep the best K.
//!
//! # Entry points
//!
//! | Function             | Input                    | Use when                            |
//! |----------------------|--------------------------|-------------------------------------|
//! | [`rank`]             | raw strings              | one-off query, default weights      |
//! | [`rank_preprocessed`]| `&[Candidate]`           | repeated queries on a stable corpus |
//! | [`rank_many`]        | `&[Candidate]` + queries | batch of queries, parallel if able  |
//! | [`Corpus::rank`]     | owned candidate cache    | same as above, cache owned for you  |
//!
//! A ranking call is a pure function of (query, candidates, limit, config). All
//! scratch state (heap, scan counters) lives on the caller's stack, so concurrent
//! calls over one shared corpus are fine.
//!
//! # Degenerate inputs
//!
//! An empty query or a zero limit returns an empty ranking with `total == 0`. That's
//! defined behavior, not an error.

mod top_k;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::ScoringConfig;
use crate::contracts::{check_config_dominance, check_ranking_well_formed};
use crate::preprocess::{fold, preprocess};
use crate::scoring::score_candidate_with_kind;
use crate::types::{Candidate, Match, Ranking};

pub use top_k::{Scored, TopK};

/// Rank raw strings with the default weights.
///
/// Preprocesses on every call. For repeated queries against the same strings,
/// build a [`Corpus`] once instead. Returned matches borrow from `raw`.
///
/// ```
/// let methods = ["messages.sendMessage", "messages.sendReaction", "users.sendMessage"];
/// let ranking = fuzzrank::rank("messages.sendMessage", &methods, 3);
/// assert_eq!(ranking.best().unwrap().item, "messages.sendMessage");
/// assert_eq!(ranking.best().unwrap().score, 100_000);
/// ```
pub fn rank<'a, S: AsRef<str>>(query: &str, raw: &'a [S], limit: usize) -> Ranking<'a> {
    if query.is_empty() || limit == 0 {
        return Ranking::empty();
    }
    let candidates = preprocess(raw);
    let ranked = rank_preprocessed(query, &candidates, limit, &ScoringConfig::default());

    // Re-point matches at the caller's strings; the candidates die here
    let matches = ranked
        .matches
        .iter()
        .map(|m| Match {
            item: raw[m.index].as_ref(),
            index: m.index,
            score: m.score,
            kind: m.kind,
        })
        .collect();
    Ranking {
        matches,
        total: ranked.total,
    }
}

/// Rank preprocessed candidates. The primary entry point.
///
/// Per candidate, in input order: exact fast path, prefix fast path, subsequence
/// scan. Every positive score bumps `total`; the best `limit` survive in a bounded
/// min-heap and come back sorted by descending score.
///
/// Equal scores come back in input order. Don't rely on it: it falls out of the
/// eviction rule and is not part of the contract.
pub fn rank_preprocessed<'a>(
    query: &str,
    candidates: &'a [Candidate],
    limit: usize,
    config: &ScoringConfig,
) -> Ranking<'a> {
    if query.is_empty() || limit == 0 {
        return Ranking::empty();
    }
    check_config_dominance(config);

    let folded_query = fold(query);
    let query_chars: Vec<char> = folded_query.chars().collect();

    let mut top = TopK::new(limit);
    let mut total = 0usize;

    for (index, candidate) in candidates.iter().enumerate() {
        let Some((kind, score)) =
            score_candidate_with_kind(&folded_query, &query_chars, candidate, config)
        else {
            continue;
        };
        // INVARIANT: total counts every positive score, kept or evicted
        total += 1;
        top.offer(Scored { score, index, kind });
    }

    let matches = top
        .into_sorted_vec()
        .into_iter()
        .map(|s| Match {
            item: candidates[s.index].text(),
            index: s.index,
            score: s.score,
            kind: s.kind,
        })
        .collect();

    let ranking = Ranking { matches, total };
    check_ranking_well_formed(&ranking, limit);
    ranking
}

/// Rank several queries against one corpus.
///
/// Output order matches `queries`. With the `parallel` feature each query runs
/// as its own rayon task; each task owns its heap, the candidates are shared.
pub fn rank_many<'a, Q: AsRef<str> + Sync>(
    queries: &[Q],
    candidates: &'a [Candidate],
    limit: usize,
    config: &ScoringConfig,
) -> Vec<Ranking<'a>> {
    #[cfg(feature = "parallel")]
    let rankings: Vec<Ranking<'a>> = queries
        .par_iter()
        .map(|q| rank_preprocessed(q.as_ref(), candidates, limit, config))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let rankings: Vec<Ranking<'a>> = queries
        .iter()
        .map(|q| rank_preprocessed(q.as_ref(), candidates, limit, config))
        .collect();
    rankings
}

/// An owned, reusable set of preprocessed candidates.
///
/// Preprocessing is paid once in [`Corpus::new`]; every [`Corpus::rank`] after
/// that only scans. Immutable after construction, so `&Corpus` can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    candidates: Vec<Candidate>,
    config: ScoringConfig,
}

impl Corpus {
    /// Preprocess `raw` with the default weights.
    pub fn new<S: AsRef<str> + Sync>(raw: &[S]) -> Self {
        Self::with_config(raw, ScoringConfig::default())
    }

    /// Preprocess `raw` and rank with `config`.
    pub fn with_config<S: AsRef<str> + Sync>(raw: &[S], config: ScoringConfig) -> Self {
        #[cfg(feature = "parallel")]
        let candidates = crate::preprocess::preprocess_parallel(raw);
        #[cfg(not(feature = "parallel"))]
        let candidates = preprocess(raw);
        Self { candidates, config }
    }

    /// Wrap candidates that were already preprocessed.
    pub fn from_candidates(candidates: Vec<Candidate>, config: ScoringConfig) -> Self {
        Self { candidates, config }
    }

    pub fn rank(&self, query: &str, limit: usize) -> Ranking<'_> {
        rank_preprocessed(query, &self.candidates, limit, &self.config)
    }

    pub fn rank_many<Q: AsRef<str> + Sync>(&self, queries: &[Q], limit: usize) -> Vec<Ranking<'_>> {
        rank_many(queries, &self.candidates, limit, &self.config)
    }

    #[inline]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[inline]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
