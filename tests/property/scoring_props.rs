//! Single-pair scoring properties.

use super::*;
use crate::common::is_subsequence;
use fuzzrank::{fold, score, ScoringConfig, DEFAULT_EXACT_BONUS, DEFAULT_PREFIX_BONUS};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Any non-empty string scores the exact bonus against itself.
    #[test]
    fn prop_exact_match_scores_exact_bonus(s in prop_oneof![ident_strategy(), unicode_strategy()]) {
        prop_assume!(!s.is_empty());
        let cfg = ScoringConfig::default();
        prop_assert_eq!(score(&s, &s, &cfg), Some(DEFAULT_EXACT_BONUS));
    }

    /// Case differences never matter to exact matching.
    #[test]
    fn prop_exact_match_ignores_ascii_case(s in "[a-zA-Z_.]{1,16}") {
        let cfg = ScoringConfig::default();
        prop_assert_eq!(score(&s.to_ascii_uppercase(), &s, &cfg), Some(DEFAULT_EXACT_BONUS));
    }

    /// A strict prefix always takes the prefix bonus.
    #[test]
    fn prop_prefix_scores_prefix_bonus(q in query_strategy(), rest in "[a-z0-9_.]{1,12}") {
        let cfg = ScoringConfig::default();
        let candidate = format!("{}{}", q, rest);
        prop_assert_eq!(score(&q, &candidate, &cfg), Some(DEFAULT_PREFIX_BONUS));
    }

    /// Fuzzy scores sit strictly below the prefix tier.
    #[test]
    fn prop_fuzzy_below_prefix(q in query_strategy(), c in ident_strategy()) {
        let cfg = ScoringConfig::default();
        prop_assume!(!fold(&c).starts_with(&fold(&q)));
        if let Some(s) = score(&q, &c, &cfg) {
            prop_assert!(s < DEFAULT_PREFIX_BONUS, "fuzzy {} reached the prefix tier", s);
        }
    }

    /// A match implies the query is an ordered subsequence of the candidate.
    #[test]
    fn prop_match_implies_subsequence(
        q in query_strategy(),
        c in prop_oneof![ident_strategy(), method_strategy(), unicode_strategy()],
    ) {
        let cfg = ScoringConfig::default();
        if score(&q, &c, &cfg).is_some() {
            prop_assert!(is_subsequence(&q, &c), "{:?} matched {:?}", q, c);
        }
    }

    /// Returned scores are always positive.
    #[test]
    fn prop_scores_are_positive(q in query_strategy(), c in ident_strategy()) {
        let cfg = ScoringConfig::default();
        if let Some(s) = score(&q, &c, &cfg) {
            prop_assert!(s > 0);
        }
    }

    /// Query case is folded away entirely; only candidate case earns bonuses.
    #[test]
    fn prop_query_case_is_irrelevant(q in query_strategy(), c in ident_strategy()) {
        let cfg = ScoringConfig::default();
        prop_assert_eq!(score(&q.to_ascii_uppercase(), &c, &cfg), score(&q, &c, &cfg));
    }

    /// A query longer than the candidate never matches.
    #[test]
    fn prop_longer_query_rejected(c in ident_strategy(), extra in "[a-d]{1,4}") {
        let cfg = ScoringConfig::default();
        let q = format!("{}{}", c, extra);
        prop_assert_eq!(score(&q, &c, &cfg), None);
    }

    /// Folding never changes the code-point count.
    #[test]
    fn prop_fold_preserves_length(s in prop_oneof![unicode_strategy(), "\\PC{0,24}"]) {
        prop_assert_eq!(fold(&s).chars().count(), s.chars().count());
    }
}
