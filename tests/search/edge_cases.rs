//! Degenerate inputs and boundary conditions.

use crate::common::{assert_ranking_well_formed, items, API};
use fuzzrank::{preprocess, rank, rank_preprocessed, score, Ranking, ScoringConfig};

#[test]
fn test_empty_query_returns_nothing() {
    let data = ["anything", "at", "all"];
    let ranking = rank("", &data, 10);
    assert_eq!(ranking, Ranking::empty());
}

#[test]
fn test_zero_limit_returns_nothing() {
    let data = ["x", "xx", "axb"];
    let ranking = rank("x", &data, 0);
    assert!(ranking.is_empty());
    assert_eq!(ranking.total, 0);
}

#[test]
fn test_empty_corpus() {
    let data: Vec<String> = vec![];
    let ranking = rank("query", &data, 10);
    assert!(ranking.is_empty());
    assert_eq!(ranking.total, 0);
}

#[test]
fn test_empty_candidate_never_matches() {
    let data = ["", "a"];
    let ranking = rank("a", &data, 10);
    assert_eq!(items(&ranking), vec!["a"]);
    assert_eq!(ranking.total, 1);
}

#[test]
fn test_query_longer_than_candidate() {
    let cfg = ScoringConfig::default();
    assert_eq!(score("abcdef", "abc", &cfg), None);
    let ranking = rank("abcdef", &["abc", "ab", "a"], 10);
    assert!(ranking.is_empty());
}

#[test]
fn test_not_a_subsequence() {
    let cfg = ScoringConfig::default();
    assert_eq!(score("xyz", "messages.sendMessage", &cfg), None);
    assert_eq!(score("mesages.getMesage", "messages.sendMessage", &cfg), None);
}

#[test]
fn test_limit_larger_than_corpus() {
    let ranking = rank_preprocessed("s", &API, usize::MAX, &ScoringConfig::default());
    assert_ranking_well_formed(&ranking, usize::MAX);
    assert_eq!(ranking.len(), ranking.total);
}

#[test]
fn test_limit_one() {
    let ranking = rank_preprocessed("msg", &API, 1, &ScoringConfig::default());
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking.total, 8);
    assert_eq!(ranking.matches[0].item, "messages.sendMessage");
}

#[test]
fn test_whitespace_is_an_ordinary_character() {
    let data = ["hello world", "helloworld"];
    let ranking = rank("o w", &data, 10);
    assert_eq!(items(&ranking), vec!["hello world"]);
}

#[test]
fn test_unicode_candidates() {
    let data = ["Über.straße", "uber.strasse", "日本語.テキスト"];
    let ranking = rank("über", &data, 10);
    assert_eq!(items(&ranking), vec!["Über.straße"]);
    assert_eq!(ranking.matches[0].score, fuzzrank::DEFAULT_PREFIX_BONUS);

    let ranking = rank("日語", &data, 10);
    assert_eq!(items(&ranking), vec!["日本語.テキスト"]);
}

#[test]
fn test_multi_code_point_lowercase_left_alone() {
    // 'İ' lowercases to two code points; folding keeps it as-is
    let data = preprocess(&["İstanbul"]);
    assert_eq!(data[0].folded(), "İstanbul");
    let cfg = ScoringConfig::default();
    assert!(rank_preprocessed("stanbul", &data, 1, &cfg).total == 1);
    assert!(rank_preprocessed("İst", &data, 1, &cfg).total == 1);
}

#[test]
fn test_duplicate_candidates_all_counted() {
    let data = ["dup", "dup", "dup"];
    let ranking = rank("dup", &data, 2);
    assert_eq!(ranking.total, 3);
    assert_eq!(ranking.len(), 2);
    let indexes: Vec<usize> = ranking.matches.iter().map(|m| m.index).collect();
    assert_eq!(indexes, vec![0, 1]);
}
