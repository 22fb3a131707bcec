//! Scoring weights loaded from JSON.

use crate::common::items;
use fuzzrank::{ConfigError, Corpus, ScoringConfig, DEFAULT_BASE_SCORE};
use std::io::{ErrorKind, Write};

fn write_config(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_partial_config_keeps_defaults() {
    let file = write_config(r#"{"length_penalty": 3}"#);
    let cfg = ScoringConfig::from_path(file.path()).unwrap();
    assert_eq!(cfg.length_penalty, 3);
    assert_eq!(cfg.base_score, DEFAULT_BASE_SCORE);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_loaded_config_changes_ranking() {
    let data = ["a_b_tail_xx", "axxb"];

    let default = Corpus::new(&data);
    assert_eq!(items(&default.rank("ab", 2)), vec!["a_b_tail_xx", "axxb"]);

    let file = write_config(r#"{"length_penalty": 3}"#);
    let cfg = ScoringConfig::from_path(file.path()).unwrap();
    let heavy = Corpus::with_config(&data, cfg);
    let ranking = heavy.rank("ab", 2);
    assert_eq!(items(&ranking), vec!["axxb", "a_b_tail_xx"]);
    assert_eq!(ranking.matches[0].score, 42);
    assert_eq!(ranking.matches[1].score, 37);
}

#[test]
fn test_unknown_field_rejected() {
    let file = write_config(r#"{"lenght_penalty": 3}"#);
    let err = ScoringConfig::from_path(file.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[test]
fn test_inverted_fast_paths_fail_validation() {
    let file = write_config(r#"{"exact_bonus": 10, "prefix_bonus": 20}"#);
    let cfg = ScoringConfig::from_path(file.path()).unwrap();
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::FastPathOrder {
            exact_bonus: 10,
            prefix_bonus: 20
        })
    ));
}

#[test]
fn test_negative_weight_fails_validation() {
    let file = write_config(r#"{"boundary_bonus": -1}"#);
    let cfg = ScoringConfig::from_path(file.path()).unwrap();
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::Negative {
            field: "boundary_bonus",
            value: -1
        })
    ));
}
