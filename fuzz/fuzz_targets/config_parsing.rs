// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for scoring config parsing.
//!
//! Config files come from users. Garbage JSON is an error; any config that
//! parses and validates, i64 extremes included, must rank without overflowing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use fuzzrank::{rank_preprocessed, preprocess, ScoringConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(cfg) = ScoringConfig::from_json_str(text) else {
        return;
    };
    if cfg.validate().is_err() {
        return;
    }
    let candidates = preprocess(&["messages.sendMessage", "users.getFullUser", "auth.signIn"]);
    let ranking = rank_preprocessed("msg", &candidates, 3, &cfg);
    assert!(ranking.matches.len() <= 3);
    assert!(ranking.matches.iter().all(|m| m.score > 0));
    for pair in ranking.matches.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
});
