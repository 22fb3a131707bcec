//! Ranking order tests on a realistic API method corpus.
//!
//! Exact > prefix > fuzzy, and inside the fuzzy tier: boundaries, adjacent runs,
//! and short candidates win.

use crate::common::{assert_ranking_well_formed, items, API};
use fuzzrank::{rank, rank_preprocessed, ScoringConfig, DEFAULT_EXACT_BONUS, DEFAULT_PREFIX_BONUS};

fn cfg() -> ScoringConfig {
    ScoringConfig::default()
}

#[test]
fn test_exact_match_scenario() {
    let data = [
        "messages.sendMessage",
        "messages.sendReaction",
        "users.sendMessage",
    ];
    let ranking = rank("messages.sendMessage", &data, 3);
    assert_ranking_well_formed(&ranking, 3);

    let best = ranking.best().expect("no results");
    assert_eq!(best.item, "messages.sendMessage");
    assert_eq!(best.score, DEFAULT_EXACT_BONUS);
    // The other two are not subsequences of the query
    assert_eq!(ranking.total, 1);
}

#[test]
fn test_exact_match_is_case_insensitive() {
    let ranking = rank_preprocessed("MESSAGES.SENDMESSAGE", &API, 5, &cfg());
    assert_eq!(items(&ranking), vec!["messages.sendMessage"]);
    assert_eq!(ranking.matches[0].score, DEFAULT_EXACT_BONUS);
}

#[test]
fn test_prefix_tier() {
    let ranking = rank_preprocessed("users", &API, 5, &cfg());
    assert_ranking_well_formed(&ranking, 5);
    assert_eq!(
        items(&ranking),
        vec!["users.sendMessage", "users.getFullUser", "users.getUsers"]
    );
    assert!(ranking.matches.iter().all(|m| m.score == DEFAULT_PREFIX_BONUS));
}

#[test]
fn test_exact_beats_prefix_beats_fuzzy() {
    let data = ["auth.signInWithCode", "auth.signIn", "xauth.signIn"];
    let ranking = rank("auth.signIn", &data, 3);
    assert_eq!(
        items(&ranking),
        vec!["auth.signIn", "auth.signInWithCode", "xauth.signIn"]
    );
    assert_eq!(ranking.matches[0].score, DEFAULT_EXACT_BONUS);
    assert_eq!(ranking.matches[1].score, DEFAULT_PREFIX_BONUS);
    assert!(ranking.matches[2].score < DEFAULT_PREFIX_BONUS);
}

#[test]
fn test_fuzzy_prefers_shorter_namespace() {
    let ranking = rank_preprocessed("sendmsg", &API, 5, &cfg());
    assert_eq!(
        items(&ranking),
        vec!["users.sendMessage", "messages.sendMessage"]
    );
    assert_eq!(ranking.matches[0].score, 119);
    assert_eq!(ranking.matches[1].score, 103);
}

#[test]
fn test_camel_case_humps() {
    let ranking = rank_preprocessed("upprof", &API, 5, &cfg());
    assert_eq!(
        items(&ranking),
        vec!["photos.uploadProfilePhoto", "account.updateProfile"]
    );
}

#[test]
fn test_greedy_leftmost_matching() {
    // "g" in "messages" is taken before "get", scattering the match
    let ranking = rank_preprocessed("getmsgs", &API, 5, &cfg());
    assert_eq!(
        items(&ranking),
        vec![
            "channels.getMessages",
            "messages.getMessages",
            "messages.deleteMessages"
        ]
    );
    assert_eq!(ranking.total, 3);
}

#[test]
fn test_contiguous_run_beats_scattered() {
    // Same length, same letters, neither is a prefix match
    let data = ["xaxbxc", "xabcxx"];
    let ranking = rank("abc", &data, 2);
    assert_eq!(items(&ranking), vec!["xabcxx", "xaxbxc"]);
    assert_eq!(ranking.matches[0].score, 81);
    assert_eq!(ranking.matches[1].score, 34);
}

#[test]
fn test_boundary_beats_mid_word() {
    let data = ["userxname", "user_name"];
    let ranking = rank("un", &data, 2);
    assert_eq!(items(&ranking), vec!["user_name", "userxname"]);
}

#[test]
fn test_total_independent_of_limit() {
    let c = cfg();
    for query in ["msg", "users", "e", "sendmsg", "zzz"] {
        let one = rank_preprocessed(query, &API, 1, &c);
        let all = rank_preprocessed(query, &API, API.len(), &c);
        assert_eq!(one.total, all.total, "query {:?}", query);
        assert_eq!(all.len(), all.total, "query {:?}", query);
    }
}

#[test]
fn test_total_matches_score_count() {
    let c = cfg();
    let raw = crate::common::api_methods();
    for query in ["msg", "users", "e", "getmsgs"] {
        let expected = raw
            .iter()
            .filter(|t| fuzzrank::score(query, t, &c).is_some())
            .count();
        assert_eq!(rank_preprocessed(query, &API, 3, &c).total, expected);
    }
}

#[test]
fn test_custom_weights_change_order() {
    let data = fuzzrank::preprocess(&["a_b_tail_xx", "axxb"]);

    // Default weights: the boundary bonus on "b" outweighs the longer tail
    let ranking = rank_preprocessed("ab", &data, 2, &cfg());
    assert_eq!(items(&ranking), vec!["a_b_tail_xx", "axxb"]);

    // A heavier length penalty flips it
    let heavy = ScoringConfig {
        length_penalty: 3,
        ..ScoringConfig::default()
    };
    let ranking = rank_preprocessed("ab", &data, 2, &heavy);
    assert_eq!(items(&ranking), vec!["axxb", "a_b_tail_xx"]);
    assert_eq!(ranking.matches[0].score, 42);
    assert_eq!(ranking.matches[1].score, 37);
}
