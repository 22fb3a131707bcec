//! Test utilities shared across unit tests, integration tests, and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical corpus builders to avoid duplication.

#![doc(hidden)]

/// The `api.v1.service.method_<i>` corpus, `0..count`.
pub fn service_methods(count: usize) -> Vec<String> {
    synthetic_corpus("api.v1.service.method_", count)
}

/// `prefix` followed by every index in `0..count`.
pub fn synthetic_corpus(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}{}", prefix, i)).collect()
}

/// A small API-style corpus with camelCase, dotted namespaces, and near misses.
pub fn api_methods() -> Vec<String> {
    [
        "messages.sendMessage",
        "messages.sendReaction",
        "messages.getMessages",
        "messages.deleteMessages",
        "messages.editMessage",
        "messages.forwardMessages",
        "users.sendMessage",
        "users.getFullUser",
        "users.getUsers",
        "auth.signIn",
        "auth.signUp",
        "auth.logOut",
        "channels.getMessages",
        "channels.joinChannel",
        "contacts.resolveUsername",
        "upload.saveFilePart",
        "photos.uploadProfilePhoto",
        "account.updateProfile",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Is `needle` an ordered, case-insensitive subsequence of `haystack`?
///
/// Independent oracle for the scanner: no scoring, just containment.
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let fold = crate::preprocess::fold;
    let haystack = fold(haystack);
    let mut rest = haystack.chars();
    fold(needle).chars().all(|c| rest.any(|h| h == c))
}
