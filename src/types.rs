// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a ranking pass.
//!
//! A `Candidate` is built once and never mutated; a `Match` borrows from it; a
//! `Ranking` is what the selector hands back. Nothing here owns scratch state,
//! so every type is `Send + Sync` and a corpus can be shared across threads.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Candidate**: `chars.len() == folded_chars.len()`.
//!   Folding is one code point in, one code point out. The scorer indexes the
//!   original sequence with positions found in the folded one.
//!
//! - **Ranking**: `matches.len() <= limit ∧ matches.len() <= total`, and matches are
//!   sorted by score, highest first.

use serde::Serialize;

use crate::scoring::MatchKind;

use crate::preprocess::fold_char;

/// One searchable string plus its precomputed folded forms.
///
/// Fields are private: the four representations are derived together in
/// [`Candidate::new`] and can't drift apart afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    text: String,
    folded: String,
    chars: Vec<char>,
    folded_chars: Vec<char>,
}

impl Candidate {
    /// Decompose and fold `text`. Never fails; the empty string is a valid candidate.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let chars: Vec<char> = text.chars().collect();
        let folded_chars: Vec<char> = chars.iter().copied().map(fold_char).collect();
        // INVARIANT: chars.len() == folded_chars.len()
        let folded = folded_chars.iter().collect();
        Self {
            text,
            folded,
            chars,
            folded_chars,
        }
    }

    /// Original display text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Case-folded text, used by the exact and prefix fast paths.
    #[inline]
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Original code points.
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Case-folded code points, index-aligned with [`Candidate::chars`].
    #[inline]
    pub fn folded_chars(&self) -> &[char] {
        &self.folded_chars
    }

    /// Length in code points.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl From<&str> for Candidate {
    fn from(text: &str) -> Self {
        Candidate::new(text)
    }
}

impl From<String> for Candidate {
    fn from(text: String) -> Self {
        Candidate::new(text)
    }
}

/// A scored candidate in a ranking result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match<'a> {
    /// Display text of the matched candidate.
    pub item: &'a str,
    /// Position of the candidate in the ranked input.
    pub index: usize,
    pub score: i64,
    /// Which tier produced `score`.
    pub kind: MatchKind,
}

/// Result of a ranking call: best matches first, plus how many matched at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ranking<'a> {
    /// At most `limit` matches, sorted by descending score.
    ///
    /// Ties are returned in input order. Treat that as an implementation detail
    /// of the bounded heap, not part of the ranking contract.
    pub matches: Vec<Match<'a>>,
    /// Every candidate that scored positively, including those that didn't make
    /// the top `limit`.
    pub total: usize,
}

impl<'a> Ranking<'a> {
    /// The degenerate result: nothing matched, nothing counted.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Highest-scoring match, if any.
    pub fn best(&self) -> Option<&Match<'a>> {
        self.matches.first()
    }

    /// Display texts in rank order.
    pub fn items(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.matches.iter().map(|m| m.item)
    }
}
