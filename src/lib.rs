//! Subsequence fuzzy scoring with bounded top-K ranking.
//!
//! Built for symbol and API search: method names like `messages.sendMessage`,
//! file paths, identifiers. A query matches a candidate when its characters appear
//! in order (case-insensitively); the score rewards word boundaries, adjacent runs,
//! and camelCase humps, and penalizes skipped and leftover characters.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ preprocess.rs │────▶│  scoring/    │────▶│   search/     │
//! │ (fold, build  │     │ (exact →     │     │ (bounded      │
//! │  Candidate)   │     │  prefix →    │     │  min-heap,    │
//! │               │     │  scan)       │     │  Ranking)     │
//! └───────────────┘     └──────────────┘     └───────────────┘
//!         │                    │                     │
//!         ▼                    ▼                     ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                      contracts.rs                       │
//! │   (aligned candidates, exact > prefix, well-formed      │
//! │    rankings - debug assertions + const asserts)         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! `loader` and the `fuzzrank` binary sit outside this picture: they turn files
//! into `Vec<String>` and never reach into the core.
//!
//! # Usage
//!
//! ```
//! use fuzzrank::{Corpus, ScoringConfig};
//!
//! let corpus = Corpus::new(&["messages.sendMessage", "users.sendMessage", "auth.signIn"]);
//! let ranking = corpus.rank("sndmsg", 10);
//!
//! assert_eq!(ranking.total, 2);
//! assert_eq!(ranking.best().unwrap().item, "users.sendMessage");
//! ```
//!
//! # Complexity
//!
//! | Step        | Time          | Space           |
//! |-------------|---------------|-----------------|
//! | Preprocess  | O(Σ len)      | O(Σ len)        |
//! | Rank        | O(Σ len + n log K) | O(K) beyond the corpus |

// Module declarations
pub mod config;
pub mod contracts;
pub mod loader;
mod preprocess;
mod scoring;
mod search;
pub mod testing;
mod types;

// Re-exports for public API
pub use config::{ConfigError, ScoringConfig};
pub use preprocess::{fold, fold_char, preprocess};
#[cfg(feature = "parallel")]
pub use preprocess::preprocess_parallel;
pub use scoring::{
    fast_path, is_boundary, scan_score, score, score_candidate, score_candidate_with_kind,
    score_with_kind, MatchKind, DEFAULT_BASE_SCORE, DEFAULT_BOUNDARY_BONUS,
    DEFAULT_CONSECUTIVE_BONUS, DEFAULT_EXACT_BONUS, DEFAULT_LENGTH_PENALTY, DEFAULT_MAX_SEQ_BONUS,
    DEFAULT_PREFIX_BONUS, DEFAULT_UPPERCASE_BONUS,
};
pub use search::{rank, rank_many, rank_preprocessed, Corpus, Scored, TopK};
pub use types::{Candidate, Match, Ranking};
