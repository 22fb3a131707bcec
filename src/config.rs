// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring weights.
//!
//! `ScoringConfig` is plain data: `Copy`, shared read-only by every scoring call in a
//! ranking pass. It deserializes from JSON with every field optional, so a config file
//! only has to name what it changes:
//!
//! ```json
//! { "boundary_bonus": 25, "length_penalty": 2 }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::scoring::{
    DEFAULT_BASE_SCORE, DEFAULT_BOUNDARY_BONUS, DEFAULT_CONSECUTIVE_BONUS, DEFAULT_EXACT_BONUS,
    DEFAULT_LENGTH_PENALTY, DEFAULT_MAX_SEQ_BONUS, DEFAULT_PREFIX_BONUS, DEFAULT_UPPERCASE_BONUS,
};

/// Named integer weights controlling the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Points for every matched query character.
    pub base_score: i64,
    /// Added when the match starts the candidate or follows `_ . - /`.
    pub boundary_bonus: i64,
    /// Multiplied by the current streak length on adjacent matches.
    pub consecutive_bonus: i64,
    /// Multiplied by the longest streak once the query is consumed.
    pub max_seq_bonus: i64,
    /// Per code point of candidate left over after the query.
    pub length_penalty: i64,
    /// Fixed score when the folded candidate equals the folded query.
    pub exact_bonus: i64,
    /// Fixed score when the folded candidate starts with the folded query.
    pub prefix_bonus: i64,
    /// Added when the original character at a matched position is uppercase.
    pub uppercase_bonus: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: DEFAULT_BASE_SCORE,
            boundary_bonus: DEFAULT_BOUNDARY_BONUS,
            consecutive_bonus: DEFAULT_CONSECUTIVE_BONUS,
            max_seq_bonus: DEFAULT_MAX_SEQ_BONUS,
            length_penalty: DEFAULT_LENGTH_PENALTY,
            exact_bonus: DEFAULT_EXACT_BONUS,
            prefix_bonus: DEFAULT_PREFIX_BONUS,
            uppercase_bonus: DEFAULT_UPPERCASE_BONUS,
        }
    }
}

/// Why a config was refused by [`ScoringConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A weight that must not be negative was.
    Negative { field: &'static str, value: i64 },
    /// Exact matches would not outrank prefix matches.
    FastPathOrder { exact_bonus: i64, prefix_bonus: i64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Negative { field, value } => {
                write!(f, "{} must be non-negative, got {}", field, value)
            }
            ConfigError::FastPathOrder {
                exact_bonus,
                prefix_bonus,
            } => write!(
                f,
                "exact_bonus ({}) must be greater than prefix_bonus ({})",
                exact_bonus, prefix_bonus
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ScoringConfig {
    /// Parse a (possibly partial) JSON config. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> io::Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid scoring config: {}", e),
            )
        })
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("could not read scoring config {}: {}", path.display(), e),
            )
        })?;
        Self::from_json_str(&raw)
    }

    /// Check the weights make sense together.
    ///
    /// Ranking itself never calls this: any config produces *some* ordering. It's
    /// for callers loading weights from outside, where a typo can silently invert
    /// exact and prefix matches.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("base_score", self.base_score),
            ("boundary_bonus", self.boundary_bonus),
            ("consecutive_bonus", self.consecutive_bonus),
            ("max_seq_bonus", self.max_seq_bonus),
            ("length_penalty", self.length_penalty),
            ("exact_bonus", self.exact_bonus),
            ("prefix_bonus", self.prefix_bonus),
            ("uppercase_bonus", self.uppercase_bonus),
        ];
        for (field, value) in fields {
            if value < 0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.exact_bonus <= self.prefix_bonus {
            return Err(ConfigError::FastPathOrder {
                exact_bonus: self.exact_bonus,
                prefix_bonus: self.prefix_bonus,
            });
        }
        Ok(())
    }
}
