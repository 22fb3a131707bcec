// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how a single candidate gets its number.
//!
//! The key rule is tier dominance. An exact match beats a prefix match, and a
//! prefix match beats any fuzzy subsequence match a sane query can produce. The
//! subsequence scan only decides the order *within* the fuzzy tier.

mod core;

pub use self::core::*;
