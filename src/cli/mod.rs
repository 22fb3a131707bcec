// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fuzzrank command-line interface.
//!
//! Three subcommands: `rank` to query a candidate file, `score` to inspect a
//! single query/candidate pair, and `bench` to time preprocessing and ranking over
//! a synthetic corpus.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "fuzzrank",
    about = "Fuzzy subsequence ranking for symbol and API names",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Shape of the candidate input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// JSON dump: {"methods": [{"name": "..."}]}
    Methods,
    /// One candidate per line
    Lines,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank candidates from a file against a query
    Rank {
        /// Candidate file
        #[arg(short, long)]
        input: String,

        /// Input file format
        #[arg(short, long, value_enum, default_value = "methods")]
        format: InputFormat,

        /// Search query
        #[arg(short, long)]
        query: String,

        /// Maximum number of results to return (values below 1 return nothing)
        #[arg(short, long, default_value = "10", allow_negative_numbers = true)]
        limit: i64,

        /// JSON file overriding scoring weights
        #[arg(short, long)]
        config: Option<String>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a single query against a single candidate
    Score {
        /// Search query
        query: String,

        /// Candidate string
        candidate: String,

        /// JSON file overriding scoring weights
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Time preprocessing and ranking over a synthetic corpus
    Bench {
        /// Number of synthetic candidates
        #[arg(short = 'n', long, default_value = "100000")]
        count: usize,

        /// Search query
        #[arg(short, long, default_value = "service.method_99")]
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Ranking passes to average over
        #[arg(long, default_value = "20")]
        iterations: u32,
    },
}

/// Clamp a signed CLI limit to the library's `usize`; anything below 1 means "nothing".
pub fn clamp_limit(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}
