use anyhow::{Context, Result};
use clap::Parser;
use std::time::Instant;

use fuzzrank::loader::{load_lines, load_methods};
use fuzzrank::testing::service_methods;
use fuzzrank::{rank_preprocessed, score_with_kind, Corpus, Ranking, ScoringConfig};

mod cli;
use cli::display::{
    faint, kind_label, pad_left, pad_right, paint, row, score_value, section_bot,
    section_top, timing_ms, truncate, Role,
};
use cli::{clamp_limit, Cli, Commands, InputFormat};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Rank {
            input,
            format,
            query,
            limit,
            config,
            json,
        } => run_rank(&input, format, &query, clamp_limit(limit), config.as_deref(), json),
        Commands::Score {
            query,
            candidate,
            config,
        } => run_score(&query, &candidate, config.as_deref()),
        Commands::Bench {
            count,
            query,
            limit,
            iterations,
        } => run_bench(count, &query, limit, iterations),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Load weights from `path`, or fall back to the defaults.
fn load_config(path: Option<&str>) -> Result<ScoringConfig> {
    let Some(path) = path else {
        return Ok(ScoringConfig::default());
    };
    let config = ScoringConfig::from_path(path)?;
    config
        .validate()
        .with_context(|| format!("rejected scoring config {}", path))?;
    Ok(config)
}

fn run_rank(
    input: &str,
    format: InputFormat,
    query: &str,
    limit: usize,
    config: Option<&str>,
    json: bool,
) -> Result<()> {
    let config = load_config(config)?;

    let start = Instant::now();
    let raw = match format {
        InputFormat::Methods => load_methods(input),
        InputFormat::Lines => load_lines(input),
    }
    .with_context(|| format!("failed to load candidates from {}", input))?;
    let load_ms = start.elapsed().as_secs_f64() * 1000.0;

    let start = Instant::now();
    let corpus = Corpus::with_config(&raw, config);
    let preprocess_ms = start.elapsed().as_secs_f64() * 1000.0;

    let start = Instant::now();
    let ranking = corpus.rank(query, limit);
    let rank_ms = start.elapsed().as_secs_f64() * 1000.0;

    if json {
        let out = serde_json::to_string_pretty(&ranking).context("failed to serialize ranking")?;
        println!("{}", out);
        return Ok(());
    }

    eprintln!(
        "Loaded {} candidates from {} in {:.3} ms (preprocess {:.3} ms)",
        corpus.len(),
        input,
        load_ms,
        preprocess_ms
    );
    print_ranking(query, &ranking, rank_ms);
    Ok(())
}

fn print_ranking(query: &str, ranking: &Ranking<'_>, rank_ms: f64) {
    section_top(&format!("RESULTS for \"{}\"", truncate(query, 40)));
    row(&format!(
        " {} matches in {} ms",
        paint(Role::Heading, &ranking.total.to_string()),
        timing_ms(rank_ms).trim_start()
    ));
    if ranking.is_empty() {
        row(&faint(Role::Weak, " (no matches)"));
    }
    for (i, m) in ranking.matches.iter().enumerate() {
        row(&format!(
            " {} {} {} {}",
            pad_left(&format!("{}.", i + 1), 4),
            pad_right(&truncate(m.item, 48), 48),
            score_value(m.score, m.kind),
            pad_right(&kind_label(m.kind), 6),
        ));
    }
    section_bot();
}

fn run_score(query: &str, candidate: &str, config: Option<&str>) -> Result<()> {
    let config = load_config(config)?;
    match score_with_kind(query, candidate, &config) {
        Some((kind, s)) => {
            println!("{} {}", score_value(s, kind).trim_start(), kind_label(kind));
        }
        None => println!("{}", faint(Role::Weak, "rejected")),
    }
    Ok(())
}

fn run_bench(count: usize, query: &str, limit: usize, iterations: u32) -> Result<()> {
    let iterations = iterations.max(1);
    let config = ScoringConfig::default();

    eprintln!("Generating {} synthetic candidates...", count);
    let raw = service_methods(count);

    let start = Instant::now();
    let corpus = Corpus::with_config(&raw, config);
    let preprocess_ms = start.elapsed().as_secs_f64() * 1000.0;

    let mut last = Ranking::empty();
    let start = Instant::now();
    for _ in 0..iterations {
        last = rank_preprocessed(query, corpus.candidates(), limit, &config);
    }
    let rank_ms = start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations);

    section_top("BENCH");
    row(&format!(" candidates   {:>12}", corpus.len()));
    row(&format!(" preprocess   {} ms", timing_ms(preprocess_ms)));
    row(&format!(
        " rank (avg)   {} ms over {} runs",
        timing_ms(rank_ms),
        iterations
    ));
    row(&format!(" total        {:>12}", last.total));
    section_bot();
    print_ranking(query, &last, rank_ms);
    Ok(())
}
