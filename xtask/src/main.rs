//! Custom cargo commands for fuzzrank.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests (default and no-default features)
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Weight constants that README.md documents and must agree with the code.
const WEIGHTS: &[(&str, &str)] = &[
    ("DEFAULT_BASE_SCORE", "base_score"),
    ("DEFAULT_BOUNDARY_BONUS", "boundary_bonus"),
    ("DEFAULT_CONSECUTIVE_BONUS", "consecutive_bonus"),
    ("DEFAULT_MAX_SEQ_BONUS", "max_seq_bonus"),
    ("DEFAULT_LENGTH_PENALTY", "length_penalty"),
    ("DEFAULT_EXACT_BONUS", "exact_bonus"),
    ("DEFAULT_PREFIX_BONUS", "prefix_bonus"),
    ("DEFAULT_UPPERCASE_BONUS", "uppercase_bonus"),
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + tests + clippy + weight docs)
  test      Run all Rust tests, with and without the parallel feature
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("fuzzrank Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Verifying documented weights match the code...");
    verify_constants()?;
    println!("✓ Weights aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests under both feature sets
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Minimum number of `INVARIANT:` comments expected under src/.
const MIN_INVARIANT_MARKERS: usize = 5;

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let mut found = Vec::new();
    collect_markers(&root.join("src"), &mut found)?;

    for (file, line) in &found {
        println!("  {}:{}", file.strip_prefix(&root).unwrap_or(file).display(), line);
    }
    if found.len() < MIN_INVARIANT_MARKERS {
        bail!(
            "Expected at least {} INVARIANT markers, found {}. Someone may have removed safety comments!",
            MIN_INVARIANT_MARKERS,
            found.len()
        );
    }

    Ok(())
}

fn collect_markers(dir: &Path, found: &mut Vec<(PathBuf, usize)>) -> Result<()> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            collect_markers(&path, found)?;
        } else if path.extension().is_some_and(|e| e == "rs") {
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            for (i, line) in source.lines().enumerate() {
                if line.contains("INVARIANT:") {
                    found.push((path.clone(), i + 1));
                }
            }
        }
    }
    Ok(())
}

/// Compare `pub const DEFAULT_*` in scoring/core.rs with the README weights table.
fn verify_constants() -> Result<()> {
    let root = project_root()?;

    let core_rs = std::fs::read_to_string(root.join("src/scoring/core.rs"))
        .context("Failed to read src/scoring/core.rs")?;
    let readme = std::fs::read_to_string(root.join("README.md"))
        .context("Failed to read README.md")?;

    let code = extract_rust_constants(&core_rs);
    let docs = extract_readme_weights(&readme);

    for (constant, field) in WEIGHTS {
        let Some(&in_code) = code.get(*constant) else {
            bail!("{} not found in src/scoring/core.rs", constant);
        };
        let Some(&in_docs) = docs.get(*field) else {
            bail!("`{}` missing from the README weights table", field);
        };
        if in_code != in_docs {
            bail!(
                "{} = {} in code but README documents `{}` = {}",
                constant, in_code, field, in_docs
            );
        }
    }

    Ok(())
}

fn extract_rust_constants(content: &str) -> BTreeMap<String, i64> {
    // Look for "pub const DEFAULT_BASE_SCORE: i64 = 10;"
    let mut out = BTreeMap::new();
    for line in content.lines() {
        let Some(rest) = line.trim().strip_prefix("pub const ") else {
            continue;
        };
        let Some((name, value)) = rest.split_once(": i64 =") else {
            continue;
        };
        let value = value.trim().trim_end_matches(';').replace('_', "");
        if let Ok(n) = value.parse::<i64>() {
            out.insert(name.trim().to_string(), n);
        }
    }
    out
}

fn extract_readme_weights(content: &str) -> BTreeMap<String, i64> {
    // Look for "| `base_score` | 10 | ..."
    let mut out = BTreeMap::new();
    for line in content.lines() {
        let cells: Vec<&str> = line.split('|').map(str::trim).collect();
        if cells.len() < 3 {
            continue;
        }
        let field = cells[1].trim_matches('`');
        if let Ok(n) = cells[2].replace('_', "").replace(',', "").parse::<i64>() {
            out.insert(field.to_string(), n);
        }
    }
    out
}
