// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Getting candidate strings from the outside world.
//!
//! The ranking core never touches I/O. Everything fallible lives here and surfaces
//! as `io::Result` before a single candidate is scored. Two input shapes:
//!
//! - **methods**: a JSON API dump, `{"methods": [{"name": "users.getFullUser"}, ...]}`.
//!   Other fields on the document and on each method are ignored.
//! - **lines**: one candidate per line. Blank lines are skipped, CRLF is tolerated.

use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

#[derive(Deserialize)]
struct MethodEntry {
    name: String,
}

#[derive(Deserialize)]
struct MethodDump {
    methods: Vec<MethodEntry>,
}

fn open(path: &Path, what: &str) -> io::Result<File> {
    File::open(path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("could not open {} file {}: {}", what, path.display(), e),
        )
    })
}

/// Load method names from a JSON dump on disk.
pub fn load_methods(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let file = open(path.as_ref(), "methods")?;
    load_methods_from_reader(BufReader::new(file))
}

/// Load method names from any reader: a file, a response body, embedded bytes.
pub fn load_methods_from_reader<R: Read>(reader: R) -> io::Result<Vec<String>> {
    let dump: MethodDump = serde_json::from_reader(reader).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("failed to decode methods JSON: {}", e),
        )
    })?;
    Ok(dump.methods.into_iter().map(|m| m.name).collect())
}

/// Load a newline-delimited candidate list from disk.
pub fn load_lines(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let file = open(path.as_ref(), "candidate list")?;
    load_lines_from_reader(BufReader::new(file))
}

/// Load a newline-delimited candidate list from any buffered reader.
pub fn load_lines_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.trim().is_empty() {
            continue;
        }
        out.push(line.to_string());
    }
    Ok(out)
}
