//! Source Discovery
//!
//! This module expands the source wildcard into an explicit file list so the
//! compiler can be launched without a shell doing the globbing. An empty
//! match is an error: handing the compiler a literal `*.cpp` would only fail
//! later with a worse message.

use regex::Regex;
use std::path::{Path, PathBuf};

use crate::error::BuildError;

/// Expand a single-directory wildcard pattern into a sorted file list.
///
/// The pattern is a directory part followed by a file-name wildcard, e.g.
/// `../editorSrc/*.cpp`. `*` matches any sequence, `?` any single character;
/// matching is on file names only, directories are never recursed into.
///
/// # Errors
/// [`BuildError::NoSources`] when the directory is unreadable or nothing
/// matches.
pub fn expand(pattern: &str) -> Result<Vec<PathBuf>, BuildError> {
    let path = Path::new(pattern);
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name_pattern = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(pattern);

    let matcher = wildcard_regex(name_pattern);

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("Source directory {} is not readable: {}", dir.display(), err);
            return Err(BuildError::no_sources(pattern));
        }
    };

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let entry_path = entry.path();
        if !entry_path.is_file() {
            continue;
        }
        if let Some(name) = entry_path.file_name().and_then(|name| name.to_str()) {
            if matcher.is_match(name) {
                files.push(entry_path);
            }
        }
    }

    if files.is_empty() {
        return Err(BuildError::no_sources(pattern));
    }

    // Deterministic compile order regardless of directory iteration order
    files.sort();
    log::debug!("{} source files match {}", files.len(), pattern);
    Ok(files)
}

/// Translate a file-name wildcard into an anchored regex, escaping every
/// literal segment so `*.cpp` cannot match `Spritecpp`.
fn wildcard_regex(pattern: &str) -> Regex {
    let mut regex_pattern = String::from("^");
    let mut literal = String::new();
    for ch in pattern.chars() {
        match ch {
            '*' | '?' => {
                if !literal.is_empty() {
                    regex_pattern.push_str(&regex::escape(&literal));
                    literal.clear();
                }
                regex_pattern.push_str(if ch == '*' { ".*" } else { "." });
            }
            other => literal.push(other),
        }
    }
    if !literal.is_empty() {
        regex_pattern.push_str(&regex::escape(&literal));
    }
    regex_pattern.push('$');

    // Built from escaped literals plus `.*` and `.` only, so it always parses
    Regex::new(&regex_pattern).expect("wildcard regex is always valid")
}
