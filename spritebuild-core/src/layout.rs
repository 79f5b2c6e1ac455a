//! Project Layout
//!
//! This module provides the optional per-project override file for the
//! values the build is otherwise hardwired to: the source location, the
//! output name and the compiler invocation. When no file is present every
//! value falls back to the embedded defaults, so a bare invocation needs no
//! configuration at all.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{DEFAULT_EXECUTABLE, DEFAULT_SOURCES};

/// File name looked up in the working directory when no explicit path is given.
pub const LAYOUT_FILE: &str = "spritebuild.json";

/// Per-project layout overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLayout {
    /// Wildcard path naming the source files
    pub sources: String,
    /// Output executable name (`.exe` is appended on Windows)
    pub executable: String,
    /// Compiler invocation override; `None` keeps the platform default
    pub compiler: Option<String>,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            sources: DEFAULT_SOURCES.to_string(),
            executable: DEFAULT_EXECUTABLE.to_string(),
            compiler: None,
        }
    }
}

impl ProjectLayout {
    /// Load `spritebuild.json` from the working directory, falling back to
    /// the defaults when the file does not exist.
    pub fn load_or_default() -> Result<Self> {
        let path = Path::new(LAYOUT_FILE);
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load the layout from a specific file. Unlike [`Self::load_or_default`]
    /// a missing file is an error here, since the caller asked for it.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout file: {}", path.display()))?;
        let layout = Self::from_json(&content)
            .with_context(|| format!("Failed to parse layout file: {}", path.display()))?;
        log::debug!("Loaded project layout from {}", path.display());
        Ok(layout)
    }

    /// Parse a layout from its JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse project layout")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_layout() {
        let layout = ProjectLayout::from_json(
            r#"{
    "sources": "../src/*.cpp",
    "executable": "editor",
    "compiler": "g++ -std=c++20"
}"#,
        )
        .expect("layout should parse");

        assert_eq!(layout.sources, "../src/*.cpp");
        assert_eq!(layout.executable, "editor");
        assert_eq!(layout.compiler.as_deref(), Some("g++ -std=c++20"));
    }

    #[test]
    fn test_partial_layout_keeps_defaults() {
        let layout = ProjectLayout::from_json(r#"{ "executable": "editor" }"#)
            .expect("layout should parse");

        assert_eq!(layout.executable, "editor");
        assert_eq!(layout.sources, DEFAULT_SOURCES);
        assert!(layout.compiler.is_none());
    }

    #[test]
    fn test_malformed_layout_is_an_error() {
        assert!(ProjectLayout::from_json("not json").is_err());
    }
}
