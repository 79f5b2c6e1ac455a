//! Error Types
//!
//! This module provides the structured error types for the build pipeline
//! using `thiserror`. Every preflight failure carries a suggestion line so
//! the message says what to do next, not just what went wrong.

use std::process::ExitStatus;
use thiserror::Error;

/// Build pipeline error.
#[derive(Error, Debug)]
pub enum BuildError {
    /// No configuration branch exists for the probed platform.
    ///
    /// Building refuses up front here: the fallback configuration has no
    /// include or library flags and the compile could only fail later.
    #[error("unsupported platform: {name}\nSuggestion: {suggestion}")]
    UnsupportedPlatform { name: String, suggestion: String },

    /// The configured compiler does not resolve on PATH.
    #[error("compiler not found: {program}\nSuggestion: {suggestion}")]
    CompilerNotFound { program: String, suggestion: String },

    /// The source wildcard matched no files.
    #[error("no source files match {pattern}\nSuggestion: {suggestion}")]
    NoSources { pattern: String, suggestion: String },

    /// The compiler process could not be started at all.
    #[error("failed to launch {program}: {source}\nSuggestion: {suggestion}")]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
        suggestion: String,
    },

    /// The compiler ran and exited with a non-success status.
    #[error("compiler exited with {status}")]
    CompilerFailed { status: ExitStatus },
}

impl BuildError {
    /// Create an unsupported-platform error for a probe value.
    pub fn unsupported_platform(name: impl Into<String>) -> Self {
        Self::UnsupportedPlatform {
            name: name.into(),
            suggestion: "Pass --platform Linux, Darwin or Windows, or add a configuration \
                         branch for this system."
                .to_string(),
        }
    }

    /// Create a compiler-not-found error for a program name.
    pub fn compiler_not_found(program: impl Into<String>) -> Self {
        Self::CompilerNotFound {
            program: program.into(),
            suggestion: "Install the compiler, or try g++ if you have trouble with clang++."
                .to_string(),
        }
    }

    /// Create a no-sources error for a wildcard pattern.
    pub fn no_sources(pattern: impl Into<String>) -> Self {
        Self::NoSources {
            pattern: pattern.into(),
            suggestion: "Check that the editor sources live where the configured wildcard points."
                .to_string(),
        }
    }

    /// Create a launch-failed error wrapping the I/O cause.
    pub fn launch_failed(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::LaunchFailed {
            program: program.into(),
            source,
            suggestion: "Check that the compiler is installed and executable.".to_string(),
        }
    }
}
