//! Toolchain Discovery
//!
//! This module resolves the configured compiler on PATH before anything is
//! launched, and can ask it for a version line. Resolving up front turns
//! "command not found" noise from the shell into a structured preflight
//! error.

use std::path::PathBuf;
use std::process::Command;

use crate::error::BuildError;

/// First token of a compiler invocation, i.e. the program to launch.
/// `clang++ -std=c++17` names the program `clang++`.
pub fn program(compiler_invocation: &str) -> &str {
    compiler_invocation
        .split_whitespace()
        .next()
        .unwrap_or(compiler_invocation)
}

/// Resolve the compiler binary on PATH.
pub fn locate(compiler_invocation: &str) -> Result<PathBuf, BuildError> {
    let program = program(compiler_invocation);
    let path = which::which(program).map_err(|_| BuildError::compiler_not_found(program))?;
    log::debug!("Resolved {} to {}", program, path.display());
    Ok(path)
}

/// Ask the compiler for its version line, if it can be launched at all.
pub fn probe_version(compiler_invocation: &str) -> Option<String> {
    let program = program(compiler_invocation);
    let output = Command::new(program).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout.lines().next().map(|line| line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_is_first_token() {
        assert_eq!(program("clang++ -std=c++17"), "clang++");
        assert_eq!(program("g++ -std=c++17"), "g++");
        assert_eq!(program("g++"), "g++");
    }

    #[test]
    fn test_locate_missing_compiler_errors() {
        let result = locate("definitely-not-a-real-compiler-binary -std=c++17");
        assert!(matches!(result, Err(BuildError::CompilerNotFound { .. })));
    }

    #[test]
    fn test_probe_missing_compiler_is_none() {
        assert!(probe_version("definitely-not-a-real-compiler-binary").is_none());
    }
}
