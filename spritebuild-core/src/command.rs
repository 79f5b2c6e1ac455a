//! Compile Command
//!
//! This module turns a build configuration into a discrete-argument process
//! invocation. The field order matches the rendered command string, but the
//! source wildcard slot holds the expanded file list, and nothing is ever
//! re-joined for a shell to re-split.

use std::fmt;
use std::path::PathBuf;

use crate::config::BuildConfig;

/// A compiler invocation as a program plus ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileCommand {
    /// Program to launch (first token of the compiler invocation)
    pub program: String,
    /// Arguments in command-string field order
    pub args: Vec<String>,
}

impl CompileCommand {
    /// Build the invocation from a configuration and the expanded source list.
    ///
    /// Argument order: remaining compiler tokens, arguments, `-o` and output
    /// name, include directives, source files, libraries. Source paths are
    /// single arguments each, so paths with spaces survive.
    pub fn from_config(config: &BuildConfig, sources: &[PathBuf]) -> Self {
        let mut compiler_tokens = config.compiler.split_whitespace().map(str::to_string);
        let program = compiler_tokens
            .next()
            .unwrap_or_else(|| config.compiler.clone());

        let mut args: Vec<String> = compiler_tokens.collect();
        args.extend(config.arguments.split_whitespace().map(str::to_string));
        args.push("-o".to_string());
        args.push(config.executable.clone());
        args.extend(config.include_dirs.split_whitespace().map(str::to_string));
        args.extend(sources.iter().map(|path| path.to_string_lossy().into_owned()));
        args.extend(config.libraries.split_whitespace().map(str::to_string));

        Self { program, args }
    }
}

impl fmt::Display for CompileCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    #[test]
    fn test_output_flag_precedes_executable() {
        let config = BuildConfig::for_platform(&Platform::Linux);
        let command = CompileCommand::from_config(&config, &[]);

        let output_flag = command
            .args
            .iter()
            .position(|arg| arg == "-o")
            .expect("-o must be present");
        assert_eq!(command.args[output_flag + 1], "spriteEditor");
        assert_eq!(
            command.args.iter().filter(|arg| *arg == "-o").count(),
            1,
            "-o must appear exactly once"
        );
    }

    #[test]
    fn test_display_joins_with_single_spaces() {
        let command = CompileCommand {
            program: "clang++".to_string(),
            args: vec!["-std=c++17".to_string(), "-g".to_string()],
        };
        assert_eq!(command.to_string(), "clang++ -std=c++17 -g");
    }
}
