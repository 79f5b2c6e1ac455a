//! Compiler Execution
//!
//! This module launches the assembled compile command and waits for it. The
//! child inherits stdin/stdout/stderr, so compiler diagnostics stream to the
//! console exactly as they would from a shell. No retries, no timeout: the
//! compiler runs to completion or until the host kills it.

use std::process::Command;

use crate::command::CompileCommand;
use crate::error::BuildError;

/// Run the compiler to completion.
///
/// # Errors
/// [`BuildError::LaunchFailed`] when the process cannot be started, and
/// [`BuildError::CompilerFailed`] carrying the exit status when the compiler
/// ran but did not succeed.
pub fn run(command: &CompileCommand) -> Result<(), BuildError> {
    log::debug!("Launching {}", command);

    let status = Command::new(&command.program)
        .args(&command.args)
        .status()
        .map_err(|err| BuildError::launch_failed(&command.program, err))?;

    if !status.success() {
        return Err(BuildError::CompilerFailed { status });
    }

    log::info!("{} finished successfully", command.program);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_failure_is_reported() {
        let command = CompileCommand {
            program: "definitely-not-a-real-compiler-binary".to_string(),
            args: vec![],
        };
        let result = run(&command);
        assert!(matches!(result, Err(BuildError::LaunchFailed { .. })));
    }

    #[test]
    fn test_nonzero_exit_is_reported() {
        // `false` exists on every Unix test machine and always exits 1
        #[cfg(unix)]
        {
            let command = CompileCommand {
                program: "false".to_string(),
                args: vec![],
            };
            let result = run(&command);
            match result {
                Err(BuildError::CompilerFailed { status }) => {
                    assert_eq!(status.code(), Some(1));
                }
                other => panic!("expected CompilerFailed, got {:?}", other),
            }
        }
    }
}
