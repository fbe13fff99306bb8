use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::domain::AppError;
use crate::ports::CommandRunner;

/// Runs programs as child processes sharing the wizard's terminal.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<(), AppError> {
        let command_line =
            std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ");
        info!(command = %command_line, "running external command");

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| AppError::CommandFailed {
                command: command_line.clone(),
                details: format!("failed to spawn: {}", e),
            })?;

        debug!(command = %command_line, %status, "external command exited");
        if !status.success() {
            return Err(AppError::CommandFailed {
                command: command_line,
                details: status.to_string(),
            });
        }
        Ok(())
    }
}
