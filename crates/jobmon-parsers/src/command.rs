//! Command execution utilities for scheduler queries.

use thiserror::Error;
use tokio::process::Command;

/// Error type for command execution.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to execute {command}: {error}")]
    Execution { command: String, error: String },
    #[error("Command {command} failed: {stderr}")]
    Failed { command: String, stderr: String },
}

impl CommandError {
    /// Name of the command that failed.
    pub fn command(&self) -> &str {
        match self {
            Self::Execution { command, .. } | Self::Failed { command, .. } => command,
        }
    }
}

/// Execute a command and return stdout as a string.
///
/// A non-zero exit status is an error carrying the command's stderr.
/// Output is decoded lossily so stray bytes never abort a query.
pub async fn run_command(cmd: &mut Command, name: &str) -> Result<String, CommandError> {
    tracing::debug!(command = name, "running status command");

    let output = cmd.output().await.map_err(|e| CommandError::Execution {
        command: name.to_string(),
        error: e.to_string(),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CommandError::Failed {
            command: name.to_string(),
            stderr: stderr.to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
