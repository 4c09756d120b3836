//! Errors that end a monitor invocation.

use camino::Utf8PathBuf;
use jobmon_parsers::CommandError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    /// Missing or invalid environment setting.
    #[error("{0}")]
    Configuration(String),
    /// The status command could not be run or exited non-zero.
    #[error("Failed to request job status from {command}: {stderr}")]
    Query { command: String, stderr: String },
    /// Malformed scheduler output or an unmapped status token.
    #[error("{0}")]
    Parse(String),
    /// Malformed watch-list token.
    #[error("{0}")]
    Encoding(String),
    /// A job log exists but could not be read.
    #[error("Failed to read log file {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The result lines could not be written.
    #[error("Failed to write results: {0}")]
    Output(#[source] std::io::Error),
}

impl From<CommandError> for MonitorError {
    fn from(err: CommandError) -> Self {
        let command = err.command().to_string();
        let stderr = match err {
            CommandError::Execution { error, .. } => error,
            CommandError::Failed { stderr, .. } => stderr,
        };
        let stderr = stderr.trim_end().to_string();
        MonitorError::Query { command, stderr }
    }
}
