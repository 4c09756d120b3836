//! Shared parsing utilities for scheduler command output.
//!
//! This crate provides the pieces used by both jobmon-slurm and
//! jobmon-lsf: running the status command, walking its tabular output,
//! and locating per-job log files.

pub mod command;
pub mod logfile;

pub use command::{CommandError, run_command};
pub use logfile::{LOG_FILE_EXTENSION, log_file_path, read_log_lossy};

/// Iterate over the data lines of a status listing.
///
/// The first line is the column header and is skipped, as are empty lines.
/// Lines made only of whitespace are kept so that the caller rejects them.
pub fn data_lines(output: &str) -> impl Iterator<Item = &str> {
    output.split('\n').skip(1).filter(|line| !line.is_empty())
}

/// Split a line on whitespace and validate the token count.
pub fn split_whitespace_min(line: &str, min_tokens: usize) -> Result<Vec<&str>, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < min_tokens {
        return Err(format!(
            "Expected {} tokens, got {}: {}",
            min_tokens,
            tokens.len(),
            line
        ));
    }
    Ok(tokens)
}
