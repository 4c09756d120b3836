//! Per-job log file lookup.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io;

/// Extension of the stdout log written for every submitted job.
pub const LOG_FILE_EXTENSION: &str = "out";

/// Path of the log file for `job_name` inside `log_dir`.
pub fn log_file_path(log_dir: &Utf8Path, job_name: &str) -> Utf8PathBuf {
    log_dir.join(format!("{job_name}.{LOG_FILE_EXTENSION}"))
}

/// Read a log file, replacing invalid UTF-8 sequences.
pub fn read_log_lossy(path: &Utf8Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
