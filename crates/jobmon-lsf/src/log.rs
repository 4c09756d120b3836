//! Resolve finished LSF jobs from their output logs.

use camino::Utf8Path;
use std::io;
use jobmon_core::{JobStatus, MonitorError, ResolutionResult, ResolvedSet, WatchList};
use jobmon_parsers::{log_file_path, read_log_lossy};

/// Line LSF appends to the job report when the job exits with status 0.
pub const SUCCESS_MARKER: &str = "Successfully completed.";

/// Resolve each job from `<log_dir>/<job_name>.out`.
///
/// A missing log means the job was dropped. A log carrying the LSF success
/// marker is done, any other log is failed.
pub fn resolve_from_log(
    log_dir: &Utf8Path,
    unresolved: &WatchList,
) -> Result<ResolvedSet, MonitorError> {
    resolve_with_reader(log_dir, unresolved, read_log_lossy)
}

/// Like [`resolve_from_log`], reading existing logs through `read_log`.
fn resolve_with_reader<F>(
    log_dir: &Utf8Path,
    unresolved: &WatchList,
    read_log: F,
) -> Result<ResolvedSet, MonitorError>
where
    F: Fn(&Utf8Path) -> io::Result<String>,
{
    let mut resolved = ResolvedSet::new();

    for (job_id, job_name) in unresolved.iter() {
        let path = log_file_path(log_dir, job_name);
        tracing::debug!(job_id, %path, "checking job log");

        let result = if !path.is_file() {
            ResolutionResult::new(job_name.as_str(), JobStatus::Dropped)
                .with_detail(format!("log file for job does not exist: {path}"))
        } else {
            let content = read_log(&path).map_err(|source| MonitorError::Io {
                path: path.clone(),
                source,
            })?;
            if content.contains(SUCCESS_MARKER) {
                ResolutionResult::new(job_name.as_str(), JobStatus::Done)
            } else {
                ResolutionResult::new(job_name.as_str(), JobStatus::Failed)
                    .with_detail(format!("Check log file for details: {path}"))
            }
        };
        resolved.insert(job_id, result);
    }

    Ok(resolved)
}
