//! Resolve finished SLURM jobs from their output logs.

use camino::Utf8Path;
use jobmon_core::{JobStatus, ResolutionResult, ResolvedSet, WatchList};
use jobmon_parsers::log_file_path;

/// Resolve each job from the presence of `<log_dir>/<job_name>.out`.
///
/// SLURM logs carry no completion marker, so any existing log counts as done
/// and a missing one as dropped. Log contents are never read.
pub fn resolve_from_log(log_dir: &Utf8Path, unresolved: &WatchList) -> ResolvedSet {
    unresolved
        .iter()
        .map(|(job_id, job_name)| {
            let path = log_file_path(log_dir, job_name);
            tracing::debug!(job_id, %path, "checking job log");

            let result = if path.is_file() {
                ResolutionResult::new(job_name.as_str(), JobStatus::Done)
            } else {
                ResolutionResult::new(job_name.as_str(), JobStatus::Dropped)
                    .with_detail(format!("log file for job does not exist: {path}"))
            };
            (job_id, result)
        })
        .collect()
}
