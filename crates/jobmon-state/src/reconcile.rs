//! Merge the live snapshot with log fallback results.

use jobmon_core::{
    JobStatusSnapshot, MonitorError, ResolutionResult, ResolvedSet, SchedulerBackend, WatchList,
};

/// Split the watch list into jobs the scheduler still reports and jobs that
/// need log fallback.
pub fn partition(watch: &WatchList, snapshot: &JobStatusSnapshot) -> (ResolvedSet, WatchList) {
    let mut resolved = ResolvedSet::new();
    let mut check_log = WatchList::new();

    for (job_id, job_name) in watch.iter() {
        match snapshot.get(job_id) {
            Some(&status) => {
                resolved.insert(job_id, ResolutionResult::new(job_name.as_str(), status));
            }
            None => {
                check_log.insert(job_id, job_name.clone());
            }
        }
    }

    (resolved, check_log)
}

/// Union of live and log results. A log result replaces a live one.
pub fn merge(mut resolved: ResolvedSet, from_log: ResolvedSet) -> ResolvedSet {
    for (job_id, result) in from_log {
        if resolved.contains_key(&job_id) {
            tracing::warn!(%job_id, "job resolved both live and from log; keeping log result");
        }
        resolved.insert(job_id, result);
    }
    resolved
}

/// Resolve every watched job, using the backend's log fallback for jobs
/// missing from the snapshot.
pub fn reconcile<B: SchedulerBackend>(
    backend: &B,
    watch: &WatchList,
    snapshot: &JobStatusSnapshot,
) -> Result<ResolvedSet, MonitorError> {
    let (resolved, check_log) = partition(watch, snapshot);
    tracing::debug!(
        live = resolved.len(),
        fallback = check_log.len(),
        "partitioned watch list"
    );

    let from_log = backend.resolve_from_log(&check_log)?;
    Ok(merge(resolved, from_log))
}
