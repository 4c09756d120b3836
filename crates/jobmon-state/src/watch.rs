//! Watch request parsing.

use jobmon_core::{MonitorError, WatchList};

/// Parse a space separated request of `<job_id>_<job_name>` tokens.
///
/// The first underscore splits id from name; the name may contain further
/// underscores. Repeated ids keep the last name.
pub fn parse_watch_list(request: &str) -> Result<WatchList, MonitorError> {
    let mut watch = WatchList::new();

    for token in request.split(' ').filter(|t| !t.is_empty()) {
        let (job_id, job_name) = token
            .split_once('_')
            .ok_or_else(|| MonitorError::Encoding(format!("Illegal ID encoding: {token}")))?;

        if let Some(previous) = watch.insert(job_id, job_name.to_string()) {
            tracing::warn!(job_id, previous = %previous, job_name, "duplicate job id in watch list");
        }
    }

    Ok(watch)
}
