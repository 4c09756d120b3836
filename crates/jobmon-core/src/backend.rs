//! Scheduler backend interface.

use crate::error::MonitorError;
use crate::types::{JobStatusSnapshot, ResolvedSet, WatchList};
use std::future::Future;

/// One batch scheduler: live query, output parsing, and log fallback.
pub trait SchedulerBackend {
    /// Run the scheduler's status command and return its stdout.
    fn query(&self) -> impl Future<Output = Result<String, MonitorError>> + Send;

    /// Parse status command output into a snapshot. The first line is a header.
    fn parse(&self, raw: &str) -> Result<JobStatusSnapshot, MonitorError>;

    /// Decide the status of jobs the scheduler no longer reports, from their logs.
    fn resolve_from_log(&self, unresolved: &WatchList) -> Result<ResolvedSet, MonitorError>;
}
