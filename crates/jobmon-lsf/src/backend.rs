//! LSF scheduler backend.

use crate::{bjobs, log};
use jobmon_core::{
    BackendConfig, JobStatusSnapshot, MonitorError, ResolvedSet, SchedulerBackend, WatchList,
};

/// LSF backend: bjobs listing and marker-based log fallback.
#[derive(Debug, Clone)]
pub struct LsfBackend {
    config: BackendConfig,
}

impl LsfBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }
}

impl SchedulerBackend for LsfBackend {
    async fn query(&self) -> Result<String, MonitorError> {
        bjobs::query_bjobs().await
    }

    fn parse(&self, raw: &str) -> Result<JobStatusSnapshot, MonitorError> {
        bjobs::parse_bjobs(raw)
    }

    fn resolve_from_log(&self, unresolved: &WatchList) -> Result<ResolvedSet, MonitorError> {
        if unresolved.is_empty() {
            return Ok(ResolvedSet::new());
        }
        log::resolve_from_log(self.config.require_log_dir()?, unresolved)
    }
}
