//! SLURM scheduler backend.

use crate::squeue::{self, SqueueLayout};
use crate::log;
use jobmon_core::{
    BackendConfig, JobStatusSnapshot, MonitorError, ResolvedSet, SchedulerBackend, SchedulerKind,
    WatchList,
};

/// SLURM backend: per-user squeue listing and existence-based log fallback.
#[derive(Debug, Clone)]
pub struct SlurmBackend {
    config: BackendConfig,
    user: String,
    layout: SqueueLayout,
}

impl SlurmBackend {
    /// Create a backend for the configured user.
    ///
    /// Fails when no user identity is configured.
    pub fn new(config: BackendConfig, layout: SqueueLayout) -> Result<Self, MonitorError> {
        let user = config.require_user()?.to_string();
        Ok(Self {
            config,
            user,
            layout,
        })
    }

    /// Backend for a configuration, picking the layout from its scheduler kind.
    pub fn from_config(config: BackendConfig) -> Result<Self, MonitorError> {
        let layout = match config.scheduler {
            SchedulerKind::SlurmAlt => SqueueLayout::Alternate,
            _ => SqueueLayout::Standard,
        };
        Self::new(config, layout)
    }

    pub fn layout(&self) -> SqueueLayout {
        self.layout
    }

    pub fn user(&self) -> &str {
        &self.user
    }
}

impl SchedulerBackend for SlurmBackend {
    async fn query(&self) -> Result<String, MonitorError> {
        squeue::query_squeue(&self.user).await
    }

    fn parse(&self, raw: &str) -> Result<JobStatusSnapshot, MonitorError> {
        squeue::parse_squeue(raw, self.layout)
    }

    fn resolve_from_log(&self, unresolved: &WatchList) -> Result<ResolvedSet, MonitorError> {
        if unresolved.is_empty() {
            return Ok(ResolvedSet::new());
        }
        Ok(log::resolve_from_log(
            self.config.require_log_dir()?,
            unresolved,
        ))
    }
}
