//! Backend selection.

use jobmon_core::{
    BackendConfig, JobStatusSnapshot, MonitorError, ResolvedSet, SchedulerBackend, SchedulerKind,
    WatchList,
};
use jobmon_lsf::LsfBackend;
use jobmon_slurm::SlurmBackend;

/// The backend chosen for this run.
#[derive(Debug, Clone)]
pub enum Scheduler {
    Lsf(LsfBackend),
    Slurm(SlurmBackend),
}

impl Scheduler {
    /// Build the backend named by the configuration.
    pub fn from_config(config: &BackendConfig) -> Result<Self, MonitorError> {
        let scheduler = match config.scheduler {
            SchedulerKind::Lsf => Self::Lsf(LsfBackend::new(config.clone())),
            SchedulerKind::Slurm | SchedulerKind::SlurmAlt => {
                Self::Slurm(SlurmBackend::from_config(config.clone())?)
            }
        };
        tracing::debug!(scheduler = %config.scheduler, "selected backend");
        Ok(scheduler)
    }
}

impl SchedulerBackend for Scheduler {
    async fn query(&self) -> Result<String, MonitorError> {
        match self {
            Self::Lsf(backend) => backend.query().await,
            Self::Slurm(backend) => backend.query().await,
        }
    }

    fn parse(&self, raw: &str) -> Result<JobStatusSnapshot, MonitorError> {
        match self {
            Self::Lsf(backend) => backend.parse(raw),
            Self::Slurm(backend) => backend.parse(raw),
        }
    }

    fn resolve_from_log(&self, unresolved: &WatchList) -> Result<ResolvedSet, MonitorError> {
        match self {
            Self::Lsf(backend) => backend.resolve_from_log(unresolved),
            Self::Slurm(backend) => backend.resolve_from_log(unresolved),
        }
    }
}
