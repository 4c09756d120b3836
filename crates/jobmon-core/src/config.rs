//! Run configuration, read once from the environment at startup.

use crate::error::MonitorError;
use camino::{Utf8Path, Utf8PathBuf};
use std::env::VarError;
use std::fmt;
use std::str::FromStr;

/// Selects the scheduler backend.
pub const SCHEDULER_VAR: &str = "SCHEDULER";
/// User whose jobs SLURM queries are scoped to.
pub const USER_VAR: &str = "MMS_USER";
/// Directory holding `<job_name>.out` logs.
pub const LOG_DIR_VAR: &str = "PM_LOG_DIR";

/// Supported batch schedulers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerKind {
    /// `LSF`
    Lsf,
    /// `SLURM`, standard squeue columns
    Slurm,
    /// `SLURM_2`, squeue with the extended column layout
    SlurmAlt,
}

impl SchedulerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lsf => "LSF",
            Self::Slurm => "SLURM",
            Self::SlurmAlt => "SLURM_2",
        }
    }
}

impl fmt::Display for SchedulerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchedulerKind {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LSF" => Ok(Self::Lsf),
            "SLURM" => Ok(Self::Slurm),
            "SLURM_2" => Ok(Self::SlurmAlt),
            other => Err(MonitorError::Configuration(format!(
                "Environment variable '{SCHEDULER_VAR}' invalid: {other}"
            ))),
        }
    }
}

/// Immutable configuration for one invocation.
///
/// Only the scheduler kind is validated up front. The user identity and the
/// log directory are checked by the components that need them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub scheduler: SchedulerKind,
    pub user: Option<String>,
    pub log_dir: Option<Utf8PathBuf>,
}

impl BackendConfig {
    /// Snapshot the process environment.
    pub fn from_env() -> Result<Self, MonitorError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Build from any key lookup with `std::env::var` semantics.
    ///
    /// A value that is not valid unicode is an error, never treated as unset.
    /// The user identity is only read for SLURM schedulers.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MonitorError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let scheduler = read_var(&lookup, SCHEDULER_VAR)?
            .ok_or_else(|| {
                MonitorError::Configuration(format!(
                    "Environment variable '{SCHEDULER_VAR}' is not set"
                ))
            })?
            .parse::<SchedulerKind>()?;

        let user = match scheduler {
            SchedulerKind::Lsf => None,
            SchedulerKind::Slurm | SchedulerKind::SlurmAlt => read_var(&lookup, USER_VAR)?,
        };

        Ok(Self {
            scheduler,
            user,
            log_dir: read_var(&lookup, LOG_DIR_VAR)?.map(Utf8PathBuf::from),
        })
    }

    /// User identity for scoped queries.
    pub fn require_user(&self) -> Result<&str, MonitorError> {
        self.user.as_deref().ok_or_else(|| {
            MonitorError::Configuration(format!("Missing environment variable '{USER_VAR}'"))
        })
    }

    /// Log directory, which must exist.
    pub fn require_log_dir(&self) -> Result<&Utf8Path, MonitorError> {
        let dir = self.log_dir.as_deref().ok_or_else(|| {
            MonitorError::Configuration(format!("Missing environment variable '{LOG_DIR_VAR}'"))
        })?;
        if !dir.is_dir() {
            return Err(MonitorError::Configuration(format!(
                "log directory does not exist: {dir}"
            )));
        }
        Ok(dir)
    }
}

fn read_var<F>(lookup: &F, key: &str) -> Result<Option<String>, MonitorError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(MonitorError::Configuration(format!(
            "Environment variable '{key}' is not valid unicode"
        ))),
    }
}
