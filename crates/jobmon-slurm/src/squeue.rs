//! Query SLURM jobs via squeue.

use crate::types::SlurmJobState;
use jobmon_core::{JobStatus, JobStatusSnapshot, MonitorError, ToJobStatus};
use jobmon_parsers::{data_lines, run_command, split_whitespace_min};
use tokio::process::Command;

pub const SQUEUE_COMMAND: &str = "squeue";

const JOB_ID_COLUMN: usize = 0;

/// Column layout of the squeue listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqueueLayout {
    /// JOBID PARTITION NAME USER ST TIME NODES NODELIST(REASON)
    Standard,
    /// JOBID PARTITION QOS NAME USER NODE CPUS ST TIME TIME_LEFT PRIORITY NODELIST(REASON)
    Alternate,
}

impl SqueueLayout {
    /// Index of the ST column.
    pub fn status_column(&self) -> usize {
        match self {
            Self::Standard => 4,
            Self::Alternate => 7,
        }
    }

    /// Fewest tokens a data line may carry.
    ///
    /// Cancelled jobs can print an empty NODELIST, so the standard layout
    /// accepts seven tokens. The alternate layout needs the ST column.
    pub fn min_tokens(&self) -> usize {
        7.max(self.status_column() + 1)
    }
}

/// Map an ST token to the canonical status.
pub fn parse_state(token: &str) -> Result<JobStatus, MonitorError> {
    SlurmJobState::from_token(token)
        .map(|state| state.to_job_status())
        .ok_or_else(|| MonitorError::Parse(format!("unsupported status code: {token}")))
}

/// Parse a single line of squeue output into job id and status.
fn parse_squeue_line(line: &str, layout: SqueueLayout) -> Result<(String, JobStatus), MonitorError> {
    let tokens = split_whitespace_min(line, layout.min_tokens()).map_err(|e| {
        tracing::debug!("{e}");
        MonitorError::Parse(format!("unable to handle '{SQUEUE_COMMAND}' result: {line}"))
    })?;

    let status = parse_state(tokens[layout.status_column()])?;
    Ok((tokens[JOB_ID_COLUMN].to_string(), status))
}

/// Parse full squeue output, header line included.
pub fn parse_squeue(output: &str, layout: SqueueLayout) -> Result<JobStatusSnapshot, MonitorError> {
    let mut snapshot = JobStatusSnapshot::new();
    for line in data_lines(output) {
        let (job_id, status) = parse_squeue_line(line, layout)?;
        snapshot.insert(job_id, status);
    }
    tracing::debug!(jobs = snapshot.len(), ?layout, "parsed squeue output");
    Ok(snapshot)
}

/// The squeue invocation listing jobs of `user` in all states.
pub fn squeue_command(user: &str) -> Command {
    let mut cmd = Command::new(SQUEUE_COMMAND);
    cmd.arg(format!("--users={user}")).arg("--states=all");
    cmd
}

/// Query jobs of `user` in all states with squeue.
pub async fn query_squeue(user: &str) -> Result<String, MonitorError> {
    let mut cmd = squeue_command(user);
    Ok(run_command(&mut cmd, SQUEUE_COMMAND).await?)
}
