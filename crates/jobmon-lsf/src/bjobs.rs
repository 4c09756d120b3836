//! Query active LSF jobs via bjobs.

use crate::types::LsfJobState;
use jobmon_core::{JobStatus, JobStatusSnapshot, MonitorError, ToJobStatus};
use jobmon_parsers::{data_lines, run_command, split_whitespace_min};
use tokio::process::Command;

/// Status command; run without arguments so the default layout is printed.
pub const BJOBS_COMMAND: &str = "bjobs";

/// Default bjobs layout:
/// JOBID USER STAT QUEUE FROM_HOST EXEC_HOST JOB_NAME SUBMIT_TIME
const MIN_TOKENS: usize = 8;
const JOB_ID_COLUMN: usize = 0;
const STAT_COLUMN: usize = 2;

/// Map a STAT token to the canonical status.
pub fn parse_state(token: &str) -> Result<JobStatus, MonitorError> {
    LsfJobState::from_token(token)
        .map(|state| state.to_job_status())
        .ok_or_else(|| MonitorError::Parse(format!("unsupported status code: {token}")))
}

/// Parse a single line of bjobs output into job id and status.
fn parse_bjobs_line(line: &str) -> Result<(String, JobStatus), MonitorError> {
    let tokens = split_whitespace_min(line, MIN_TOKENS).map_err(|e| {
        tracing::debug!("{e}");
        MonitorError::Parse(format!("unable to handle '{BJOBS_COMMAND}' result: {line}"))
    })?;

    let status = parse_state(tokens[STAT_COLUMN])?;
    Ok((tokens[JOB_ID_COLUMN].to_string(), status))
}

/// Parse full bjobs output, header line included.
pub fn parse_bjobs(output: &str) -> Result<JobStatusSnapshot, MonitorError> {
    let mut snapshot = JobStatusSnapshot::new();
    for line in data_lines(output) {
        let (job_id, status) = parse_bjobs_line(line)?;
        snapshot.insert(job_id, status);
    }
    tracing::debug!(jobs = snapshot.len(), "parsed bjobs output");
    Ok(snapshot)
}

/// The bjobs invocation: no arguments, default layout.
pub fn bjobs_command() -> Command {
    Command::new(BJOBS_COMMAND)
}

/// Query active jobs with bjobs.
pub async fn query_bjobs() -> Result<String, MonitorError> {
    let mut cmd = bjobs_command();
    Ok(run_command(&mut cmd, BJOBS_COMMAND).await?)
}
