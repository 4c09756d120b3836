//! SLURM job states.

use jobmon_core::{JobStatus, ToJobStatus};

/// SLURM job state, from the compact codes printed by squeue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlurmJobState {
    /// R
    Running,
    /// CG
    Completing,
    /// SO
    StageOut,
    /// CF
    Configuring,
    /// PD
    Pending,
    /// RD
    ResvDelHold,
    /// RF
    RequeueFed,
    /// RH
    RequeueHold,
    /// RQ
    Requeued,
    /// RS
    Resizing,
    /// RV
    Revoked,
    /// CD
    Completed,
    /// SE
    SpecialExit,
    /// BF
    BootFail,
    /// DL
    Deadline,
    /// F
    Failed,
    /// NF
    NodeFail,
    /// OOM
    OutOfMemory,
    /// TO
    Timeout,
    /// CA
    Cancelled,
    /// PR
    Preempted,
    /// SI
    Signaling,
    /// ST
    Stopped,
    /// S
    Suspended,
}

impl SlurmJobState {
    /// Map a compact state code. Matching is case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        let state = match token {
            "R" => Self::Running,
            "CG" => Self::Completing,
            "SO" => Self::StageOut,
            "CF" => Self::Configuring,
            "PD" => Self::Pending,
            "RD" => Self::ResvDelHold,
            "RF" => Self::RequeueFed,
            "RH" => Self::RequeueHold,
            "RQ" => Self::Requeued,
            "RS" => Self::Resizing,
            "RV" => Self::Revoked,
            "CD" => Self::Completed,
            "SE" => Self::SpecialExit,
            "BF" => Self::BootFail,
            "DL" => Self::Deadline,
            "F" => Self::Failed,
            "NF" => Self::NodeFail,
            "OOM" => Self::OutOfMemory,
            "TO" => Self::Timeout,
            "CA" => Self::Cancelled,
            "PR" => Self::Preempted,
            "SI" => Self::Signaling,
            "ST" => Self::Stopped,
            "S" => Self::Suspended,
            _ => return None,
        };
        Some(state)
    }
}

impl ToJobStatus for SlurmJobState {
    fn to_job_status(&self) -> JobStatus {
        match self {
            Self::Running | Self::Completing | Self::StageOut => JobStatus::Running,
            Self::Configuring
            | Self::Pending
            | Self::ResvDelHold
            | Self::RequeueFed
            | Self::RequeueHold
            | Self::Requeued
            | Self::Resizing
            | Self::Revoked => JobStatus::Scheduled,
            Self::Completed | Self::SpecialExit => JobStatus::Done,
            Self::BootFail
            | Self::Deadline
            | Self::Failed
            | Self::NodeFail
            | Self::OutOfMemory
            | Self::Timeout => JobStatus::Failed,
            Self::Cancelled
            | Self::Preempted
            | Self::Signaling
            | Self::Stopped
            | Self::Suspended => JobStatus::Dropped,
        }
    }
}
