//! LSF job states.

use jobmon_core::{JobStatus, ToJobStatus};

/// LSF job status as printed in the STAT column of bjobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LsfJobState {
    /// PEND - Job is pending
    Pending,
    /// PROV - Job is waiting for a provisioned host
    Provisioning,
    /// WAIT - Chunk job member waiting to run
    Waiting,
    /// RUN - Job is running
    Running,
    /// DONE - Job completed successfully
    Done,
    /// EXIT - Job exited with non-zero status
    Exit,
    /// UNKWN - mbatchd lost contact with the execution host
    Unknown,
    /// PSUSP - Job suspended by user while pending
    UserSuspendedPending,
    /// USUSP - Job suspended by user while running
    UserSuspended,
    /// SSUSP - Job suspended by system
    SystemSuspended,
    /// ZOMBI - Job is zombie (killed but info not available)
    Zombie,
}

impl LsfJobState {
    /// Map a STAT token. Matching is case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        let state = match token {
            "PEND" => Self::Pending,
            "PROV" => Self::Provisioning,
            "WAIT" => Self::Waiting,
            "RUN" => Self::Running,
            "DONE" => Self::Done,
            "EXIT" => Self::Exit,
            "UNKWN" => Self::Unknown,
            "PSUSP" => Self::UserSuspendedPending,
            "USUSP" => Self::UserSuspended,
            "SSUSP" => Self::SystemSuspended,
            "ZOMBI" => Self::Zombie,
            _ => return None,
        };
        Some(state)
    }
}

impl ToJobStatus for LsfJobState {
    fn to_job_status(&self) -> JobStatus {
        match self {
            Self::Running => JobStatus::Running,
            Self::Pending | Self::Provisioning | Self::Waiting => JobStatus::Scheduled,
            Self::Done => JobStatus::Done,
            Self::Exit => JobStatus::Failed,
            Self::Unknown => JobStatus::Unknown,
            Self::UserSuspendedPending
            | Self::UserSuspended
            | Self::SystemSuspended
            | Self::Zombie => JobStatus::Dropped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(token: &str) -> Option<JobStatus> {
        LsfJobState::from_token(token).map(|s| s.to_job_status())
    }

    #[test]
    fn test_status_table() {
        assert_eq!(status("RUN"), Some(JobStatus::Running));

        assert_eq!(status("PEND"), Some(JobStatus::Scheduled));
        assert_eq!(status("PROV"), Some(JobStatus::Scheduled));
        assert_eq!(status("WAIT"), Some(JobStatus::Scheduled));

        assert_eq!(status("DONE"), Some(JobStatus::Done));
        assert_eq!(status("EXIT"), Some(JobStatus::Failed));
        assert_eq!(status("UNKWN"), Some(JobStatus::Unknown));

        assert_eq!(status("PSUSP"), Some(JobStatus::Dropped));
        assert_eq!(status("USUSP"), Some(JobStatus::Dropped));
        assert_eq!(status("SSUSP"), Some(JobStatus::Dropped));
        assert_eq!(status("ZOMBI"), Some(JobStatus::Dropped));
    }

    #[test]
    fn test_unmapped_tokens() {
        assert_eq!(LsfJobState::from_token("run"), None);
        assert_eq!(LsfJobState::from_token("R"), None);
        assert_eq!(LsfJobState::from_token(""), None);
    }
}
