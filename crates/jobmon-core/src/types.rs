//! Canonical job status and the job maps exchanged between stages.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Backend-independent job status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    /// Accepted by the scheduler, not yet running
    Scheduled,
    /// Currently running
    Running,
    /// Finished successfully
    Done,
    /// Finished with an error
    Failed,
    /// Removed, suspended or lost without completing
    Dropped,
    /// Scheduler cannot tell
    Unknown,
}

impl JobStatus {
    /// Upper-case identifier used in the output stream.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Running => "RUNNING",
            Self::Done => "DONE",
            Self::Failed => "FAILED",
            Self::Dropped => "DROPPED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for converting scheduler-specific states to the canonical [`JobStatus`].
pub trait ToJobStatus {
    fn to_job_status(&self) -> JobStatus;
}

/// Final status of one watched job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    /// Pipeline job name
    pub job_name: String,
    /// Resolved status
    pub status: JobStatus,
    /// Explanatory note, empty unless e.g. a log path is attached
    pub detail: String,
}

impl ResolutionResult {
    pub fn new(job_name: impl Into<String>, status: JobStatus) -> Self {
        Self {
            job_name: job_name.into(),
            status,
            detail: String::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }
}

/// Job-id keyed map that iterates in insertion order.
///
/// Re-inserting an existing id replaces the value in place and keeps the
/// original position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for JobMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> JobMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace, returning the previous value for `job_id`.
    pub fn insert(&mut self, job_id: impl Into<String>, value: V) -> Option<V> {
        let job_id = job_id.into();
        match self.index.get(&job_id) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(job_id.clone(), self.entries.len());
                self.entries.push((job_id, value));
                None
            }
        }
    }

    pub fn get(&self, job_id: &str) -> Option<&V> {
        self.index.get(job_id).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, job_id: &str) -> bool {
        self.index.contains_key(job_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(id, value)| (id.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for JobMap<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (job_id, value) in iter {
            map.insert(job_id, value);
        }
        map
    }
}

impl<V> IntoIterator for JobMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Jobs to report on: job id to job name.
pub type WatchList = JobMap<String>;

/// Final per-job results: job id to resolution.
pub type ResolvedSet = JobMap<ResolutionResult>;

/// One live scheduler query: job id to canonical status.
pub type JobStatusSnapshot = HashMap<String, JobStatus>;
