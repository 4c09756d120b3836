//! Core types for jobmon.
//!
//! The canonical job status vocabulary, the job maps passed between
//! pipeline stages, run configuration, and the scheduler backend interface.

pub mod backend;
pub mod config;
pub mod error;
pub mod types;

pub use backend::SchedulerBackend;
pub use config::{BackendConfig, SchedulerKind};
pub use error::MonitorError;
pub use types::{
    JobMap, JobStatus, JobStatusSnapshot, ResolutionResult, ResolvedSet, ToJobStatus, WatchList,
};
