//! SLURM integration for jobmon.
//!
//! Query job status via squeue and fall back to job logs.

pub mod backend;
pub mod log;
pub mod squeue;
pub mod types;

pub use backend::SlurmBackend;
pub use log::resolve_from_log;
pub use squeue::{SqueueLayout, parse_squeue, query_squeue, squeue_command};
pub use types::SlurmJobState;
