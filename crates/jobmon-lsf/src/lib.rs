//! LSF integration for jobmon.
//!
//! Query job status via bjobs and fall back to job logs.

pub mod backend;
pub mod bjobs;
pub mod log;
pub mod types;

pub use backend::LsfBackend;
pub use bjobs::{bjobs_command, parse_bjobs, query_bjobs};
pub use log::{SUCCESS_MARKER, resolve_from_log};
pub use types::LsfJobState;
