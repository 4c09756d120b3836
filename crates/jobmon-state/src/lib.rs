//! Job status resolution for jobmon.
//!
//! Turns the watch request into a watch list, merges the live scheduler
//! snapshot with log fallback results, and renders the result lines.

pub mod output;
pub mod reconcile;
pub mod scheduler;
pub mod watch;

pub use output::write_results;
pub use reconcile::{merge, partition, reconcile};
pub use scheduler::Scheduler;
pub use watch::parse_watch_list;
