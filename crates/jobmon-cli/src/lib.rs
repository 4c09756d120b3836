//! CLI argument parsing for jobmon.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "jobmon")]
#[command(version)]
#[command(about = "Report the status of watched batch jobs on LSF or SLURM")]
#[command(
    after_help = "Environment:\n  SCHEDULER   LSF, SLURM or SLURM_2 (required)\n  MMS_USER    user whose SLURM jobs are listed\n  PM_LOG_DIR  directory holding <job_name>.out logs\n  RUST_LOG    diagnostic log filter (default: warn)"
)]
pub struct Args {
    /// Watched jobs, each encoded as <job_id>_<job_name>
    #[arg(allow_hyphen_values = true)]
    pub jobs: Vec<String>,
}

impl Args {
    /// The watch request: all job arguments joined by single spaces.
    pub fn request(&self) -> String {
        self.jobs.join(" ")
    }
}
