//! jobmon - report batch job status for the processing pipeline.

mod logging;
mod monitor;

use clap::Parser;
use jobmon_cli::Args;
use jobmon_core::BackendConfig;
use miette::{IntoDiagnostic, Result};
use std::io;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init().into_diagnostic()?;

    let config = BackendConfig::from_env().into_diagnostic()?;
    let mut stdout = io::stdout().lock();
    monitor::run(&config, &args.request(), &mut stdout)
        .await
        .into_diagnostic()?;

    Ok(())
}
