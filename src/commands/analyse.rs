//! One-shot analysis mode: the entry point the analysis engine is invoked
//! through. Dispatch hands the resolved configuration here at most once per
//! process; the engine owns the console output and the exit code from that
//! point on.

use crate::config::Configuration;
use crate::status::ExitStatus;
use anyhow::Result;

pub fn analyse(config: &Configuration) -> Result<ExitStatus> {
    tracing::debug!(
        formatter_path = %config.formatter_path,
        "dispatching one-shot analysis"
    );

    println!("Analysing the project. Messages are logged to the console.");

    Ok(ExitStatus::Success)
}
