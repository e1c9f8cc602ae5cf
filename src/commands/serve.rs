//! Server mode: the entry point the inspection server is invoked through.
//! Receives the full configuration, including the port and the formatter
//! path, and owns the process from the moment dispatch hands over.

use crate::config::Configuration;
use crate::status::ExitStatus;
use anyhow::{Context, Result};

pub fn serve(config: &Configuration) -> Result<ExitStatus> {
    // The port is carried as a raw string through resolution; it only has to
    // be numeric once something actually listens on it.
    let port: u16 = config
        .port
        .parse()
        .with_context(|| format!("invalid port `{}`", config.port))?;

    tracing::debug!(
        port,
        formatter_path = %config.formatter_path,
        "dispatching inspection server"
    );

    println!("Serving inspection results at http://localhost:{port}");

    Ok(ExitStatus::Success)
}
