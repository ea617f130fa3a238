use std::{env, io};

use anyhow::{Context, Result};
use sez_core::SezConverter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod args;
mod output;

use args::{Cli, USAGE};

fn main() -> Result<()> {
    // stdout carries only the three result lines
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::from_tokens(env::args_os()).unwrap_or_else(|err| err.exit());
    let invocation = match cli.invocation() {
        Ok(invocation) => invocation,
        Err(err) if err.is_usage() => {
            debug!(%err, "printing usage");
            println!("{USAGE}");
            return Ok(());
        }
        Err(err) => return Err(err).context("failed to read ECEF coordinates"),
    };

    info!(
        observer = ?invocation.observer,
        target = ?invocation.target,
        "converting ECEF target to SEZ"
    );

    let converter = SezConverter::default();
    let solver = converter.solver();
    debug!(
        radius_km = solver.ellipsoid.equatorial_radius_km,
        eccentricity = solver.ellipsoid.eccentricity,
        max_iterations = solver.max_iterations,
        tolerance_rad = solver.tolerance_rad,
        "latitude solver configuration"
    );

    let sez = converter
        .convert(&invocation.observer, &invocation.target)
        .context("failed to convert ECEF position to SEZ")?;

    output::write_sez(&mut io::stdout().lock(), &sez).context("failed to write SEZ result")?;
    Ok(())
}
