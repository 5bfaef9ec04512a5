//! Project command implementation
//!
//! Loads price history, runs the projection pipeline and renders the result.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use pathcast_engine::project;
use tracing::info;

use crate::config::CliConfig;
use crate::loader::load_series;
use crate::report::{render, OutputFormat};
use crate::Result;

/// Run the project command
pub fn run(input: &Path, format: OutputFormat, output: Option<&Path>, config: &CliConfig) -> Result<()> {
    info!("Starting projection...");
    info!("  Input: {}", input.display());
    info!("  Horizon: {} trading days", config.horizon_days);
    info!("  Simulations: {}", config.simulations);
    info!("  Output format: {:?}", format);

    let series = load_series(input)?;
    let sim_config = config.simulation_config()?;

    let step = (sim_config.simulation_count() / 10).max(1);
    let observer = |_: usize, completed: usize, total: usize| {
        if completed % step == 0 || completed == total {
            info!(completed, total, "Simulation progress");
        }
    };

    let projection = project(&series, &sim_config, &observer)?;

    // The destination is opened only after rendering has succeeded.
    let mut rendered = Vec::new();
    render(&projection, format, &mut rendered)?;
    write_output(output, &rendered)?;

    info!(seed = projection.seed, "Projection complete");
    Ok(())
}

/// Writes rendered bytes to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, rendered: &[u8]) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!("Projection written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(rendered)?;
            out.flush()?;
        }
    }
    Ok(())
}
