use anyhow::{Context, Result};
use clap::Parser;
use mobius_core::MobiusStrip;
use std::io::{self, Write};
use tracing::info;

mod cli;
mod prompt;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let params = prompt::collect_params(
        cli.radius,
        cli.width,
        cli.resolution,
        &mut stdin.lock(),
        &mut stdout,
    )?;

    let strip = MobiusStrip::new(params).context("Failed to build strip.")?;
    let measurements = strip
        .measure(cli.rule)
        .context("Failed to measure strip.")?;
    info!(
        surface_area = measurements.surface_area,
        edge_length = measurements.edge_length,
        "measured strip"
    );

    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &measurements)?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout)?;
        writeln!(stdout, "Surface Area: {:.4}", measurements.surface_area)?;
        writeln!(stdout, "Edge Length: {:.4}", measurements.edge_length)?;
    }
    Ok(())
}
