//! Interactive collection of strip parameters.

use anyhow::{bail, Context, Result};
use mobius_core::StripParams;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Writes `message`, reads one line and parses it.
pub fn prompt<T, R, W>(input: &mut R, output: &mut W, message: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    R: BufRead,
    W: Write,
{
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from stdin.")?;
    if read == 0 {
        bail!("Unexpected end of input while waiting for: {}", message.trim());
    }
    let trimmed = line.trim();
    trimmed
        .parse::<T>()
        .with_context(|| format!("Could not parse \"{trimmed}\"."))
}

/// Fills in whichever of R, w, n were not given on the command line.
pub fn collect_params<R, W>(
    radius: Option<f64>,
    width: Option<f64>,
    resolution: Option<usize>,
    input: &mut R,
    output: &mut W,
) -> Result<StripParams>
where
    R: BufRead,
    W: Write,
{
    let radius = match radius {
        Some(value) => value,
        None => prompt(input, output, "Enter radius R (e.g., 1.0): ")?,
    };
    let width = match width {
        Some(value) => value,
        None => prompt(input, output, "Enter strip width w (e.g., 0.3): ")?,
    };
    let resolution = match resolution {
        Some(value) => value,
        None => prompt(input, output, "Enter resolution n (e.g., 200): ")?,
    };
    Ok(StripParams::new(radius, width, resolution))
}
