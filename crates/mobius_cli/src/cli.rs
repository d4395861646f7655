use clap::Parser;
use mobius_core::QuadratureRule;

#[derive(Debug, Parser)]
#[command(name = "mobius")]
#[command(about = "Estimate the surface area and edge length of a Mobius strip")]
pub struct Cli {
    /// Centerline radius R (prompted for when omitted)
    #[arg(short, long)]
    pub radius: Option<f64>,

    /// Strip width w (prompted for when omitted)
    #[arg(short, long)]
    pub width: Option<f64>,

    /// Samples per parameter axis n (prompted for when omitted)
    #[arg(short = 'n', long)]
    pub resolution: Option<usize>,

    /// Quadrature rule: simpson or trapezoid
    #[arg(long, default_value = "simpson")]
    pub rule: QuadratureRule,

    /// Print the measurements as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}
