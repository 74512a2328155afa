mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "omnirot", about = "Equirectangular rotation registration tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show equirectangular image geometry
    Info(commands::info::InfoArgs),
    /// Render a gaze image centered on a chosen pixel
    Gaze(commands::gaze::GazeArgs),
    /// Synthesize a view rotated about the vertical axis
    Rotate(commands::rotate::RotateArgs),
    /// Sweep the registration energy and its gradients over an angle range
    Sweep(commands::sweep::SweepArgs),
    /// Check the rotation frame built for a gaze pixel
    Verify(commands::verify::VerifyArgs),
    /// Print or save a default sweep configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Gaze(args) => commands::gaze::run(args),
        Commands::Rotate(args) => commands::rotate::run(args),
        Commands::Sweep(args) => commands::sweep::run(args),
        Commands::Verify(args) => commands::verify::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
