//! Command-line interface for the rescue engine's offline tooling.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod nearest;
mod points;

pub use error::CliError;

pub(crate) const ARG_NEAREST_LAT: &str = "lat";
pub(crate) const ARG_NEAREST_LON: &str = "lon";
pub(crate) const ARG_POINTS_FILE: &str = "points-file";
pub(crate) const ENV_NEAREST_LAT: &str = "RESCUE_CMDS_NEAREST_LAT";
pub(crate) const ENV_NEAREST_LON: &str = "RESCUE_CMDS_NEAREST_LON";

/// Run the rescue CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration layering, or
/// command execution fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Nearest(args) => nearest::run_nearest(args),
        Command::Points(args) => points::run_points(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "rescue",
    about = "Offline proximity tooling for the rescue engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank rescue points by distance from a coordinate.
    Nearest(nearest::NearestArgs),
    /// List the active rescue-point dataset.
    Points(points::PointsArgs),
}
