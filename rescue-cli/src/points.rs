//! Points command implementation for the rescue CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use rescue_core::RescuePoint;

use crate::nearest::require_existing;
use crate::{ARG_POINTS_FILE, CliError};

/// CLI arguments for the `points` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the active rescue-point dataset")]
#[ortho_config(prefix = "RESCUE")]
pub(crate) struct PointsArgs {
    /// Path to a JSON points file; the bundled dataset when omitted.
    #[arg(long = ARG_POINTS_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) points_file: Option<Utf8PathBuf>,
}

pub(crate) fn run_points(args: PointsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_points_with(args, &mut stdout)
}

pub(crate) fn run_points_with(args: PointsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let points = match &merged.points_file {
        Some(path) => {
            require_existing(path, ARG_POINTS_FILE)?;
            rescue_data::load_points(path)?
        }
        None => rescue_data::bundled_points(),
    };
    write_points(writer, &points)
}

fn write_points(writer: &mut dyn Write, points: &[RescuePoint]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(points).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .and_then(|()| writer.write_all(b"\n"))
        .map_err(CliError::WriteOutput)
}
