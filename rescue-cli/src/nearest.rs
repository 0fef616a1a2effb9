//! Nearest command implementation for the rescue CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use rescue_core::{GeoPoint, RankedPoint, rank_by_distance};

use crate::{
    ARG_NEAREST_LAT, ARG_NEAREST_LON, ARG_POINTS_FILE, CliError, ENV_NEAREST_LAT, ENV_NEAREST_LON,
};

/// CLI arguments for the `nearest` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank rescue points by great-circle distance from the \
                 given coordinate. Values can come from CLI flags, \
                 configuration files, or environment variables; the \
                 bundled station list is used unless a points file is \
                 supplied.",
    about = "Rank rescue points around a coordinate"
)]
#[ortho_config(prefix = "RESCUE")]
pub(crate) struct NearestArgs {
    /// Observer latitude in degrees.
    #[arg(long = ARG_NEAREST_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Observer longitude in degrees.
    #[arg(long = ARG_NEAREST_LON, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    /// Number of ranked points to print.
    #[arg(long = "count", value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
    /// Path to a JSON points file; the bundled dataset when omitted.
    #[arg(long = ARG_POINTS_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) points_file: Option<Utf8PathBuf>,
}

impl NearestArgs {
    fn into_config(self) -> Result<NearestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NearestConfig::try_from(merged)
    }
}

/// Resolved `nearest` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NearestConfig {
    /// Validated observer coordinate.
    pub(crate) observer: GeoPoint,
    /// Number of ranked points to print.
    pub(crate) count: usize,
    /// Optional points file; the bundled dataset when `None`.
    pub(crate) points_file: Option<Utf8PathBuf>,
}

impl NearestConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match &self.points_file {
            Some(path) => require_existing(path, ARG_POINTS_FILE),
            None => Ok(()),
        }
    }
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        })
    }
}

impl TryFrom<NearestArgs> for NearestConfig {
    type Error = CliError;

    fn try_from(args: NearestArgs) -> Result<Self, Self::Error> {
        let lat = args.lat.ok_or(CliError::MissingArgument {
            field: ARG_NEAREST_LAT,
            env: ENV_NEAREST_LAT,
        })?;
        let lon = args.lon.ok_or(CliError::MissingArgument {
            field: ARG_NEAREST_LON,
            env: ENV_NEAREST_LON,
        })?;
        let observer = GeoPoint::new(lat, lon).map_err(CliError::InvalidObserver)?;
        Ok(Self {
            observer,
            count: args.count.unwrap_or(1),
            points_file: args.points_file,
        })
    }
}

pub(crate) fn run_nearest(args: NearestArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_nearest_with(args, &mut stdout)
}

pub(crate) fn run_nearest_with(
    args: NearestArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let ranked = execute_nearest(args)?;
    write_ranked(writer, &ranked)
}

fn execute_nearest(args: NearestArgs) -> Result<Vec<RankedPoint>, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let points = match &config.points_file {
        Some(path) => rescue_data::load_points(path)?,
        None => rescue_data::bundled_points(),
    };
    log::debug!(
        "ranking {} rescue points around {:?}",
        points.len(),
        config.observer
    );
    let mut ranked = rank_by_distance(&config.observer, &points)?;
    ranked.truncate(config.count);
    Ok(ranked)
}

pub(crate) fn write_ranked(
    writer: &mut dyn Write,
    ranked: &[RankedPoint],
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(ranked).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .and_then(|()| writer.write_all(b"\n"))
        .map_err(CliError::WriteOutput)
}
