//! Error types emitted by the rescue CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use rescue_core::{CoordinateError, RankError};
use rescue_data::PointsFileError;
use thiserror::Error;

/// Errors emitted by the rescue CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing CLI flag.
        field: &'static str,
        /// Environment variable that can supply it instead.
        env: &'static str,
    },
    /// A referenced points file does not exist or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Name of the flag that referenced the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// The observer coordinate failed validation.
    #[error("invalid observer coordinate")]
    InvalidObserver(#[source] CoordinateError),
    /// The points dataset could not be loaded.
    #[error(transparent)]
    Points(#[from] PointsFileError),
    /// Ranking rejected the observer or a candidate.
    #[error(transparent)]
    Rank(#[from] RankError),
    /// The result could not be serialised as JSON.
    #[error("failed to serialise output")]
    SerialiseOutput(#[source] serde_json::Error),
    /// The result could not be written to the output stream.
    #[error("failed to write output")]
    WriteOutput(#[source] std::io::Error),
}
