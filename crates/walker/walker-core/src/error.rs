//! Errors produced while loading control-point paths.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathLoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("path json parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing {0} line")]
    MissingHeader(&'static str),
    #[error("unknown spline type '{0}' (expected CATMULL or BSPLINE)")]
    UnknownBasis(String),
    #[error("invalid time step '{0}': must be a positive finite number")]
    InvalidTimeStep(String),
    #[error("line {line}: invalid coordinate '{token}'")]
    InvalidCoordinate { line: usize, token: String },
    #[error("control point {index} is not finite")]
    NonFinitePoint { index: usize },
    #[error("{0} trailing value(s) do not form a full x y z triple")]
    DanglingCoordinates(usize),
    #[error("path needs at least 4 control points, found {0}")]
    TooFewPoints(usize),
}
