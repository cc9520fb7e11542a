//! Control-point path loading.
//!
//! Two formats produce the same [`LoadedPath`]:
//! - text: first line names the spline type (`CATMULL...` or `BSPLINE...`), second line holds
//!   the time step, every following whitespace-separated number is part of an `x y z` triple.
//! - JSON: `{ "basis": "catmull_rom", "timeStep": 0.01, "points": [[x, y, z], ...] }`.
//!
//! Both reject paths the driver could not animate (fewer than 4 points, non-positive step).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PathLoadError;
use crate::gait::DEFAULT_TIME_STEP;
use crate::path::{BasisKind, ControlPath, MIN_CONTROL_POINTS};
use crate::vec3::Point3;

/// A validated path together with its traversal calibration.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedPath {
    pub path: ControlPath,
    pub time_step: f32,
}

impl LoadedPath {
    pub fn default_loop() -> Self {
        Self {
            path: ControlPath::default_loop(),
            time_step: DEFAULT_TIME_STEP,
        }
    }
}

impl Default for LoadedPath {
    fn default() -> Self {
        Self::default_loop()
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPath {
    basis: BasisKind,
    #[serde(default = "default_time_step")]
    time_step: f32,
    points: Vec<Point3>,
}

fn default_time_step() -> f32 {
    DEFAULT_TIME_STEP
}

fn validate(
    basis: BasisKind,
    time_step: f32,
    points: Vec<Point3>,
) -> Result<LoadedPath, PathLoadError> {
    if !time_step.is_finite() || time_step <= 0.0 {
        return Err(PathLoadError::InvalidTimeStep(time_step.to_string()));
    }
    if points.len() < MIN_CONTROL_POINTS {
        return Err(PathLoadError::TooFewPoints(points.len()));
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(PathLoadError::NonFinitePoint { index });
    }
    Ok(LoadedPath {
        path: ControlPath::new(basis, points),
        time_step,
    })
}

fn parse_basis_line(line: &str) -> Result<BasisKind, PathLoadError> {
    let upper = line.to_ascii_uppercase();
    if upper.contains("CATMULL") {
        Ok(BasisKind::CatmullRom)
    } else if upper.contains("BSPLINE") || upper.contains("B-SPLINE") {
        Ok(BasisKind::BSpline)
    } else {
        Err(PathLoadError::UnknownBasis(line.trim().to_string()))
    }
}

fn parse_time_step(line: &str) -> Result<f32, PathLoadError> {
    let token = line.split_whitespace().next().unwrap_or("");
    token
        .parse::<f32>()
        .map_err(|_| PathLoadError::InvalidTimeStep(token.to_string()))
}

/// Parse the line-oriented text format.
pub fn parse_control_points_text(s: &str) -> Result<LoadedPath, PathLoadError> {
    let mut lines = s.lines().enumerate();

    let (_, header) = lines
        .next()
        .ok_or(PathLoadError::MissingHeader("spline type"))?;
    let basis = parse_basis_line(header)?;

    let (_, step_line) = lines
        .next()
        .ok_or(PathLoadError::MissingHeader("time step"))?;
    let time_step = parse_time_step(step_line)?;

    let mut values: Vec<f32> = Vec::new();
    for (idx, line) in lines {
        for token in line.split_whitespace() {
            let v = token
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| PathLoadError::InvalidCoordinate {
                    line: idx + 1,
                    token: token.to_string(),
                })?;
            values.push(v);
        }
    }

    let dangling = values.len() % 3;
    if dangling != 0 {
        return Err(PathLoadError::DanglingCoordinates(dangling));
    }
    let points = values
        .chunks_exact(3)
        .map(|c| Point3::new(c[0], c[1], c[2]))
        .collect();

    validate(basis, time_step, points)
}

/// Parse the JSON format.
pub fn parse_path_json(s: &str) -> Result<LoadedPath, PathLoadError> {
    let stored: StoredPath = serde_json::from_str(s)?;
    validate(stored.basis, stored.time_step, stored.points)
}

/// Load a path file; `.json` files use the JSON format, anything else the text format.
pub fn load_path_file(path: impl AsRef<Path>) -> Result<LoadedPath, PathLoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| PathLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let loaded = if is_json {
        parse_path_json(&text)?
    } else {
        parse_control_points_text(&text)?
    };
    log::debug!(
        "loaded {} control points from {} ({}, time step {})",
        loaded.path.len(),
        path.display(),
        loaded.path.basis.label(),
        loaded.time_step
    );
    Ok(loaded)
}

/// Like [`load_path_file`], falling back to [`LoadedPath::default_loop`] on any error.
pub fn load_path_or_default(path: impl AsRef<Path>) -> LoadedPath {
    let path = path.as_ref();
    match load_path_file(path) {
        Ok(loaded) => loaded,
        Err(err) => {
            log::warn!(
                "failed to load control points from {}: {err}; using default path",
                path.display()
            );
            LoadedPath::default_loop()
        }
    }
}
