//! Path evaluator: control points + basis -> continuous curve.
//!
//! Model:
//! - `N` control points define `N - 3` cubic segments, each using 4 consecutive points.
//! - Global parameter `t` in [0,1] maps to segment `s = floor(t * (N-3))` and local
//!   `u = t * (N-3) - s`; `t >= 1` lands on the last segment with `u = 1`.
//! - Paths with fewer than 4 points are degenerate and evaluate to the origin.
//!
//! API:
//! - evaluate(&ControlPath, t) / tangent(&ControlPath, t)
//! - ControlPath::polyline(segments) for drawing the curve

pub mod basis;

use serde::{Deserialize, Serialize};

pub use basis::BasisKind;
use basis::eval_segment;

use crate::vec3::Point3;

/// Minimum number of control points for a non-degenerate path.
pub const MIN_CONTROL_POINTS: usize = 4;

/// Forward-difference step used by [`tangent`].
pub const TANGENT_EPSILON: f32 = 1e-3;

/// Ordered control points plus the basis used to evaluate them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlPath {
    pub basis: BasisKind,
    pub points: Vec<Point3>,
}

impl ControlPath {
    pub fn new(basis: BasisKind, points: Vec<Point3>) -> Self {
        Self { basis, points }
    }

    /// Eight points on a radius-3 circle in the XZ plane, first three repeated
    /// so the Catmull-Rom curve closes on itself.
    pub fn default_loop() -> Self {
        const COUNT: usize = 8;
        const RADIUS: f32 = 3.0;
        let mut points: Vec<Point3> = (0..COUNT)
            .map(|i| {
                let angle = i as f32 * std::f32::consts::TAU / COUNT as f32;
                Point3::new(RADIUS * angle.cos(), 0.0, RADIUS * angle.sin())
            })
            .collect();
        points.extend_from_within(0..3);
        Self::new(BasisKind::CatmullRom, points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_degenerate(&self) -> bool {
        self.points.len() < MIN_CONTROL_POINTS
    }

    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(MIN_CONTROL_POINTS - 1)
    }

    /// Position at `t`. See [`evaluate`].
    pub fn evaluate(&self, t: f32) -> Point3 {
        evaluate(self, t)
    }

    /// Unit tangent at `t`. See [`tangent`].
    pub fn tangent(&self, t: f32) -> Point3 {
        tangent(self, t)
    }

    /// `segments + 1` samples evenly spaced over [0,1]. Empty when degenerate.
    pub fn polyline(&self, segments: usize) -> Vec<Point3> {
        if self.is_degenerate() || segments == 0 {
            return Vec::new();
        }
        let inv = (segments as f32).recip();
        (0..=segments)
            .map(|i| evaluate(self, i as f32 * inv))
            .collect()
    }
}

/// Map global `t` to `(segment, u)`. Caller guarantees `segments > 0`.
fn locate(t: f32, segments: usize) -> (usize, f32) {
    let t = if t.is_nan() { 0.0 } else { t.max(0.0) };
    let scaled = t * segments as f32;
    let seg = scaled.floor() as usize;
    if seg >= segments {
        (segments - 1, 1.0)
    } else {
        (seg, scaled - seg as f32)
    }
}

/// Position on the curve at normalized parameter `t`.
/// Degenerate paths return the origin.
pub fn evaluate(path: &ControlPath, t: f32) -> Point3 {
    if path.is_degenerate() {
        return Point3::ZERO;
    }
    let (seg, u) = locate(t, path.segment_count());
    let p = &path.points[seg..seg + 4];
    eval_segment(path.basis, [p[0], p[1], p[2], p[3]], u)
}

/// Unit direction of travel at `t`, estimated by a forward difference.
/// Zero when the two samples coincide (including degenerate paths and `t >= 1`).
pub fn tangent(path: &ControlPath, t: f32) -> Point3 {
    let here = evaluate(path, t);
    let ahead = evaluate(path, t + TANGENT_EPSILON);
    (ahead - here).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_maps_end_to_last_segment() {
        assert_eq!(locate(1.0, 4), (3, 1.0));
        assert_eq!(locate(2.5, 4), (3, 1.0));
        assert_eq!(locate(0.0, 4), (0, 0.0));
        let (s, u) = locate(0.5, 4);
        assert_eq!(s, 2);
        assert!(u.abs() < 1e-6);
    }

    #[test]
    fn locate_sanitizes_negative_and_nan() {
        assert_eq!(locate(-0.2, 3), (0, 0.0));
        assert_eq!(locate(f32::NAN, 3), (0, 0.0));
    }

    #[test]
    fn default_loop_shape() {
        let path = ControlPath::default_loop();
        assert_eq!(path.len(), 11);
        assert_eq!(path.segment_count(), 8);
        assert_eq!(path.points[8], path.points[0]);
        assert_eq!(path.points[10], path.points[2]);
        for p in &path.points {
            assert!((p.length() - 3.0).abs() < 1e-5);
        }
    }

    #[test]
    fn polyline_sample_count() {
        let path = ControlPath::default_loop();
        assert_eq!(path.polyline(100).len(), 101);
        assert!(ControlPath::new(BasisKind::BSpline, vec![Point3::ZERO; 3])
            .polyline(10)
            .is_empty());
    }
}
