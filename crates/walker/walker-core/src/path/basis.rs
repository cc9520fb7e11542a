//! Cubic basis functions for path segments:
//! - Catmull-Rom (uniform, tension 0.5): interpolates the two inner points
//! - uniform cubic B-spline: approximating, C2 across seams
//!
//! Both reduce to four blending weights over `p0..p3`; the same weights are
//! applied to every axis.

use serde::{Deserialize, Serialize};

use crate::vec3::Point3;

const ONE_SIXTH: f32 = 1.0 / 6.0;

/// Which cubic basis turns control points into a curve.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasisKind {
    #[default]
    #[serde(alias = "catmull")]
    CatmullRom,
    #[serde(alias = "bspline")]
    BSpline,
}

impl BasisKind {
    /// Blending weights for local parameter `u` in [0,1], ordered `p0..p3`.
    #[inline]
    pub fn weights(self, u: f32) -> [f32; 4] {
        let u2 = u * u;
        let u3 = u2 * u;
        match self {
            BasisKind::CatmullRom => [
                0.5 * (-u3 + 2.0 * u2 - u),
                0.5 * (3.0 * u3 - 5.0 * u2 + 2.0),
                0.5 * (-3.0 * u3 + 4.0 * u2 + u),
                0.5 * (u3 - u2),
            ],
            BasisKind::BSpline => {
                let v = 1.0 - u;
                [
                    ONE_SIXTH * v * v * v,
                    ONE_SIXTH * (3.0 * u3 - 6.0 * u2 + 4.0),
                    ONE_SIXTH * (-3.0 * u3 + 3.0 * u2 + 3.0 * u + 1.0),
                    ONE_SIXTH * u3,
                ]
            }
        }
    }

    /// True when the curve passes through its control points.
    pub fn interpolates(self) -> bool {
        matches!(self, BasisKind::CatmullRom)
    }

    pub fn label(self) -> &'static str {
        match self {
            BasisKind::CatmullRom => "Catmull-Rom",
            BasisKind::BSpline => "B-spline",
        }
    }
}

#[inline]
fn blend(w: [f32; 4], a: f32, b: f32, c: f32, d: f32) -> f32 {
    w[0] * a + w[1] * b + w[2] * c + w[3] * d
}

/// Evaluate one segment defined by four consecutive control points.
#[inline]
pub fn eval_segment(kind: BasisKind, p: [Point3; 4], u: f32) -> Point3 {
    let w = kind.weights(u);
    Point3::new(
        blend(w, p[0].x, p[1].x, p[2].x, p[3].x),
        blend(w, p[0].y, p[1].y, p[2].y, p[3].y),
        blend(w, p[0].z, p[1].z, p[2].z, p[3].z),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(w: [f32; 4]) -> f32 {
        w.iter().sum()
    }

    #[test]
    fn weights_partition_unity() {
        for kind in [BasisKind::CatmullRom, BasisKind::BSpline] {
            for i in 0..=10 {
                let u = i as f32 / 10.0;
                assert!((sum(kind.weights(u)) - 1.0).abs() < 1e-5, "{kind:?} u={u}");
            }
        }
    }

    #[test]
    fn catmull_rom_endpoint_weights() {
        assert_eq!(BasisKind::CatmullRom.weights(0.0), [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(BasisKind::CatmullRom.weights(1.0), [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn bspline_endpoint_weights() {
        let w0 = BasisKind::BSpline.weights(0.0);
        assert!((w0[0] - 1.0 / 6.0).abs() < 1e-6);
        assert!((w0[1] - 4.0 / 6.0).abs() < 1e-6);
        assert!((w0[2] - 1.0 / 6.0).abs() < 1e-6);
        assert_eq!(w0[3], 0.0);
    }

    #[test]
    fn basis_kind_serde_tags() {
        assert_eq!(
            serde_json::to_string(&BasisKind::BSpline).unwrap(),
            "\"b_spline\""
        );
        let k: BasisKind = serde_json::from_str("\"catmull_rom\"").unwrap();
        assert_eq!(k, BasisKind::CatmullRom);
    }
}
