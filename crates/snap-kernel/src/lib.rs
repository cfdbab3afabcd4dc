pub mod faces;
pub mod geometry;
pub mod normals;
pub mod uv;

// Re-export the working set at crate root for convenience.
pub use faces::{classify_faces, deduplicate, FaceGroups, FaceLabel};
pub use geometry::bbox::BoundingBox;
pub use geometry::point::{Point2d, Point3d};
pub use geometry::vector::Vec3;
pub use normals::{compute_normal, cube_normals, CubeAxes};
pub use uv::{compare_uv_position, MatchResult, UvCoordinate};

/// Default tolerances used when classifying and deduplicating control points.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Maximum absolute distance from an axis extremum for a point to count
    /// as lying on that face.
    pub classify: f64,
    /// Number of decimal digits kept when comparing points for duplicates.
    pub precision: u32,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            classify: 1e-6,
            precision: 6,
        }
    }
}

impl Tolerance {
    /// Whether `value` lies within the classify tolerance (inclusive) of `extremum`.
    pub fn on_extremum(&self, value: f64, extremum: f64) -> bool {
        (value - extremum).abs() <= self.classify
    }

    /// Round `value` to the configured decimal precision, halves to even.
    /// Negative zero is folded into positive zero so both hash the same.
    ///
    /// When the precision is finer than an `f64` can scale to, the value is
    /// returned unchanged.
    pub fn round(&self, value: f64) -> f64 {
        let Ok(digits) = i32::try_from(self.precision) else {
            return value + 0.0;
        };
        let scale = 10f64.powi(digits);
        let scaled = value * scale;
        if !scale.is_finite() || !scaled.is_finite() {
            return value + 0.0;
        }
        scaled.round_ties_even() / scale + 0.0
    }
}
