//! Face classification for box-shaped control-point clouds.
//!
//! A cube-shaped curve is a loop of control points lying on the six planes of
//! its bounding box. [`classify_faces`] sorts the points onto those planes and
//! [`deduplicate`] collapses the repeated corners a closed curve revisits.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::bbox::BoundingBox;
use crate::geometry::point::Point3d;
use crate::Tolerance;

/// One of the six axis-aligned extremal planes of a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceLabel {
    /// Max Y.
    Top,
    /// Min Y.
    Bottom,
    /// Max X.
    Right,
    /// Min X.
    Left,
    /// Max Z.
    Front,
    /// Min Z.
    Back,
}

impl FaceLabel {
    pub const ALL: [FaceLabel; 6] = [
        FaceLabel::Top,
        FaceLabel::Bottom,
        FaceLabel::Right,
        FaceLabel::Left,
        FaceLabel::Front,
        FaceLabel::Back,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaceLabel::Top => "top",
            FaceLabel::Bottom => "bottom",
            FaceLabel::Right => "right",
            FaceLabel::Left => "left",
            FaceLabel::Front => "front",
            FaceLabel::Back => "back",
        }
    }

    /// Coordinate index (0 = x, 1 = y, 2 = z) this face is perpendicular to.
    pub fn axis(&self) -> usize {
        match self {
            FaceLabel::Right | FaceLabel::Left => 0,
            FaceLabel::Top | FaceLabel::Bottom => 1,
            FaceLabel::Front | FaceLabel::Back => 2,
        }
    }

    /// Whether the face sits on the maximum side of its axis.
    pub fn is_max(&self) -> bool {
        matches!(self, FaceLabel::Top | FaceLabel::Right | FaceLabel::Front)
    }

    fn index(&self) -> usize {
        *self as usize
    }

    fn extremum(&self, bounds: &BoundingBox) -> f64 {
        let side = if self.is_max() { bounds.max } else { bounds.min };
        side.to_array()[self.axis()]
    }
}

impl std::fmt::Display for FaceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Points grouped by the face they lie on. Always holds all six faces; any of
/// them may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceGroups {
    groups: [Vec<Point3d>; 6],
}

impl FaceGroups {
    pub fn get(&self, label: FaceLabel) -> &[Point3d] {
        &self.groups[label.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (FaceLabel, &[Point3d])> {
        FaceLabel::ALL
            .into_iter()
            .map(move |label| (label, self.get(label)))
    }

    /// Copy of these groups with each face reduced by [`deduplicate`].
    pub fn deduplicated(&self, precision: u32) -> Self {
        let mut out = Self::default();
        for label in FaceLabel::ALL {
            out.groups[label.index()] = deduplicate(self.get(label), precision);
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }
}

/// Sort `points` onto the six extremal planes of their bounding box.
///
/// A point is on a face when its coordinate along the face axis is within
/// `tolerance` (inclusive) of that axis' extremum. Corner points land in three
/// faces, edge points in two. Input order is kept inside each face.
pub fn classify_faces(points: &[Point3d], tolerance: f64) -> FaceGroups {
    let tol = Tolerance {
        classify: tolerance,
        ..Tolerance::default()
    };
    let bounds = BoundingBox::from_points(points);
    let mut faces = FaceGroups::default();

    for label in FaceLabel::ALL {
        let extremum = label.extremum(&bounds);
        let axis = label.axis();
        faces.groups[label.index()] = points
            .iter()
            .filter(|p| tol.on_extremum(p.to_array()[axis], extremum))
            .copied()
            .collect();
    }

    debug!(
        points = points.len(),
        top = faces.get(FaceLabel::Top).len(),
        bottom = faces.get(FaceLabel::Bottom).len(),
        right = faces.get(FaceLabel::Right).len(),
        left = faces.get(FaceLabel::Left).len(),
        front = faces.get(FaceLabel::Front).len(),
        back = faces.get(FaceLabel::Back).len(),
        "classified control points onto faces"
    );
    faces
}

/// Drop points that repeat an earlier point once every coordinate is rounded
/// to `precision` decimal digits. The first occurrence is kept, in input order.
pub fn deduplicate(points: &[Point3d], precision: u32) -> Vec<Point3d> {
    let tol = Tolerance {
        precision,
        ..Tolerance::default()
    };
    let mut seen: HashSet<[u64; 3]> = HashSet::with_capacity(points.len());
    points
        .iter()
        .filter(|p| {
            let key = [
                tol.round(p.x).to_bits(),
                tol.round(p.y).to_bits(),
                tol.round(p.z).to_bits(),
            ];
            seen.insert(key)
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Corners of the unit cube in the order a closed cube curve visits them,
    /// including the revisits.
    fn cube_curve_points() -> Vec<Point3d> {
        [
            [0.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 1.0, 1.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
            [1.0, 0.0, 1.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
        ]
        .into_iter()
        .map(Point3d::from)
        .collect()
    }

    #[test]
    fn test_classify_cube_has_four_corners_per_face() {
        let faces = classify_faces(&cube_curve_points(), 1e-6).deduplicated(6);
        for (label, points) in faces.iter() {
            assert_eq!(points.len(), 4, "face {label} should have 4 corners");
        }
    }

    #[test]
    fn test_classify_respects_axis_mapping() {
        let faces = classify_faces(&cube_curve_points(), 1e-6);
        assert!(faces.get(FaceLabel::Top).iter().all(|p| p.y == 1.0));
        assert!(faces.get(FaceLabel::Bottom).iter().all(|p| p.y == 0.0));
        assert!(faces.get(FaceLabel::Right).iter().all(|p| p.x == 1.0));
        assert!(faces.get(FaceLabel::Left).iter().all(|p| p.x == 0.0));
        assert!(faces.get(FaceLabel::Front).iter().all(|p| p.z == 1.0));
        assert!(faces.get(FaceLabel::Back).iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn test_classify_tolerance_is_inclusive() {
        let points = vec![
            Point3d::new(0.0, 1.0, 0.0),
            Point3d::new(0.0, 1.0 - 5e-7, 0.0),
            Point3d::new(0.0, 0.5, 0.0),
        ];
        let faces = classify_faces(&points, 1e-6);
        assert_eq!(faces.get(FaceLabel::Top).len(), 2);
    }

    #[test]
    fn test_classify_empty_input_gives_six_empty_faces() {
        let faces = classify_faces(&[], 1e-6);
        assert_eq!(faces.iter().count(), 6);
        assert!(faces.is_empty());
    }

    #[test]
    fn test_single_point_is_on_every_face() {
        let faces = classify_faces(&[Point3d::new(2.0, 3.0, 4.0)], 1e-6);
        for (_, points) in faces.iter() {
            assert_eq!(points.len(), 1);
        }
    }

    #[test]
    fn test_deduplicate_keeps_first_occurrence() {
        let points = vec![
            Point3d::new(1.0, 2.0, 3.0),
            Point3d::new(4.0, 5.0, 6.0),
            Point3d::new(1.0000001, 2.0, 3.0),
        ];
        let unique = deduplicate(&points, 6);
        assert_eq!(unique, vec![points[0], points[1]]);
    }

    #[test]
    fn test_deduplicate_precision_controls_merging() {
        let points = vec![Point3d::new(0.1, 0.0, 0.0), Point3d::new(0.12, 0.0, 0.0)];
        assert_eq!(deduplicate(&points, 2).len(), 2);
        assert_eq!(deduplicate(&points, 1).len(), 1);
    }

    #[test]
    fn test_deduplicate_huge_precision_keeps_distinct_points() {
        let points = vec![Point3d::new(1.0, 0.0, 0.0), Point3d::new(2.0, 0.0, 0.0)];
        assert_eq!(deduplicate(&points, 400), points);
        assert_eq!(deduplicate(&points, u32::MAX), points);
    }

    #[test]
    fn test_deduplicate_rounds_halves_to_even() {
        let points = vec![Point3d::new(2.0, 0.0, 0.0), Point3d::new(2.5, 0.0, 0.0)];
        assert_eq!(deduplicate(&points, 0), vec![points[0]]);

        let points = vec![Point3d::new(0.12, 0.0, 0.0), Point3d::new(0.125, 0.0, 0.0)];
        assert_eq!(deduplicate(&points, 2).len(), 1);
    }

    #[test]
    fn test_deduplicate_merges_signed_zero() {
        let points = vec![Point3d::new(0.0, 0.0, 0.0), Point3d::new(-1e-9, 0.0, -0.0)];
        assert_eq!(deduplicate(&points, 6).len(), 1);
    }

    #[test]
    fn test_face_label_serializes_lowercase() {
        let json = serde_json::to_string(&FaceLabel::Front).unwrap();
        assert_eq!(json, "\"front\"");
    }
}
