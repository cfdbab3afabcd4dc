use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::faces::{FaceGroups, FaceLabel};
use crate::geometry::point::Point3d;
use crate::geometry::vector::Vec3;

/// Unit normal of the plane through `p0`, `p1`, `p2`, right-hand rule on
/// `(p1 - p0) x (p2 - p0)`.
///
/// Collinear or coincident inputs give a zero-length cross product; in that
/// case the zero vector is returned.
pub fn compute_normal(p0: Point3d, p1: Point3d, p2: Point3d) -> Vec3 {
    let u = p1 - p0;
    let v = p2 - p0;
    u.cross(&v).normalized_or_zero()
}

/// Principal axes of a box, one normal per face kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeAxes {
    /// Normal of the top face.
    pub up: Vec3,
    /// Normal of the right face.
    pub side: Vec3,
    /// Normal of the front face.
    pub front: Vec3,
}

/// Normals of the top, right and front faces, each from the first three
/// points of the face. Pass deduplicated groups; the sign of each normal
/// follows the winding of those three points.
///
/// A face with fewer than three points yields [`Vec3::ZERO`].
pub fn cube_normals(faces: &FaceGroups) -> CubeAxes {
    CubeAxes {
        up: face_normal(faces, FaceLabel::Top),
        side: face_normal(faces, FaceLabel::Right),
        front: face_normal(faces, FaceLabel::Front),
    }
}

fn face_normal(faces: &FaceGroups, label: FaceLabel) -> Vec3 {
    match faces.get(label) {
        [p0, p1, p2, ..] => compute_normal(*p0, *p1, *p2),
        short => {
            debug!(face = %label, points = short.len(), "face too small for a normal");
            Vec3::ZERO
        }
    }
}
