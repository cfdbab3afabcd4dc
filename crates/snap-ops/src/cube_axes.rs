use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use host_bridge::GeometryAccessor;
use snap_kernel::{classify_faces, cube_normals, BoundingBox, CubeAxes, FaceGroups, Point3d, Tolerance};

use crate::types::SnapError;

/// Axes derived from a box-shaped curve, with the data they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeAxesReport {
    pub curve: String,
    /// World bounds of the control points.
    pub bounds: BoundingBox,
    /// Deduplicated control points per face.
    pub faces: FaceGroups,
    pub axes: CubeAxes,
}

/// Read the control points of `curve`, sort them onto the faces of their
/// bounding box and compute the up, side and front normals.
#[instrument(skip(host))]
pub fn derive_cube_axes<H: GeometryAccessor + ?Sized>(
    host: &H,
    curve: &str,
    tolerance: &Tolerance,
) -> Result<CubeAxesReport, SnapError> {
    let points = host
        .control_points(curve)?
        .iter()
        .map(|id| host.world_position(id))
        .collect::<Result<Vec<Point3d>, _>>()?;

    let bounds = BoundingBox::from_points(&points);
    let faces = classify_faces(&points, tolerance.classify).deduplicated(tolerance.precision);
    let axes = cube_normals(&faces);

    info!(
        curve,
        control_points = points.len(),
        up = ?axes.up.to_array(),
        side = ?axes.side.to_array(),
        front = ?axes.front.to_array(),
        "derived cube axes"
    );
    Ok(CubeAxesReport {
        curve: curve.to_string(),
        bounds,
        faces,
        axes,
    })
}
