//! Nearest-neighbour matching between two sets of UV coordinates.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::point::Point2d;

/// A UV component and its position in texture space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UvCoordinate {
    /// Host component name, unique within one coordinate set.
    pub id: String,
    pub u: f64,
    pub v: f64,
}

impl UvCoordinate {
    pub fn new(id: impl Into<String>, u: f64, v: f64) -> Self {
        Self {
            id: id.into(),
            u,
            v,
        }
    }

    pub fn position(&self) -> Point2d {
        Point2d::new(self.u, self.v)
    }
}

/// A target coordinate together with the reference position it snaps to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub coordinate: UvCoordinate,
    /// `None` when no reference coordinate passed the per-axis threshold.
    pub closest: Option<Point2d>,
}

impl MatchResult {
    pub fn is_matched(&self) -> bool {
        self.closest.is_some()
    }

    pub fn closest_u(&self) -> Option<f64> {
        self.closest.map(|p| p.u)
    }

    pub fn closest_v(&self) -> Option<f64> {
        self.closest.map(|p| p.v)
    }
}

/// For every coordinate in `dst`, find the nearest coordinate in `src`.
///
/// Candidates whose offset exceeds `threshold` on either axis are rejected
/// before the distance is computed, so the search region is a square, not a
/// circle. Among the survivors the smallest Euclidean distance wins; on ties
/// the earlier `src` entry is kept. Output order matches `dst`.
pub fn compare_uv_position(
    src: &[UvCoordinate],
    dst: &[UvCoordinate],
    threshold: f64,
) -> Vec<MatchResult> {
    let results: Vec<MatchResult> = dst
        .iter()
        .map(|target| {
            let target_pos = target.position();
            let mut best_dist = f64::INFINITY;
            let mut closest = None;

            for candidate in src {
                let pos = candidate.position();
                if !pos.within_box(&target_pos, threshold) {
                    continue;
                }
                let d = pos.distance_to(&target_pos);
                if d < best_dist {
                    best_dist = d;
                    closest = Some(pos);
                }
            }

            MatchResult {
                coordinate: target.clone(),
                closest,
            }
        })
        .collect();

    debug!(
        src = src.len(),
        dst = dst.len(),
        threshold,
        matched = results.iter().filter(|r| r.is_matched()).count(),
        "compared uv positions"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_within_threshold() {
        let src = vec![UvCoordinate::new("a", 0.0, 0.0)];
        let dst = vec![UvCoordinate::new("b", 0.02, 0.01)];
        let results = compare_uv_position(&src, &dst, 0.025);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].coordinate.id, "b");
        assert_eq!(results[0].closest_u(), Some(0.0));
        assert_eq!(results[0].closest_v(), Some(0.0));
    }

    #[test]
    fn test_no_match_when_one_axis_exceeds_threshold() {
        let src = vec![UvCoordinate::new("a", 0.0, 0.0)];
        let dst = vec![UvCoordinate::new("b", 0.05, 0.01)];
        let results = compare_uv_position(&src, &dst, 0.025);
        assert!(!results[0].is_matched());
        assert_eq!(results[0].closest_u(), None);
    }

    #[test]
    fn test_square_filter_accepts_corner_outside_circle() {
        // Euclidean distance ~0.0354 > threshold, but both axes pass.
        let src = vec![UvCoordinate::new("a", 0.025, 0.025)];
        let dst = vec![UvCoordinate::new("b", 0.0, 0.0)];
        let results = compare_uv_position(&src, &dst, 0.025);
        assert_eq!(results[0].closest, Some(Point2d::new(0.025, 0.025)));
    }

    #[test]
    fn test_picks_globally_closest_not_first() {
        let src = vec![
            UvCoordinate::new("far", 0.5, 0.52),
            UvCoordinate::new("near", 0.5, 0.501),
            UvCoordinate::new("mid", 0.5, 0.51),
        ];
        let dst = vec![UvCoordinate::new("t", 0.5, 0.5)];
        let results = compare_uv_position(&src, &dst, 0.05);
        assert_eq!(results[0].closest, Some(Point2d::new(0.5, 0.501)));
    }

    #[test]
    fn test_tie_resolves_to_first_src() {
        let src = vec![
            UvCoordinate::new("left", 0.25, 0.5),
            UvCoordinate::new("right", 0.75, 0.5),
        ];
        let dst = vec![UvCoordinate::new("t", 0.5, 0.5)];
        let results = compare_uv_position(&src, &dst, 0.3);
        assert_eq!(results[0].closest, Some(Point2d::new(0.25, 0.5)));
    }

    #[test]
    fn test_empty_src_leaves_everything_unmatched() {
        let dst = vec![
            UvCoordinate::new("a", 0.1, 0.1),
            UvCoordinate::new("b", 0.2, 0.2),
        ];
        let results = compare_uv_position(&[], &dst, 0.1);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| !r.is_matched()));
    }

    #[test]
    fn test_dst_order_is_preserved() {
        let src = vec![UvCoordinate::new("s", 0.0, 0.0)];
        let dst = vec![
            UvCoordinate::new("z", 0.0, 0.0),
            UvCoordinate::new("a", 1.0, 1.0),
            UvCoordinate::new("m", 0.01, 0.0),
        ];
        let ids: Vec<String> = compare_uv_position(&src, &dst, 0.025)
            .into_iter()
            .map(|r| r.coordinate.id)
            .collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }
}
