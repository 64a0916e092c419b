//! Generators for linear features: centerlines buffered into ribbons.

use tracing::trace;

use super::{solid, SceneParams};
use crate::features::{BikeLane, Crossing, Road, Sidewalk};
use crate::math::{Point2, Rect};
use crate::operations::clip::clip_polygon_to_rect;
use crate::operations::offset::BufferPolyline;
use crate::tessellation::TriangleMesh;

/// Buffers a centerline and, when `clip` is given, trims the ribbon to it.
fn ribbon_outline(points: &[Point2], width_mm: f64, clip: Option<&Rect>) -> Option<Vec<Point2>> {
    if points.len() < 2 {
        return None;
    }
    let outline = BufferPolyline::new(points, width_mm).execute();
    if outline.len() < 3 {
        return None;
    }
    let outline = match clip {
        Some(rect) => clip_polygon_to_rect(&outline, rect),
        None => outline,
    };
    (outline.len() >= 3).then_some(outline)
}

#[must_use]
pub fn road(road: &Road, clip: Option<&Rect>, params: &SceneParams) -> Option<TriangleMesh> {
    let Some(outline) = ribbon_outline(&road.points, road.width_mm, clip) else {
        trace!(id = %road.id, "road produced no outline");
        return None;
    };
    solid(&outline, params.heights.road_surface, params.heights.base_plate)
}

#[must_use]
pub fn sidewalk(
    sidewalk: &Sidewalk,
    clip: Option<&Rect>,
    params: &SceneParams,
) -> Option<TriangleMesh> {
    let Some(outline) = ribbon_outline(&sidewalk.points, sidewalk.width_mm, clip) else {
        trace!(id = %sidewalk.id, "sidewalk produced no outline");
        return None;
    };
    solid(&outline, params.heights.sidewalk, params.heights.base_plate)
}

/// Generates a crossing strip. Single-node crossings must be given a
/// direction beforehand; with fewer than 2 points nothing is produced.
#[must_use]
pub fn crossing(
    crossing: &Crossing,
    clip: Option<&Rect>,
    params: &SceneParams,
) -> Option<TriangleMesh> {
    let Some(outline) = ribbon_outline(&crossing.points, crossing.width_mm, clip) else {
        trace!(id = %crossing.id, points = crossing.points.len(), "crossing produced no outline");
        return None;
    };
    solid(&outline, params.heights.crossing, params.heights.base_plate)
}

/// Generates a bike lane, stacked one road-surface layer above the plate so
/// it reads on top of the road it runs along.
#[must_use]
pub fn bike_lane(
    lane: &BikeLane,
    clip: Option<&Rect>,
    params: &SceneParams,
) -> Option<TriangleMesh> {
    let Some(outline) = ribbon_outline(&lane.points, lane.width_mm, clip) else {
        trace!(id = %lane.id, "bike lane produced no outline");
        return None;
    };
    let h = &params.heights;
    solid(&outline, h.road_surface, h.base_plate + h.road_surface)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::features::{BikeLaneKind, CrossingKind};
    use approx::assert_relative_eq;

    fn straight_road(x_from: f64, x_to: f64) -> Road {
        Road {
            id: "way/1".into(),
            name: None,
            highway_type: "residential".into(),
            points: vec![Point2::new(x_from, 0.0), Point2::new(x_to, 0.0)],
            width_mm: 2.0,
            lanes: None,
            oneway: false,
            surface: None,
        }
    }

    #[test]
    fn road_is_thin_slab_on_plate() {
        let mesh = road(&straight_road(-10.0, 10.0), None, &SceneParams::default()).unwrap();
        let (min, max) = mesh.bounds().unwrap();
        assert_relative_eq!(min.z, 2.0);
        assert_relative_eq!(max.z, 2.1, epsilon = 1e-12);
        assert_relative_eq!(min.y, -1.0);
        assert_relative_eq!(max.y, 1.0);
        // 4-vertex outline: 2 triangles per cap, 4 sides
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn clipped_road_stays_within_rect() {
        let rect = Rect::centered(20.0, 20.0);
        let mesh = road(&straight_road(-30.0, 30.0), Some(&rect), &SceneParams::default()).unwrap();
        let (min, max) = mesh.bounds().unwrap();
        assert_relative_eq!(min.x, -10.0);
        assert_relative_eq!(max.x, 10.0);
    }

    #[test]
    fn road_outside_clip_rect_has_no_geometry() {
        let rect = Rect::centered(20.0, 20.0);
        let mut r = straight_road(-30.0, 30.0);
        for p in &mut r.points {
            p.y = 50.0;
        }
        assert!(road(&r, Some(&rect), &SceneParams::default()).is_none());
    }

    #[test]
    fn single_point_road_has_no_geometry() {
        let mut r = straight_road(0.0, 0.0);
        r.points.pop();
        assert!(road(&r, None, &SceneParams::default()).is_none());
    }

    #[test]
    fn sidewalk_rises_to_sidewalk_height() {
        let s = Sidewalk {
            id: "way/2".into(),
            points: vec![Point2::new(0.0, 5.0), Point2::new(10.0, 5.0)],
            width_mm: 1.0,
            side: None,
            surface: None,
        };
        let (_, max) = sidewalk(&s, None, &SceneParams::default()).unwrap().bounds().unwrap();
        assert_relative_eq!(max.z, 4.5);
    }

    #[test]
    fn single_node_crossing_has_no_geometry() {
        let c = Crossing {
            id: "node/3".into(),
            kind: CrossingKind::Zebra,
            points: vec![Point2::new(1.0, 1.0)],
            width_mm: 1.0,
            has_signal: false,
            has_tactile_paving: false,
        };
        assert!(crossing(&c, None, &SceneParams::default()).is_none());
    }

    #[test]
    fn crossing_rises_to_crossing_height() {
        let c = Crossing {
            id: "way/3".into(),
            kind: CrossingKind::Marked,
            points: vec![Point2::new(0.0, -4.0), Point2::new(0.0, 4.0)],
            width_mm: 1.0,
            has_signal: true,
            has_tactile_paving: false,
        };
        let (min, max) = crossing(&c, None, &SceneParams::default()).unwrap().bounds().unwrap();
        assert_relative_eq!(min.z, 2.0);
        assert_relative_eq!(max.z, 2.8, epsilon = 1e-12);
        assert_relative_eq!(min.x, -0.5);
        assert_relative_eq!(max.y, 4.0);
    }

    #[test]
    fn bike_lane_sits_on_road_surface() {
        let lane = BikeLane {
            id: "way/4".into(),
            points: vec![Point2::new(0.0, 0.0), Point2::new(0.0, 10.0)],
            width_mm: 0.5,
            kind: BikeLaneKind::Lane,
        };
        let (min, max) = bike_lane(&lane, None, &SceneParams::default()).unwrap().bounds().unwrap();
        assert_relative_eq!(min.z, 2.1, epsilon = 1e-12);
        assert_relative_eq!(max.z, 2.2, epsilon = 1e-12);
    }
}
