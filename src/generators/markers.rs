//! Generators for point features: small columns and slabs placed at a node.

use std::f64::consts::FRAC_PI_4;

use tracing::trace;

use super::{solid, Heights, SceneParams};
use crate::features::{BusStop, Curb, CurbKind, FeatureSlot, TrafficSignal};
use crate::math::Point2;
use crate::tessellation::TriangleMesh;

/// Printed height of a curb marker for each curb kind.
#[must_use]
pub fn curb_height(kind: CurbKind, heights: &Heights) -> f64 {
    match kind {
        CurbKind::Flush => heights.curb_flush,
        CurbKind::Lowered => heights.curb_lowered,
        CurbKind::Raised => heights.curb_raised,
        CurbKind::Rolled => heights.curb_rolled,
    }
}

fn square_at(center: &Point2, size: f64) -> [Point2; 4] {
    let hs = size / 2.0;
    [
        Point2::new(center.x - hs, center.y - hs),
        Point2::new(center.x + hs, center.y - hs),
        Point2::new(center.x + hs, center.y + hs),
        Point2::new(center.x - hs, center.y + hs),
    ]
}

/// Regular octagon with its first vertex on the +X axis.
fn octagon_at(center: &Point2, size: f64) -> [Point2; 8] {
    let r = size / 2.0;
    std::array::from_fn(|i| {
        #[allow(clippy::cast_precision_loss)]
        let angle = i as f64 * FRAC_PI_4;
        Point2::new(center.x + r * angle.cos(), center.y + r * angle.sin())
    })
}

/// A square column whose height tells the curb kind apart. Flush curbs
/// have no height and produce nothing.
#[must_use]
pub fn curb(curb: &Curb, params: &SceneParams) -> Option<TriangleMesh> {
    let height = curb_height(curb.kind, &params.heights);
    if height <= 0.0 {
        trace!(id = %curb.id, kind = ?curb.kind, "curb has no printed height");
        return None;
    }
    let outline = square_at(&curb.position, params.markers.curb_size);
    solid(&outline, height, params.heights.base_plate)
}

#[must_use]
pub fn traffic_signal(signal: &TrafficSignal, params: &SceneParams) -> Option<TriangleMesh> {
    let m = &params.markers;
    let outline = octagon_at(&signal.position, m.signal_size);
    solid(&outline, m.point_marker_height, params.heights.base_plate)
}

#[must_use]
pub fn bus_stop(stop: &BusStop, params: &SceneParams) -> Option<TriangleMesh> {
    let m = &params.markers;
    let outline = octagon_at(&stop.position, m.bus_stop_size);
    solid(&outline, m.point_marker_height, params.heights.base_plate)
}

/// A thin slab sunk into the plate surface where a separately printed piece
/// will be inserted, rotated by the slot's `rotation_deg` about its center.
#[must_use]
pub fn feature_slot(slot: &FeatureSlot, params: &SceneParams) -> Option<TriangleMesh> {
    let hw = slot.width_mm / 2.0;
    let hd = slot.depth_mm / 2.0;
    let (sin, cos) = slot.rotation_deg.to_radians().sin_cos();
    let outline = [(-hw, -hd), (hw, -hd), (hw, hd), (-hw, hd)].map(|(x, y)| {
        Point2::new(
            slot.position.x + x * cos - y * sin,
            slot.position.y + x * sin + y * cos,
        )
    });

    let thickness = params.markers.slot_indicator_height;
    solid(&outline, thickness, params.heights.base_plate - thickness)
}
