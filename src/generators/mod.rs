//! Per-feature mesh generators.
//!
//! Every generator returns `None` when a feature yields no printable
//! geometry: too few points, a non-positive height, a buffer or clip that
//! collapses below a triangle, or an extrusion that comes back empty.

mod building;
mod feature;
mod markers;
mod params;
mod plate;
mod ribbon;

pub use building::building;
pub use feature::Feature;
pub use markers::{bus_stop, curb, curb_height, feature_slot, traffic_signal};
pub use params::{Heights, MarkerParams, SceneParams};
pub use plate::{base_plate, orientation_marker};
pub use ribbon::{bike_lane, crossing, road, sidewalk};

use tracing::trace;

use crate::math::Point2;
use crate::operations::shaping::ExtrudePolygon;
use crate::tessellation::TriangleMesh;

/// Extrudes `polygon` to `height` above `z_base`, mapping every degenerate
/// outcome to `None`.
fn solid(polygon: &[Point2], height: f64, z_base: f64) -> Option<TriangleMesh> {
    if height <= 0.0 {
        trace!(height, "non-positive height");
        return None;
    }
    if polygon.len() < 3 {
        return None;
    }
    let mesh = ExtrudePolygon::new(polygon, height)
        .with_base(z_base)
        .execute();
    if mesh.is_empty() {
        trace!(vertices = polygon.len(), "footprint collapsed during extrusion");
        return None;
    }
    Some(mesh)
}
