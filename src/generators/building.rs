use tracing::trace;

use super::{solid, SceneParams};
use crate::features::Building;
use crate::tessellation::TriangleMesh;

/// Extrudes a building footprint to its own height above the plate.
///
/// Footprints of closed ways repeat their first vertex at the end; the
/// extrusion drops that duplicate.
#[must_use]
pub fn building(building: &Building, params: &SceneParams) -> Option<TriangleMesh> {
    if building.footprint.len() < 3 {
        trace!(id = %building.id, "building footprint has fewer than 3 points");
        return None;
    }
    solid(&building.footprint, building.height_mm, params.heights.base_plate)
}
