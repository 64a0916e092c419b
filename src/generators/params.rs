//! Heights and marker dimensions used by the feature generators.

use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};

/// Vertical layer heights in millimeters (Z axis of the printed plate).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Heights {
    pub base_plate: f64,

    pub road_surface: f64,
    pub crossing: f64,
    pub sidewalk: f64,

    pub curb_flush: f64,
    pub curb_lowered: f64,
    pub curb_raised: f64,
    pub curb_rolled: f64,

    /// Depth of the void cut for a feature slot.
    pub feature_slot_depth: f64,
    /// Height of a separately printed piece inserted into a slot.
    pub feature_piece: f64,
    /// Tallest feature on the plate.
    pub orientation_marker: f64,
    /// Default building height when none is known upstream.
    pub building: f64,
}

impl Default for Heights {
    fn default() -> Self {
        Self {
            base_plate: 2.0,
            road_surface: 0.1,
            crossing: 0.8,
            sidewalk: 2.5,
            curb_flush: 0.0,
            curb_lowered: 1.2,
            curb_raised: 2.5,
            curb_rolled: 1.8,
            feature_slot_depth: 2.0,
            feature_piece: 4.0,
            orientation_marker: 5.5,
            building: 3.0,
        }
    }
}

/// Footprint sizes of point markers, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkerParams {
    /// Side of the square curb marker.
    pub curb_size: f64,
    /// Across-corners size of the traffic signal octagon.
    pub signal_size: f64,
    /// Across-corners size of the bus stop octagon.
    pub bus_stop_size: f64,
    /// Height of signal and bus stop columns above the plate.
    pub point_marker_height: f64,
    /// Thickness of the slab marking a feature slot.
    pub slot_indicator_height: f64,
    /// Side of the orientation marker square.
    pub orientation_marker_size: f64,
    /// Inset of the orientation marker from the plate edges.
    pub orientation_marker_inset: f64,
    /// Total length synthesized for a crossing mapped as a single node.
    pub crossing_span: f64,
}

impl Default for MarkerParams {
    fn default() -> Self {
        Self {
            curb_size: 3.0,
            signal_size: 3.0,
            bus_stop_size: 4.0,
            point_marker_height: 3.0,
            slot_indicator_height: 0.2,
            orientation_marker_size: 8.0,
            orientation_marker_inset: 2.0,
            crossing_span: 8.0,
        }
    }
}

/// Parameters controlling scene generation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneParams {
    pub heights: Heights,
    pub markers: MarkerParams,
}

impl SceneParams {
    /// Parses parameters from JSON. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Json`] if the text is not valid JSON or a field
    /// has the wrong type.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| InputError::Json(e).into())
    }
}
