//! Normalized map features, the input of scene assembly.
//!
//! All coordinates are local plate millimeters. The JSON form uses camelCase
//! keys and `{ "x": .., "y": .. }` points.

mod nodes;
mod point_serde;
mod ways;

pub use nodes::{BusStop, Curb, CurbKind, FeatureSlot, SignalKind, SlotKind, TrafficSignal};
pub use ways::{BikeLane, BikeLaneKind, Building, Crossing, CrossingKind, Road, Sidewalk, SidewalkSide};

use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};
use crate::geo::GeoBounds;
use crate::math::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Describes where the map came from and how it is scaled onto the plate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMetadata {
    pub center: LatLng,
    #[serde(default)]
    pub radius_metres: f64,
    #[serde(default)]
    pub fetched_at: String,
    /// The provider query the raw data was fetched with.
    #[serde(default, rename = "overpassQuery")]
    pub query: String,
    /// Millimeters of plate per real-world meter.
    pub scale_factor: f64,
    pub plate_width_mm: f64,
    pub plate_height_mm: f64,
}

impl MapMetadata {
    /// The print plate, centered at the local origin.
    #[must_use]
    pub fn plate_rect(&self) -> Rect {
        Rect::centered(self.plate_width_mm, self.plate_height_mm)
    }
}

/// Geographic extent of the data plus its extent in local millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapBounds {
    #[serde(flatten)]
    pub geo: GeoBounds,
    pub local_min_x: f64,
    pub local_min_y: f64,
    pub local_max_x: f64,
    pub local_max_y: f64,
}

impl MapBounds {
    #[must_use]
    pub fn local_rect(&self) -> Rect {
        Rect::new(self.local_min_x, self.local_min_y, self.local_max_x, self.local_max_y)
    }
}

/// The complete normalized feature set for one plate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TactileMapData {
    pub metadata: MapMetadata,
    #[serde(default)]
    pub bounds: MapBounds,
    #[serde(default)]
    pub roads: Vec<Road>,
    #[serde(default)]
    pub sidewalks: Vec<Sidewalk>,
    #[serde(default)]
    pub crossings: Vec<Crossing>,
    #[serde(default)]
    pub curbs: Vec<Curb>,
    #[serde(default)]
    pub traffic_signals: Vec<TrafficSignal>,
    #[serde(default)]
    pub bus_stops: Vec<BusStop>,
    #[serde(default)]
    pub bike_lanes: Vec<BikeLane>,
    #[serde(default)]
    pub buildings: Vec<Building>,
    #[serde(default)]
    pub feature_slots: Vec<FeatureSlot>,
}

impl TactileMapData {
    /// Creates an empty feature set for a plate of the given size.
    #[must_use]
    pub fn empty(plate_width_mm: f64, plate_height_mm: f64, scale_factor: f64) -> Self {
        Self {
            metadata: MapMetadata {
                center: LatLng::default(),
                radius_metres: 0.0,
                fetched_at: String::new(),
                query: String::new(),
                scale_factor,
                plate_width_mm,
                plate_height_mm,
            },
            bounds: MapBounds::default(),
            roads: Vec::new(),
            sidewalks: Vec::new(),
            crossings: Vec::new(),
            curbs: Vec::new(),
            traffic_signals: Vec::new(),
            bus_stops: Vec::new(),
            bike_lanes: Vec::new(),
            buildings: Vec::new(),
            feature_slots: Vec::new(),
        }
    }

    /// Parses a feature set from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Json`] if the text is not valid JSON or does not
    /// match the expected shape.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| InputError::Json(e).into())
    }

    /// Serializes the feature set to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| InputError::Json(e).into())
    }

    /// Total number of features across all collections.
    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.roads.len()
            + self.sidewalks.len()
            + self.crossings.len()
            + self.curbs.len()
            + self.traffic_signals.len()
            + self.bus_stops.len()
            + self.bike_lanes.len()
            + self.buildings.len()
            + self.feature_slots.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use approx::assert_relative_eq;

    const SAMPLE: &str = r#"{
        "metadata": {
            "center": { "lat": 52.52, "lng": 13.405 },
            "radiusMetres": 300,
            "fetchedAt": "2024-05-01T12:00:00Z",
            "overpassQuery": "[out:json];",
            "scaleFactor": 0.25,
            "plateWidthMm": 150,
            "plateHeightMm": 150
        },
        "bounds": {
            "south": 52.5173, "west": 13.4006, "north": 52.5227, "east": 13.4094,
            "localMinX": -75, "localMinY": -75, "localMaxX": 75, "localMaxY": 75
        },
        "roads": [{
            "id": "way/1", "name": "Main St", "highwayType": "residential",
            "points": [{ "x": -80, "y": 0 }, { "x": 80, "y": 0 }],
            "widthMm": 1.5, "lanes": 2, "oneway": false, "surface": null
        }],
        "crossings": [{
            "id": "node/7", "type": "zebra", "points": [{ "x": 10, "y": 3 }],
            "widthMm": 0.75, "hasSignal": false, "hasTactilePaving": true
        }],
        "curbs": [{
            "id": "node/8", "type": "lowered", "heightMm": 0.5,
            "position": { "x": 12, "y": 4 },
            "associatedSidewalkId": null, "associatedCrossingId": "node/7"
        }],
        "featureSlots": [{
            "id": "slot/1", "position": { "x": 0, "y": 20 }, "slotType": "stop_sign",
            "rotationDeg": 45, "widthMm": 6, "depthMm": 3
        }]
    }"#;

    #[test]
    fn parses_camel_case_json() {
        let data = TactileMapData::from_json(SAMPLE).unwrap();
        assert_relative_eq!(data.metadata.plate_width_mm, 150.0);
        assert_eq!(data.metadata.query, "[out:json];");
        assert_eq!(data.bounds.local_rect(), Rect::centered(150.0, 150.0));
        assert_eq!(data.roads[0].points[1], Point2::new(80.0, 0.0));
        assert_eq!(data.roads[0].lanes, Some(2));
        assert_eq!(data.crossings[0].kind, CrossingKind::Zebra);
        assert!(data.crossings[0].has_tactile_paving);
        assert_eq!(data.curbs[0].kind, CurbKind::Lowered);
        assert_eq!(data.feature_slots[0].slot_type, SlotKind::StopSign);
    }

    #[test]
    fn missing_collections_are_empty() {
        let data = TactileMapData::from_json(SAMPLE).unwrap();
        assert!(data.sidewalks.is_empty());
        assert!(data.buildings.is_empty());
        assert!(data.bus_stops.is_empty());
        assert_eq!(data.feature_count(), 4);
    }

    #[test]
    fn json_round_trip_preserves_features() {
        let data = TactileMapData::from_json(SAMPLE).unwrap();
        let again = TactileMapData::from_json(&data.to_json().unwrap()).unwrap();
        assert_eq!(data, again);
    }

    #[test]
    fn malformed_json_is_an_input_error() {
        let err = TactileMapData::from_json("{ \"metadata\": 3 }").unwrap_err();
        assert!(matches!(err, crate::TactimeshError::Input(InputError::Json(_))));
    }

    #[test]
    fn plate_rect_is_centered() {
        let data = TactileMapData::empty(150.0, 100.0, 0.25);
        assert_eq!(data.metadata.plate_rect(), Rect::new(-75.0, -50.0, 75.0, 50.0));
        assert_eq!(data.feature_count(), 0);
    }
}
