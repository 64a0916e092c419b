use serde::{Deserialize, Serialize};

use super::MeshId;

/// The fixed set of scene layers, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerName {
    BasePlate,
    Roads,
    Sidewalks,
    Crossings,
    Buildings,
    Curbs,
    BikeLanes,
    OrientationMarker,
    TrafficSignals,
    BusStops,
    FeatureSlots,
}

impl LayerName {
    /// Every layer, in the order an assembled scene lists them.
    pub const ALL: [Self; 11] = [
        Self::BasePlate,
        Self::Roads,
        Self::Sidewalks,
        Self::Crossings,
        Self::Buildings,
        Self::Curbs,
        Self::BikeLanes,
        Self::OrientationMarker,
        Self::TrafficSignals,
        Self::BusStops,
        Self::FeatureSlots,
    ];

    /// Stable machine name, matching the serialized form.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::BasePlate => "basePlate",
            Self::Roads => "roads",
            Self::Sidewalks => "sidewalks",
            Self::Crossings => "crossings",
            Self::Buildings => "buildings",
            Self::Curbs => "curbs",
            Self::BikeLanes => "bikeLanes",
            Self::OrientationMarker => "orientationMarker",
            Self::TrafficSignals => "trafficSignals",
            Self::BusStops => "busStops",
            Self::FeatureSlots => "featureSlots",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BasePlate => "Base Plate",
            Self::Roads => "Roads",
            Self::Sidewalks => "Sidewalks",
            Self::Crossings => "Crossings",
            Self::Buildings => "Buildings",
            Self::Curbs => "Curbs",
            Self::BikeLanes => "Bike Lanes",
            Self::OrientationMarker => "Orientation Marker",
            Self::TrafficSignals => "Traffic Signals",
            Self::BusStops => "Bus Stops",
            Self::FeatureSlots => "Feature Slots",
        }
    }

    /// Preview color as a `#rrggbb` hex string.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::BasePlate => "#e0e0e0",
            Self::Roads => "#404040",
            Self::Sidewalks => "#a0a0a0",
            Self::Crossings => "#ffffff",
            Self::Buildings => "#8b7355",
            Self::Curbs => "#606060",
            Self::BikeLanes => "#4a9c2f",
            Self::OrientationMarker => "#ff6600",
            Self::TrafficSignals => "#cc0000",
            Self::BusStops => "#0066cc",
            Self::FeatureSlots => "#ffcc00",
        }
    }
}

impl std::fmt::Display for LayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A named group of meshes with shared presentation attributes.
///
/// The layer holds handles only; the meshes live in the scene's
/// [`MeshStore`](super::MeshStore).
#[derive(Debug, Clone)]
pub struct Layer {
    pub name: LayerName,
    pub label: &'static str,
    pub color: &'static str,
    pub visible: bool,
    pub meshes: Vec<MeshId>,
}

impl Layer {
    /// Creates a visible layer with the default label and color for `name`.
    #[must_use]
    pub fn new(name: LayerName, meshes: Vec<MeshId>) -> Self {
        Self {
            name,
            label: name.label(),
            color: name.color(),
            visible: true,
            meshes,
        }
    }
}
