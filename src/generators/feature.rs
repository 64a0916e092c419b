use super::{
    bike_lane, building, bus_stop, crossing, curb, feature_slot, road, sidewalk, traffic_signal,
    SceneParams,
};
use crate::features::{
    BikeLane, Building, BusStop, Crossing, Curb, FeatureSlot, Road, Sidewalk, TrafficSignal,
};
use crate::math::Rect;
use crate::scene::LayerName;
use crate::tessellation::TriangleMesh;

/// A borrowed map feature of any kind.
#[derive(Debug, Clone, Copy)]
pub enum Feature<'a> {
    Road(&'a Road),
    Sidewalk(&'a Sidewalk),
    Crossing(&'a Crossing),
    Curb(&'a Curb),
    TrafficSignal(&'a TrafficSignal),
    BusStop(&'a BusStop),
    BikeLane(&'a BikeLane),
    Building(&'a Building),
    FeatureSlot(&'a FeatureSlot),
}

impl Feature<'_> {
    /// Generates the mesh for this feature.
    ///
    /// `clip` trims the buffered outline of linear features; point features
    /// and buildings ignore it.
    #[must_use]
    pub fn generate(&self, clip: Option<&Rect>, params: &SceneParams) -> Option<TriangleMesh> {
        match *self {
            Self::Road(r) => road(r, clip, params),
            Self::Sidewalk(s) => sidewalk(s, clip, params),
            Self::Crossing(c) => crossing(c, clip, params),
            Self::BikeLane(b) => bike_lane(b, clip, params),
            Self::Curb(c) => curb(c, params),
            Self::TrafficSignal(s) => traffic_signal(s, params),
            Self::BusStop(s) => bus_stop(s, params),
            Self::Building(b) => building(b, params),
            Self::FeatureSlot(s) => feature_slot(s, params),
        }
    }

    /// The scene layer this feature's mesh belongs to.
    #[must_use]
    pub fn layer(&self) -> LayerName {
        match self {
            Self::Road(_) => LayerName::Roads,
            Self::Sidewalk(_) => LayerName::Sidewalks,
            Self::Crossing(_) => LayerName::Crossings,
            Self::Curb(_) => LayerName::Curbs,
            Self::TrafficSignal(_) => LayerName::TrafficSignals,
            Self::BusStop(_) => LayerName::BusStops,
            Self::BikeLane(_) => LayerName::BikeLanes,
            Self::Building(_) => LayerName::Buildings,
            Self::FeatureSlot(_) => LayerName::FeatureSlots,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Road(r) => &r.id,
            Self::Sidewalk(s) => &s.id,
            Self::Crossing(c) => &c.id,
            Self::Curb(c) => &c.id,
            Self::TrafficSignal(s) => &s.id,
            Self::BusStop(s) => &s.id,
            Self::BikeLane(b) => &b.id,
            Self::Building(b) => &b.id,
            Self::FeatureSlot(s) => &s.id,
        }
    }
}
