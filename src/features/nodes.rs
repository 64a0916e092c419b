use serde::{Deserialize, Serialize};

use super::point_serde;
use crate::math::Point2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurbKind {
    Flush,
    Lowered,
    Raised,
    Rolled,
}

/// A curb transition point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curb {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CurbKind,
    /// Height recorded upstream. The printed height is derived from `kind`.
    #[serde(default)]
    pub height_mm: f64,
    #[serde(with = "point_serde::point")]
    pub position: Point2,
    #[serde(default)]
    pub associated_sidewalk_id: Option<String>,
    #[serde(default)]
    pub associated_crossing_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    TrafficSignals,
    PedestrianSignals,
    Button,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSignal {
    pub id: String,
    #[serde(with = "point_serde::point")]
    pub position: Point2,
    pub signal_type: SignalKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusStop {
    pub id: String,
    #[serde(with = "point_serde::point")]
    pub position: Point2,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub shelter: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    StopSign,
    YieldSign,
    BusStop,
    Mailbox,
    BikeLane,
    Railroad,
    PedestrianCrossing,
}

/// A placeholder void for a separately printed piece (sign, mailbox, ...).
///
/// Only a thin indicator slab is generated; the void itself is left for a
/// later subtractive step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSlot {
    pub id: String,
    #[serde(with = "point_serde::point")]
    pub position: Point2,
    pub slot_type: SlotKind,
    #[serde(default)]
    pub rotation_deg: f64,
    pub width_mm: f64,
    pub depth_mm: f64,
}
