use serde::{Deserialize, Serialize};

use super::point_serde;
use crate::math::Point2;

/// A road centerline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Road {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Classification tag (`residential`, `primary`, ...).
    pub highway_type: String,
    #[serde(with = "point_serde::points")]
    pub points: Vec<Point2>,
    pub width_mm: f64,
    #[serde(default)]
    pub lanes: Option<u32>,
    #[serde(default)]
    pub oneway: bool,
    #[serde(default)]
    pub surface: Option<String>,
}

/// Which side of its street a sidewalk runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SidewalkSide {
    Left,
    Right,
    Both,
}

/// A sidewalk centerline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidewalk {
    pub id: String,
    #[serde(with = "point_serde::points")]
    pub points: Vec<Point2>,
    pub width_mm: f64,
    #[serde(default)]
    pub side: Option<SidewalkSide>,
    #[serde(default)]
    pub surface: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossingKind {
    Zebra,
    Marked,
    Unmarked,
    Signals,
    Uncontrolled,
}

/// A pedestrian crossing.
///
/// Mapped either as a way (two or more points, already oriented across the
/// road) or as a single node whose orientation is inferred from the nearest
/// road during scene assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crossing {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CrossingKind,
    #[serde(with = "point_serde::points")]
    pub points: Vec<Point2>,
    pub width_mm: f64,
    #[serde(default)]
    pub has_signal: bool,
    #[serde(default)]
    pub has_tactile_paving: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BikeLaneKind {
    Lane,
    Track,
    Shared,
}

/// A bike lane centerline. The kind does not affect geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BikeLane {
    pub id: String,
    #[serde(with = "point_serde::points")]
    pub points: Vec<Point2>,
    pub width_mm: f64,
    #[serde(rename = "type")]
    pub kind: BikeLaneKind,
}

/// A building footprint, possibly repeating its first vertex at the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: String,
    #[serde(with = "point_serde::points")]
    pub footprint: Vec<Point2>,
    pub height_mm: f64,
}
