//! Serde adapters that read and write local points as `{ "x": .., "y": .. }`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::math::Point2;

#[derive(Serialize, Deserialize)]
struct LocalPoint {
    x: f64,
    y: f64,
}

impl From<&Point2> for LocalPoint {
    fn from(p: &Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<LocalPoint> for Point2 {
    fn from(p: LocalPoint) -> Self {
        Point2::new(p.x, p.y)
    }
}

/// A single point.
pub mod point {
    use super::{Deserialize, Deserializer, LocalPoint, Point2, Serialize, Serializer};

    pub fn serialize<S: Serializer>(point: &Point2, serializer: S) -> Result<S::Ok, S::Error> {
        LocalPoint::from(point).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Point2, D::Error> {
        LocalPoint::deserialize(deserializer).map(Point2::from)
    }
}

/// An ordered list of points (polylines and footprints).
pub mod points {
    use super::{Deserialize, Deserializer, LocalPoint, Point2, Serializer};

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S: Serializer>(points: &Vec<Point2>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(points.iter().map(LocalPoint::from))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Point2>, D::Error> {
        let raw = Vec::<LocalPoint>::deserialize(deserializer)?;
        Ok(raw.into_iter().map(Point2::from).collect())
    }
}
