//! Geographic ↔ local plate coordinate conversion.
//!
//! Local coordinates are planar millimeters relative to a chosen center,
//! using an equirectangular approximation: a fixed length per degree of
//! latitude and a cosine correction for longitude at the center latitude.

use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// Approximate meters per degree of latitude.
pub const METRES_PER_DEGREE: f64 = 111_320.0;

/// Converts a geographic position to local millimeters.
///
/// `scale_factor` is in millimeters per real-world meter.
#[must_use]
pub fn lat_lng_to_local(
    lat: f64,
    lng: f64,
    center_lat: f64,
    center_lng: f64,
    scale_factor: f64,
) -> Point2 {
    let metres_per_degree_lng = METRES_PER_DEGREE * center_lat.to_radians().cos();

    let x_metres = (lng - center_lng) * metres_per_degree_lng;
    let y_metres = (lat - center_lat) * METRES_PER_DEGREE;

    Point2::new(x_metres * scale_factor, y_metres * scale_factor)
}

/// Converts local millimeters back to a geographic `(lat, lng)` pair.
///
/// Exact inverse of [`lat_lng_to_local`] for the same center and scale.
#[must_use]
pub fn local_to_lat_lng(
    point: &Point2,
    center_lat: f64,
    center_lng: f64,
    scale_factor: f64,
) -> (f64, f64) {
    let metres_per_degree_lng = METRES_PER_DEGREE * center_lat.to_radians().cos();

    let x_metres = point.x / scale_factor;
    let y_metres = point.y / scale_factor;

    (
        center_lat + y_metres / METRES_PER_DEGREE,
        center_lng + x_metres / metres_per_degree_lng,
    )
}

/// Computes the scale factor (mm per meter) that fits a circle of
/// `radius_metres` across a plate of `plate_width_mm`.
#[must_use]
pub fn scale_factor_for_radius(radius_metres: f64, plate_width_mm: f64) -> f64 {
    plate_width_mm / (2.0 * radius_metres)
}

/// A geographic bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Computes the box spanning `radius_metres` around a center point.
    #[must_use]
    pub fn from_center(lat: f64, lng: f64, radius_metres: f64) -> Self {
        let lat_delta = radius_metres / METRES_PER_DEGREE;
        let lng_delta = radius_metres / (METRES_PER_DEGREE * lat.to_radians().cos());
        Self {
            south: lat - lat_delta,
            west: lng - lng_delta,
            north: lat + lat_delta,
            east: lng + lng_delta,
        }
    }
}
