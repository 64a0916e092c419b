pub mod distance_2d;
pub mod polygon_2d;
pub mod rect;

pub use rect::Rect;

/// 2D point type in local plate millimeters (x = east, y = north).
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Tolerance for degenerate lengths (zero-length segments, vanishing normals).
pub const TOLERANCE: f64 = 1e-10;

/// Tolerance in millimeters for treating two vertices as the same point.
///
/// Used for consecutive-vertex deduplication and for polyline continuity
/// when stitching clipped segments back together.
pub const DEDUP_TOLERANCE: f64 = 1e-6;

/// Returns `true` if two points coincide within `tol` on both axes.
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2, tol: f64) -> bool {
    (a.x - b.x).abs() <= tol && (a.y - b.y).abs() <= tol
}
