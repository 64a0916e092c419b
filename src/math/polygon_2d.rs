use super::{points_coincide, Point2};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the polygon with counter-clockwise winding.
///
/// The vertex order is reversed when the signed area is negative and kept
/// as-is otherwise, so applying this twice is the same as applying it once.
#[must_use]
pub fn ensure_ccw(points: &[Point2]) -> Vec<Point2> {
    if signed_area(points) < 0.0 {
        points.iter().rev().copied().collect()
    } else {
        points.to_vec()
    }
}

/// Removes consecutive near-duplicate vertices.
///
/// A vertex within `tol` of the previously kept vertex is dropped. If the
/// last kept vertex then coincides with the first (closed ways that repeat
/// their start point), it is dropped as well.
#[must_use]
pub fn dedup_consecutive(points: &[Point2], tol: f64) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for pt in points {
        match out.last() {
            Some(last) if points_coincide(last, pt, tol) => {}
            _ => out.push(*pt),
        }
    }
    if out.len() > 1 && points_coincide(&out[0], &out[out.len() - 1], tol) {
        out.pop();
    }
    out
}

/// Returns the left-pointing normal `(-dy, dx)` of the segment `a → b`,
/// normalized, or `None` if the segment has zero length.
#[must_use]
pub fn segment_left_normal(a: &Point2, b: &Point2) -> Option<super::Vector2> {
    let d = b - a;
    let len = d.norm();
    if len > 0.0 {
        Some(super::Vector2::new(-d.y / len, d.x / len))
    } else {
        None
    }
}
