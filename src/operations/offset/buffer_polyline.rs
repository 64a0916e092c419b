use crate::math::polygon_2d::segment_left_normal;
use crate::math::{Point2, Vector2, TOLERANCE};

/// Offsets an open centerline into a closed ribbon polygon.
///
/// # Algorithm
///
/// Each vertex is displaced by `width / 2` along its vertex normal, the
/// normalized average of the left normals of its adjacent segments. The left
/// edge is emitted in the original order and the right edge reversed, giving
/// a closed polygon of `2 × n` vertices.
///
/// This is a displacement-based approximation, not a Minkowski offset: no
/// miter or bevel geometry is produced at corners, and very sharp turns
/// produce a slight self-overlap on the inside of the turn.
///
/// # Degenerate input
///
/// - Fewer than 2 points: empty output.
/// - Zero-length segments are ignored when averaging normals.
/// - A vertex with no valid adjacent segment, or whose averaged normal
///   vanishes (a 180° reversal), uses the normal `(0, 1)`.
#[derive(Debug)]
pub struct BufferPolyline<'a> {
    points: &'a [Point2],
    width: f64,
}

impl<'a> BufferPolyline<'a> {
    /// Creates a new buffer operation for a centerline of total `width`.
    #[must_use]
    pub fn new(points: &'a [Point2], width: f64) -> Self {
        Self { points, width }
    }

    /// Executes the buffer, returning the ribbon outline.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }

        let half_width = self.width / 2.0;
        let mut left = Vec::with_capacity(n);
        let mut right = Vec::with_capacity(n);

        for (i, pt) in self.points.iter().enumerate() {
            let offset = vertex_normal(self.points, i) * half_width;
            left.push(pt + offset);
            right.push(pt - offset);
        }

        left.extend(right.into_iter().rev());
        left
    }
}

/// Computes the unit normal at vertex `index`, averaged over its adjacent
/// non-degenerate segments.
fn vertex_normal(points: &[Point2], index: usize) -> Vector2 {
    let fallback = Vector2::new(0.0, 1.0);
    let curr = &points[index];

    let incoming = index
        .checked_sub(1)
        .and_then(|prev| segment_left_normal(&points[prev], curr));
    let outgoing = points
        .get(index + 1)
        .and_then(|next| segment_left_normal(curr, next));

    let (sum, count) = [incoming, outgoing]
        .into_iter()
        .flatten()
        .fold((Vector2::zeros(), 0_u32), |(sum, count), n| (sum + n, count + 1));

    if count == 0 {
        return fallback;
    }

    let avg = sum / f64::from(count);
    let len = avg.norm();
    if len < TOLERANCE {
        return fallback;
    }
    avg / len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::signed_area;

    /// Helper: asserts two points are approximately equal.
    fn assert_point_near(a: &Point2, b: &Point2, tol: f64, msg: &str) {
        let d = (a - b).norm();
        assert!(d < tol, "{msg}: expected ({}, {}), got ({}, {}), dist={d}", b.x, b.y, a.x, a.y);
    }

    #[test]
    fn fewer_than_two_points_is_empty() {
        assert!(BufferPolyline::new(&[], 2.0).execute().is_empty());
        assert!(BufferPolyline::new(&[Point2::new(1.0, 1.0)], 2.0).execute().is_empty());
    }

    #[test]
    fn straight_line_offset() {
        let points = [Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)];
        let result = BufferPolyline::new(&points, 2.0).execute();

        assert_eq!(result.len(), 4);
        assert_point_near(&result[0], &Point2::new(0.0, 1.0), 1e-9, "left start");
        assert_point_near(&result[1], &Point2::new(10.0, 1.0), 1e-9, "left end");
        assert_point_near(&result[2], &Point2::new(10.0, -1.0), 1e-9, "right end");
        assert_point_near(&result[3], &Point2::new(0.0, -1.0), 1e-9, "right start");
        // Left edge forward + right edge back traces the ribbon clockwise.
        assert!((signed_area(&result) + 20.0).abs() < 1e-9);
    }

    #[test]
    fn vertex_count_is_twice_point_count() {
        let points: Vec<Point2> = (0..7)
            .map(|i| Point2::new(f64::from(i) * 3.0, f64::from(i % 2) * 2.0))
            .collect();
        for width in [0.5, 1.0, 4.0] {
            assert_eq!(BufferPolyline::new(&points, width).execute().len(), 14);
        }
    }

    #[test]
    fn l_shape_corner_uses_averaged_normal() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
        ];
        let result = BufferPolyline::new(&points, 2.0).execute();
        assert_eq!(result.len(), 6);

        // Corner normal is (-1, 1)/√2: displaced by exactly half the width.
        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert_point_near(&result[1], &Point2::new(10.0 - s, s), 1e-9, "left corner");
        assert_point_near(&result[4], &Point2::new(10.0 + s, -s), 1e-9, "right corner");
    }

    #[test]
    fn duplicate_vertices_are_ignored_for_normals() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 0.0),
        ];
        let result = BufferPolyline::new(&points, 2.0).execute();
        for pt in &result[..4] {
            assert!((pt.y - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn coincident_points_fall_back_to_north() {
        let points = [Point2::new(3.0, 3.0), Point2::new(3.0, 3.0)];
        let result = BufferPolyline::new(&points, 4.0).execute();
        assert_point_near(&result[0], &Point2::new(3.0, 5.0), 1e-9, "left");
        assert_point_near(&result[3], &Point2::new(3.0, 1.0), 1e-9, "right");
    }

    #[test]
    fn reversal_falls_back_to_north() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 0.0),
        ];
        let result = BufferPolyline::new(&points, 2.0).execute();
        assert_point_near(&result[1], &Point2::new(10.0, 1.0), 1e-9, "tip left");
        assert_point_near(&result[4], &Point2::new(10.0, -1.0), 1e-9, "tip right");
    }
}
