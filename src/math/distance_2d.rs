use super::{Point2, TOLERANCE};

/// Returns the closest point on segment `a → b` to `p`, together with the
/// clamped projection parameter `t ∈ [0, 1]`.
#[must_use]
pub fn closest_point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> (Point2, f64) {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < TOLERANCE {
        // Degenerate segment (zero length).
        return (*a, 0.0);
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (a + d * t, t)
}

/// Returns the minimum distance from `p` to the segment `a → b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let (closest, _) = closest_point_on_segment(p, a, b);
    (p - closest).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn projection_inside_segment() {
        let (c, t) = closest_point_on_segment(
            &Point2::new(3.0, 4.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(10.0, 0.0),
        );
        assert_relative_eq!(c.x, 3.0);
        assert_relative_eq!(c.y, 0.0);
        assert_relative_eq!(t, 0.3);
    }

    #[test]
    fn projection_clamps_to_endpoints() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);
        let (before, t0) = closest_point_on_segment(&Point2::new(-5.0, 1.0), &a, &b);
        let (after, t1) = closest_point_on_segment(&Point2::new(15.0, 1.0), &a, &b);
        assert_eq!(before, a);
        assert_eq!(after, b);
        assert_relative_eq!(t0, 0.0);
        assert_relative_eq!(t1, 1.0);
    }

    #[test]
    fn distance_to_degenerate_segment() {
        let a = Point2::new(1.0, 1.0);
        let d = point_to_segment_dist(&Point2::new(4.0, 5.0), &a, &a);
        assert_relative_eq!(d, 5.0);
    }
}
