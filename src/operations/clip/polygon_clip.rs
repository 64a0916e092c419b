use crate::math::{Point2, Rect};

/// One of the four half-planes bounding a rectangle.
#[derive(Debug, Clone, Copy)]
enum HalfPlane {
    XMin(f64),
    XMax(f64),
    YMin(f64),
    YMax(f64),
}

impl HalfPlane {
    fn inside(self, p: &Point2) -> bool {
        match self {
            Self::XMin(v) => p.x >= v,
            Self::XMax(v) => p.x <= v,
            Self::YMin(v) => p.y >= v,
            Self::YMax(v) => p.y <= v,
        }
    }

    /// Intersection of segment `a → b` with the boundary line. Only called
    /// when the endpoints lie on opposite sides, so the divisor is non-zero.
    fn intersect(self, a: &Point2, b: &Point2) -> Point2 {
        match self {
            Self::XMin(v) | Self::XMax(v) => {
                let t = (v - a.x) / (b.x - a.x);
                Point2::new(v, a.y + t * (b.y - a.y))
            }
            Self::YMin(v) | Self::YMax(v) => {
                let t = (v - a.y) / (b.y - a.y);
                Point2::new(a.x + t * (b.x - a.x), v)
            }
        }
    }
}

/// Clips a polygon to `rect` (Sutherland–Hodgman).
///
/// Clips against `x ≥ x_min`, `x ≤ x_max`, `y ≥ y_min` and `y ≤ y_max` in
/// turn. Returns an empty polygon when the input has fewer than 3 vertices or
/// lies entirely outside. The winding of the input is preserved.
#[must_use]
pub fn clip_polygon_to_rect(polygon: &[Point2], rect: &Rect) -> Vec<Point2> {
    if polygon.len() < 3 {
        return Vec::new();
    }

    let planes = [
        HalfPlane::XMin(rect.x_min),
        HalfPlane::XMax(rect.x_max),
        HalfPlane::YMin(rect.y_min),
        HalfPlane::YMax(rect.y_max),
    ];

    let mut output = polygon.to_vec();
    for plane in planes {
        if output.is_empty() {
            break;
        }
        output = clip_against(&output, plane);
    }
    output
}

fn clip_against(input: &[Point2], plane: HalfPlane) -> Vec<Point2> {
    let n = input.len();
    let mut output = Vec::with_capacity(n + 1);

    for i in 0..n {
        let curr = &input[i];
        let next = &input[(i + 1) % n];
        match (plane.inside(curr), plane.inside(next)) {
            (true, true) => output.push(*next),
            (true, false) => output.push(plane.intersect(curr, next)),
            (false, true) => {
                output.push(plane.intersect(curr, next));
                output.push(*next);
            }
            (false, false) => {}
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::signed_area;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn plate() -> Rect {
        Rect::new(0.0, 0.0, 10.0, 10.0)
    }

    #[test]
    fn polygon_inside_is_unchanged_up_to_rotation() {
        let poly = vec![p(2.0, 2.0), p(8.0, 2.0), p(8.0, 8.0), p(2.0, 8.0)];
        let out = clip_polygon_to_rect(&poly, &plate());
        assert_eq!(out.len(), 4);
        for v in &poly {
            assert!(out.contains(v), "missing vertex {v:?}");
        }
        assert!((signed_area(&out) - signed_area(&poly)).abs() < 1e-12);
    }

    #[test]
    fn polygon_outside_is_empty() {
        let poly = vec![p(20.0, 20.0), p(30.0, 20.0), p(30.0, 30.0)];
        assert!(clip_polygon_to_rect(&poly, &plate()).is_empty());
    }

    #[test]
    fn straddling_square_is_cut_at_boundary() {
        let poly = vec![p(5.0, 5.0), p(15.0, 5.0), p(15.0, 15.0), p(5.0, 15.0)];
        let out = clip_polygon_to_rect(&poly, &plate());
        assert!((signed_area(&out) - 25.0).abs() < 1e-9);
        for v in &out {
            assert!(plate().contains(v));
        }
    }

    #[test]
    fn enclosing_polygon_becomes_the_rectangle() {
        let poly = vec![p(-5.0, -5.0), p(15.0, -5.0), p(15.0, 15.0), p(-5.0, 15.0)];
        let out = clip_polygon_to_rect(&poly, &plate());
        assert!((signed_area(&out) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn clockwise_winding_is_preserved() {
        let poly = vec![p(5.0, 15.0), p(15.0, 15.0), p(15.0, 5.0), p(5.0, 5.0)];
        let out = clip_polygon_to_rect(&poly, &plate());
        assert!((signed_area(&out) + 25.0).abs() < 1e-9);
    }

    #[test]
    fn too_few_vertices_is_empty() {
        assert!(clip_polygon_to_rect(&[p(1.0, 1.0), p(2.0, 2.0)], &plate()).is_empty());
    }
}
