use tracing::warn;

use crate::math::Point2;

/// Triangulates a simple counter-clockwise polygon by ear clipping.
///
/// Returns index triples into `vertices`, each wound counter-clockwise.
/// A vertex is an ear when it turns left (positive cross product) and no
/// other remaining vertex lies inside or on its triangle. The first ear found
/// is clipped and the scan restarts from the beginning.
///
/// Degenerate or self-intersecting input never fails: the loop stops when no
/// ear can be found or after `n²` iterations, and whatever triangles were
/// produced so far are returned. Clockwise input has no left turns and
/// therefore yields no triangles.
#[must_use]
pub fn triangulate_polygon(vertices: &[Point2]) -> Vec<[usize; 3]> {
    let n = vertices.len();
    if n < 3 {
        return Vec::new();
    }

    let mut triangles = Vec::with_capacity(n - 2);
    let mut remaining: Vec<usize> = (0..n).collect();
    let mut budget = n * n;

    while remaining.len() > 2 && budget > 0 {
        budget -= 1;
        let Some(pos) = find_ear(vertices, &remaining) else {
            break;
        };
        let m = remaining.len();
        let prev = remaining[(pos + m - 1) % m];
        let next = remaining[(pos + 1) % m];
        triangles.push([prev, remaining[pos], next]);
        remaining.remove(pos);
    }

    if remaining.len() > 2 {
        warn!(
            vertices = n,
            triangles = triangles.len(),
            unclipped = remaining.len(),
            "ear clipping stopped early; triangulation is partial"
        );
    }

    triangles
}

/// Returns the position in `remaining` of the first ear, if any.
fn find_ear(vertices: &[Point2], remaining: &[usize]) -> Option<usize> {
    let m = remaining.len();
    (0..m).find(|&i| {
        let prev = remaining[(i + m - 1) % m];
        let curr = remaining[i];
        let next = remaining[(i + 1) % m];

        let a = &vertices[prev];
        let b = &vertices[curr];
        let c = &vertices[next];

        if cross(a, b, c) <= 0.0 {
            return false;
        }

        remaining
            .iter()
            .filter(|&&idx| idx != prev && idx != curr && idx != next)
            .all(|&idx| !point_in_triangle(&vertices[idx], a, b, c))
    })
}

/// Cross product of `(b - a) × (c - a)`; positive for a left turn.
fn cross(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Inclusive point-in-triangle test by edge sign comparison.
fn point_in_triangle(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> bool {
    let d1 = edge_sign(p, a, b);
    let d2 = edge_sign(p, b, c);
    let d3 = edge_sign(p, c, a);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

fn edge_sign(p1: &Point2, p2: &Point2, p3: &Point2) -> f64 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::signed_area;
    use std::f64::consts::TAU;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn triangle_area(vertices: &[Point2], tri: [usize; 3]) -> f64 {
        signed_area(&[vertices[tri[0]], vertices[tri[1]], vertices[tri[2]]])
    }

    #[allow(clippy::cast_precision_loss)]
    fn regular_polygon(n: usize, radius: f64) -> Vec<Point2> {
        (0..n)
            .map(|i| {
                let a = TAU * i as f64 / n as f64;
                p(radius * a.cos(), radius * a.sin())
            })
            .collect()
    }

    #[test]
    fn fewer_than_three_vertices() {
        assert!(triangulate_polygon(&[]).is_empty());
        assert!(triangulate_polygon(&[p(0.0, 0.0), p(1.0, 0.0)]).is_empty());
    }

    #[test]
    fn square_produces_2_triangles() {
        let square = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)];
        let tris = triangulate_polygon(&square);
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[0], [3, 0, 1]);
    }

    #[test]
    fn convex_polygons_produce_n_minus_2_ccw_triangles() {
        for n in 3..=16 {
            let poly = regular_polygon(n, 5.0);
            let tris = triangulate_polygon(&poly);
            assert_eq!(tris.len(), n - 2, "n = {n}");
            for tri in tris {
                assert!(triangle_area(&poly, tri) > 0.0, "n = {n}, tri = {tri:?}");
            }
        }
    }

    #[test]
    fn l_shape_concave_tessellates() {
        let l_shape = [
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(4.0, 2.0),
            p(2.0, 2.0),
            p(2.0, 4.0),
            p(0.0, 4.0),
        ];
        let tris = triangulate_polygon(&l_shape);
        assert_eq!(tris.len(), 4);
        let area: f64 = tris.iter().map(|&t| triangle_area(&l_shape, t)).sum();
        assert!((area - signed_area(&l_shape)).abs() < 1e-9);
    }

    #[test]
    fn clockwise_input_yields_nothing() {
        let cw = [p(0.0, 0.0), p(0.0, 10.0), p(10.0, 10.0), p(10.0, 0.0)];
        assert!(triangulate_polygon(&cw).is_empty());
    }

    #[test]
    fn collinear_input_yields_nothing() {
        let line = [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0)];
        assert!(triangulate_polygon(&line).is_empty());
    }
}
