use crate::math::polygon_2d::{dedup_consecutive, ensure_ccw};
use crate::math::{Point2, Point3, Vector3, DEDUP_TOLERANCE};
use crate::tessellation::{triangulate_polygon, TriangleMesh};

/// Extrudes a 2D polygon straight up into a closed solid mesh.
pub struct ExtrudePolygon<'a> {
    polygon: &'a [Point2],
    height: f64,
    z_base: f64,
}

impl<'a> ExtrudePolygon<'a> {
    /// Creates a new `ExtrudePolygon` operation with its base at `z = 0`.
    #[must_use]
    pub fn new(polygon: &'a [Point2], height: f64) -> Self {
        Self {
            polygon,
            height,
            z_base: 0.0,
        }
    }

    /// Sets the elevation of the bottom cap.
    #[must_use]
    pub fn with_base(mut self, z_base: f64) -> Self {
        self.z_base = z_base;
        self
    }

    /// Executes the extrusion.
    ///
    /// The footprint is normalized to counter-clockwise winding and cleaned of
    /// consecutive near-duplicate vertices, including a closing vertex that
    /// repeats the first. Footprints with fewer than 3 remaining vertices give
    /// an empty mesh.
    ///
    /// Layout of the output, for a footprint of `n` vertices:
    ///   - `0..n`: bottom cap at `z_base`, normal `-Z`, winding reversed
    ///   - `n..2n`: top cap at `z_base + height`, normal `+Z`
    ///   - `2n..6n`: one 4-vertex quad per boundary edge with a flat outward
    ///     normal (side faces share no vertices with each other or the caps)
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> TriangleMesh {
        let footprint = dedup_consecutive(&ensure_ccw(self.polygon), DEDUP_TOLERANCE);
        let n = footprint.len();
        if n < 3 {
            return TriangleMesh::default();
        }

        let cap = triangulate_polygon(&footprint);
        let z_bottom = self.z_base;
        let z_top = self.z_base + self.height;

        let mut mesh = TriangleMesh::default();
        mesh.vertices.reserve(6 * n);
        mesh.normals.reserve(6 * n);
        mesh.indices.reserve(2 * cap.len() + 2 * n);

        let down = -Vector3::z();
        let up = Vector3::z();
        for p in &footprint {
            mesh.push_vertex(Point3::new(p.x, p.y, z_bottom), down);
        }
        for p in &footprint {
            mesh.push_vertex(Point3::new(p.x, p.y, z_top), up);
        }

        // Bottom cap: reversed winding so it faces down.
        for &[a, b, c] in &cap {
            mesh.indices.push([c as u32, b as u32, a as u32]);
        }

        // Top cap: same triangulation on the upper ring.
        let top = n as u32;
        for &[a, b, c] in &cap {
            mesh.indices.push([a as u32 + top, b as u32 + top, c as u32 + top]);
        }

        // Side walls
        for i in 0..n {
            let p0 = footprint[i];
            let p1 = footprint[(i + 1) % n];
            let normal = outward_edge_normal(&p0, &p1);

            let v0 = mesh.push_vertex(Point3::new(p0.x, p0.y, z_bottom), normal);
            let v1 = mesh.push_vertex(Point3::new(p1.x, p1.y, z_bottom), normal);
            let v2 = mesh.push_vertex(Point3::new(p1.x, p1.y, z_top), normal);
            let v3 = mesh.push_vertex(Point3::new(p0.x, p0.y, z_top), normal);

            mesh.indices.push([v0, v1, v2]);
            mesh.indices.push([v0, v2, v3]);
        }

        mesh
    }
}

/// Returns the horizontal unit normal of edge `p0 → p1` pointing to its
/// right, which is outward for a counter-clockwise footprint. A zero-length
/// edge gets a zero normal.
fn outward_edge_normal(p0: &Point2, p1: &Point2) -> Vector3 {
    let d = p1 - p0;
    let len = d.norm();
    if len > 0.0 {
        Vector3::new(d.y / len, -d.x / len, 0.0)
    } else {
        Vector3::zeros()
    }
}
