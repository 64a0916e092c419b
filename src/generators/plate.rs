use super::{solid, SceneParams};
use crate::math::{Point2, Rect};
use crate::tessellation::TriangleMesh;

/// The plate every other feature sits on: a `width × height` slab centered
/// at the origin, from `z = 0` up to the base plate height.
#[must_use]
pub fn base_plate(width_mm: f64, height_mm: f64, params: &SceneParams) -> Option<TriangleMesh> {
    let outline = Rect::centered(width_mm, height_mm).corners();
    solid(&outline, params.heights.base_plate, 0.0)
}

/// A raised square in the north-east corner marking the plate's "up"
/// direction for a reader.
///
/// It rises from `z = 0` to the orientation marker height, the tallest
/// feature on the plate.
#[must_use]
pub fn orientation_marker(
    width_mm: f64,
    height_mm: f64,
    params: &SceneParams,
) -> Option<TriangleMesh> {
    let size = params.markers.orientation_marker_size;
    let inset = params.markers.orientation_marker_inset;
    let x_max = width_mm / 2.0 - inset;
    let y_max = height_mm / 2.0 - inset;
    let outline = [
        Point2::new(x_max - size, y_max - size),
        Point2::new(x_max, y_max - size),
        Point2::new(x_max, y_max),
        Point2::new(x_max - size, y_max),
    ];
    solid(&outline, params.heights.orientation_marker, 0.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn base_plate_spans_plate_and_base_height() {
        let mesh = base_plate(150.0, 100.0, &SceneParams::default()).unwrap();
        let (min, max) = mesh.bounds().unwrap();
        assert_relative_eq!(min.x, -75.0);
        assert_relative_eq!(min.y, -50.0);
        assert_relative_eq!(min.z, 0.0);
        assert_relative_eq!(max.x, 75.0);
        assert_relative_eq!(max.y, 50.0);
        assert_relative_eq!(max.z, 2.0);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn orientation_marker_sits_in_north_east_corner() {
        let mesh = orientation_marker(150.0, 150.0, &SceneParams::default()).unwrap();
        let (min, max) = mesh.bounds().unwrap();
        assert_relative_eq!(min.x, 65.0);
        assert_relative_eq!(min.y, 65.0);
        assert_relative_eq!(max.x, 73.0);
        assert_relative_eq!(max.y, 73.0);
        assert_relative_eq!(min.z, 0.0);
        assert_relative_eq!(max.z, 5.5);
    }

    #[test]
    fn zero_size_plate_has_no_geometry() {
        assert!(base_plate(0.0, 0.0, &SceneParams::default()).is_none());
    }
}
