//! Trims a feature set to the print plate before generation.

use tracing::trace;

use crate::features::{BikeLane, Building, Crossing, Road, Sidewalk, TactileMapData};
use crate::math::{Point2, Rect};
use crate::operations::clip::{clip_polygon_to_rect, clip_polyline_to_rect};

/// A feature laid out along a centerline with a fixed width.
trait Linear: Clone {
    fn id(&self) -> &str;
    fn points(&self) -> &[Point2];
    fn width_mm(&self) -> f64;
    fn with_piece(&self, id: String, points: Vec<Point2>) -> Self;
}

macro_rules! impl_linear {
    ($($ty:ty),*) => {$(
        impl Linear for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn points(&self) -> &[Point2] {
                &self.points
            }
            fn width_mm(&self) -> f64 {
                self.width_mm
            }
            fn with_piece(&self, id: String, points: Vec<Point2>) -> Self {
                Self { id, points, ..self.clone() }
            }
        }
    )*};
}

impl_linear!(Road, Sidewalk, Crossing, BikeLane);

/// Clips one centerline against the plate grown by half its width, so the
/// buffered ribbon still reaches the plate edge. A centerline that splits
/// yields pieces named `{id}-0`, `{id}-1`, ...
fn clip_linear<T: Linear>(feature: &T, plate: &Rect) -> Vec<T> {
    let bounds = plate.outset(feature.width_mm() / 2.0);
    let pieces = clip_polyline_to_rect(feature.points(), &bounds);
    if pieces.is_empty() {
        trace!(id = feature.id(), "outside plate");
    }
    let split = pieces.len() > 1;
    pieces
        .into_iter()
        .enumerate()
        .map(|(i, points)| {
            let id = if split {
                format!("{}-{i}", feature.id())
            } else {
                feature.id().to_owned()
            };
            feature.with_piece(id, points)
        })
        .collect()
}

fn clip_all<T: Linear>(features: &[T], plate: &Rect) -> Vec<T> {
    features.iter().flat_map(|f| clip_linear(f, plate)).collect()
}

/// Returns a copy of `data` restricted to `plate`.
///
/// - Roads, sidewalks, bike lanes and crossings with two or more points are
///   clipped as polylines, possibly splitting into several features.
/// - Building footprints are clipped as polygons; footprints left with fewer
///   than 3 vertices are dropped.
/// - Point features, and crossings still mapped as a single node, are kept
///   only when strictly inside the plate.
#[must_use]
pub fn clip_to_plate(data: &TactileMapData, plate: &Rect) -> TactileMapData {
    let crossings = data
        .crossings
        .iter()
        .flat_map(|c| match c.points.as_slice() {
            [node] if plate.contains_strict(node) => vec![c.clone()],
            [_] | [] => {
                trace!(id = %c.id, "crossing node outside plate");
                Vec::new()
            }
            _ => clip_linear(c, plate),
        })
        .collect();

    let buildings = data
        .buildings
        .iter()
        .filter_map(|b| {
            let footprint = clip_polygon_to_rect(&b.footprint, plate);
            if footprint.len() < 3 {
                trace!(id = %b.id, "building outside plate");
                return None;
            }
            Some(Building {
                footprint,
                ..b.clone()
            })
        })
        .collect();

    TactileMapData {
        roads: clip_all(&data.roads, plate),
        sidewalks: clip_all(&data.sidewalks, plate),
        bike_lanes: clip_all(&data.bike_lanes, plate),
        crossings,
        buildings,
        curbs: keep_inside(&data.curbs, plate, |c| &c.position),
        traffic_signals: keep_inside(&data.traffic_signals, plate, |s| &s.position),
        bus_stops: keep_inside(&data.bus_stops, plate, |s| &s.position),
        feature_slots: keep_inside(&data.feature_slots, plate, |s| &s.position),
        metadata: data.metadata.clone(),
        bounds: data.bounds,
    }
}

fn keep_inside<T: Clone>(items: &[T], plate: &Rect, position: impl Fn(&T) -> &Point2) -> Vec<T> {
    items
        .iter()
        .filter(|item| plate.contains_strict(position(item)))
        .cloned()
        .collect()
}
