use std::f64::consts::FRAC_PI_2;

use crate::features::{Crossing, Road};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::{Point2, Vector2};

const MIN_SEGMENT_LEN_SQ: f64 = 1e-10;

/// Direction (radians) of the road segment nearest to `p`, or `0.0` when
/// there is no usable segment. Ties keep the first segment found.
#[must_use]
pub fn nearest_road_angle(p: &Point2, roads: &[Road]) -> f64 {
    let mut best_angle = 0.0;
    let mut best_dist = f64::INFINITY;

    for road in roads {
        for seg in road.points.windows(2) {
            let d = seg[1] - seg[0];
            if d.norm_squared() < MIN_SEGMENT_LEN_SQ {
                continue;
            }
            let dist = point_to_segment_dist(p, &seg[0], &seg[1]);
            if dist < best_dist {
                best_dist = dist;
                best_angle = d.y.atan2(d.x);
            }
        }
    }

    best_angle
}

/// Turns crossings mapped as a single node into a short strip across the
/// nearest road, `span` millimeters long and centered on the node.
///
/// Crossings with any other number of points are returned unchanged.
#[must_use]
pub fn orient_crossings(crossings: &[Crossing], roads: &[Road], span: f64) -> Vec<Crossing> {
    crossings
        .iter()
        .map(|crossing| match crossing.points.as_slice() {
            [node] => {
                let angle = nearest_road_angle(node, roads) + FRAC_PI_2;
                let (sin, cos) = angle.sin_cos();
                let half = Vector2::new(cos, sin) * (span / 2.0);
                Crossing {
                    points: vec![*node - half, *node + half],
                    ..crossing.clone()
                }
            }
            _ => crossing.clone(),
        })
        .collect()
}
