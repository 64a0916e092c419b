use serde::{Deserialize, Serialize};

use super::Point2;

/// An axis-aligned rectangle in local plate millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Creates a rectangle from its bounds.
    #[must_use]
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Creates a `width × height` rectangle centered at the origin.
    #[must_use]
    pub fn centered(width: f64, height: f64) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self::new(-hw, -hh, hw, hh)
    }

    /// Returns the rectangle grown by `d` on every side.
    #[must_use]
    pub fn outset(&self, d: f64) -> Self {
        Self::new(self.x_min - d, self.y_min - d, self.x_max + d, self.y_max + d)
    }

    /// Returns `true` if `p` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    /// Returns `true` if `p` lies strictly inside (boundary excluded).
    #[must_use]
    pub fn contains_strict(&self, p: &Point2) -> bool {
        p.x > self.x_min && p.x < self.x_max && p.y > self.y_min && p.y < self.y_max
    }

    /// Returns the four corners in counter-clockwise order, starting at the
    /// minimum corner.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.x_min, self.y_min),
            Point2::new(self.x_max, self.y_min),
            Point2::new(self.x_max, self.y_max),
            Point2::new(self.x_min, self.y_max),
        ]
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}
