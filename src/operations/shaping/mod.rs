mod extrude;

pub use extrude::ExtrudePolygon;
