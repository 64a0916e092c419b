mod buffer_polyline;

pub use buffer_polyline::BufferPolyline;
