mod polygon_clip;
mod polyline_clip;

pub use polygon_clip::clip_polygon_to_rect;
pub use polyline_clip::{clip_polyline_to_rect, clip_segment_to_rect};
