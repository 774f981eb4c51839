//! Geometric Primitives and Operations
//!
//! Points and vectors come from `kurbo`. Polygons are plain vertex slices,
//! ordered and implicitly closed.

pub mod clip;
pub mod polygon;
pub mod utilities;

// Re-export commonly used items
pub use clip::{clip_half_plane, split_polygon_by_strip, Keep, StripSplit};
pub use polygon::{
    dedupe_polygon, point_in_polygon, polygon_area, polygon_bounds, polygon_center,
};
pub use utilities::{clamp, clamp_point, distance_point_to_segment, normalize};
