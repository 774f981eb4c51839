//! Pointer hit testing against cuts and panels

use crate::geometry::distance_point_to_segment;
use crate::panels::{Cut, Panel, PanelId};
use kurbo::Point;

use super::drag::DragMode;

/// Cut hit distance, in screen pixels, at preview scale 1
pub const CUT_HIT_TOLERANCE: f64 = 15.0;

/// Distance from an endpoint, in preview pixels, that grabs the endpoint
pub const ENDPOINT_GRAB_RADIUS: f64 = 10.0;

const MIN_SCALE: f64 = 1e-3;

/// Hit distance in preview pixels for the given preview scale
pub fn cut_hit_threshold(scale: f64) -> f64 {
    CUT_HIT_TOLERANCE / scale.max(MIN_SCALE)
}

/// Index of the first cut within the hit threshold of `pos`
pub fn hit_cut(cuts: &[Cut], pos: Point, scale: f64) -> Option<usize> {
    let threshold = cut_hit_threshold(scale);
    cuts.iter()
        .position(|cut| distance_point_to_segment(pos, cut.start, cut.end) < threshold)
}

/// Id of the first panel containing `pos`
pub fn hit_panel(panels: &[Panel], pos: Point) -> Option<PanelId> {
    panels.iter().find(|p| p.contains(pos)).map(|p| p.id)
}

/// Which part of `cut` a drag starting at `pos` should move
pub fn grab_mode(cut: &Cut, pos: Point) -> DragMode {
    if pos.distance(cut.start) < ENDPOINT_GRAB_RADIUS {
        DragMode::Start
    } else if pos.distance(cut.end) < ENDPOINT_GRAB_RADIUS {
        DragMode::End
    } else {
        DragMode::Line
    }
}
