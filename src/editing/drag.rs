//! Dragging existing cuts

use crate::geometry::clamp_point;
use crate::panels::{Cut, CutId};
use kurbo::{Point, Size};

/// Which part of a cut a drag moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Translate the whole segment
    Line,
    Start,
    End,
}

/// An in-progress drag of one cut
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutDrag {
    pub cut: CutId,
    pub mode: DragMode,
    /// Last pointer position seen, used for `Line` deltas
    pub anchor: Point,
}

impl CutDrag {
    pub fn new(cut: CutId, mode: DragMode, anchor: Point) -> Self {
        Self { cut, mode, anchor }
    }

    /// Move `cut` for a pointer now at `pos`, keeping it on the canvas
    pub fn apply(&mut self, cut: &mut Cut, pos: Point, canvas: Size) {
        let pos = clamp_point(pos, canvas);
        match self.mode {
            DragMode::Line => {
                let delta = pos - self.anchor;
                cut.start = clamp_point(cut.start + delta, canvas);
                cut.end = clamp_point(cut.end + delta, canvas);
                self.anchor = pos;
            }
            DragMode::Start => cut.start = pos,
            DragMode::End => cut.end = pos,
        }
    }
}
