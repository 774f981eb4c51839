//! Panels, cuts and the partition they form
//!
//! The cut list is the only persistent state of a page. Panels are derived
//! from it by replaying every cut, in order, against the inset rectangle
//! (see [`partition::recompute_panels`]).

pub mod adjacency;
pub mod ids;
pub mod merge;
pub mod partition;

pub use adjacency::{
    bounds_overlap, build_adjacency, connected_subset, cut_separates_panels, edge_shared,
    overlap_length, panel_edges, Adjacency, ADJACENCY_THRESHOLD,
};
pub use ids::{CutId, IdSequence, PanelId, Side};
pub use merge::merge_selected_panels;
pub use partition::{recompute_panels, Partition, Split};

use crate::geometry::{point_in_polygon, polygon_area, polygon_bounds, polygon_center};
use kurbo::{Line, Point, Rect};
use serde::{Deserialize, Serialize};

/// Which panels a cut applies to when replayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "panel", rename_all = "snake_case")]
pub enum CutScope {
    /// Every panel present when the cut is replayed
    Global,
    /// Only the panel with this id, if it exists at replay time
    Panel(PanelId),
}

/// A user-defined line that partitions the panels it applies to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cut {
    pub id: CutId,
    pub scope: CutScope,
    pub start: Point,
    pub end: Point,
    /// Set on the panel-scoped copies a merge makes of a global cut
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rescoped_from: Option<CutId>,
}

impl Cut {
    pub fn global(id: CutId, start: Point, end: Point) -> Self {
        Self {
            id,
            scope: CutScope::Global,
            start,
            end,
            rescoped_from: None,
        }
    }

    pub fn scoped(id: CutId, panel: PanelId, start: Point, end: Point) -> Self {
        Self {
            id,
            scope: CutScope::Panel(panel),
            start,
            end,
            rescoped_from: None,
        }
    }

    /// Panel-scoped copy of this cut that keeps its lineage
    pub fn rescoped(&self, id: CutId, panel: PanelId) -> Self {
        Self {
            id,
            scope: CutScope::Panel(panel),
            start: self.start,
            end: self.end,
            rescoped_from: Some(self.lineage_key()),
        }
    }

    /// Identity used when deriving the ids of the panels this cut produces
    pub fn lineage_key(&self) -> CutId {
        self.rescoped_from.unwrap_or(self.id)
    }

    pub fn applies_to(&self, panel: PanelId) -> bool {
        match self.scope {
            CutScope::Global => true,
            CutScope::Panel(target) => target == panel,
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self.scope, CutScope::Global)
    }

    pub fn line(&self) -> Line {
        Line::new(self.start, self.end)
    }

    /// Bounding box of the segment
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }
}

/// One tile of the current partition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: PanelId,
    pub points: Vec<Point>,
}

impl Panel {
    pub fn new(id: PanelId, points: Vec<Point>) -> Self {
        Self { id, points }
    }

    pub fn bounds(&self) -> Rect {
        polygon_bounds(&self.points)
    }

    pub fn center(&self) -> Point {
        polygon_center(&self.points)
    }

    pub fn area(&self) -> f64 {
        polygon_area(&self.points)
    }

    pub fn contains(&self, pt: Point) -> bool {
        point_in_polygon(pt, &self.points)
    }
}
