//! The page being edited: cuts, the panels derived from them, and selection

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use kurbo::Point;
use tracing::{debug, info};

use super::drag::{CutDrag, DragMode};
use super::hit::{grab_mode, hit_cut, hit_panel};
use super::page::PageGeometry;
use super::selection::{ClickTarget, Selection};
use crate::geometry::clamp_point;
use crate::panels::{
    merge_selected_panels, recompute_panels, Cut, CutId, IdSequence, Panel, PanelId, Partition,
};

/// Drawn cuts must be longer than this, in preview pixels
pub const MIN_CUT_LENGTH: f64 = 10.0;

/// How far a split cut extends past the panel bounds on each end
pub const SPLIT_OVERSHOOT: f64 = 10.0;

/// Direction of the midline a panel split draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAxis {
    /// Vertical midline: left and right halves
    Vertical,
    /// Horizontal midline: top and bottom halves
    Horizontal,
}

impl fmt::Display for SplitAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitAxis::Vertical => write!(f, "v"),
            SplitAxis::Horizontal => write!(f, "h"),
        }
    }
}

impl FromStr for SplitAxis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v" | "vertical" => Ok(SplitAxis::Vertical),
            "h" | "horizontal" => Ok(SplitAxis::Horizontal),
            _ => Err(format!("Invalid split axis: '{s}' (expected v or h)")),
        }
    }
}

/// One page of panels and every edit that can be made to it
///
/// The cut list is the source of truth. Every edit that changes it, or the
/// gutter, replays the whole list through [`recompute_panels`].
#[derive(Debug, Clone)]
pub struct Layout {
    page: PageGeometry,
    gutter: f64,
    cuts: Vec<Cut>,
    partition: Partition,
    /// Panels deleted by the user; hidden until the next reset
    removed: BTreeSet<PanelId>,
    ids: IdSequence,
    selection: Selection,
    drag: Option<CutDrag>,
}

impl Layout {
    pub fn new(page: PageGeometry, gutter: f64) -> Self {
        Self::from_parts(page, gutter, Vec::new(), IdSequence::default())
    }

    /// Rebuild a layout from a saved cut list and id counter
    pub fn from_parts(page: PageGeometry, gutter: f64, cuts: Vec<Cut>, ids: IdSequence) -> Self {
        let mut layout = Self {
            page,
            gutter: gutter.max(0.0),
            cuts,
            partition: Partition::default(),
            removed: BTreeSet::new(),
            ids,
            selection: Selection::default(),
            drag: None,
        };
        layout.recompute();
        layout
    }

    pub fn page(&self) -> &PageGeometry {
        &self.page
    }

    pub fn gutter(&self) -> f64 {
        self.gutter
    }

    pub fn cuts(&self) -> &[Cut] {
        &self.cuts
    }

    pub fn panels(&self) -> &[Panel] {
        &self.partition.panels
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.partition.panel(id)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn ids(&self) -> &IdSequence {
        &self.ids
    }

    pub fn removed_panels(&self) -> &BTreeSet<PanelId> {
        &self.removed
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Replay the cut list and drop deleted panels
    ///
    /// A panel descended from a deleted one is dropped too, so cutting across
    /// a deleted region never brings its pieces back.
    pub fn recompute(&mut self) {
        let inset = self.page.inset_rect();
        let mut partition = recompute_panels(&inset, self.gutter, &self.cuts);
        if !self.removed.is_empty() {
            let dropped: BTreeSet<PanelId> = partition
                .panels
                .iter()
                .map(|p| p.id)
                .filter(|&id| partition.lineage(id).iter().any(|a| self.removed.contains(a)))
                .collect();
            partition.panels.retain(|p| !dropped.contains(&p.id));
        }
        self.partition = partition;

        let live = &self.partition;
        self.selection.merge.retain(|id| live.panel(*id).is_some());
        if self.selection.panel.is_some_and(|id| live.panel(id).is_none()) {
            self.selection.panel = None;
        }
    }

    /// Append a global cut between two canvas points
    ///
    /// Both points are clamped to the canvas. Returns `None` when the clamped
    /// cut is too short to count.
    pub fn add_cut(&mut self, start: Point, end: Point) -> Option<CutId> {
        let canvas = self.page.canvas_size();
        let start = clamp_point(start, canvas);
        let end = clamp_point(end, canvas);

        if start.distance(end) <= MIN_CUT_LENGTH {
            debug!("Ignoring cut shorter than {} px", MIN_CUT_LENGTH);
            return None;
        }

        let id = self.ids.next_cut_id();
        self.cuts.push(Cut::global(id, start, end));
        info!("Added cut {} from {:?} to {:?}", id, start, end);
        self.recompute();
        Some(id)
    }

    /// Split a panel in half along its bounding-box midline
    pub fn split_panel(&mut self, id: PanelId, axis: SplitAxis) -> Option<CutId> {
        let bounds = self.panel(id)?.bounds();
        let center = bounds.center();

        let (start, end) = match axis {
            SplitAxis::Vertical => (
                Point::new(center.x, bounds.y0 - SPLIT_OVERSHOOT),
                Point::new(center.x, bounds.y1 + SPLIT_OVERSHOOT),
            ),
            SplitAxis::Horizontal => (
                Point::new(bounds.x0 - SPLIT_OVERSHOOT, center.y),
                Point::new(bounds.x1 + SPLIT_OVERSHOOT, center.y),
            ),
        };

        let cut_id = self.ids.next_cut_id();
        self.cuts.push(Cut::scoped(cut_id, id, start, end));
        info!("Split panel {} ({}) with cut {}", id, axis, cut_id);

        self.selection.panel = None;
        self.recompute();
        Some(cut_id)
    }

    /// Split the selected panel, if any
    pub fn split_selected(&mut self, axis: SplitAxis) -> Option<CutId> {
        let id = self.selection.panel?;
        self.split_panel(id, axis)
    }

    /// Remove the cut at `index`
    pub fn delete_cut(&mut self, index: usize) -> Option<Cut> {
        if index >= self.cuts.len() {
            return None;
        }

        let cut = self.cuts.remove(index);
        info!("Deleted cut {}", cut.id);

        self.selection.cut = None;
        self.selection.hovered_cut = None;
        if self.drag.is_some_and(|d| d.cut == cut.id) {
            self.drag = None;
        }
        self.recompute();
        Some(cut)
    }

    pub fn delete_selected_cut(&mut self) -> Option<Cut> {
        let index = self.selection.cut?;
        self.delete_cut(index)
    }

    /// Hide a panel without touching the cuts
    ///
    /// The panel stays hidden across recomputes until [`Layout::reset`].
    pub fn delete_panel(&mut self, id: PanelId) -> bool {
        if self.panel(id).is_none() {
            return false;
        }

        self.removed.insert(id);
        self.partition.panels.retain(|p| p.id != id);
        self.selection.merge.retain(|m| *m != id);
        if self.selection.panel == Some(id) {
            self.selection.panel = None;
        }
        info!("Deleted panel {}", id);
        true
    }

    pub fn delete_selected_panel(&mut self) -> bool {
        match self.selection.panel {
            Some(id) => self.delete_panel(id),
            None => false,
        }
    }

    /// Clear all cuts, deleted panels and selection
    ///
    /// The cut id counter keeps counting.
    pub fn reset(&mut self) {
        self.cuts.clear();
        self.removed.clear();
        self.selection.clear();
        self.drag = None;
        info!("Layout reset");
        self.recompute();
    }

    /// Append evenly spaced global cuts that divide the inset rectangle
    pub fn generate_grid(&mut self, rows: usize, cols: usize) -> Vec<CutId> {
        if rows == 0 || cols == 0 {
            return Vec::new();
        }

        let inset = self.page.inset_bounds();
        let mut added = Vec::with_capacity(rows + cols - 2);

        for i in 1..cols {
            let x = inset.x0 + inset.width() / cols as f64 * i as f64;
            let id = self.ids.next_cut_id();
            self.cuts
                .push(Cut::global(id, Point::new(x, inset.y0), Point::new(x, inset.y1)));
            added.push(id);
        }

        for i in 1..rows {
            let y = inset.y0 + inset.height() / rows as f64 * i as f64;
            let id = self.ids.next_cut_id();
            self.cuts
                .push(Cut::global(id, Point::new(inset.x0, y), Point::new(inset.x1, y)));
            added.push(id);
        }

        info!("Generated {}x{} grid ({} cuts)", rows, cols, added.len());
        self.recompute();
        added
    }

    /// Merge the panels in the merge selection
    pub fn merge_selected(&mut self) -> bool {
        let selection = std::mem::take(&mut self.selection.merge);
        self.merge_panels(&selection)
    }

    /// Merge the given panels, connected to the first one, into one
    pub fn merge_panels(&mut self, selection: &[PanelId]) -> bool {
        let inset = self.page.inset_rect();
        let changed = merge_selected_panels(
            &mut self.cuts,
            &self.partition,
            selection,
            &inset,
            self.gutter,
            &mut self.ids,
        );

        // Cut indices shift when the list is rewritten
        self.selection.merge.clear();
        self.selection.cut = None;
        self.selection.hovered_cut = None;
        self.selection.panel = None;
        if changed {
            self.recompute();
        }
        changed
    }

    pub fn set_gutter(&mut self, gutter: f64) {
        self.gutter = gutter.max(0.0);
        debug!("Gutter set to {:.1}", self.gutter);
        self.recompute();
    }

    /// Resolve a click at `pos` and update the selection
    ///
    /// Cuts take priority over the panels beneath them.
    pub fn click(&mut self, pos: Point, scale: f64) -> ClickTarget {
        let pos = clamp_point(pos, self.page.canvas_size());

        let target = if let Some(index) = hit_cut(&self.cuts, pos, scale) {
            ClickTarget::Cut(index)
        } else if let Some(id) = hit_panel(self.panels(), pos) {
            ClickTarget::Panel(id)
        } else {
            ClickTarget::Empty
        };

        self.selection.apply(target);
        target
    }

    /// Track the cut under the pointer
    pub fn hover(&mut self, pos: Point, scale: f64) -> Option<usize> {
        let pos = clamp_point(pos, self.page.canvas_size());
        self.selection.hovered_cut = hit_cut(&self.cuts, pos, scale);
        self.selection.hovered_cut
    }

    /// Start dragging the cut under `pos`, if there is one
    pub fn begin_drag(&mut self, pos: Point, scale: f64) -> Option<DragMode> {
        let pos = clamp_point(pos, self.page.canvas_size());
        let index = hit_cut(&self.cuts, pos, scale)?;
        let cut = &self.cuts[index];

        let mode = grab_mode(cut, pos);
        debug!("Dragging cut {} ({:?})", cut.id, mode);
        self.drag = Some(CutDrag::new(cut.id, mode, pos));
        Some(mode)
    }

    /// Move the dragged cut to follow the pointer
    pub fn drag_to(&mut self, pos: Point) -> bool {
        let Some(mut drag) = self.drag else {
            return false;
        };
        let Some(cut) = self.cuts.iter_mut().find(|c| c.id == drag.cut) else {
            self.drag = None;
            return false;
        };

        drag.apply(cut, pos, self.page.canvas_size());
        self.drag = Some(drag);
        self.recompute();
        true
    }

    pub fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            info!("Moved cut {}", drag.cut);
        }
    }
}
