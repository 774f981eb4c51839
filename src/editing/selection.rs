//! Cut and panel selection state

use crate::panels::PanelId;

/// Most panels kept in the merge selection; older picks drop off the front
pub const MERGE_SELECTION_CAP: usize = 8;

/// What a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Index into the cut list
    Cut(usize),
    Panel(PanelId),
    Empty,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Index of the selected cut
    pub cut: Option<usize>,
    /// Panel offered for split or delete
    pub panel: Option<PanelId>,
    /// Panels picked for merging, oldest first
    pub merge: Vec<PanelId>,
    /// Cut under the pointer, if any
    pub hovered_cut: Option<usize>,
}

impl Selection {
    pub fn select_cut(&mut self, index: usize) {
        self.cut = Some(index);
        self.panel = None;
    }

    /// Select a panel and add it to the merge selection
    pub fn select_panel(&mut self, id: PanelId) {
        self.panel = Some(id);
        self.cut = None;

        if !self.merge.contains(&id) {
            if self.merge.len() >= MERGE_SELECTION_CAP {
                self.merge.remove(0);
            }
            self.merge.push(id);
        }
    }

    /// Clear the cut and panel selection; the merge selection survives
    pub fn clear_focus(&mut self) {
        self.cut = None;
        self.panel = None;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn apply(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Cut(index) => self.select_cut(index),
            ClickTarget::Panel(id) => self.select_panel(id),
            ClickTarget::Empty => self.clear_focus(),
        }
    }
}
