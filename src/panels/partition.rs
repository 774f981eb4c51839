//! Partition engine: replay the cut list into panels

use super::{Cut, CutId, Panel, PanelId, Side};
use crate::geometry::{split_polygon_by_strip, StripSplit};
use kurbo::Point;
use tracing::debug;

/// One split performed during a replay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    /// The cut that performed the split
    pub cut: CutId,
    /// The panel that was split
    pub parent: PanelId,
    /// High side first, low side second
    pub children: [PanelId; 2],
}

/// Result of replaying a cut list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    /// The current panels, in replay order
    pub panels: Vec<Panel>,
    /// Every split performed, in replay order
    pub splits: Vec<Split>,
}

impl Partition {
    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// The split that produced `id`, if it is not the seed panel
    pub fn origin_of(&self, id: PanelId) -> Option<&Split> {
        self.splits.iter().find(|s| s.children.contains(&id))
    }

    /// `id` followed by each of its ancestors up to the seed panel
    pub fn lineage(&self, id: PanelId) -> Vec<PanelId> {
        let mut chain = vec![id];
        let mut current = id;
        while let Some(split) = self.origin_of(current) {
            current = split.parent;
            chain.push(current);
        }
        chain
    }

    /// The split at which the lineages of `a` and `b` diverge
    ///
    /// One child of the returned split is an ancestor-or-self of `a`, the
    /// other of `b`. `None` when either is an ancestor of the other.
    pub fn separating_split(&self, a: PanelId, b: PanelId) -> Option<&Split> {
        let lineage_a = self.lineage(a);
        let lineage_b = self.lineage(b);
        self.splits.iter().find(|s| {
            let [high, low] = s.children;
            (lineage_a.contains(&high) && lineage_b.contains(&low))
                || (lineage_a.contains(&low) && lineage_b.contains(&high))
        })
    }

    /// Splits performed by `cut`, in replay order
    pub fn splits_by(&self, cut: CutId) -> impl Iterator<Item = &Split> + '_ {
        self.splits.iter().filter(move |s| s.cut == cut)
    }
}

/// Replay `cuts` against the inset rectangle
///
/// Starts from a single panel `p0` covering `inset_rect`. Each cut is tried
/// against every panel it applies to; a panel the cut crosses is replaced in
/// place by its high and low pieces, anything else is kept with its id.
pub fn recompute_panels(inset_rect: &[Point], gutter: f64, cuts: &[Cut]) -> Partition {
    let mut panels = vec![Panel::new(PanelId::ROOT, inset_rect.to_vec())];
    let mut splits = Vec::new();

    for cut in cuts {
        let mut next = Vec::with_capacity(panels.len() + 1);

        for panel in panels {
            if !cut.applies_to(panel.id) {
                next.push(panel);
                continue;
            }

            match split_polygon_by_strip(&panel.points, cut.start, cut.end, gutter) {
                StripSplit::Unchanged => next.push(panel),
                StripSplit::Split { high, low } => {
                    let key = cut.lineage_key();
                    let children = [
                        panel.id.child(key, Side::High),
                        panel.id.child(key, Side::Low),
                    ];
                    splits.push(Split {
                        cut: cut.id,
                        parent: panel.id,
                        children,
                    });
                    next.push(Panel::new(children[0], high));
                    next.push(Panel::new(children[1], low));
                }
            }
        }

        panels = next;
    }

    debug!(
        "Recomputed {} panels from {} cuts ({} splits, gutter {:.1})",
        panels.len(),
        cuts.len(),
        splits.len(),
        gutter
    );

    Partition { panels, splits }
}
