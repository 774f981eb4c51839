//! Merging adjacent panels by rewriting the cut list
//!
//! Panels are never edited directly, so a merge removes the split that
//! separates two selected panels and leaves the next recompute to fuse them.

use super::adjacency::{build_adjacency, connected_subset, cut_separates_panels, edge_shared};
use super::partition::recompute_panels;
use super::{Cut, CutId, CutScope, IdSequence, Panel, PanelId, Partition};
use crate::geometry::split_polygon_by_strip;
use kurbo::Point;
use tracing::{debug, info};

/// Upper bound on the re-split passes after a merge
const MAX_RESPLIT_PASSES: usize = 64;

/// Merge the selected panels that are connected to the first selected one
///
/// For every adjacent pair of connected selected panels, the split where
/// their lineages diverge is dissolved, provided its cut also passes the
/// padded bounding-box separation test:
///
/// - a panel-scoped cut is deleted,
/// - a global cut is replaced, at the same list position, by one
///   panel-scoped copy for each other panel it split during the replay.
///   The copies keep the global cut's lineage, so the panels they produce
///   keep their ids.
///
/// Dissolving a split also fuses any unselected panels the later cuts made
/// on both sides of it, such as the bottom row when the top two cells of a
/// grid are merged. Each such fused piece gets a panel-scoped copy of the
/// dissolved cut appended, so only the selected panels end up merged.
///
/// Returns `true` when the cut list changed. The caller recomputes.
pub fn merge_selected_panels(
    cuts: &mut Vec<Cut>,
    partition: &Partition,
    selection: &[PanelId],
    inset_rect: &[Point],
    gutter: f64,
    ids: &mut IdSequence,
) -> bool {
    if selection.len() < 2 {
        return false;
    }

    let adjacency = build_adjacency(&partition.panels);
    let connected = connected_subset(selection, &adjacency);
    if connected.len() < 2 {
        debug!(
            "Merge skipped: only {} of {} selected panels are connected",
            connected.len(),
            selection.len()
        );
        return false;
    }

    let selected: Vec<&Panel> = partition
        .panels
        .iter()
        .filter(|p| connected.contains(&p.id))
        .collect();

    // (cut, split parent) pairs to undo
    let mut dissolved: Vec<(CutId, PanelId)> = Vec::new();

    for (i, a) in selected.iter().enumerate() {
        for b in &selected[i + 1..] {
            if !edge_shared(a, b) {
                continue;
            }
            let Some(split) = partition.separating_split(a.id, b.id) else {
                continue;
            };
            let Some(cut) = cuts.iter().find(|c| c.id == split.cut) else {
                continue;
            };
            if !cut_separates_panels(cut, a, b, gutter) {
                continue;
            }

            let key = (split.cut, split.parent);
            if !dissolved.contains(&key) {
                debug!("Merging {} and {}: dissolving {} on {}", a.id, b.id, key.0, key.1);
                dissolved.push(key);
            }
        }
    }

    if dissolved.is_empty() {
        return false;
    }

    let mut dissolved_cuts: Vec<Cut> = Vec::new();
    let original = std::mem::take(cuts);
    for cut in original {
        let parents: Vec<PanelId> = dissolved
            .iter()
            .filter(|(c, _)| *c == cut.id)
            .map(|&(_, p)| p)
            .collect();

        if parents.is_empty() {
            cuts.push(cut);
            continue;
        }

        dissolved_cuts.push(cut.clone());
        match cut.scope {
            CutScope::Panel(_) => {
                debug!("Merge removed panel cut {}", cut.id);
            }
            CutScope::Global => {
                let kept: Vec<PanelId> = partition
                    .splits_by(cut.id)
                    .map(|s| s.parent)
                    .filter(|p| !parents.contains(p))
                    .collect();
                debug!(
                    "Merge rescoped global cut {} onto {} panels",
                    cut.id,
                    kept.len()
                );
                for panel in kept {
                    cuts.push(cut.rescoped(ids.next_cut_id(), panel));
                }
            }
        }
    }

    let centers: Vec<Point> = selected.iter().map(|p| p.center()).collect();
    for _ in 0..MAX_RESPLIT_PASSES {
        let replay = recompute_panels(inset_rect, gutter, cuts);
        let Some(copy) = fused_piece(&replay, &dissolved, &dissolved_cuts, &centers, gutter)
            .map(|(cut, piece)| cut.rescoped(ids.next_cut_id(), piece))
        else {
            break;
        };
        debug!("Merge re-split unselected panel with cut {}", copy.id);
        cuts.push(copy);
    }

    info!(
        "Merged {} panels ({} splits dissolved)",
        connected.len(),
        dissolved.len()
    );
    true
}

/// First unselected piece that a dissolved cut used to separate
///
/// A piece qualifies when it descends from the dissolved split's parent,
/// holds none of the selected panels, and is still crossed by the cut.
fn fused_piece<'a>(
    replay: &Partition,
    dissolved: &[(CutId, PanelId)],
    dissolved_cuts: &'a [Cut],
    centers: &[Point],
    gutter: f64,
) -> Option<(&'a Cut, PanelId)> {
    for &(cut_id, parent) in dissolved {
        let Some(cut) = dissolved_cuts.iter().find(|c| c.id == cut_id) else {
            continue;
        };
        for piece in &replay.panels {
            if !replay.lineage(piece.id).contains(&parent) {
                continue;
            }
            if centers.iter().any(|&c| piece.contains(c)) {
                continue;
            }
            if split_polygon_by_strip(&piece.points, cut.start, cut.end, gutter).is_split() {
                return Some((cut, piece.id));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::Side;

    fn inset() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(300.0, 0.0),
            Point::new(300.0, 100.0),
            Point::new(0.0, 100.0),
        ]
    }

    fn vertical(ids: &mut IdSequence, x: f64) -> Cut {
        Cut::global(ids.next_cut_id(), Point::new(x, -10.0), Point::new(x, 110.0))
    }

    fn horizontal(ids: &mut IdSequence, y: f64) -> Cut {
        Cut::global(ids.next_cut_id(), Point::new(-10.0, y), Point::new(310.0, y))
    }

    #[test]
    fn test_fewer_than_two_selected_is_noop() {
        let mut ids = IdSequence::default();
        let mut cuts = vec![vertical(&mut ids, 150.0)];
        let partition = recompute_panels(&inset(), 10.0, &cuts);
        let before = cuts.clone();

        let first = partition.panels[0].id;
        assert!(!merge_selected_panels(&mut cuts, &partition, &[first], &inset(), 10.0, &mut ids));
        assert!(!merge_selected_panels(&mut cuts, &partition, &[], &inset(), 10.0, &mut ids));
        assert_eq!(cuts, before);
    }

    #[test]
    fn test_merge_two_of_three_columns() {
        let mut ids = IdSequence::default();
        let mut cuts = vec![vertical(&mut ids, 100.0), vertical(&mut ids, 200.0)];
        let partition = recompute_panels(&inset(), 10.0, &cuts);
        assert_eq!(partition.panels.len(), 3);

        let left = partition.panels[0].id;
        let middle = partition.panels[1].id;
        assert!(merge_selected_panels(&mut cuts, &partition, &[left, middle], &inset(), 10.0, &mut ids));

        // The first cut separated left from middle; it had no other split
        assert_eq!(cuts.len(), 1);
        assert_eq!(cuts[0].id, CutId(2));

        let merged = recompute_panels(&inset(), 10.0, &cuts);
        assert_eq!(merged.panels.len(), 2);
        let wide = merged.panels[0].bounds();
        assert!((wide.x0 - 0.0).abs() < 1e-6);
        assert!((wide.x1 - 195.0).abs() < 1e-6);
    }

    #[test]
    fn test_global_cut_is_rescoped_for_other_panels() {
        let mut ids = IdSequence::default();
        let mut cuts = vec![vertical(&mut ids, 150.0), horizontal(&mut ids, 50.0)];
        let partition = recompute_panels(&inset(), 10.0, &cuts);
        assert_eq!(partition.panels.len(), 4);

        // Both pieces of the left half, then both pieces of the right half
        let left_a = partition.panels[0].id;
        let left_b = partition.panels[1].id;
        let right_a = partition.panels[2].id;
        let right_b = partition.panels[3].id;

        assert!(merge_selected_panels(&mut cuts, &partition, &[left_a, left_b], &inset(), 10.0, &mut ids));

        // Horizontal cut now only applies to the right half
        assert_eq!(cuts.len(), 2);
        assert!(cuts[0].is_global());
        let right_half = partition.splits[0].children[1];
        assert_eq!(cuts[1].scope, CutScope::Panel(right_half));
        assert_eq!(cuts[1].rescoped_from, Some(CutId(2)));
        assert_eq!(cuts[1].id, CutId(3));

        let merged = recompute_panels(&inset(), 10.0, &cuts);
        let merged_ids: Vec<PanelId> = merged.panels.iter().map(|p| p.id).collect();
        assert_eq!(merged_ids.len(), 3);
        assert_eq!(merged_ids[0], partition.splits[0].children[0]);
        assert_eq!(&merged_ids[1..], &[right_a, right_b]);
    }

    #[test]
    fn test_unselected_row_is_split_again() {
        let mut ids = IdSequence::default();
        let mut cuts = vec![vertical(&mut ids, 150.0), horizontal(&mut ids, 50.0)];
        let grid = recompute_panels(&inset(), 10.0, &cuts);

        // Top piece of the left half and top piece of the right half
        let top_left = grid.panels[1].id;
        let top_right = grid.panels[3].id;
        assert!(merge_selected_panels(
            &mut cuts,
            &grid,
            &[top_left, top_right],
            &inset(),
            10.0,
            &mut ids
        ));

        // The vertical cut now only applies below the horizontal one
        assert_eq!(cuts.len(), 2);
        assert_eq!(cuts[0].id, CutId(2));
        let bottom = PanelId::ROOT.child(CutId(2), Side::High);
        assert_eq!(cuts[1].scope, CutScope::Panel(bottom));
        assert_eq!(cuts[1].rescoped_from, Some(CutId(1)));

        let merged = recompute_panels(&inset(), 10.0, &cuts);
        assert_eq!(merged.panels.len(), 3);
        let wide: Vec<_> = merged
            .panels
            .iter()
            .map(|p| p.bounds())
            .filter(|b| b.width() > 200.0)
            .collect();
        assert_eq!(wide.len(), 1);
        assert!((wide[0].y1 - 45.0).abs() < 1e-6);
    }

    #[test]
    fn test_unconnected_selection_is_noop() {
        let mut ids = IdSequence::default();
        let mut cuts = vec![vertical(&mut ids, 150.0), horizontal(&mut ids, 50.0)];
        let grid = recompute_panels(&inset(), 10.0, &cuts);
        let before = cuts.clone();

        // Opposite quadrants of a 2x2 grid share no edge
        let first = grid.panels[0].id;
        let opposite = grid.panels[3].id;
        assert!(!merge_selected_panels(&mut cuts, &grid, &[first, opposite], &inset(), 10.0, &mut ids));
        assert_eq!(cuts, before);
    }

    #[test]
    fn test_panel_scoped_separator_is_deleted() {
        let mut ids = IdSequence::default();
        let mut cuts = vec![vertical(&mut ids, 150.0)];
        let partition = recompute_panels(&inset(), 10.0, &cuts);
        let right = partition.panels[1].id;

        cuts.push(Cut::scoped(
            ids.next_cut_id(),
            right,
            Point::new(140.0, 50.0),
            Point::new(310.0, 50.0),
        ));
        let partition = recompute_panels(&inset(), 10.0, &cuts);
        assert_eq!(partition.panels.len(), 3);

        let lower = partition.panels[1].id;
        let upper = partition.panels[2].id;
        assert!(merge_selected_panels(&mut cuts, &partition, &[lower, upper], &inset(), 10.0, &mut ids));
        assert_eq!(cuts.len(), 1);

        let merged = recompute_panels(&inset(), 10.0, &cuts);
        assert!(merged.panel(right).is_some());
    }
}
