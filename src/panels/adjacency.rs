//! Shared-edge adjacency between panels
//!
//! Adjacency is deliberately loose: two edges count as shared when they are
//! parallel and their projections overlap, even if a gutter lies between
//! them. Panels on either side of a cut therefore stay adjacent.

use super::{Cut, Panel, PanelId};
use kurbo::{Point, Rect};
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

/// Minimum overlap, in pixels, for two edges to count as shared
pub const ADJACENCY_THRESHOLD: f64 = 2.0;

/// Cross products above this are treated as non-parallel
const PARALLEL_TOLERANCE: f64 = 1e-3;

/// Panel id to the ids of its neighbours
pub type Adjacency = BTreeMap<PanelId, BTreeSet<PanelId>>;

/// Consecutive vertex pairs, wrapping from the last vertex to the first
pub fn panel_edges(panel: &Panel) -> Vec<(Point, Point)> {
    let pts = &panel.points;
    let n = pts.len();
    (0..n).map(|i| (pts[i], pts[(i + 1) % n])).collect()
}

/// Length over which segments `p1`-`p2` and `q1`-`q2` overlap
///
/// Zero unless the segments are parallel. The overlap is measured along the
/// axis on which the first segment has the larger extent.
pub fn overlap_length(p1: Point, p2: Point, q1: Point, q2: Point) -> f64 {
    let v1 = p2 - p1;
    let v2 = q2 - q1;

    if v1.cross(v2).abs() > PARALLEL_TOLERANCE {
        return 0.0;
    }

    let use_x = v1.x.abs() >= v1.y.abs();
    let (a1, a2, b1, b2) = if use_x {
        (p1.x.min(p2.x), p1.x.max(p2.x), q1.x.min(q2.x), q1.x.max(q2.x))
    } else {
        (p1.y.min(p2.y), p1.y.max(p2.y), q1.y.min(q2.y), q1.y.max(q2.y))
    };

    let len = a2.min(b2) - a1.max(b1);
    if len > 0.0 {
        len
    } else {
        0.0
    }
}

/// Whether some edge of `a` overlaps some edge of `b` by more than the threshold
pub fn edge_shared(a: &Panel, b: &Panel) -> bool {
    let edges_b = panel_edges(b);
    panel_edges(a).iter().any(|&(p1, p2)| {
        edges_b
            .iter()
            .any(|&(q1, q2)| overlap_length(p1, p2, q1, q2) > ADJACENCY_THRESHOLD)
    })
}

/// Pairwise adjacency over all panels; every panel appears as a key
pub fn build_adjacency(panels: &[Panel]) -> Adjacency {
    let mut adjacency: Adjacency = panels.iter().map(|p| (p.id, BTreeSet::new())).collect();

    for (i, a) in panels.iter().enumerate() {
        for b in &panels[i + 1..] {
            if edge_shared(a, b) {
                adjacency.entry(a.id).or_default().insert(b.id);
                adjacency.entry(b.id).or_default().insert(a.id);
            }
        }
    }

    adjacency
}

/// The selected ids reachable from the first one through selected panels
///
/// Breadth-first from `ids[0]`, only stepping onto ids that are themselves
/// selected. Selected ids not reachable this way are dropped.
pub fn connected_subset(ids: &[PanelId], adjacency: &Adjacency) -> Vec<PanelId> {
    let Some(&first) = ids.first() else {
        return Vec::new();
    };

    let target: HashSet<PanelId> = ids.iter().copied().collect();
    let mut result = Vec::new();
    let mut seen = HashSet::from([first]);
    let mut queue = VecDeque::from([first]);

    while let Some(current) = queue.pop_front() {
        result.push(current);

        let Some(neighbours) = adjacency.get(&current) else {
            continue;
        };
        for &n in neighbours {
            if target.contains(&n) && seen.insert(n) {
                queue.push_back(n);
            }
        }
    }

    result
}

/// The cut's bounding box, inflated by `gutter`, touches the panel's bounds
pub fn bounds_overlap(cut: &Cut, panel: &Panel, gutter: f64) -> bool {
    let padded = cut.bounds().inflate(gutter, gutter);
    let b = panel.bounds();
    rects_touch(padded, b)
}

fn rects_touch(a: Rect, b: Rect) -> bool {
    !(b.x0 > a.x1 || b.x1 < a.x0 || b.y0 > a.y1 || b.y1 < a.y0)
}

/// Conservative test for a cut lying between two panels
///
/// Bounding boxes only; it reports every cut near both panels, including
/// ones that do not actually separate them.
pub fn cut_separates_panels(cut: &Cut, a: &Panel, b: &Panel, gutter: f64) -> bool {
    bounds_overlap(cut, a, gutter) && bounds_overlap(cut, b, gutter)
}
