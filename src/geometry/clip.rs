//! Half-plane clipping and the gutter strip split
//!
//! A cut is an infinite line through its two endpoints. Splitting a panel
//! by a cut keeps the parts of the polygon lying at least `gutter / 2` away
//! from the line on either side, which carves the gutter band out of it.

use super::polygon::dedupe_polygon;
use super::utilities::normalize;
use kurbo::{Point, Vec2};

/// Replaces an exactly zero denominator when an edge is parallel to the plane
const PARALLEL_DENOMINATOR: f64 = 1e-12;

/// Which side of an offset plane a clip keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keep {
    /// Signed distance `>= offset`
    Above,
    /// Signed distance `<= offset`
    Below,
}

impl Keep {
    fn contains(self, signed: f64) -> bool {
        match self {
            Keep::Above => signed >= 0.0,
            Keep::Below => signed <= 0.0,
        }
    }
}

/// Outcome of splitting a polygon by a gutter strip
#[derive(Debug, Clone, PartialEq)]
pub enum StripSplit {
    /// The strip does not cross the polygon; keep the original as-is
    Unchanged,
    /// The strip fully crosses the polygon
    Split { high: Vec<Point>, low: Vec<Point> },
}

impl StripSplit {
    /// Parts as a list: `[high, low]` on a split, `[poly]` otherwise
    pub fn into_parts(self, poly: &[Point]) -> Vec<Vec<Point>> {
        match self {
            StripSplit::Unchanged => vec![poly.to_vec()],
            StripSplit::Split { high, low } => vec![high, low],
        }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, StripSplit::Split { .. })
    }
}

fn signed_distance(p: Point, origin: Point, normal: Vec2) -> f64 {
    (p - origin).dot(normal)
}

/// One Sutherland-Hodgman pass against the plane `(p - origin) . normal = offset`
///
/// The result is deduped; it may have fewer than three vertices when the
/// polygon lies entirely on the discarded side.
pub fn clip_half_plane(
    poly: &[Point],
    origin: Point,
    normal: Vec2,
    offset: f64,
    keep: Keep,
) -> Vec<Point> {
    let n = poly.len();
    let mut out = Vec::with_capacity(n + 2);

    for i in 0..n {
        let a = poly[i];
        let b = poly[(i + 1) % n];

        let da = signed_distance(a, origin, normal) - offset;
        let db = signed_distance(b, origin, normal) - offset;

        let inside_a = keep.contains(da);
        let inside_b = keep.contains(db);

        if inside_a != inside_b {
            let denom = da - db;
            let denom = if denom == 0.0 { PARALLEL_DENOMINATOR } else { denom };
            out.push(a.lerp(b, da / denom));
        }
        if inside_b {
            out.push(b);
        }
    }

    dedupe_polygon(&out)
}

/// Split `poly` by the line through `start` and `end`, leaving a gutter gap
///
/// With unit tangent `t` and normal `n = (-t.y, t.x)`, the high part keeps
/// vertices at signed distance `>= gutter / 2` and the low part those at
/// `<= -gutter / 2`. Only when both parts are proper polygons is the result
/// a split. A zero-length line never splits.
pub fn split_polygon_by_strip(
    poly: &[Point],
    start: Point,
    end: Point,
    gutter: f64,
) -> StripSplit {
    let tangent = normalize(end - start);
    if tangent == Vec2::ZERO {
        return StripSplit::Unchanged;
    }

    let normal = Vec2::new(-tangent.y, tangent.x);
    let offset = gutter / 2.0;

    let high = clip_half_plane(poly, start, normal, offset, Keep::Above);
    let low = clip_half_plane(poly, start, normal, -offset, Keep::Below);

    if high.len() >= 3 && low.len() >= 3 {
        StripSplit::Split { high, low }
    } else {
        StripSplit::Unchanged
    }
}
