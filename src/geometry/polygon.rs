//! Polygon queries
//!
//! Polygons are ordered vertex lists with an implicit closing edge from the
//! last vertex back to the first.

use kurbo::{Point, Rect};

/// Vertices closer than this to their successor are dropped by `dedupe_polygon`
const DEDUPE_MIN_EDGE: f64 = 1e-4;

/// Guards the crossing computation against horizontal edges
const CROSSING_EPSILON: f64 = 1e-12;

/// Even-odd point-in-polygon test
///
/// Points lying exactly on an edge are boundary cases and may be reported
/// either way.
pub fn point_in_polygon(pt: Point, poly: &[Point]) -> bool {
    let mut inside = false;
    let n = poly.len();
    if n == 0 {
        return false;
    }

    let mut j = n - 1;
    for i in 0..n {
        let a = poly[i];
        let b = poly[j];

        if (a.y > pt.y) != (b.y > pt.y) {
            let x = (b.x - a.x) * (pt.y - a.y) / (b.y - a.y + CROSSING_EPSILON) + a.x;
            if pt.x < x {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

/// Axis-aligned bounding box of a polygon
///
/// An empty polygon yields an inverted rect (`x0 = +inf`, `x1 = -inf`) that
/// overlaps nothing.
pub fn polygon_bounds(poly: &[Point]) -> Rect {
    poly.iter().fold(
        Rect::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        ),
        |r, p| Rect::new(r.x0.min(p.x), r.y0.min(p.y), r.x1.max(p.x), r.y1.max(p.y)),
    )
}

/// Arithmetic mean of the vertices
pub fn polygon_center(poly: &[Point]) -> Point {
    if poly.is_empty() {
        return Point::ORIGIN;
    }
    let sum = poly
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let n = poly.len() as f64;
    Point::new(sum.0 / n, sum.1 / n)
}

/// Unsigned area (shoelace formula)
pub fn polygon_area(poly: &[Point]) -> f64 {
    let n = poly.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let p = poly[i];
            let q = poly[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum();
    twice.abs() / 2.0
}

/// Drop vertices that nearly coincide with their successor
///
/// Triangles and smaller are returned as-is.
pub fn dedupe_polygon(poly: &[Point]) -> Vec<Point> {
    if poly.len() <= 3 {
        return poly.to_vec();
    }

    let n = poly.len();
    (0..n)
        .filter(|&i| poly[i].distance(poly[(i + 1) % n]) > DEDUPE_MIN_EDGE)
        .map(|i| poly[i])
        .collect()
}
