//! Geometry utility functions
//!
//! Small scalar and vector helpers shared by the clipper, hit testing and
//! drag handling.

use kurbo::{Point, Size, Vec2};

/// Vectors shorter than this normalize to zero
const NORMALIZE_EPSILON: f64 = 1e-12;

/// Clamp a value into `[min, max]`
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamp a point into the canvas rectangle `[0, width] x [0, height]`
pub fn clamp_point(pt: Point, canvas: Size) -> Point {
    Point::new(
        clamp(pt.x, 0.0, canvas.width),
        clamp(pt.y, 0.0, canvas.height),
    )
}

/// Distance from `p` to the segment `a`-`b`
///
/// The projection of `p` onto the segment is clamped to the endpoints. A
/// zero-length segment yields the plain distance to `a`.
pub fn distance_point_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ap = p - a;
    let ab = b - a;
    let len = ab.hypot2();

    if len == 0.0 {
        return ap.hypot();
    }

    let t = clamp(ap.dot(ab) / len, 0.0, 1.0);
    let closest = a + ab * t;
    (p - closest).hypot()
}

/// Unit vector in the direction of `v`, or zero for a degenerate vector
pub fn normalize(v: Vec2) -> Vec2 {
    let len = v.hypot();
    if len < NORMALIZE_EPSILON {
        return Vec2::ZERO;
    }
    v / len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_point_into_canvas() {
        let canvas = Size::new(200.0, 100.0);
        assert_eq!(
            clamp_point(Point::new(-5.0, 50.0), canvas),
            Point::new(0.0, 50.0)
        );
        assert_eq!(
            clamp_point(Point::new(250.0, 130.0), canvas),
            Point::new(200.0, 100.0)
        );
        assert_eq!(
            clamp_point(Point::new(10.0, 20.0), canvas),
            Point::new(10.0, 20.0)
        );
    }

    #[test]
    fn test_distance_to_degenerate_segment() {
        let a = Point::new(3.0, 4.0);
        for p in [
            Point::new(0.0, 0.0),
            Point::new(-7.5, 2.25),
            Point::new(3.0, 4.0),
            Point::new(100.0, -40.0),
        ] {
            let expected = (p.x - a.x).hypot(p.y - a.y);
            assert_eq!(distance_point_to_segment(p, a, a), expected);
        }
    }

    #[test]
    fn test_distance_projects_and_clamps() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        // Perpendicular foot inside the segment
        assert!((distance_point_to_segment(Point::new(5.0, 3.0), a, b) - 3.0).abs() < 1e-12);
        // Beyond the end the distance is to the endpoint
        assert!((distance_point_to_segment(Point::new(13.0, 4.0), a, b) - 5.0).abs() < 1e-12);
        assert!((distance_point_to_segment(Point::new(-3.0, -4.0), a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_degenerate_is_zero() {
        assert_eq!(normalize(Vec2::ZERO), Vec2::ZERO);
        let n = normalize(Vec2::new(3.0, 4.0));
        assert!((n.x - 0.6).abs() < 1e-12);
        assert!((n.y - 0.8).abs() < 1e-12);
    }
}
