//! Preview page geometry
//!
//! All values are preview pixels. The inset rectangle, inside both the live
//! and inset margins, is the area panels are carved from.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub live_margin: f64,
    pub inset_margin: f64,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            live_margin: 24.0,
            inset_margin: 34.0,
        }
    }
}

impl PageGeometry {
    pub fn new(width: f64, height: f64, live_margin: f64, inset_margin: f64) -> Self {
        Self {
            width,
            height,
            live_margin,
            inset_margin,
        }
    }

    /// Size of the preview canvas that pointer positions are clamped to
    pub fn canvas_size(&self) -> Size {
        Size::new(self.width.max(0.0), self.height.max(0.0))
    }

    /// The inset rectangle as a `kurbo::Rect`
    ///
    /// Margins larger than half the page collapse the rectangle onto the
    /// page centre instead of inverting it.
    pub fn inset_bounds(&self) -> Rect {
        let size = self.canvas_size();
        let margin = (self.live_margin + self.inset_margin).max(0.0);
        let x0 = margin.min(size.width / 2.0);
        let y0 = margin.min(size.height / 2.0);
        Rect::new(x0, y0, size.width - x0, size.height - y0)
    }

    /// Four corners of the inset rectangle, top-left first, clockwise
    pub fn inset_rect(&self) -> Vec<Point> {
        let r = self.inset_bounds();
        vec![
            Point::new(r.x0, r.y0),
            Point::new(r.x1, r.y0),
            Point::new(r.x1, r.y1),
            Point::new(r.x0, r.y1),
        ]
    }
}
