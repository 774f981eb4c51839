//! Engine settings
//!
//! Tunable values with their built-in defaults. Fixed algorithm constants
//! live next to the code that uses them.

use crate::editing::PageGeometry;
use serde::{Deserialize, Serialize};

/// Gutter width in preview pixels
pub const DEFAULT_GUTTER: f64 = 20.0;

/// Preview pixels per screen pixel
pub const DEFAULT_PREVIEW_SCALE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub gutter: f64,
    pub preview_scale: f64,
    pub page: PageGeometry,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            gutter: DEFAULT_GUTTER,
            preview_scale: DEFAULT_PREVIEW_SCALE,
            page: PageGeometry::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.gutter, 20.0);
        assert_eq!(settings.preview_scale, 1.0);
        assert_eq!(settings.page.width, 800.0);
        assert_eq!(settings.page.live_margin, 24.0);
        assert_eq!(settings.page.inset_margin, 34.0);
    }
}
