//! Editing Functionality
//!
//! This module contains everything a user does to a page:
//! - The `Layout` session owning cuts, panels and selection
//! - Hit testing of cuts and panels under the pointer
//! - Dragging cuts and their endpoints
//! - Page geometry for the preview canvas

pub mod drag;
pub mod hit;
pub mod layout;
pub mod page;
pub mod selection;

// Re-export commonly used items
pub use drag::{CutDrag, DragMode};
pub use hit::{cut_hit_threshold, grab_mode, hit_cut, hit_panel};
pub use layout::{Layout, SplitAxis, MIN_CUT_LENGTH, SPLIT_OVERSHOOT};
pub use page::PageGeometry;
pub use selection::{ClickTarget, Selection, MERGE_SELECTION_CAP};
