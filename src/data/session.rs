//! Session file I/O operations
//!
//! A session is everything needed to rebuild a layout: page geometry, gutter,
//! the cut list, and where the cut id counter stands.

use crate::editing::{Layout, PageGeometry};
use crate::panels::{Cut, IdSequence};
use anyhow::{anyhow, ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub page: PageGeometry,
    pub gutter: f64,
    pub cuts: Vec<Cut>,
    /// Next cut id to hand out
    #[serde(default)]
    pub next_id: IdSequence,
}

impl Session {
    pub fn from_layout(layout: &Layout) -> Self {
        Self {
            page: *layout.page(),
            gutter: layout.gutter(),
            cuts: layout.cuts().to_vec(),
            next_id: layout.ids().clone(),
        }
    }

    /// Rebuild the layout; deleted panels and selection are not saved
    ///
    /// Fails when the file leaves no fresh cut id to hand out.
    pub fn into_layout(self) -> Result<Layout> {
        // Never hand out an id already used in the file
        let mut used = 1;
        for cut in &self.cuts {
            let after = cut.id.0.checked_add(1).ok_or_else(|| {
                anyhow!("Cut id {} leaves no room for new cut ids", cut.id)
            })?;
            used = used.max(after);
        }

        let next = self.next_id.peek().max(used);
        ensure!(next < u32::MAX, "Cut id counter is exhausted ({next})");
        let ids = IdSequence::starting_at(next);
        Ok(Layout::from_parts(self.page, self.gutter, self.cuts, ids))
    }
}

/// Load a session file from disk
pub fn load_session(path: impl AsRef<Path>) -> Result<Session> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session file {}", path.display()))?;
    let session: Session = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid session file {}", path.display()))?;
    debug!("Loaded session with {} cuts from {:?}", session.cuts.len(), path);
    Ok(session)
}

/// Write a session file as pretty JSON
pub fn save_session(path: impl AsRef<Path>, session: &Session) -> Result<()> {
    let path = path.as_ref();
    let contents = serde_json::to_string_pretty(session)?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write session file {}", path.display()))?;
    debug!("Saved session to {:?}", path);
    Ok(())
}
