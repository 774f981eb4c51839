//! Command line interface for panelcut
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs. Many CLI options are documented with
//! examples to help users understand the expected format.

use crate::core::config_file::ConfigFile;
use crate::core::settings::EngineSettings;
use crate::editing::SplitAxis;
use crate::panels::PanelId;
use clap::Parser;
use kurbo::Point;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Grid size given as `ROWSxCOLS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
}

impl FromStr for GridSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid grid: '{s}' (expected ROWSxCOLS, e.g. 2x3)");
        let (rows, cols) = s.to_ascii_lowercase().split_once('x').ok_or_else(invalid).and_then(
            |(r, c)| {
                let rows: usize = r.trim().parse().map_err(|_| invalid())?;
                let cols: usize = c.trim().parse().map_err(|_| invalid())?;
                Ok((rows, cols))
            },
        )?;

        if rows == 0 || cols == 0 {
            return Err(format!("Invalid grid: '{s}' (rows and columns must be at least 1)"));
        }
        Ok(Self { rows, cols })
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A panel split given as `<panel-id>:<v|h>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRequest {
    pub panel: PanelId,
    pub axis: SplitAxis,
}

impl FromStr for SplitRequest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (panel, axis) = s
            .split_once(':')
            .ok_or_else(|| format!("Invalid split: '{s}' (expected <panel-id>:<v|h>)"))?;
        Ok(Self {
            panel: panel.parse()?,
            axis: axis.parse()?,
        })
    }
}

/// A canvas position given as `X,Y` in preview pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPoint(pub Point);

impl FromStr for CanvasPoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid point: '{s}' (expected X,Y)");
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x: f64 = x.trim().parse().map_err(|_| invalid())?;
        let y: f64 = y.trim().parse().map_err(|_| invalid())?;
        Ok(Self(Point::new(x, y)))
    }
}

/// panelcut CLI arguments
///
/// Examples:
///   panelcut --grid 2x3                         # Six-panel grid on the default page
///   panelcut --grid 2x2 --gutter 12             # Narrower gutters
///   panelcut --session page.json --split p0:v   # Split a panel of a saved page
///   panelcut --grid 1x3 --merge p1a2b,p3c4d     # Merge two neighbouring panels
///   panelcut --grid 2x2 --pick 100,100 --pick 500,100  # Merge the panels under two points
///   panelcut --grid 3x3 --save page.json        # Save the result as a session
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "panelcut",
    version,
    about = "Partition a comic page into panels with cuts and gutters",
    long_about = "panelcut replays an ordered list of cut lines against a page's inset rectangle to produce non-overlapping panels separated by gutters. Edits are applied in order: grid, splits, then merge. The resulting cuts and panels are printed as JSON."
)]
pub struct CliArgs {
    /// Session file to start from
    #[clap(
        long = "session",
        short = 's',
        help = "Session file to load",
        long_help = "Path to a session JSON file (as written by --save). Its page geometry, gutter and cuts are the starting point for any further edits."
    )]
    pub session: Option<PathBuf>,

    /// Gutter width in preview pixels
    #[clap(
        long = "gutter",
        short = 'g',
        help = "Gutter width in preview pixels",
        long_help = "Gutter width in preview pixels. Overrides both the session and the config file."
    )]
    pub gutter: Option<f64>,

    /// Evenly spaced grid, e.g. 2x3
    #[clap(
        long = "grid",
        help = "Add an evenly spaced ROWSxCOLS grid",
        long_help = "Append cuts dividing the inset rectangle into an evenly spaced grid, given as ROWSxCOLS (for example 2x3 for two rows of three panels)."
    )]
    pub grid: Option<GridSpec>,

    /// Panel splits, applied in order
    #[clap(
        long = "split",
        help = "Split a panel: <panel-id>:<v|h> (repeatable)",
        long_help = "Split a panel in half along its vertical (v) or horizontal (h) midline. Panel ids are printed in the JSON output. May be given several times; splits are applied in order."
    )]
    pub splits: Vec<SplitRequest>,

    /// Panels to merge
    #[clap(
        long = "merge",
        value_delimiter = ',',
        help = "Merge panels: id,id,...",
        long_help = "Comma-separated panel ids to merge. Only panels connected to the first id through other listed panels are merged."
    )]
    pub merge: Vec<PanelId>,

    /// Canvas points whose panels are picked for merging
    #[clap(
        long = "pick",
        allow_hyphen_values = true,
        help = "Pick the panel under X,Y for merging (repeatable)",
        long_help = "Click the canvas at X,Y (preview pixels) as the editor would, using the configured preview scale. Panels picked this way are merged once at least two have been picked."
    )]
    pub picks: Vec<CanvasPoint>,

    /// Where to save the resulting session
    #[clap(long = "save", help = "Save the resulting session to a file")]
    pub save: Option<PathBuf>,

    /// Write logs to a file instead of stderr
    #[clap(
        long = "log-file",
        help = "Write logs to ~/.config/panelcut/logs/",
        long_help = "Write logs to a dated file in ~/.config/panelcut/logs/ instead of stderr."
    )]
    pub log_file: bool,

    /// Initialize user configuration directory
    ///
    /// This creates the ~/.config/panelcut directory with:
    /// - settings.json: the built-in defaults, ready to edit
    /// - logs/: where --log-file writes
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with default settings",
        long_help = "Initialize the ~/.config/panelcut directory with a settings.json file holding the built-in defaults and a logs directory."
    )]
    pub new_config: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures that paths exist and numbers are usable before any
    /// work starts, providing clear error messages for common mistakes.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.session {
            if !path.is_file() {
                return Err(format!(
                    "Session file does not exist: {}\nMake sure the path is correct and the file exists.",
                    path.display()
                ));
            }
        }

        if let Some(gutter) = self.gutter {
            if !gutter.is_finite() || gutter < 0.0 {
                return Err(format!(
                    "Invalid gutter: {gutter}\nThe gutter must be a non-negative number of pixels."
                ));
            }
        }

        if self.merge.len() == 1 {
            return Err("Merging needs at least two panel ids".to_string());
        }

        Ok(())
    }

    /// Resolve engine settings from CLI args, config file, or defaults
    ///
    /// Priority order:
    /// 1. CLI argument (--gutter)
    /// 2. Config file setting (~/.config/panelcut/settings.json)
    /// 3. Built-in default
    pub fn resolve_settings(&self, config: Option<&ConfigFile>) -> EngineSettings {
        let mut settings = match config {
            Some(config) => {
                debug!("Using settings from config file");
                config.apply_to(EngineSettings::default())
            }
            None => EngineSettings::default(),
        };

        if let Some(gutter) = self.gutter {
            debug!("Using gutter from CLI: {}", gutter);
            settings.gutter = gutter;
        }

        settings
    }
}
