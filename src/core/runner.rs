//! Application runner logic
//!
//! Applies the edits requested on the command line and reports the result

use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use crate::core::settings::EngineSettings;
use crate::data::{load_session, save_session, Session};
use crate::editing::Layout;
use crate::logging::{self, LogTarget};
use crate::panels::{Cut, PanelId};
use anyhow::{anyhow, Result};
use kurbo::Point;
use serde::Serialize;
use tracing::{info, warn};

/// JSON printed on stdout
#[derive(Debug, Serialize)]
pub struct LayoutReport<'a> {
    pub gutter: f64,
    pub cuts: &'a [Cut],
    pub panels: Vec<PanelReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct PanelReport<'a> {
    pub id: PanelId,
    pub area: f64,
    pub points: &'a [Point],
}

impl<'a> LayoutReport<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self {
            gutter: layout.gutter(),
            cuts: layout.cuts(),
            panels: layout
                .panels()
                .iter()
                .map(|p| PanelReport {
                    id: p.id,
                    area: p.area(),
                    points: &p.points,
                })
                .collect(),
        }
    }
}

/// Run panelcut with the given CLI arguments.
/// Handles special CLI flags and delegates to the layout builder.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    // Handle --new-config flag specially
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory();
    }

    cli_args.validate().map_err(|e| anyhow!(e))?;

    let target = if cli_args.log_file {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    let _guard = logging::init(target)?;

    let settings = cli_args.resolve_settings(ConfigFile::load().as_ref());
    let layout = build_layout(&cli_args, &settings)?;

    if let Some(path) = &cli_args.save {
        save_session(path, &Session::from_layout(&layout))?;
        info!("Saved session to {}", path.display());
    }

    let report = serde_json::to_string_pretty(&LayoutReport::new(&layout))?;
    println!("{report}");
    Ok(())
}

/// Build the layout described by the CLI arguments
///
/// Edits run in a fixed order: grid, splits, merge by id, then picks.
pub fn build_layout(cli_args: &CliArgs, settings: &EngineSettings) -> Result<Layout> {
    let mut layout = match &cli_args.session {
        Some(path) => {
            let mut layout = load_session(path)?.into_layout()?;
            if let Some(gutter) = cli_args.gutter {
                layout.set_gutter(gutter);
            }
            layout
        }
        None => Layout::new(settings.page, settings.gutter),
    };

    if let Some(grid) = cli_args.grid {
        layout.generate_grid(grid.rows, grid.cols);
    }

    for split in &cli_args.splits {
        layout
            .split_panel(split.panel, split.axis)
            .ok_or_else(|| anyhow!("Cannot split {}: no such panel", split.panel))?;
    }

    if !cli_args.merge.is_empty() && !layout.merge_panels(&cli_args.merge) {
        warn!("Nothing merged: the listed panels share no dissolvable edge");
    }

    for pick in &cli_args.picks {
        layout.click(pick.0, settings.preview_scale);
    }
    if cli_args.picks.len() >= 2 && !layout.merge_selected() {
        warn!("Nothing merged: the picked panels share no dissolvable edge");
    }

    info!(
        "Layout has {} panels from {} cuts",
        layout.panels().len(),
        layout.cuts().len()
    );
    Ok(layout)
}
