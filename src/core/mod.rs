//! Core application functionality
//!
//! This module contains the application shell around the engine:
//! - Settings and their defaults
//! - The user config file
//! - CLI handling and the runner that applies CLI edits
//! - Platform error handling

pub mod cli;
pub mod config_file;
pub mod platform;
pub mod runner;
pub mod settings;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config_file::ConfigFile;
pub use runner::run_app;
pub use settings::EngineSettings;
