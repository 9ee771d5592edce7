// xivbench - Wine launcher front-end for the FFXIV benchmark
//
// This is the library crate containing the settings model, preset and
// command-line logic, and the launcher service. The binary crate (main.rs)
// provides the GUI entry point.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use models::{AppState, GraphicsSettings, LauncherConfig};
pub use state::{StateChange, StateManager};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
