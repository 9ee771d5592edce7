//! Data models for the launcher.
//!
//! This module contains the core data structures used throughout the
//! application:
//! - [`AppState`]: the central state container (paths, graphics settings,
//!   launch status, last score)
//! - [`LauncherConfig`]: the persisted `benchmark` / `wine` / `graphics`
//!   sections loaded from `config.yaml`
//! - [`GraphicsSettings`] and the per-setting option enums in
//!   [`graphics`]: the typed settings model the presets and the argument
//!   builder operate on
//!
//! Config structs serialize through serde; graphics values persist
//! string-encoded so each one can fail open to its default independently.

pub mod app_state;
pub mod config;
pub mod graphics;

pub use app_state::{AppState, BenchmarkScore, optional_path};
pub use config::{
    BenchmarkSection, DEFAULT_WINE_ENVIRONMENT, GraphicsSection, LauncherConfig, WineSection,
    probe_wine_executable,
};
pub use graphics::GraphicsSettings;
