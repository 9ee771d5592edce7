//! Services module - the launcher's business logic.
//!
//! Everything in here is **framework-agnostic**: no Slint, no dialogs, only
//! explicit inputs and outputs, which keeps the whole layer testable
//! without a display.
//!
//! # Components
//!
//! - [`presets`]: the five quality presets and the total assignment each
//!   one makes over the managed graphics settings
//! - [`cmdline`]: builds the ordered `SYS.<Field>=<value>` argument list,
//!   including the per-field index inversions the engine expects
//! - [`launcher`]: preflight path checks, environment-override parsing,
//!   and the actual Wine subprocess execution (async via tokio)
//! - [`results`]: reads the `[SCORE]` section of the result file the
//!   benchmark leaves behind after a scored run

pub mod cmdline;
pub mod launcher;
pub mod presets;
pub mod results;

pub use cmdline::{LaunchArgument, LaunchMode, build_launch_arguments};
pub use launcher::{LaunchError, LaunchOutcome, LaunchPlan, Preflight};
pub use presets::QualityPreset;
pub use results::ScoreReader;
