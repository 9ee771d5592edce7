use camino::Utf8PathBuf;

use crate::models::config::LauncherConfig;
use crate::models::graphics::GraphicsSettings;

/// Score pair read back from the benchmark's result file after a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkScore {
    pub score: u32,
    pub fps_average: Option<f32>,
}

impl BenchmarkScore {
    /// Human-readable one-liner for the status bar and the log.
    pub fn summary(&self) -> String {
        match self.fps_average {
            Some(fps) => format!("Score: {} ({:.1} fps average)", self.score, fps),
            None => format!("Score: {}", self.score),
        }
    }
}

/// Single source of truth for the session.
///
/// `AppState` is wrapped in `Arc<RwLock<AppState>>` by
/// [`crate::state::StateManager`]; mutations go through the manager's
/// `update()` so change events are emitted for the GUI. It holds exactly
/// what the config file persists, plus the transient launch state.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    // Configuration paths
    pub benchmark_dir: Option<Utf8PathBuf>,
    pub wine_executable: Option<Utf8PathBuf>,
    pub wine_prefix: Option<Utf8PathBuf>,

    /// Whitespace-separated `KEY=VALUE` overrides for the spawned process.
    pub wine_environment: String,

    // Graphics settings
    pub graphics: GraphicsSettings,

    // Runtime state (not persisted)
    pub is_running: bool,
    pub last_exit_code: Option<i32>,
    pub last_score: Option<BenchmarkScore>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            benchmark_dir: None,
            wine_executable: None,
            wine_prefix: None,
            wine_environment: String::new(),
            graphics: GraphicsSettings::default(),
            is_running: false,
            last_exit_code: None,
            last_score: None,
        }
    }
}

impl AppState {
    /// Whether both executable paths have been configured.
    ///
    /// The wine prefix is deliberately not part of this: a missing prefix
    /// is a soft warning at launch time, not a configuration gap.
    pub fn is_fully_configured(&self) -> bool {
        self.benchmark_dir.is_some() && self.wine_executable.is_some()
    }

    /// Overwrite the configurable parts of the state from a loaded config.
    pub fn apply_config(&mut self, config: &LauncherConfig) {
        self.benchmark_dir = optional_path(&config.benchmark.path);
        self.wine_executable = optional_path(&config.wine.path);
        self.wine_prefix = optional_path(&config.wine.prefix);
        self.wine_environment = config.wine.environment.clone();
        self.graphics = GraphicsSettings::from_section(&config.graphics);
    }

    /// Snapshot the persistable parts of the state for saving at exit.
    pub fn to_config(&self) -> LauncherConfig {
        let mut config = LauncherConfig::default();
        config.benchmark.path = path_string(&self.benchmark_dir);
        config.wine.path = path_string(&self.wine_executable);
        config.wine.prefix = path_string(&self.wine_prefix);
        config.wine.environment = self.wine_environment.clone();
        config.graphics = self.graphics.to_section();
        config
    }
}

/// Treat an empty or whitespace-only field as "not configured".
pub fn optional_path(raw: &str) -> Option<Utf8PathBuf> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(Utf8PathBuf::from(trimmed))
    }
}

fn path_string(path: &Option<Utf8PathBuf>) -> String {
    path.as_ref().map(|p| p.to_string()).unwrap_or_default()
}
