// State management module
//
// Wraps AppState in Arc<RwLock<T>> and emits change events over a tokio
// broadcast channel so the GUI can react without polling.

use crate::models::{AppState, BenchmarkScore, GraphicsSettings, LauncherConfig};
use camino::Utf8PathBuf;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

/// Change events emitted when state is modified.
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    /// A configured path changed.
    ConfigurationChanged { is_fully_configured: bool },

    /// Graphics settings or the environment string changed.
    SettingsChanged,

    /// A benchmark process is being spawned.
    LaunchStarted,

    /// The benchmark process exited.
    LaunchFinished {
        exit_code: i32,
        score: Option<BenchmarkScore>,
    },
}

/// Thread-safe state manager with event emission.
///
/// Always go through the manager instead of touching [`AppState`] directly:
/// - [`read()`](Self::read) for reads without cloning the whole state
/// - [`update()`](Self::update) for mutations with automatic event emission
/// - [`subscribe()`](Self::subscribe) for listening to changes
#[derive(Clone)]
pub struct StateManager {
    state: Arc<RwLock<AppState>>,

    /// Broadcast channel for change events; multiple subscribers allowed.
    state_tx: broadcast::Sender<StateChange>,
}

impl StateManager {
    pub fn new() -> Self {
        let (state_tx, _) = broadcast::channel(64);
        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            state_tx,
        }
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> AppState {
        self.state.read().unwrap().clone()
    }

    /// Run a closure with read access to the state.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AppState) -> R,
    {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Mutate the state and emit events for whatever changed.
    ///
    /// Returns the events that were emitted, which the tests use directly.
    pub fn update<F>(&self, update_fn: F) -> Vec<StateChange>
    where
        F: FnOnce(&mut AppState),
    {
        let mut state = self.state.write().unwrap();
        let old_state = state.clone();

        update_fn(&mut state);

        let changes = Self::detect_changes(&old_state, &state);
        for change in &changes {
            // It's fine if nobody is listening
            let _ = self.state_tx.send(change.clone());
        }

        changes
    }

    /// Subscribe to state change events.
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.state_tx.subscribe()
    }

    /// Populate the state from a freshly loaded config file.
    pub fn load_from_config(&self, config: &LauncherConfig) -> Vec<StateChange> {
        self.update(|state| state.apply_config(config))
    }

    // ----- typed helpers used by the GUI callbacks -----

    pub fn set_benchmark_dir(&self, path: Option<Utf8PathBuf>) -> Vec<StateChange> {
        self.update(|state| state.benchmark_dir = path)
    }

    pub fn set_wine_executable(&self, path: Option<Utf8PathBuf>) -> Vec<StateChange> {
        self.update(|state| state.wine_executable = path)
    }

    pub fn set_wine_prefix(&self, path: Option<Utf8PathBuf>) -> Vec<StateChange> {
        self.update(|state| state.wine_prefix = path)
    }

    pub fn set_graphics(&self, graphics: GraphicsSettings) -> Vec<StateChange> {
        self.update(|state| state.graphics = graphics)
    }

    /// Mark a launch as started.
    pub fn begin_launch(&self) -> Vec<StateChange> {
        self.update(|state| {
            state.is_running = true;
            state.last_exit_code = None;
            state.last_score = None;
        })
    }

    /// Record a finished launch.
    pub fn finish_launch(
        &self,
        exit_code: i32,
        score: Option<BenchmarkScore>,
    ) -> Vec<StateChange> {
        self.update(|state| {
            state.is_running = false;
            state.last_exit_code = Some(exit_code);
            state.last_score = score;
        })
    }

    /// Diff two states into the events to broadcast.
    fn detect_changes(old: &AppState, new: &AppState) -> Vec<StateChange> {
        let mut changes = Vec::new();

        if old.benchmark_dir != new.benchmark_dir
            || old.wine_executable != new.wine_executable
            || old.wine_prefix != new.wine_prefix
        {
            changes.push(StateChange::ConfigurationChanged {
                is_fully_configured: new.is_fully_configured(),
            });
        }

        if old.graphics != new.graphics || old.wine_environment != new.wine_environment {
            changes.push(StateChange::SettingsChanged);
        }

        if old.is_running != new.is_running {
            if new.is_running {
                changes.push(StateChange::LaunchStarted);
            } else {
                changes.push(StateChange::LaunchFinished {
                    exit_code: new.last_exit_code.unwrap_or(-1),
                    score: new.last_score,
                });
            }
        }

        changes
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}
