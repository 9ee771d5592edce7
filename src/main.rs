//! xivbench - Wine launcher front-end for the FFXIV benchmark
//!
//! Main entry point for the GUI application.
//!
//! # Execution Flow
//!
//! 1. Resolve the config directory ($XDG_CONFIG_HOME or ~/.config)
//! 2. Initialize logging → <config dir>/logs/xivbench.<date>
//! 3. Create the tokio runtime that runs benchmark subprocesses
//! 4. Load config.yaml into the StateManager
//! 5. Create the GuiController (wires the Slint window to state and
//!    services) and run the event loop until the window closes
//! 6. Persist the final settings and shut the runtime down
//!
//! The application uses a hybrid threading model: the main thread runs the
//! Slint event loop, tokio workers execute the Wine subprocess, and a
//! background thread relays state changes into UI updates.

use anyhow::Result;
use std::sync::Arc;
use xivbench::ui::GuiController;
use xivbench::{APP_NAME, ConfigManager, StateManager, VERSION, config, logging};

fn main() -> Result<()> {
    let config_dir = config::default_config_dir()?;

    // The guard keeps the non-blocking file writer alive until exit
    let _log_guard = logging::setup_logging(&config_dir.join("logs"), APP_NAME, false, true)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    // Runtime for subprocess execution; the GUI thread never blocks on the
    // benchmark process.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(2)
        .thread_name("xivbench-worker")
        .build()?;

    let state_manager = Arc::new(StateManager::new());

    let config_manager = ConfigManager::new(&config_dir)?;
    let launcher_config = config_manager.load()?;
    state_manager.load_from_config(&launcher_config);

    tracing::info!("Configuration loaded from {}", config_manager.config_path());

    let controller = GuiController::new(Arc::clone(&state_manager), runtime.handle().clone())?;

    // Blocks until the window is closed; the final widget values are
    // flushed into the state before this returns.
    controller.run()?;

    // Settings are persisted once, at normal exit
    let final_config = state_manager.read(|state| state.to_config());
    config_manager.save(&final_config)?;

    runtime.shutdown_timeout(std::time::Duration::from_secs(5));

    tracing::info!("Shutdown complete");
    Ok(())
}
