//! Integration tests for the state manager
//!
//! These tests exercise the StateManager through its public API the way the
//! GUI controller uses it: loading config into state, subscribing to change
//! events, and running through the launch lifecycle.

use camino::Utf8PathBuf;
use std::sync::Arc;
use xivbench::models::{BenchmarkScore, LauncherConfig};
use xivbench::services::presets::{self, QualityPreset};
use xivbench::state::{StateChange, StateManager};

#[test]
fn test_config_load_reflects_into_state() {
    let manager = StateManager::new();

    let mut config = LauncherConfig::default();
    config.benchmark.path = "/opt/ffxiv-benchmark".to_string();
    config.wine.path = "/usr/bin/wine".to_string();
    config.wine.prefix = "/home/user/.wine".to_string();
    config.wine.environment = "DXVK_HUD=fps".to_string();

    manager.load_from_config(&config);

    assert!(manager.read(|s| s.is_fully_configured()));
    assert_eq!(
        manager.read(|s| s.benchmark_dir.clone()),
        Some(Utf8PathBuf::from("/opt/ffxiv-benchmark"))
    );
    assert_eq!(manager.read(|s| s.wine_environment.clone()), "DXVK_HUD=fps");
}

#[test]
fn test_state_round_trips_back_to_config() {
    let manager = StateManager::new();

    let mut config = LauncherConfig::default();
    config.benchmark.path = "/opt/bench".to_string();
    config.wine.path = "/usr/bin/wine".to_string();
    config.graphics.display_mode = "2".to_string();
    config.graphics.shadow_resolution = "1".to_string();

    manager.load_from_config(&config);
    let saved = manager.read(|s| s.to_config());

    assert_eq!(saved.benchmark.path, "/opt/bench");
    assert_eq!(saved.graphics.display_mode, "2");
    assert_eq!(saved.graphics.shadow_resolution, "1");
}

#[test]
fn test_launch_lifecycle_event_sequence() {
    let manager = StateManager::new();
    let mut rx = manager.subscribe();

    manager.begin_launch();
    manager.finish_launch(
        0,
        Some(BenchmarkScore {
            score: 7000,
            fps_average: Some(55.0),
        }),
    );

    assert_eq!(rx.try_recv(), Ok(StateChange::LaunchStarted));
    match rx.try_recv() {
        Ok(StateChange::LaunchFinished { exit_code, score }) => {
            assert_eq!(exit_code, 0);
            assert_eq!(score.map(|s| s.score), Some(7000));
        }
        other => panic!("expected LaunchFinished, got {other:?}"),
    }
}

#[test]
fn test_failed_launch_clears_running_flag() {
    let manager = StateManager::new();

    manager.begin_launch();
    assert!(manager.read(|s| s.is_running));

    manager.finish_launch(-1, None);
    assert!(!manager.read(|s| s.is_running));
    assert_eq!(manager.read(|s| s.last_exit_code), Some(-1));
    assert!(manager.read(|s| s.last_score.is_none()));
}

#[test]
fn test_preset_application_emits_settings_change() {
    let manager = StateManager::new();
    let mut rx = manager.subscribe();

    let mut graphics = manager.read(|s| s.graphics.clone());
    presets::apply(QualityPreset::StandardDesktop, &mut graphics);
    manager.set_graphics(graphics);

    assert_eq!(rx.try_recv(), Ok(StateChange::SettingsChanged));
}

#[test]
fn test_state_is_shared_across_threads() {
    let manager = Arc::new(StateManager::new());

    let worker = {
        let manager = Arc::clone(&manager);
        std::thread::spawn(move || {
            manager.set_wine_executable(Some(Utf8PathBuf::from("/usr/bin/wine")));
        })
    };
    worker.join().unwrap();

    assert_eq!(
        manager.read(|s| s.wine_executable.clone()),
        Some(Utf8PathBuf::from("/usr/bin/wine"))
    );
}
