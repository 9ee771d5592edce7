//! Integration tests for configuration persistence
//!
//! These tests verify:
//! - First-run defaults when no config file exists
//! - Save/load round-trips through the YAML file
//! - String encodings ("True"/"False" booleans, ordinal selections)
//! - Fail-open decoding of hand-edited values

use camino::Utf8PathBuf;
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;
use xivbench::config::ConfigManager;
use xivbench::models::graphics::{
    AmbientOcclusion, GlareEffect, GlareRepresentation, GrassQuality, ParallaxOcclusion,
    PhysicsSimulation, Reflections, ScreenMode, ShadowCascading, ShadowResolution,
    ShadowSoftening, Tessellation, TextureFilter, TransparentLighting, WaterRefraction,
};
use xivbench::models::{DEFAULT_WINE_ENVIRONMENT, GraphicsSettings, LauncherConfig};

fn create_test_config_manager() -> (ConfigManager, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    let manager = ConfigManager::new(&config_dir).unwrap();
    (manager, temp_dir)
}

#[test]
fn test_first_run_yields_defaults() {
    let (manager, _temp_dir) = create_test_config_manager();

    let config = manager.load().unwrap();
    assert_eq!(config.wine.environment, DEFAULT_WINE_ENVIRONMENT);
    assert!(config.benchmark.path.is_empty());

    let graphics = GraphicsSettings::from_section(&config.graphics);
    assert_eq!(graphics, GraphicsSettings::default());
}

#[test]
fn test_settings_survive_save_and_reload() {
    let (manager, _temp_dir) = create_test_config_manager();

    let mut settings = GraphicsSettings::default();
    settings.screen_mode = ScreenMode::Fullscreen;
    settings.resolution_width = 1920;
    settings.resolution_height = 1080;
    settings.anti_aliasing = false;
    settings.occlusion_culling = true;
    settings.reflections = Reflections::High;
    settings.texture_filter = TextureFilter::Anisotropic4x;
    settings.shadow_resolution = ShadowResolution::Low;
    settings.ambient_occlusion = AmbientOcclusion::Strong;
    settings.physics_npc = PhysicsSimulation::Simple;

    let mut config = LauncherConfig::default();
    config.benchmark.path = "/opt/ffxiv-benchmark".to_string();
    config.wine.path = "/usr/bin/wine".to_string();
    config.wine.prefix = "/home/user/.wine".to_string();
    config.wine.environment = "WINEESYNC=1".to_string();
    config.graphics = settings.to_section();

    manager.save(&config).unwrap();
    let loaded = manager.load().unwrap();

    assert_eq!(loaded.benchmark.path, "/opt/ffxiv-benchmark");
    assert_eq!(loaded.wine.prefix, "/home/user/.wine");
    assert_eq!(loaded.wine.environment, "WINEESYNC=1");
    assert_eq!(GraphicsSettings::from_section(&loaded.graphics), settings);
}

#[test]
fn test_file_uses_string_encodings() {
    let (manager, _temp_dir) = create_test_config_manager();

    manager.save(&LauncherConfig::default()).unwrap();
    let raw = fs::read_to_string(manager.config_path()).unwrap();

    // Booleans persist in their historical spelling, selections as ordinals
    assert!(raw.contains("True"));
    assert!(raw.contains("False"));
    assert!(raw.contains("display_res_x"));
    assert!(raw.contains("1280"));
}

#[test]
fn test_hand_edited_garbage_fails_open_per_value() {
    let (manager, _temp_dir) = create_test_config_manager();

    fs::write(
        manager.config_path(),
        concat!(
            "benchmark:\n",
            "  path: /opt/bench\n",
            "graphics:\n",
            "  display_mode: \"9\"\n",
            "  display_res_x: wide\n",
            "  anti_aliasing: maybe\n",
            "  reflection: \"2\"\n",
        ),
    )
    .unwrap();

    let config = manager.load().unwrap();
    assert_eq!(config.benchmark.path, "/opt/bench");

    let graphics = GraphicsSettings::from_section(&config.graphics);

    // Bad values fell back individually...
    assert_eq!(graphics.screen_mode, ScreenMode::Windowed);
    assert_eq!(graphics.resolution_width, 1280);
    assert!(graphics.anti_aliasing);

    // ...while the good one survived
    assert_eq!(graphics.reflections, Reflections::Normal);
}

#[test]
fn test_unparseable_file_falls_back_wholesale() {
    let (manager, _temp_dir) = create_test_config_manager();

    fs::write(manager.config_path(), ": not yaml [").unwrap();

    let config = manager.load().unwrap();
    assert_eq!(
        GraphicsSettings::from_section(&config.graphics),
        GraphicsSettings::default()
    );
}

fn arb_graphics_settings() -> impl Strategy<Value = GraphicsSettings> {
    (
        (0u32..3, 16u32..8192, 16u32..8192),
        any::<[bool; 10]>(),
        (0u32..4, 0u32..2, 0u32..4, 0u32..2, 0u32..2, 0u32..2, 0u32..4),
        (0u32..3, 0u32..3, 0u32..2, 0u32..5, 0u32..3, 0u32..3, 0u32..3, 0u32..3),
    )
        .prop_map(|((mode, width, height), bools, general, detail)| {
            let (reflection, translucent, grass, parallax, tess, glare_rep, filter) = general;
            let (shadow_res, cascading, softening, ssao, glare, water, phys_self, phys_npc) =
                detail;

            GraphicsSettings {
                screen_mode: ScreenMode::from_index(mode),
                resolution_width: width,
                resolution_height: height,
                anti_aliasing: bools[0],
                occlusion_culling: bools[1],
                distance_lod: bools[2],
                reflections: Reflections::from_index(reflection),
                transparent_lighting: TransparentLighting::from_index(translucent),
                grass_quality: GrassQuality::from_index(grass),
                parallax_occlusion: ParallaxOcclusion::from_index(parallax),
                tessellation: Tessellation::from_index(tess),
                glare_representation: GlareRepresentation::from_index(glare_rep),
                texture_filter: TextureFilter::from_index(filter),
                shadow_lod: bools[3],
                shadow_self: bools[4],
                shadow_npc: bools[5],
                shadow_resolution: ShadowResolution::from_index(shadow_res),
                shadow_cascading: ShadowCascading::from_index(cascading),
                shadow_softening: ShadowSoftening::from_index(softening),
                wet_surface: bools[6],
                vignette: bools[7],
                radial_blur: bools[8],
                depth_of_field: bools[9],
                ambient_occlusion: AmbientOcclusion::from_index(ssao),
                glare_effect: GlareEffect::from_index(glare),
                water_refraction: WaterRefraction::from_index(water),
                physics_self: PhysicsSimulation::from_index(phys_self),
                physics_npc: PhysicsSimulation::from_index(phys_npc),
            }
        })
}

proptest! {
    // Any legal settings assignment survives the string encoding intact.
    #[test]
    fn prop_settings_round_trip_through_section(settings in arb_graphics_settings()) {
        let decoded = GraphicsSettings::from_section(&settings.to_section());
        prop_assert_eq!(decoded, settings);
    }
}
