// GUI Controller - bridges the Slint window with state and services
//
// Responsibilities:
// - pushing state into the widget properties at startup
// - pulling widget values back into AppState (presets, launches, exit)
// - wiring Slint callbacks: file pickers, preset buttons, launch buttons
// - subscribing to state changes for launch status updates

use crate::models::graphics::{
    AmbientOcclusion, GlareEffect, GlareRepresentation, GraphicsSettings, GrassQuality,
    ParallaxOcclusion, PhysicsSimulation, Reflections, ScreenMode, ShadowCascading,
    ShadowResolution, ShadowSoftening, Tessellation, TextureFilter, TransparentLighting,
    WaterRefraction, decode_u32,
};
use crate::models::optional_path;
use crate::services::cmdline::{LaunchMode, build_launch_arguments};
use crate::services::launcher::{self, LaunchPlan};
use crate::services::presets::{self, QualityPreset};
use crate::state::{StateChange, StateManager};
use crate::ui::bridge::{EventLoopBridge, EventLoopBridgeHandle};
use anyhow::Result;
use camino::Utf8PathBuf;
use slint::{ComponentHandle, SharedString};
use std::sync::Arc;
use tokio::sync::broadcast;

// Include the generated Slint code
slint::include_modules!();

/// GUI controller that wires the Slint window up with application state
/// and the launcher services.
///
/// The widget properties are the working copy of the settings while the
/// window is open; they are pulled back into [`crate::models::AppState`]
/// whenever something consumes them (preset application, a launch, and
/// finally window close, after which main() persists the state).
pub struct GuiController {
    ui: MainWindow,
    _bridge: EventLoopBridge<MainWindow>,
    state_manager: Arc<StateManager>,
}

impl GuiController {
    pub fn new(
        state_manager: Arc<StateManager>,
        tokio_handle: tokio::runtime::Handle,
    ) -> Result<Self> {
        let ui =
            MainWindow::new().map_err(|e| anyhow::anyhow!("Failed to create Slint UI: {e}"))?;
        let bridge = EventLoopBridge::new(&ui, tokio_handle);

        Self::sync_ui_with_state(&ui, &state_manager);
        Self::setup_callbacks(&ui, &bridge, &state_manager);
        Self::setup_state_subscription(&bridge, &state_manager);

        tracing::info!("GUI controller initialized");

        Ok(Self {
            ui,
            _bridge: bridge,
            state_manager,
        })
    }

    /// Run the GUI. Blocks until the window is closed, then captures the
    /// final widget values into the state so the caller can persist them.
    pub fn run(self) -> Result<()> {
        tracing::info!("Starting GUI event loop");
        self.ui
            .run()
            .map_err(|e| anyhow::anyhow!("GUI event loop failed: {e}"))?;

        Self::sync_state_from_ui(&self.ui, &self.state_manager);
        Ok(())
    }

    /// Initialize every widget property from the current state.
    fn sync_ui_with_state(ui: &MainWindow, state_manager: &StateManager) {
        let state = state_manager.snapshot();

        ui.set_benchmark_dir(path_text(&state.benchmark_dir));
        ui.set_wine_executable(path_text(&state.wine_executable));
        ui.set_wine_prefix(path_text(&state.wine_prefix));
        ui.set_wine_environment(state.wine_environment.as_str().into());

        Self::push_graphics_to_ui(ui, &state.graphics);

        ui.set_is_running(state.is_running);
        ui.set_status_message(SharedString::default());

        tracing::debug!("UI synchronized with initial state");
    }

    /// Pull the widget values back into the state.
    fn sync_state_from_ui(ui: &MainWindow, state_manager: &StateManager) {
        let graphics = Self::graphics_from_ui(ui);

        state_manager.update(|state| {
            state.benchmark_dir = optional_path(ui.get_benchmark_dir().as_str());
            state.wine_executable = optional_path(ui.get_wine_executable().as_str());
            state.wine_prefix = optional_path(ui.get_wine_prefix().as_str());
            state.wine_environment = ui.get_wine_environment().trim().to_string();
            state.graphics = graphics;
        });
    }

    fn push_graphics_to_ui(ui: &MainWindow, graphics: &GraphicsSettings) {
        ui.set_display_mode(graphics.screen_mode.index() as i32);
        ui.set_res_x(graphics.resolution_width.to_string().into());
        ui.set_res_y(graphics.resolution_height.to_string().into());

        ui.set_anti_aliasing(graphics.anti_aliasing);
        ui.set_occlusion_culling(graphics.occlusion_culling);
        ui.set_distance_lod(graphics.distance_lod);
        ui.set_reflections(graphics.reflections.index() as i32);
        ui.set_transparent_lighting(graphics.transparent_lighting.index() as i32);
        ui.set_grass_quality(graphics.grass_quality.index() as i32);
        ui.set_parallax_occlusion(graphics.parallax_occlusion.index() as i32);
        ui.set_tessellation(graphics.tessellation.index() as i32);
        ui.set_glare_representation(graphics.glare_representation.index() as i32);
        ui.set_texture_filter(graphics.texture_filter.index() as i32);

        ui.set_shadow_lod(graphics.shadow_lod);
        ui.set_shadow_self(graphics.shadow_self);
        ui.set_shadow_npc(graphics.shadow_npc);
        ui.set_shadow_resolution(graphics.shadow_resolution.index() as i32);
        ui.set_shadow_cascading(graphics.shadow_cascading.index() as i32);
        ui.set_shadow_softening(graphics.shadow_softening.index() as i32);

        ui.set_wet_surface(graphics.wet_surface);
        ui.set_vignette(graphics.vignette);
        ui.set_radial_blur(graphics.radial_blur);
        ui.set_depth_of_field(graphics.depth_of_field);
        ui.set_ambient_occlusion(graphics.ambient_occlusion.index() as i32);
        ui.set_glare_effect(graphics.glare_effect.index() as i32);
        ui.set_water_refraction(graphics.water_refraction.index() as i32);

        ui.set_movement_player(graphics.physics_self.index() as i32);
        ui.set_movement_npc(graphics.physics_npc.index() as i32);
    }

    fn graphics_from_ui(ui: &MainWindow) -> GraphicsSettings {
        let defaults = GraphicsSettings::default();

        GraphicsSettings {
            screen_mode: ScreenMode::from_index(combo_index(ui.get_display_mode())),
            resolution_width: decode_u32(ui.get_res_x().as_str(), defaults.resolution_width),
            resolution_height: decode_u32(ui.get_res_y().as_str(), defaults.resolution_height),

            anti_aliasing: ui.get_anti_aliasing(),
            occlusion_culling: ui.get_occlusion_culling(),
            distance_lod: ui.get_distance_lod(),
            reflections: Reflections::from_index(combo_index(ui.get_reflections())),
            transparent_lighting: TransparentLighting::from_index(combo_index(
                ui.get_transparent_lighting(),
            )),
            grass_quality: GrassQuality::from_index(combo_index(ui.get_grass_quality())),
            parallax_occlusion: ParallaxOcclusion::from_index(combo_index(
                ui.get_parallax_occlusion(),
            )),
            tessellation: Tessellation::from_index(combo_index(ui.get_tessellation())),
            glare_representation: GlareRepresentation::from_index(combo_index(
                ui.get_glare_representation(),
            )),
            texture_filter: TextureFilter::from_index(combo_index(ui.get_texture_filter())),

            shadow_lod: ui.get_shadow_lod(),
            shadow_self: ui.get_shadow_self(),
            shadow_npc: ui.get_shadow_npc(),
            shadow_resolution: ShadowResolution::from_index(combo_index(
                ui.get_shadow_resolution(),
            )),
            shadow_cascading: ShadowCascading::from_index(combo_index(ui.get_shadow_cascading())),
            shadow_softening: ShadowSoftening::from_index(combo_index(ui.get_shadow_softening())),

            wet_surface: ui.get_wet_surface(),
            vignette: ui.get_vignette(),
            radial_blur: ui.get_radial_blur(),
            depth_of_field: ui.get_depth_of_field(),
            ambient_occlusion: AmbientOcclusion::from_index(combo_index(
                ui.get_ambient_occlusion(),
            )),
            glare_effect: GlareEffect::from_index(combo_index(ui.get_glare_effect())),
            water_refraction: WaterRefraction::from_index(combo_index(ui.get_water_refraction())),

            physics_self: PhysicsSimulation::from_index(combo_index(ui.get_movement_player())),
            physics_npc: PhysicsSimulation::from_index(combo_index(ui.get_movement_npc())),
        }
    }

    fn setup_callbacks(
        ui: &MainWindow,
        bridge: &EventLoopBridge<MainWindow>,
        state_manager: &Arc<StateManager>,
    ) {
        // The picked benchmark directory must actually contain the
        // benchmark executable
        let ui_weak = ui.as_weak();
        let state = Arc::clone(state_manager);
        ui.on_browse_benchmark_dir(move || {
            tracing::debug!("Browse benchmark directory clicked");

            let Some(path) = Self::pick_folder("Select benchmark directory") else {
                return;
            };

            let benchmark_exe = launcher::benchmark_executable(&path);
            if !benchmark_exe.is_file() {
                Self::show_error_dialog(
                    &ui_weak,
                    "Error",
                    format!("Benchmark executable ({benchmark_exe}) not found."),
                );
                return;
            }

            if let Some(ui) = ui_weak.upgrade() {
                ui.set_benchmark_dir(path.as_str().into());
            }
            state.set_benchmark_dir(Some(path));
        });

        let ui_weak = ui.as_weak();
        let state = Arc::clone(state_manager);
        ui.on_browse_wine_executable(move || {
            tracing::debug!("Browse wine executable clicked");

            if let Some(path) = Self::pick_file("Select Wine executable") {
                if let Some(ui) = ui_weak.upgrade() {
                    ui.set_wine_executable(path.as_str().into());
                }
                state.set_wine_executable(Some(path));
            }
        });

        let ui_weak = ui.as_weak();
        let state = Arc::clone(state_manager);
        ui.on_browse_wine_prefix(move || {
            tracing::debug!("Browse wine prefix clicked");

            if let Some(path) = Self::pick_folder("Select Wine prefix") {
                if let Some(ui) = ui_weak.upgrade() {
                    ui.set_wine_prefix(path.as_str().into());
                }
                state.set_wine_prefix(Some(path));
            }
        });

        // Preset buttons
        let ui_weak = ui.as_weak();
        let state = Arc::clone(state_manager);
        ui.on_apply_preset(move |index| {
            let preset = QualityPreset::from_index(index.max(0) as u32);
            tracing::info!("Applying preset: {}", preset.label());

            let Some(ui) = ui_weak.upgrade() else { return };

            let mut graphics = Self::graphics_from_ui(&ui);
            presets::apply(preset, &mut graphics);
            Self::push_graphics_to_ui(&ui, &graphics);
            state.set_graphics(graphics);
        });

        // Launch buttons
        let ui_weak = ui.as_weak();
        let state = Arc::clone(state_manager);
        let bridge_handle = bridge.clone_handle();
        ui.on_launch_benchmark(move || {
            Self::handle_launch(&ui_weak, &bridge_handle, &state, LaunchMode::Benchmark);
        });

        let ui_weak = ui.as_weak();
        let state = Arc::clone(state_manager);
        let bridge_handle = bridge.clone_handle();
        ui.on_launch_character_creation(move || {
            Self::handle_launch(&ui_weak, &bridge_handle, &state, LaunchMode::CharacterCreation);
        });

        tracing::debug!("UI callbacks configured");
    }

    /// Validate, confirm and spawn a launch.
    ///
    /// Runs the preflight checks on the GUI thread so the dialogs can be
    /// shown synchronously, then hands the actual subprocess execution to
    /// tokio so the window stays responsive while the benchmark runs.
    fn handle_launch(
        ui_weak: &slint::Weak<MainWindow>,
        bridge: &EventLoopBridgeHandle<MainWindow>,
        state_manager: &Arc<StateManager>,
        mode: LaunchMode,
    ) {
        tracing::info!("Launch requested: {mode:?}");

        let Some(ui) = ui_weak.upgrade() else { return };
        Self::sync_state_from_ui(&ui, state_manager);

        let snapshot = state_manager.snapshot();
        let plan = LaunchPlan {
            benchmark_dir: snapshot.benchmark_dir.clone().unwrap_or_default(),
            wine_executable: snapshot.wine_executable.clone().unwrap_or_default(),
            wine_prefix: snapshot.wine_prefix.clone().unwrap_or_default(),
            environment: snapshot.wine_environment.clone(),
            arguments: build_launch_arguments(&snapshot.graphics, mode),
        };

        let preflight = match launcher::preflight(&plan) {
            Ok(preflight) => preflight,
            Err(e) => {
                tracing::error!("Launch refused: {e}");
                Self::show_error_dialog(ui_weak, "Error", e.to_string());
                return;
            }
        };

        if preflight.prefix_missing {
            let answer = rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title("Warning")
                .set_description("The given wine prefix does not exist. Continue anyway?")
                .set_buttons(rfd::MessageButtons::YesNo)
                .show();

            if answer != rfd::MessageDialogResult::Yes {
                tracing::info!("Launch cancelled: wine prefix missing");
                return;
            }
        }

        state_manager.begin_launch();

        let state = Arc::clone(state_manager);
        let ui_weak = ui_weak.clone();
        bridge.spawn_async(move || async move {
            match launcher::run(&plan).await {
                Ok(outcome) => {
                    if outcome.exit_code != 0 {
                        Self::show_error_dialog(
                            &ui_weak,
                            "Warning",
                            format!(
                                "Command execution failed with return code {}.",
                                outcome.exit_code
                            ),
                        );
                    }
                    state.finish_launch(outcome.exit_code, outcome.score);
                }
                Err(e) => {
                    tracing::error!("Launch failed: {e}");
                    Self::show_error_dialog(&ui_weak, "Error", e.to_string());
                    state.finish_launch(-1, None);
                }
            }
        });
    }

    /// Subscribe to state changes and mirror launch status into the UI.
    fn setup_state_subscription(
        bridge: &EventLoopBridge<MainWindow>,
        state_manager: &Arc<StateManager>,
    ) {
        let bridge_handle = bridge.clone_handle();
        let mut rx = state_manager.subscribe();

        std::thread::spawn(move || {
            tracing::debug!("State subscription thread started");

            loop {
                match rx.blocking_recv() {
                    Ok(StateChange::LaunchStarted) => {
                        bridge_handle.update_ui(|ui| {
                            ui.set_is_running(true);
                            ui.set_status_message("Benchmark running...".into());
                        });
                    }
                    Ok(StateChange::LaunchFinished { exit_code, score }) => {
                        bridge_handle.update_ui(move |ui| {
                            ui.set_is_running(false);

                            let status = match score {
                                Some(score) => score.summary(),
                                None if exit_code == 0 => "Finished".to_string(),
                                None => format!("Finished with exit code {exit_code}"),
                            };
                            ui.set_status_message(status.into());
                        });
                    }
                    Ok(StateChange::ConfigurationChanged { .. })
                    | Ok(StateChange::SettingsChanged) => {
                        // Widget properties are the working copy; nothing to
                        // mirror back here.
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!("State subscription lagged, skipped {skipped} events");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }

            tracing::debug!("State subscription thread terminated");
        });
    }

    /// Queue the modal error dialog from any thread.
    fn show_error_dialog(
        ui_weak: &slint::Weak<MainWindow>,
        title: impl Into<SharedString>,
        message: impl Into<SharedString>,
    ) {
        let title = title.into();
        let message = message.into();

        let result = ui_weak.upgrade_in_event_loop(move |ui| {
            ui.set_error_title(title);
            ui.set_error_text(message);
            ui.set_show_error_dialog(true);
        });

        if let Err(e) = result {
            tracing::warn!("Failed to queue error dialog: {e:?}");
        }
    }

    fn pick_file(title: &str) -> Option<Utf8PathBuf> {
        rfd::FileDialog::new()
            .set_title(title)
            .pick_file()
            .and_then(utf8_path)
    }

    fn pick_folder(title: &str) -> Option<Utf8PathBuf> {
        rfd::FileDialog::new()
            .set_title(title)
            .pick_folder()
            .and_then(utf8_path)
    }
}

fn utf8_path(path: std::path::PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::try_from(path)
        .map_err(|e| {
            tracing::error!("Selected path is not UTF-8: {e}");
            e
        })
        .ok()
}

fn path_text(path: &Option<Utf8PathBuf>) -> SharedString {
    path.as_ref().map(|p| p.as_str()).unwrap_or_default().into()
}

fn combo_index(index: i32) -> u32 {
    index.max(0) as u32
}
