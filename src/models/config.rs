use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::models::graphics::GraphicsSettings;

/// Default Wine environment overrides applied on first run.
pub const DEFAULT_WINE_ENVIRONMENT: &str =
    "WINEESYNC=1 WINEFSYNC=1 DXVK_LOG_LEVEL=none DXVK_HUD=fps,gpuload";

/// The persisted launcher configuration: three sections mirroring the
/// launcher's tabs. Graphics values are stored string-encoded so each one
/// can fall back to its default independently when the file has been
/// hand-edited (see [`GraphicsSettings::from_section`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub benchmark: BenchmarkSection,
    pub wine: WineSection,
    pub graphics: GraphicsSection,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            benchmark: BenchmarkSection::default(),
            wine: WineSection::default(),
            graphics: GraphicsSettings::default().to_section(),
        }
    }
}

/// The `benchmark` section: where the benchmark distribution is unpacked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkSection {
    pub path: String,
}

/// The `wine` section: how to reach the compatibility layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WineSection {
    pub path: String,
    pub prefix: String,
    pub environment: String,
}

impl Default for WineSection {
    fn default() -> Self {
        Self {
            path: probe_wine_executable()
                .map(|p| p.to_string())
                .unwrap_or_default(),
            prefix: default_wine_prefix(),
            environment: DEFAULT_WINE_ENVIRONMENT.to_string(),
        }
    }
}

/// The `graphics` section in its persisted, string-encoded form.
///
/// Key names are kept compatible with earlier config files, which is why
/// a few of them differ from the field names on [`GraphicsSettings`]
/// (`lod`, `translucent`, `ssao`, `movement_*`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicsSection {
    pub display_mode: String,
    pub display_res_x: String,
    pub display_res_y: String,
    pub anti_aliasing: String,
    pub occlusion_culling: String,
    pub lod: String,
    pub reflection: String,
    pub translucent: String,
    pub grass_quality: String,
    pub parallax_occlusion: String,
    pub tessellation: String,
    pub glare: String,
    pub texture_filter: String,
    pub shadow_lod: String,
    pub shadow_self: String,
    pub shadow_other: String,
    pub shadow_resolution: String,
    pub shadow_cascading: String,
    pub shadow_soft: String,
    pub wet_surface: String,
    pub vignette: String,
    pub radial_blur: String,
    pub depth_of_field: String,
    pub ssao: String,
    pub glare_effect: String,
    pub water_refraction: String,
    pub movement_self: String,
    pub movement_other: String,
}

impl Default for GraphicsSection {
    fn default() -> Self {
        GraphicsSettings::default().to_section()
    }
}

/// Search `$PATH` for a `wine` executable, the same way a shell would
/// resolve it. Returns the first hit.
pub fn probe_wine_executable() -> Option<Utf8PathBuf> {
    let path_env = std::env::var_os("PATH")?;

    for dir in std::env::split_paths(&path_env) {
        let candidate = dir.join("wine");
        if candidate.is_file() {
            if let Ok(candidate) = Utf8PathBuf::try_from(candidate) {
                return Some(candidate);
            }
        }
    }

    None
}

fn default_wine_prefix() -> String {
    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => format!("{home}/.wine"),
        _ => String::new(),
    }
}
