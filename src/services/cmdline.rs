//! Launch argument builder.
//!
//! The benchmark takes its configuration as an ordered list of
//! `SYS.<Field>=<value>` tokens on the command line. The UI lists qualities
//! best-first, while the engine enumerates several of these fields
//! worst-first or with an offset; the per-field conversions below were
//! lifted from the benchmark's own configuration format and must stay as
//! literal lookups, not a computed rule.

use std::fmt;

use crate::models::graphics::{GraphicsSettings, TextureFilter};

/// One `name=value` token, passed positionally to the benchmark process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchArgument {
    pub name: &'static str,
    pub value: String,
}

impl LaunchArgument {
    fn new(name: &'static str, value: impl ToString) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for LaunchArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// What the launch buttons start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// A scored run; vertical sync is forced off so the result is uncapped.
    Benchmark,
    /// The interactive character creation demo; no score is produced.
    CharacterCreation,
}

/// Build the full argument list for `settings` in `mode`.
///
/// Order is significant and matches what the benchmark's own launcher
/// emits.
pub fn build_launch_arguments(settings: &GraphicsSettings, mode: LaunchMode) -> Vec<LaunchArgument> {
    let (filter_quality, filter_anisotropy) = texture_filter_codes(settings.texture_filter);

    let mut args = vec![
        LaunchArgument::new("SYS.Language", 1),
        LaunchArgument::new("SYS.Fps", 0),
        LaunchArgument::new("SYS.ScreenMode", settings.screen_mode.index()),
        LaunchArgument::new("SYS.ScreenWidth", settings.resolution_width),
        LaunchArgument::new("SYS.ScreenHeight", settings.resolution_height),
        LaunchArgument::new("SYS.FullScreenWidth", settings.resolution_width),
        LaunchArgument::new("SYS.FullScreenHeight", settings.resolution_height),
        LaunchArgument::new("SYS.WaterWet_DX11", flag(settings.wet_surface)),
        LaunchArgument::new("SYS.OcclusionCulling_DX11", flag(settings.occlusion_culling)),
        LaunchArgument::new("SYS.LodType_DX11", flag(settings.distance_lod)),
        LaunchArgument::new("SYS.ReflectionType_DX11", 3 - settings.reflections.index()),
        LaunchArgument::new("SYS.AntiAliasing_DX11", flag(settings.anti_aliasing)),
        LaunchArgument::new(
            "SYS.TranslucentQuality_DX11",
            1 - settings.transparent_lighting.index(),
        ),
        LaunchArgument::new("SYS.GrassQuality_DX11", 3 - settings.grass_quality.index()),
        LaunchArgument::new("SYS.ShadowLOD_DX11", flag(settings.shadow_lod)),
        LaunchArgument::new("SYS.ShadowVisibilityTypeSelf_DX11", flag(settings.shadow_self)),
        LaunchArgument::new("SYS.ShadowVisibilityTypeOther_DX11", flag(settings.shadow_npc)),
        LaunchArgument::new(
            "SYS.ShadowTextureSizeType_DX11",
            2 - settings.shadow_resolution.index(),
        ),
        LaunchArgument::new(
            "SYS.ShadowCascadeCountType_DX11",
            2 - settings.shadow_cascading.index(),
        ),
        LaunchArgument::new(
            "SYS.ShadowSoftShadowType_DX11",
            1 - settings.shadow_softening.index(),
        ),
        LaunchArgument::new("SYS.PhysicsTypeSelf_DX11", 2 - settings.physics_self.index()),
        LaunchArgument::new("SYS.PhysicsTypeOther_DX11", 2 - settings.physics_npc.index()),
        LaunchArgument::new("SYS.TextureFilterQuality_DX11", filter_quality),
        LaunchArgument::new("SYS.TextureAnisotropicQuality_DX11", filter_anisotropy),
        LaunchArgument::new("SYS.Vignetting_DX11", flag(settings.vignette)),
        LaunchArgument::new("SYS.RadialBlur_DX11", flag(settings.radial_blur)),
        LaunchArgument::new("SYS.SSAO_DX11", 4 - settings.ambient_occlusion.index()),
        LaunchArgument::new("SYS.Glare_DX11", 2 - settings.glare_effect.index()),
        LaunchArgument::new("SYS.DepthOfField_DX11", flag(settings.depth_of_field)),
        LaunchArgument::new(
            "SYS.ParallaxOcclusion_DX11",
            1 - settings.parallax_occlusion.index(),
        ),
        LaunchArgument::new("SYS.Tessellation_DX11", 1 - settings.tessellation.index()),
        LaunchArgument::new(
            "SYS.GlareRepresentation_DX11",
            1 - settings.glare_representation.index(),
        ),
        LaunchArgument::new(
            "SYS.DistortionWater_DX11",
            2 - settings.water_refraction.index(),
        ),
    ];

    match mode {
        LaunchMode::Benchmark => args.push(LaunchArgument::new("SYS.Vsync", 0)),
        LaunchMode::CharacterCreation => {
            args.push(LaunchArgument::new("Bench.CharacterCreation", 1));
        }
    }

    args
}

fn flag(value: bool) -> u32 {
    u32::from(value)
}

/// The texture filter selection maps onto two engine fields: a filter type
/// and an anisotropy level. Trilinear is type 1 with the anisotropy field
/// left at its maximum; the anisotropic settings are type 2 with the level
/// counted down from 16x.
fn texture_filter_codes(filter: TextureFilter) -> (u32, u32) {
    match filter {
        TextureFilter::Trilinear => (1, 2),
        anisotropic => (2, 2 - anisotropic.index()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::graphics::{
        AmbientOcclusion, GlareEffect, GlareRepresentation, GrassQuality, PhysicsSimulation,
        Reflections, ShadowCascading, ShadowResolution, ShadowSoftening, TransparentLighting,
        WaterRefraction,
    };

    fn value_of(args: &[LaunchArgument], name: &str) -> String {
        args.iter()
            .find(|a| a.name == name)
            .unwrap_or_else(|| panic!("missing argument {name}"))
            .value
            .clone()
    }

    #[test]
    fn test_fixed_prefix_and_order() {
        let args = build_launch_arguments(&GraphicsSettings::default(), LaunchMode::Benchmark);

        assert_eq!(args[0].to_string(), "SYS.Language=1");
        assert_eq!(args[1].to_string(), "SYS.Fps=0");
        assert_eq!(args[2].name, "SYS.ScreenMode");

        // Resolution fills both windowed and fullscreen fields
        assert_eq!(value_of(&args, "SYS.ScreenWidth"), "1280");
        assert_eq!(value_of(&args, "SYS.FullScreenWidth"), "1280");
        assert_eq!(value_of(&args, "SYS.ScreenHeight"), "720");
        assert_eq!(value_of(&args, "SYS.FullScreenHeight"), "720");
    }

    #[test]
    fn test_boolean_flags_encode_as_bits() {
        let mut settings = GraphicsSettings::default();
        settings.anti_aliasing = true;
        settings.occlusion_culling = false;

        let args = build_launch_arguments(&settings, LaunchMode::Benchmark);
        assert_eq!(value_of(&args, "SYS.AntiAliasing_DX11"), "1");
        assert_eq!(value_of(&args, "SYS.OcclusionCulling_DX11"), "0");
    }

    #[test]
    fn test_inverted_fields_follow_their_literal_formulas() {
        let mut settings = GraphicsSettings::default();
        settings.reflections = Reflections::Off; // ui 3 -> 3 - 3 = 0
        settings.transparent_lighting = TransparentLighting::Normal; // ui 1 -> 0
        settings.grass_quality = GrassQuality::Normal; // ui 1 -> 2
        settings.shadow_resolution = ShadowResolution::Low; // ui 2 -> 0
        settings.shadow_cascading = ShadowCascading::Normal; // ui 1 -> 1
        settings.shadow_softening = ShadowSoftening::Weak; // ui 1 -> 0
        settings.physics_self = PhysicsSimulation::Simple; // ui 1 -> 1
        settings.physics_npc = PhysicsSimulation::Off; // ui 2 -> 0
        settings.ambient_occlusion = AmbientOcclusion::Weak; // ui 3 -> 1
        settings.glare_effect = GlareEffect::Low; // ui 1 -> 1
        settings.glare_representation = GlareRepresentation::Off; // ui 1 -> 0
        settings.water_refraction = WaterRefraction::Off; // ui 2 -> 0

        let args = build_launch_arguments(&settings, LaunchMode::Benchmark);
        assert_eq!(value_of(&args, "SYS.ReflectionType_DX11"), "0");
        assert_eq!(value_of(&args, "SYS.TranslucentQuality_DX11"), "0");
        assert_eq!(value_of(&args, "SYS.GrassQuality_DX11"), "2");
        assert_eq!(value_of(&args, "SYS.ShadowTextureSizeType_DX11"), "0");
        assert_eq!(value_of(&args, "SYS.ShadowCascadeCountType_DX11"), "1");
        assert_eq!(value_of(&args, "SYS.ShadowSoftShadowType_DX11"), "0");
        assert_eq!(value_of(&args, "SYS.PhysicsTypeSelf_DX11"), "1");
        assert_eq!(value_of(&args, "SYS.PhysicsTypeOther_DX11"), "0");
        assert_eq!(value_of(&args, "SYS.SSAO_DX11"), "1");
        assert_eq!(value_of(&args, "SYS.Glare_DX11"), "1");
        assert_eq!(value_of(&args, "SYS.GlareRepresentation_DX11"), "0");
        assert_eq!(value_of(&args, "SYS.DistortionWater_DX11"), "0");
    }

    #[test]
    fn test_best_quality_maps_to_highest_engine_values() {
        let args = build_launch_arguments(&GraphicsSettings::default(), LaunchMode::Benchmark);

        assert_eq!(value_of(&args, "SYS.ReflectionType_DX11"), "3");
        assert_eq!(value_of(&args, "SYS.GrassQuality_DX11"), "3");
        assert_eq!(value_of(&args, "SYS.SSAO_DX11"), "4");
        assert_eq!(value_of(&args, "SYS.PhysicsTypeSelf_DX11"), "2");
    }

    #[test]
    fn test_texture_filter_split() {
        let cases = [
            (TextureFilter::Anisotropic16x, "2", "2"),
            (TextureFilter::Anisotropic8x, "2", "1"),
            (TextureFilter::Anisotropic4x, "2", "0"),
            (TextureFilter::Trilinear, "1", "2"),
        ];

        for (filter, quality, anisotropy) in cases {
            let mut settings = GraphicsSettings::default();
            settings.texture_filter = filter;

            let args = build_launch_arguments(&settings, LaunchMode::Benchmark);
            assert_eq!(
                value_of(&args, "SYS.TextureFilterQuality_DX11"),
                quality,
                "{filter:?}"
            );
            assert_eq!(
                value_of(&args, "SYS.TextureAnisotropicQuality_DX11"),
                anisotropy,
                "{filter:?}"
            );
        }
    }

    #[test]
    fn test_benchmark_mode_forces_vsync_off() {
        let args = build_launch_arguments(&GraphicsSettings::default(), LaunchMode::Benchmark);
        assert_eq!(args.last().unwrap().to_string(), "SYS.Vsync=0");
        assert!(!args.iter().any(|a| a.name == "Bench.CharacterCreation"));
    }

    #[test]
    fn test_character_creation_mode_appends_flag_without_vsync() {
        let args =
            build_launch_arguments(&GraphicsSettings::default(), LaunchMode::CharacterCreation);
        assert_eq!(args.last().unwrap().to_string(), "Bench.CharacterCreation=1");
        assert!(!args.iter().any(|a| a.name == "SYS.Vsync"));
    }

    #[test]
    fn test_modes_share_the_common_argument_list() {
        let settings = GraphicsSettings::default();
        let benchmark = build_launch_arguments(&settings, LaunchMode::Benchmark);
        let creation = build_launch_arguments(&settings, LaunchMode::CharacterCreation);

        assert_eq!(
            &benchmark[..benchmark.len() - 1],
            &creation[..creation.len() - 1]
        );
    }
}
