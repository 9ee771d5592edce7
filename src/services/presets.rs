//! Quality presets.
//!
//! A preset is a total assignment over the graphics settings it manages,
//! ordered best to most conservative. Most settings scale monotonically
//! with the preset ordinal; grass, texture filtering, ambient occlusion and
//! NPC physics use their own ordinal thresholds, kept here exactly as the
//! benchmark's own configuration tool picks them.
//!
//! Display mode, resolution and depth of field are never preset-managed.

use crate::models::graphics::{
    AmbientOcclusion, GlareEffect, GlareRepresentation, GraphicsSettings, GrassQuality,
    ParallaxOcclusion, PhysicsSimulation, Reflections, ShadowCascading, ShadowResolution,
    ShadowSoftening, Tessellation, TextureFilter, TransparentLighting, WaterRefraction,
};

/// The five presets, best quality first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum QualityPreset {
    Maximum,
    HighDesktop,
    HighLaptop,
    StandardDesktop,
    StandardLaptop,
}

impl QualityPreset {
    /// All presets in quality order (ordinal 0 = best).
    pub const ALL: &'static [Self] = &[
        Self::Maximum,
        Self::HighDesktop,
        Self::HighLaptop,
        Self::StandardDesktop,
        Self::StandardLaptop,
    ];

    /// Button labels matching [`Self::ALL`].
    pub const LABELS: &'static [&'static str] = &[
        "Maximum",
        "High (Desktop)",
        "High (Laptop)",
        "Standard (Desktop)",
        "Standard (Laptop)",
    ];

    /// Decode an ordinal. Out-of-range input is not reachable from the UI;
    /// it falls back to the most conservative preset.
    pub fn from_index(index: u32) -> Self {
        Self::ALL
            .get(index as usize)
            .copied()
            .unwrap_or(Self::StandardLaptop)
    }

    /// The ordinal of this preset.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// The button label of this preset.
    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }
}

/// Apply `preset` to every managed setting.
///
/// The threshold boundaries below are fixed policy, not a derivable scale;
/// keep them literal.
pub fn apply(preset: QualityPreset, settings: &mut GraphicsSettings) {
    use QualityPreset::*;

    // Forced to best by every preset
    settings.wet_surface = true;
    settings.shadow_self = true;
    settings.radial_blur = true;
    settings.physics_self = PhysicsSimulation::Full;
    settings.glare_effect = GlareEffect::Normal;
    settings.water_refraction = WaterRefraction::Normal;

    // Culling tricks come ON as presets get more conservative
    settings.occlusion_culling = preset >= HighDesktop;
    settings.distance_lod = preset >= HighLaptop;
    settings.shadow_lod = preset >= HighDesktop;

    // Visual extras go OFF below High (Laptop)
    settings.anti_aliasing = preset <= HighLaptop;
    settings.shadow_npc = preset <= HighLaptop;
    settings.vignette = preset <= HighLaptop;

    if preset <= HighDesktop {
        settings.reflections = Reflections::Maximum;
        settings.transparent_lighting = TransparentLighting::High;
        settings.glare_representation = GlareRepresentation::Standard;
        settings.shadow_resolution = ShadowResolution::High;
    } else {
        settings.reflections = Reflections::Off;
        settings.transparent_lighting = TransparentLighting::Normal;
        settings.glare_representation = GlareRepresentation::Off;
        settings.shadow_resolution = ShadowResolution::Normal;
    }

    if preset <= HighLaptop {
        settings.tessellation = Tessellation::High;
        settings.parallax_occlusion = ParallaxOcclusion::High;
        settings.shadow_cascading = ShadowCascading::Best;
        settings.shadow_softening = ShadowSoftening::Strong;
    } else {
        settings.tessellation = Tessellation::Standard;
        settings.parallax_occlusion = ParallaxOcclusion::Standard;
        settings.shadow_cascading = ShadowCascading::Normal;
        settings.shadow_softening = ShadowSoftening::Weak;
    }

    settings.grass_quality = match preset.cmp(&HighLaptop) {
        std::cmp::Ordering::Less => GrassQuality::High,
        std::cmp::Ordering::Equal => GrassQuality::Normal,
        std::cmp::Ordering::Greater => GrassQuality::Low,
    };

    settings.texture_filter = match preset {
        Maximum => TextureFilter::Anisotropic16x,
        HighDesktop => TextureFilter::Anisotropic8x,
        HighLaptop => TextureFilter::Anisotropic4x,
        StandardDesktop | StandardLaptop => TextureFilter::Trilinear,
    };

    settings.ambient_occlusion = if preset == Maximum {
        AmbientOcclusion::HbaoQuality
    } else if preset <= HighLaptop {
        AmbientOcclusion::HbaoStandard
    } else {
        AmbientOcclusion::Off
    };

    settings.physics_npc = match preset.cmp(&StandardDesktop) {
        std::cmp::Ordering::Less => PhysicsSimulation::Full,
        std::cmp::Ordering::Equal => PhysicsSimulation::Simple,
        std::cmp::Ordering::Greater => PhysicsSimulation::Off,
    };
}
