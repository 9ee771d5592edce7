//! Graphics settings model.
//!
//! Every multi-way setting the benchmark understands is a closed enum whose
//! variants are declared in the order the UI lists them. The persisted form
//! is the string-encoded `graphics` config section: booleans as
//! `"True"`/`"False"`, selections as their UI ordinal, resolution as decimal
//! integers. Decoding is fail-open per value: anything malformed or
//! out of range falls back to that setting's default instead of failing the
//! whole load.

use crate::models::config::GraphicsSection;

/// Defines a fieldless option enum with UI-ordered variants.
///
/// Generates `ALL` (variants in declaration order), `LABELS` (display
/// strings for the UI model), `from_index` (out of range falls back to the
/// first variant, which is also `Default`) and `index`.
macro_rules! option_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl $name {
            /// All variants in UI display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Display labels matching [`Self::ALL`].
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            /// Decode a UI ordinal, falling back to the default when out of range.
            pub fn from_index(index: u32) -> Self {
                Self::ALL.get(index as usize).copied().unwrap_or_default()
            }

            /// The UI ordinal of this variant.
            pub fn index(self) -> u32 {
                self as u32
            }

            /// The display label of this variant.
            pub fn label(self) -> &'static str {
                Self::LABELS[self as usize]
            }
        }
    };
}

option_enum! {
    /// Window presentation of the benchmark.
    ScreenMode {
        Windowed => "Windowed",
        Fullscreen => "Fullscreen",
        Borderless => "Borderless",
    }
}

option_enum! {
    Reflections {
        Maximum => "Maximum",
        High => "High",
        Normal => "Normal",
        Off => "Off",
    }
}

option_enum! {
    TransparentLighting {
        High => "High",
        Normal => "Normal",
    }
}

option_enum! {
    GrassQuality {
        High => "High",
        Normal => "Normal",
        Low => "Low",
        Off => "Off",
    }
}

option_enum! {
    ParallaxOcclusion {
        High => "High",
        Standard => "Standard",
    }
}

option_enum! {
    Tessellation {
        High => "High",
        Standard => "Standard",
    }
}

option_enum! {
    /// The "Glare" selection in the general group (light-source rendering).
    /// Distinct from [`GlareEffect`], which controls the post-process bloom.
    GlareRepresentation {
        Standard => "Standard",
        Off => "Off",
    }
}

option_enum! {
    TextureFilter {
        Anisotropic16x => "16x Anisotropic",
        Anisotropic8x => "8x Anisotropic",
        Anisotropic4x => "4x Anisotropic",
        Trilinear => "Trilinear",
    }
}

option_enum! {
    ShadowResolution {
        High => "High (2048)",
        Normal => "Normal (1024)",
        Low => "Low (512)",
    }
}

option_enum! {
    ShadowCascading {
        Best => "Best",
        Normal => "Normal",
        Off => "Off",
    }
}

option_enum! {
    ShadowSoftening {
        Strong => "Strong",
        Weak => "Weak",
    }
}

option_enum! {
    AmbientOcclusion {
        HbaoQuality => "HBAO+ (Quality)",
        HbaoStandard => "HBAO+ (Standard)",
        Strong => "Strong",
        Weak => "Weak",
        Off => "Off",
    }
}

option_enum! {
    GlareEffect {
        Normal => "Normal",
        Low => "Low",
        Off => "Off",
    }
}

option_enum! {
    WaterRefraction {
        Normal => "Normal",
        Low => "Low",
        Off => "Off",
    }
}

option_enum! {
    /// Movement physics fidelity, used for both the player character and
    /// other characters.
    PhysicsSimulation {
        Full => "Full",
        Simple => "Simple",
        Off => "Off",
    }
}

/// The complete typed graphics assignment.
///
/// This is the in-memory form the preset resolver and the argument builder
/// operate on. It round-trips losslessly through [`GraphicsSection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphicsSettings {
    pub screen_mode: ScreenMode,
    pub resolution_width: u32,
    pub resolution_height: u32,

    pub anti_aliasing: bool,
    pub occlusion_culling: bool,
    pub distance_lod: bool,
    pub reflections: Reflections,
    pub transparent_lighting: TransparentLighting,
    pub grass_quality: GrassQuality,
    pub parallax_occlusion: ParallaxOcclusion,
    pub tessellation: Tessellation,
    pub glare_representation: GlareRepresentation,
    pub texture_filter: TextureFilter,

    pub shadow_lod: bool,
    pub shadow_self: bool,
    pub shadow_npc: bool,
    pub shadow_resolution: ShadowResolution,
    pub shadow_cascading: ShadowCascading,
    pub shadow_softening: ShadowSoftening,

    pub wet_surface: bool,
    pub vignette: bool,
    pub radial_blur: bool,
    pub depth_of_field: bool,
    pub ambient_occlusion: AmbientOcclusion,
    pub glare_effect: GlareEffect,
    pub water_refraction: WaterRefraction,

    pub physics_self: PhysicsSimulation,
    pub physics_npc: PhysicsSimulation,
}

impl Default for GraphicsSettings {
    fn default() -> Self {
        Self {
            screen_mode: ScreenMode::Windowed,
            resolution_width: 1280,
            resolution_height: 720,

            anti_aliasing: true,
            occlusion_culling: false,
            distance_lod: false,
            reflections: Reflections::Maximum,
            transparent_lighting: TransparentLighting::High,
            grass_quality: GrassQuality::High,
            parallax_occlusion: ParallaxOcclusion::High,
            tessellation: Tessellation::High,
            glare_representation: GlareRepresentation::Standard,
            texture_filter: TextureFilter::Anisotropic16x,

            shadow_lod: false,
            shadow_self: true,
            shadow_npc: true,
            shadow_resolution: ShadowResolution::High,
            shadow_cascading: ShadowCascading::Best,
            shadow_softening: ShadowSoftening::Strong,

            wet_surface: true,
            vignette: true,
            radial_blur: true,
            depth_of_field: true,
            ambient_occlusion: AmbientOcclusion::HbaoQuality,
            glare_effect: GlareEffect::Normal,
            water_refraction: WaterRefraction::Normal,

            physics_self: PhysicsSimulation::Full,
            physics_npc: PhysicsSimulation::Full,
        }
    }
}

impl GraphicsSettings {
    /// Decode the string-encoded config section.
    ///
    /// Each value falls back to its default independently; a single bad
    /// value never poisons the rest of the section.
    pub fn from_section(section: &GraphicsSection) -> Self {
        let defaults = Self::default();

        Self {
            screen_mode: ScreenMode::from_index(decode_index(&section.display_mode)),
            resolution_width: decode_u32(&section.display_res_x, defaults.resolution_width),
            resolution_height: decode_u32(&section.display_res_y, defaults.resolution_height),

            anti_aliasing: decode_bool(&section.anti_aliasing, defaults.anti_aliasing),
            occlusion_culling: decode_bool(&section.occlusion_culling, defaults.occlusion_culling),
            distance_lod: decode_bool(&section.lod, defaults.distance_lod),
            reflections: Reflections::from_index(decode_index(&section.reflection)),
            transparent_lighting: TransparentLighting::from_index(decode_index(
                &section.translucent,
            )),
            grass_quality: GrassQuality::from_index(decode_index(&section.grass_quality)),
            parallax_occlusion: ParallaxOcclusion::from_index(decode_index(
                &section.parallax_occlusion,
            )),
            tessellation: Tessellation::from_index(decode_index(&section.tessellation)),
            glare_representation: GlareRepresentation::from_index(decode_index(&section.glare)),
            texture_filter: TextureFilter::from_index(decode_index(&section.texture_filter)),

            shadow_lod: decode_bool(&section.shadow_lod, defaults.shadow_lod),
            shadow_self: decode_bool(&section.shadow_self, defaults.shadow_self),
            shadow_npc: decode_bool(&section.shadow_other, defaults.shadow_npc),
            shadow_resolution: ShadowResolution::from_index(decode_index(
                &section.shadow_resolution,
            )),
            shadow_cascading: ShadowCascading::from_index(decode_index(&section.shadow_cascading)),
            shadow_softening: ShadowSoftening::from_index(decode_index(&section.shadow_soft)),

            wet_surface: decode_bool(&section.wet_surface, defaults.wet_surface),
            vignette: decode_bool(&section.vignette, defaults.vignette),
            radial_blur: decode_bool(&section.radial_blur, defaults.radial_blur),
            depth_of_field: decode_bool(&section.depth_of_field, defaults.depth_of_field),
            ambient_occlusion: AmbientOcclusion::from_index(decode_index(&section.ssao)),
            glare_effect: GlareEffect::from_index(decode_index(&section.glare_effect)),
            water_refraction: WaterRefraction::from_index(decode_index(&section.water_refraction)),

            physics_self: PhysicsSimulation::from_index(decode_index(&section.movement_self)),
            physics_npc: PhysicsSimulation::from_index(decode_index(&section.movement_other)),
        }
    }

    /// Encode into the string form the config file stores.
    pub fn to_section(&self) -> GraphicsSection {
        GraphicsSection {
            display_mode: self.screen_mode.index().to_string(),
            display_res_x: self.resolution_width.to_string(),
            display_res_y: self.resolution_height.to_string(),
            anti_aliasing: encode_bool(self.anti_aliasing),
            occlusion_culling: encode_bool(self.occlusion_culling),
            lod: encode_bool(self.distance_lod),
            reflection: self.reflections.index().to_string(),
            translucent: self.transparent_lighting.index().to_string(),
            grass_quality: self.grass_quality.index().to_string(),
            parallax_occlusion: self.parallax_occlusion.index().to_string(),
            tessellation: self.tessellation.index().to_string(),
            glare: self.glare_representation.index().to_string(),
            texture_filter: self.texture_filter.index().to_string(),
            shadow_lod: encode_bool(self.shadow_lod),
            shadow_self: encode_bool(self.shadow_self),
            shadow_other: encode_bool(self.shadow_npc),
            shadow_resolution: self.shadow_resolution.index().to_string(),
            shadow_cascading: self.shadow_cascading.index().to_string(),
            shadow_soft: self.shadow_softening.index().to_string(),
            wet_surface: encode_bool(self.wet_surface),
            vignette: encode_bool(self.vignette),
            radial_blur: encode_bool(self.radial_blur),
            depth_of_field: encode_bool(self.depth_of_field),
            ssao: self.ambient_occlusion.index().to_string(),
            glare_effect: self.glare_effect.index().to_string(),
            water_refraction: self.water_refraction.index().to_string(),
            movement_self: self.physics_self.index().to_string(),
            movement_other: self.physics_npc.index().to_string(),
        }
    }
}

/// Persisted boolean form, matching the launcher's historical config files.
pub fn encode_bool(value: bool) -> String {
    if value { "True" } else { "False" }.to_string()
}

/// Lenient boolean decode. Accepts the spellings config-file editors
/// produce; anything else keeps the default.
pub fn decode_bool(raw: &str, default: bool) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => true,
        "false" | "no" | "off" | "0" => false,
        _ => {
            tracing::warn!("Unrecognized boolean value {raw:?}, keeping default {default}");
            default
        }
    }
}

/// Lenient unsigned decode with an explicit default.
pub fn decode_u32(raw: &str, default: u32) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("Unrecognized numeric value {raw:?}, keeping default {default}");
            default
        }
    }
}

/// Decode a selection ordinal. Malformed input maps to ordinal 0, which is
/// every selection's default; out-of-range ordinals are handled by
/// `from_index` on the individual enum.
fn decode_index(raw: &str) -> u32 {
    decode_u32(raw, 0)
}
