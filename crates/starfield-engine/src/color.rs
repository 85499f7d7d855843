//! Color mode and palette derivation.
//! The mode is an external input; everything it affects is color, never physics.

use serde::Deserialize;

/// Display preference driving background and star colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Dark,
    #[default]
    Light,
}

impl ColorMode {
    /// Parse a theme name. Only the exact string `"dark"` selects dark mode;
    /// any other value renders light.
    pub fn from_name(name: &str) -> Self {
        if name == "dark" {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }
}

/// Saturation shared by every star head and trail stroke, in percent.
pub const SATURATION: f32 = 90.0;

/// HSL color with alpha. Hue in degrees, saturation/lightness in percent,
/// alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    pub const fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Hsla { hue, saturation, lightness, alpha }
    }
}

/// 8-bit RGB with fractional alpha, used for the background wash.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f32,
}

impl Rgba {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Rgba { red, green, blue, alpha }
    }
}

/// Mode-derived colors: the translucent background wash plus the hue band
/// stars and trails draw from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Painted over the full surface every frame; the low alpha leaves a
    /// faint persistence glow instead of a hard clear.
    pub wash: Rgba,
    /// Center of the per-particle hue band, degrees.
    pub base_hue: f32,
    /// Lightness of every stroke, percent.
    pub lightness: f32,
}

impl Palette {
    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            // Darker wash so the stars stand out; cooler blue band.
            ColorMode::Dark => Palette {
                wash: Rgba::new(0, 0, 0, 0.1),
                base_hue: 200.0,
                lightness: 60.0,
            },
            ColorMode::Light => Palette {
                wash: Rgba::new(230, 240, 255, 0.1),
                base_hue: 220.0,
                lightness: 75.0,
            },
        }
    }
}
