//! Core types for the rasterizer

use serde::{Deserialize, Serialize};
use super::math::Vec3;

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0, a: 255 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255, a: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Apply a function to each color channel, keeping alpha
    pub fn map_rgb(self, f: impl Fn(u8) -> u8) -> Self {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
            a: self.a,
        }
    }

    /// Convert to [u8; 4] for framebuffer
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::with_alpha(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

/// A flat-colored triangle in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v1: Vec3,
    pub v2: Vec3,
    pub v3: Vec3,
    pub color: Color,
}

impl Triangle {
    pub const fn new(v1: Vec3, v2: Vec3, v3: Vec3, color: Color) -> Self {
        Self { v1, v2, v3, color }
    }
}

/// Lighting model selector
///
/// Serialized as its lowercase name. Any name that isn't one of the three
/// lit modes maps to `Unlit`, which renders the base color untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LightingMode {
    #[default]
    Ambient,
    Diffuse,
    Specular,
    Unlit,
}

impl LightingMode {
    /// The modes offered in the viewer's mode selector
    pub const SELECTABLE: [LightingMode; 3] = [
        LightingMode::Ambient,
        LightingMode::Diffuse,
        LightingMode::Specular,
    ];

    pub fn from_name(name: &str) -> Self {
        match name {
            "ambient" => LightingMode::Ambient,
            "diffuse" => LightingMode::Diffuse,
            "specular" => LightingMode::Specular,
            _ => LightingMode::Unlit,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LightingMode::Ambient => "ambient",
            LightingMode::Diffuse => "diffuse",
            LightingMode::Specular => "specular",
            LightingMode::Unlit => "unlit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LightingMode::Ambient => "Ambient",
            LightingMode::Diffuse => "Diffuse",
            LightingMode::Specular => "Specular",
            LightingMode::Unlit => "Unlit",
        }
    }
}

impl From<String> for LightingMode {
    fn from(name: String) -> Self {
        LightingMode::from_name(&name)
    }
}

impl From<LightingMode> for String {
    fn from(mode: LightingMode) -> Self {
        mode.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names() {
        for mode in LightingMode::SELECTABLE {
            assert_eq!(LightingMode::from_name(mode.name()), mode);
        }
        assert_eq!(LightingMode::from_name("phong"), LightingMode::Unlit);
        assert_eq!(LightingMode::from_name("Ambient"), LightingMode::Unlit);
    }

    #[test]
    fn test_mode_ron_unknown_is_unlit() {
        let mode: LightingMode = ron::from_str("\"toon\"").unwrap();
        assert_eq!(mode, LightingMode::Unlit);
        let mode: LightingMode = ron::from_str("\"diffuse\"").unwrap();
        assert_eq!(mode, LightingMode::Diffuse);
        assert_eq!(ron::to_string(&LightingMode::Specular).unwrap(), "\"specular\"");
    }

    #[test]
    fn test_map_rgb_keeps_alpha() {
        let c = Color::with_alpha(10, 20, 30, 40).map_rgb(|c| c / 10);
        assert_eq!(c, Color::with_alpha(1, 2, 3, 40));
    }
}
