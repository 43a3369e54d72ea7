//! Reflectance model and the two gamma passes
//!
//! The lit color is `gamma(shade(base, factor))`. `shade` decodes each channel
//! with exponent 2.4, scales it and re-encodes; `gamma` then re-encodes the
//! result again with 1/2.2. Applying both is intentional: reference renders
//! are produced with exactly this double correction.

use super::math::Vec3;
use super::types::{Color, LightingMode};

pub const AMBIENT_LIGHT: f64 = 0.2;
pub const DIFFUSE_LIGHT: f64 = 1.0;
pub const SPECULAR_LIGHT: f64 = 0.5;
pub const SHININESS: f64 = 32.0;
pub const LIGHT_DIRECTION: Vec3 = Vec3::new(0.0, 0.0, -1.0);
pub const VIEW_DIRECTION: Vec3 = Vec3::new(0.0, 0.0, 1.0);
pub const GAMMA: f64 = 2.2;

/// Channel decode/encode exponent used by `shade`
const SHADE_EXPONENT: f64 = 2.4;

/// Truncate toward zero and clamp into a channel.
/// NaN lands on 0.
fn to_channel(v: f64) -> u8 {
    (v as i32).clamp(0, 255) as u8
}

/// Scale a color by `factor` in linearized space
pub fn shade(color: Color, factor: f64) -> Color {
    color.map_rgb(|c| {
        let linear = (c as f64 / 255.0).powf(SHADE_EXPONENT) * factor;
        to_channel(linear.powf(1.0 / SHADE_EXPONENT) * 255.0)
    })
}

/// Encode a color with exponent 1/GAMMA (no decode step first)
pub fn gamma_correct(color: Color) -> Color {
    color.map_rgb(|c| to_channel(255.0 * (c as f64 / 255.0).powf(1.0 / GAMMA)))
}

/// Intensity factor for a surface normal under the given mode.
///
/// `None` for `Unlit`, which bypasses shading entirely.
pub fn shade_factor(normal: Vec3, mode: LightingMode) -> Option<f64> {
    let ambient = AMBIENT_LIGHT;
    // Only the diffuse arm assigns this; specular mode keeps it at zero.
    let diffuse = 0.0;

    match mode {
        LightingMode::Ambient => Some(ambient),
        LightingMode::Diffuse => {
            let diffuse = DIFFUSE_LIGHT * normal.dot(LIGHT_DIRECTION).max(0.0);
            Some(ambient + diffuse)
        }
        LightingMode::Specular => {
            let reflection = LIGHT_DIRECTION.reflect(normal);
            let specular =
                SPECULAR_LIGHT * VIEW_DIRECTION.dot(reflection).max(0.0).powf(SHININESS);
            Some(ambient + diffuse + specular)
        }
        LightingMode::Unlit => None,
    }
}

/// Lit base color of a face
pub fn compute_lighting(base: Color, normal: Vec3, mode: LightingMode) -> Color {
    match shade_factor(normal, mode) {
        Some(factor) => gamma_correct(shade(base, factor)),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Straight transcription of the two-stage channel formula
    fn oracle(c: u8, factor: f64) -> u8 {
        let shaded = (((c as f64 / 255.0).powf(2.4) * factor).powf(1.0 / 2.4) * 255.0) as i32;
        let shaded = shaded.clamp(0, 255);
        let encoded = (255.0 * (shaded as f64 / 255.0).powf(1.0 / 2.2)) as i32;
        encoded.clamp(0, 255) as u8
    }

    #[test]
    fn test_ambient_white() {
        let lit = compute_lighting(Color::WHITE, Vec3::new(0.0, 0.0, 1.0), LightingMode::Ambient);
        let expected = oracle(255, 0.2);
        assert_eq!(expected, 187);
        assert_eq!(lit, Color::new(expected, expected, expected));
    }

    #[test]
    fn test_shade_identity_factor() {
        let c = Color::new(0, 128, 255);
        let s = shade(c, 1.0);
        // Round-tripping through pow may lose at most one unit to truncation
        assert!(s.g == 128 || s.g == 127);
        assert_eq!(s.r, 0);
        assert_eq!(s.b, 255);
    }

    #[test]
    fn test_shade_clamps_overbright() {
        let s = shade(Color::WHITE, 1.2);
        assert_eq!(s, Color::WHITE);
    }

    #[test]
    fn test_shade_nan_is_black() {
        let s = shade(Color::new(200, 100, 50), f64::NAN);
        assert_eq!(s, Color::BLACK);
    }

    #[test]
    fn test_gamma_endpoints() {
        assert_eq!(gamma_correct(Color::BLACK), Color::BLACK);
        assert_eq!(gamma_correct(Color::WHITE), Color::WHITE);
        // 1/2.2 brightens mid-tones
        assert!(gamma_correct(Color::new(64, 64, 64)).r > 64);
    }

    #[test]
    fn test_diffuse_facing_light() {
        // Normal opposite the light direction gets no diffuse term
        let away = shade_factor(Vec3::new(0.0, 0.0, 1.0), LightingMode::Diffuse).unwrap();
        assert!((away - 0.2).abs() < 1e-12);
        let toward = shade_factor(Vec3::new(0.0, 0.0, -1.0), LightingMode::Diffuse).unwrap();
        assert!((toward - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_specular_has_no_diffuse() {
        // Facing the light: reflection points at the viewer, so specular = 0.5
        let f = shade_factor(Vec3::new(0.0, 0.0, -1.0), LightingMode::Specular).unwrap();
        assert!((f - 0.7).abs() < 1e-12);
        // Edge-on normal: reflection is the light itself, no highlight and no diffuse
        let f = shade_factor(Vec3::new(1.0, 0.0, 0.0), LightingMode::Specular).unwrap();
        assert!((f - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_unlit_passthrough() {
        let base = Color::new(12, 34, 56);
        assert_eq!(shade_factor(Vec3::new(0.0, 0.0, 1.0), LightingMode::Unlit), None);
        assert_eq!(compute_lighting(base, Vec3::new(0.0, 0.0, 1.0), LightingMode::Unlit), base);
    }

    #[test]
    fn test_lit_channels_match_oracle() {
        let base = Color::new(255, 90, 10);
        let normal = Vec3::new(0.0, 0.6, -0.8);
        let lit = compute_lighting(base, normal, LightingMode::Diffuse);
        let factor = 0.2 + 0.8;
        assert_eq!(lit.r, oracle(255, factor));
        assert_eq!(lit.g, oracle(90, factor));
        assert_eq!(lit.b, oracle(10, factor));
    }
}
