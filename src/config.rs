//! Viewer configuration
//!
//! Uses RON (Rusty Object Notation) so the file stays hand-editable. Every
//! field has a default, so a partial file only overrides what it names.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::rasterizer::{Color, ViewState};

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "viewer.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window_width: u32,
    pub window_height: u32,
    /// Where "Export Image" writes the PNG
    pub export_path: PathBuf,
    /// Clear color of the canvas
    pub background: Color,
    /// View restored on startup
    pub view: ViewState,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_width: 400,
            window_height: 400,
            export_path: PathBuf::from("rendered_image.png"),
            background: Color::BLACK,
            view: ViewState::new(),
        }
    }
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse a config from a RON string, clamping the view into range
pub fn load_config_from_str(s: &str) -> Result<ViewerConfig, ConfigError> {
    let mut config: ViewerConfig = ron::from_str(s)?;
    config.view = config.view.sanitized();
    config.window_width = config.window_width.max(1);
    config.window_height = config.window_height.max(1);
    Ok(config)
}

/// Load a config from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ViewerConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents)
}

/// Save a config to a RON file
pub fn save_config<P: AsRef<Path>>(config: &ViewerConfig, path: P) -> Result<(), ConfigError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Load the config at `path`, falling back to defaults.
///
/// A missing file is normal; anything else is logged.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> ViewerConfig {
    let path = path.as_ref();
    if !path.exists() {
        log::info!("no {} found, using defaults", path.display());
        return ViewerConfig::default();
    }

    match load_config(path) {
        Ok(config) => {
            log::info!("loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("ignoring {}: {}", path.display(), e);
            ViewerConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::LightingMode;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tetra-viewer-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = load_config_from_str("(export_path: \"out.png\", view: (lighting: \"diffuse\"))").unwrap();
        assert_eq!(config.export_path, PathBuf::from("out.png"));
        assert_eq!(config.view.lighting, LightingMode::Diffuse);
        assert_eq!(config.view.heading, 180);
        assert_eq!(config.window_width, 400);
        assert_eq!(config.background, Color::BLACK);
    }

    #[test]
    fn test_out_of_range_view_is_clamped() {
        let config = load_config_from_str("(view: (zoom: 0.01, pitch: 200))").unwrap();
        assert_eq!(config.view.zoom, crate::rasterizer::MIN_ZOOM);
        assert_eq!(config.view.pitch, 90);
    }

    #[test]
    fn test_unknown_mode_loads_as_unlit() {
        let config = load_config_from_str("(view: (lighting: \"cel\"))").unwrap();
        assert_eq!(config.view.lighting, LightingMode::Unlit);
    }

    #[test]
    fn test_malformed_is_parse_error() {
        let err = load_config_from_str("(window_width: \"wide\")").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_save_then_load_file() {
        let path = temp_path("config.ron");
        let mut config = ViewerConfig::default();
        config.view.apply_wheel(-2.0);
        config.view.lighting = LightingMode::Specular;
        config.background = Color::new(10, 20, 30);

        save_config(&config, &path).unwrap();
        let loaded = load_config(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = temp_path("does-not-exist.ron");
        assert!(matches!(load_config(&path), Err(ConfigError::IoError(_))));
        assert_eq!(load_or_default(&path), ViewerConfig::default());
    }
}
