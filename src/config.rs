use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::camera::{DEFAULT_FAR, DEFAULT_FOV, DEFAULT_NEAR};

pub const DEFAULT_TEXTURE: &str = "./assets/textures/wood1.jpg";

/// Largest shadow map every adapter supports (`Limits::default().max_texture_dimension_2d`)
pub const MAX_SHADOW_MAP_SIZE: u32 = 8192;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical pixels
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Scene Viewer".to_string(),
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FOV,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            position: [0.0, 2.0, 5.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub enable_damping: bool,
    pub damping_factor: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            enable_damping: false,
            damping_factor: 0.05,
        }
    }
}

/// Viewer settings, loadable from a JSON file; every field is optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
    pub texture: PathBuf,
    /// Edge length of the square shadow map in texels
    pub shadow_map_size: u32,
    pub show_ui: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            controls: ControlsConfig::default(),
            texture: PathBuf::from(DEFAULT_TEXTURE),
            shadow_map_size: 512,
            show_ui: true,
        }
    }
}

impl ViewerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the window or renderer cannot be built with
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            (1..=MAX_SHADOW_MAP_SIZE).contains(&self.shadow_map_size),
            "shadow_map_size must be between 1 and {}, got {}",
            MAX_SHADOW_MAP_SIZE,
            self.shadow_map_size
        );
        anyhow::ensure!(
            self.window.width > 0 && self.window.height > 0,
            "window size must be positive, got {}x{}",
            self.window.width,
            self.window.height
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        assert_eq!(ViewerConfig::from_json("{}").unwrap(), ViewerConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = ViewerConfig::from_json(
            r#"{ "window": { "width": 1280 }, "camera": { "fov": 60.0 }, "shadow_map_size": 2048 }"#,
        )
        .unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.camera.fov, 60.0);
        assert_eq!(config.camera.near, DEFAULT_NEAR);
        assert_eq!(config.shadow_map_size, 2048);
    }

    #[test]
    fn test_rejects_zero_shadow_map() {
        assert!(ViewerConfig::from_json(r#"{ "shadow_map_size": 0 }"#).is_err());
    }

    #[test]
    fn test_rejects_oversized_shadow_map() {
        assert!(ViewerConfig::from_json(r#"{ "shadow_map_size": 100000 }"#).is_err());
        let largest = format!(r#"{{ "shadow_map_size": {} }}"#, MAX_SHADOW_MAP_SIZE);
        assert!(ViewerConfig::from_json(&largest).is_ok());
    }

    #[test]
    fn test_rejects_zero_window() {
        assert!(ViewerConfig::from_json(r#"{ "window": { "width": 0 } }"#).is_err());

        let mut config = ViewerConfig::default();
        config.window.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(ViewerConfig::from_json("{ window: }").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("scene-viewer-{}.json", std::process::id()));
        fs::write(&path, r#"{ "texture": "bricks.png", "show_ui": false }"#).unwrap();

        let config = ViewerConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.texture, PathBuf::from("bricks.png"));
        assert!(!config.show_ui);
    }
}
