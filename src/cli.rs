// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::ViewerConfig;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "scene-viewer")]
#[command(about = "Spotlit primitive scene with orbit camera and settings panel", long_about = None)]
pub struct Cli {
    /// Hide the settings panel and FPS overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// JSON file with viewer settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Image applied to the cube
    #[arg(long, value_name = "FILE")]
    pub texture: Option<PathBuf>,

    /// Initial window width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,
}

impl Cli {
    /// Resolve the effective configuration: file (or defaults), then flags
    pub fn viewer_config(&self) -> Result<ViewerConfig> {
        let mut config = match &self.config {
            Some(path) => ViewerConfig::load(path)?,
            None => ViewerConfig::default(),
        };

        if self.no_ui {
            config.show_ui = false;
        }
        if let Some(texture) = &self.texture {
            config.texture = texture.clone();
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::parse_from(["scene-viewer"]);
        assert!(!cli.no_ui);
        assert_eq!(cli.viewer_config().unwrap(), ViewerConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "scene-viewer",
            "--no-ui",
            "--texture",
            "crate.png",
            "--width",
            "1024",
        ]);
        let config = cli.viewer_config().unwrap();
        assert!(!config.show_ui);
        assert_eq!(config.texture, PathBuf::from("crate.png"));
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, ViewerConfig::default().window.height);
    }

    #[test]
    fn test_zero_size_flags_are_rejected() {
        let cli = Cli::parse_from(["scene-viewer", "--width", "0"]);
        assert!(cli.viewer_config().is_err());

        let cli = Cli::parse_from(["scene-viewer", "--height", "0"]);
        assert!(cli.viewer_config().is_err());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["scene-viewer", "--config", "/nonexistent/viewer.json"]);
        assert!(cli.viewer_config().is_err());
    }
}
