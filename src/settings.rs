use serde::{Deserialize, Serialize};

use crate::math::ColorParseError;

/// Color pickers shown in the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorControl {
    Sphere,
    Cube,
    Cylinder,
}

impl ColorControl {
    pub const ALL: [ColorControl; 3] = [ColorControl::Sphere, ColorControl::Cube, ColorControl::Cylinder];

    pub fn label(&self) -> &'static str {
        match self {
            ColorControl::Sphere => "Sphere Color",
            ColorControl::Cube => "Cube Color",
            ColorControl::Cylinder => "Cylinder Color",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|control| control.label() == label)
    }
}

pub const WIREFRAME_LABEL: &str = "Wireframe";

/// A single edit made through the settings panel
#[derive(Debug, Clone, PartialEq)]
pub enum SettingChange {
    /// New `#rrggbb` value for one of the color pickers
    Color(ColorControl, String),
    Wireframe(bool),
}

impl SettingChange {
    pub fn label(&self) -> &'static str {
        match self {
            SettingChange::Color(control, _) => control.label(),
            SettingChange::Wireframe(_) => WIREFRAME_LABEL,
        }
    }
}

/// Receives panel edits
pub trait SettingsListener {
    fn on_change(&mut self, change: &SettingChange) -> Result<(), ColorParseError>;
}

/// Current value of every panel control, keyed by control label
///
/// Values are not persisted; each run starts from [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSettings {
    #[serde(rename = "Sphere Color")]
    pub sphere_color: String,
    #[serde(rename = "Cube Color")]
    pub cube_color: String,
    #[serde(rename = "Cylinder Color")]
    pub cylinder_color: String,
    #[serde(rename = "Wireframe")]
    pub wireframe: bool,
}

impl PanelSettings {
    pub fn color(&self, control: ColorControl) -> &str {
        match control {
            ColorControl::Sphere => &self.sphere_color,
            ColorControl::Cube => &self.cube_color,
            ColorControl::Cylinder => &self.cylinder_color,
        }
    }

    pub fn color_mut(&mut self, control: ColorControl) -> &mut String {
        match control {
            ColorControl::Sphere => &mut self.sphere_color,
            ColorControl::Cube => &mut self.cube_color,
            ColorControl::Cylinder => &mut self.cylinder_color,
        }
    }

    /// Record a change; validation happens in the listener
    pub fn apply(&mut self, change: &SettingChange) {
        match change {
            SettingChange::Color(control, hex) => *self.color_mut(*control) = hex.clone(),
            SettingChange::Wireframe(enabled) => self.wireframe = *enabled,
        }
    }
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            sphere_color: "#0099ff".to_string(),
            cube_color: "#ffffff".to_string(),
            cylinder_color: "#b80019".to_string(),
            wireframe: false,
        }
    }
}
