//! Wave presets loaded from TOML
//!
//! A preset names a divider and overrides any subset of the render parameters;
//! missing keys keep their defaults.
//!
//! ```toml
//! [metadata]
//! name = "Ocean"
//!
//! [wave]
//! type = "bump"
//! height = 120
//! color_top = "0a2540"
//! layers = 3
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::color::HexColor;
use crate::error::PresetError;
use crate::params::{RenderParams, WaveType};

/// A named set of render parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    /// Optional name for the preset
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Parameters with the preset's overrides applied, not yet clamped
    pub params: RenderParams,
}

#[derive(Deserialize)]
struct TomlPreset {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    wave: TomlWave,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlWave {
    #[serde(rename = "type")]
    wave_type: Option<WaveType>,
    width: Option<u32>,
    height: Option<u32>,
    color_top: Option<HexColor>,
    color_bottom: Option<HexColor>,
    amplitude: Option<f64>,
    frequency: Option<f64>,
    layers: Option<u32>,
    flip: Option<bool>,
    gradient: Option<bool>,
    mirror: Option<bool>,
    animate: Option<bool>,
    opacity: Option<f64>,
    speed: Option<f64>,
}

impl TomlWave {
    fn apply(self, base: RenderParams) -> RenderParams {
        RenderParams {
            wave_type: self.wave_type.unwrap_or(base.wave_type),
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            color_top: self.color_top.unwrap_or(base.color_top),
            color_bottom: self.color_bottom.unwrap_or(base.color_bottom),
            amplitude: self.amplitude.unwrap_or(base.amplitude),
            frequency: self.frequency.unwrap_or(base.frequency),
            layers: self.layers.unwrap_or(base.layers),
            flip: self.flip.unwrap_or(base.flip),
            gradient: self.gradient.unwrap_or(base.gradient),
            mirror: self.mirror.unwrap_or(base.mirror),
            animate: self.animate.unwrap_or(base.animate),
            opacity: self.opacity.unwrap_or(base.opacity),
            speed: self.speed.unwrap_or(base.speed),
        }
    }
}

impl Preset {
    /// Load a preset from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PresetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a preset from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, PresetError> {
        let parsed: TomlPreset = toml::from_str(content)?;

        Ok(Preset {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            params: parsed.wave.apply(RenderParams::default()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preset() {
        let toml = r##"
[metadata]
name = "Ocean"
description = "Deep blue footer"

[wave]
type = "bump"
height = 120
color_top = "#0a2540"
color_bottom = "fff"
layers = 3
animate = true
"##;
        let preset = Preset::from_str(toml).unwrap();
        assert_eq!(preset.name, Some("Ocean".to_string()));
        assert_eq!(preset.description, Some("Deep blue footer".to_string()));
        assert_eq!(preset.params.wave_type, WaveType::Bump);
        assert_eq!(preset.params.height, 120);
        assert_eq!(preset.params.width, 1200);
        assert_eq!(preset.params.color_top.to_string(), "#0a2540");
        assert_eq!(preset.params.color_bottom.to_string(), "#ffffff");
        assert_eq!(preset.params.layers, 3);
        assert!(preset.params.animate);
        assert!(!preset.params.mirror);
    }

    #[test]
    fn test_empty_preset_is_default() {
        let preset = Preset::from_str("").unwrap();
        assert_eq!(preset.name, None);
        assert_eq!(preset.params, RenderParams::default());
    }

    #[test]
    fn test_unknown_type_falls_back_to_smooth() {
        let preset = Preset::from_str("[wave]\ntype = \"square\"\n").unwrap();
        assert_eq!(preset.params.wave_type, WaveType::Smooth);
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let result = Preset::from_str("[wave]\ncolor_top = \"zz0000\"\n");
        assert!(matches!(result, Err(PresetError::Toml(_))));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = Preset::from_str("[wave]\ncolour = \"fff\"\n");
        assert!(result.is_err());
    }
}
