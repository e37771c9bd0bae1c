use std::path::Path;

use egui::Color32;
use serde::Deserialize;

use crate::color::parse_hex;
use crate::error::{ConfigError, ConfigResult};
use crate::palette::Palette;

/// Startup settings for the grid and its palette.
///
/// Every field is optional in the JSON source; missing ones take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub cell_count: usize,
    /// Edge length of a cell in points
    pub cell_size: f32,
    /// Color restored on every reset
    pub default_color: String,
    pub picker_default: String,
    pub swatches: Vec<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_count: 2405,
            cell_size: 12.0,
            default_color: "#ff7552".to_owned(),
            picker_default: "#ffffff".to_owned(),
            swatches: ["#31d9a5", "#72b4b6", "#6e8581", "#feff50", "#ffba50", "#000000"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl GridConfig {
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::info!("Loading grid config from {}", path.as_ref().display());
        Self::from_json(&text)
    }

    /// Check every field that can be wrong
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        self.default_color()?;
        self.palette()?;
        Ok(())
    }

    pub fn default_color(&self) -> ConfigResult<Color32> {
        parse_hex(&self.default_color).map_err(|source| ConfigError::Color {
            field: "default_color",
            source,
        })
    }

    pub fn palette(&self) -> ConfigResult<Palette> {
        let swatches = self
            .swatches
            .iter()
            .map(|text| parse_hex(text))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| ConfigError::Color {
                field: "swatches",
                source,
            })?;
        let picker = parse_hex(&self.picker_default).map_err(|source| ConfigError::Color {
            field: "picker_default",
            source,
        })?;
        Ok(Palette::new(swatches, picker))
    }
}
