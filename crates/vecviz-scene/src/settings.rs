//! Ambient scene settings
//!
//! Plain serde struct; settings files are camelCase JSON and individual
//! settings are addressed by the same camelCase names.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{SceneError, SceneResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SceneSettings {
    pub background_color: u32,
    pub show_grid: bool,
    pub grid_color: u32,
    pub center_line_grid_color: u32,
    pub show_axis_rings: bool,
    pub x_axis_ring_color: u32,
    pub y_axis_ring_color: u32,
    pub z_axis_ring_color: u32,
    pub show_performance_stats: bool,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            background_color: 0xffffff,
            show_grid: true,
            grid_color: 0x888888,
            center_line_grid_color: 0x444444,
            show_axis_rings: true,
            x_axis_ring_color: 0xff0000,
            y_axis_ring_color: 0x00ff00,
            z_axis_ring_color: 0x0000ff,
            show_performance_stats: false,
        }
    }
}

impl SceneSettings {
    /// Load settings from a JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> SceneResult<Self> {
        let text = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&text)?;
        log::info!("Loaded scene settings from {:?}", path);
        Ok(settings)
    }

    /// Write settings to a JSON file
    pub fn save(&self, path: &Path) -> SceneResult<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// All setting names, sorted
    pub fn names() -> Vec<String> {
        match serde_json::to_value(Self::default()) {
            Ok(JsonValue::Object(map)) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Read one setting by name
    pub fn get_by_name(&self, name: &str) -> SceneResult<JsonValue> {
        let mut fields = self.to_fields()?;
        fields
            .remove(name)
            .ok_or_else(|| SceneError::UnknownSetting(name.to_string()))
    }

    /// Change one setting by name
    ///
    /// The value must have the setting's type; the settings are unchanged
    /// on error.
    pub fn set_by_name(&mut self, name: &str, value: JsonValue) -> SceneResult<()> {
        let mut fields = self.to_fields()?;
        match fields.get_mut(name) {
            Some(slot) => *slot = value,
            None => return Err(SceneError::UnknownSetting(name.to_string())),
        }
        let updated: SceneSettings =
            serde_json::from_value(JsonValue::Object(fields)).map_err(|e| SceneError::InvalidSetting {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        *self = updated;
        log::debug!("setting {} changed", name);
        Ok(())
    }

    fn to_fields(&self) -> SceneResult<serde_json::Map<String, JsonValue>> {
        match serde_json::to_value(self)? {
            JsonValue::Object(map) => Ok(map),
            other => Err(SceneError::InvalidSetting {
                name: String::new(),
                reason: format!("settings serialized to {other}"),
            }),
        }
    }
}
