//! Overlay configuration.

use serde::{Deserialize, Serialize};
use wb_input::DEFAULT_ICON_SIZE;

/// Tunables for the overlay surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial launcher icon origin (logical pixels from top-left).
    pub icon_pos: [f32; 2],
    /// Launcher icon side length.
    pub icon_size: f32,
    /// Entry panel width.
    pub panel_width: f32,
    /// Maximum height of the scrollable row list.
    pub row_list_max_height: f32,
    /// Host template resource holding the panel chrome strings.
    pub template_name: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            icon_pos: [24.0, 24.0],
            icon_size: DEFAULT_ICON_SIZE,
            panel_width: 360.0,
            row_list_max_height: 260.0,
            template_name: "panel.json".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_json() {
        let config = UiConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<UiConfig>(&json).unwrap(), config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: UiConfig = serde_json::from_str("{\"icon_size\": 48.0}").unwrap();
        assert_eq!(config.icon_size, 48.0);
        assert_eq!(config.template_name, "panel.json");
    }
}
