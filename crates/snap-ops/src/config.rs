//! Configuration for the snapping panel.

use serde::{Deserialize, Serialize};

use crate::types::SnapMode;

/// Range and default of the threshold input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Initial value.
    pub default: f64,
    /// Smallest value the numeric field accepts.
    pub field_min: f64,
    /// Largest value the numeric field accepts.
    pub field_max: f64,
    /// Lower end of the slider track.
    pub slider_min: f64,
    /// Upper end of the slider track.
    pub slider_max: f64,
    /// Slider increment.
    pub step: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            default: 0.025,
            field_min: 0.001,
            field_max: 0.1,
            slider_min: 0.025,
            slider_max: 0.1,
            step: 0.001,
        }
    }
}

impl ThresholdConfig {
    /// Clamp into the field range. NaN falls back to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.field_min, self.field_max)
        }
    }

    /// Value to use for an optional user entry.
    pub fn resolve(&self, value: Option<f64>) -> f64 {
        value.map_or(self.default, |v| self.clamp(v))
    }
}

/// Layout-independent description of the snapping panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Host UI object name; an existing panel with this name is replaced.
    pub window_name: String,
    pub title: String,
    pub button_label: String,
    /// Mode the button runs.
    pub action: SnapMode,
    pub threshold: ThresholdConfig,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::direct()
    }
}

impl PanelConfig {
    /// The shipped panel: one button running direct mode.
    pub fn direct() -> Self {
        Self {
            window_name: "gui_overlap_uv".into(),
            title: "Overlap UV".into(),
            button_label: "Overlap UV".into(),
            action: SnapMode::Direct,
            threshold: ThresholdConfig::default(),
        }
    }

    /// Same panel with the button bound to grouped mode.
    pub fn island() -> Self {
        Self {
            button_label: "Overlap UV Island".into(),
            action: SnapMode::Grouped,
            ..Self::direct()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_defaults() {
        let cfg = ThresholdConfig::default();
        assert_eq!(cfg.default, 0.025);
        assert_eq!((cfg.field_min, cfg.field_max), (0.001, 0.1));
    }

    #[test]
    fn test_clamp_into_field_range() {
        let cfg = ThresholdConfig::default();
        assert_eq!(cfg.clamp(0.0), 0.001);
        assert_eq!(cfg.clamp(5.0), 0.1);
        assert_eq!(cfg.clamp(0.05), 0.05);
        assert_eq!(cfg.clamp(f64::NAN), 0.025);
    }

    #[test]
    fn test_resolve() {
        let cfg = ThresholdConfig::default();
        assert_eq!(cfg.resolve(None), 0.025);
        assert_eq!(cfg.resolve(Some(0.2)), 0.1);
    }

    #[test]
    fn test_island_preset_only_changes_action() {
        let direct = PanelConfig::direct();
        let island = PanelConfig::island();
        assert_eq!(island.action, SnapMode::Grouped);
        assert_eq!(island.threshold, direct.threshold);
        assert_eq!(island.window_name, direct.window_name);
    }

    #[test]
    fn test_panel_config_roundtrips_through_json() {
        let json = serde_json::to_string(&PanelConfig::default()).unwrap();
        assert!(json.contains("\"action\":\"direct\""));
        let back: PanelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PanelConfig::default());
    }
}
