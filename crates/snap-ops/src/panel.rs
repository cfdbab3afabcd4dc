use host_bridge::SceneHost;

use crate::config::PanelConfig;
use crate::overlap::run_snap;
use crate::types::{SnapError, SnapOutcome};

/// State behind the snapping panel: its configuration and the threshold
/// currently entered.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    config: PanelConfig,
    threshold: f64,
}

impl ControlPanel {
    pub fn new(config: PanelConfig) -> Self {
        let threshold = config.threshold.default;
        Self { config, threshold }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Store a user-entered threshold, clamped into the field range. Returns
    /// the stored value.
    pub fn set_threshold(&mut self, value: f64) -> f64 {
        self.threshold = self.config.threshold.clamp(value);
        self.threshold
    }

    /// Run the button's mode with the current threshold.
    pub fn press<H: SceneHost + ?Sized>(&self, host: &mut H) -> Result<SnapOutcome, SnapError> {
        run_snap(self.config.action, host, self.threshold)
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}
