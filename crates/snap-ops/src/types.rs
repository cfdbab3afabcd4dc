use serde::{Deserialize, Serialize};

use host_bridge::HostError;
use snap_kernel::MatchResult;

/// Which UVs are snapped onto which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapMode {
    /// Selected UVs snap to the rest of their shape, excluding their own shell.
    /// Stops at the first UV without a match.
    Direct,
    /// The last selected shell snaps to the other selected shells. UVs without
    /// a match are skipped.
    Grouped,
}

/// What a snapping operation did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapOutcome {
    pub mode: SnapMode,
    pub threshold: f64,
    /// One entry per target UV, in target order.
    pub results: Vec<MatchResult>,
    /// Number of UVs actually moved.
    pub applied: usize,
    /// Index into `results` of the entry that stopped a direct-mode run.
    pub aborted_at: Option<usize>,
    /// Warnings shown to the user.
    pub warnings: Vec<String>,
}

impl SnapOutcome {
    pub fn unmatched(&self) -> usize {
        self.results.iter().filter(|r| !r.is_matched()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.aborted_at.is_none()
    }

    pub fn to_json(&self) -> Result<String, SnapError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Errors from snapping and axis derivation.
#[derive(Debug, thiserror::Error)]
pub enum SnapError {
    #[error("host error: {0}")]
    Host(#[from] HostError),

    #[error("nothing is selected")]
    EmptySelection,

    #[error("invalid threshold: {value}")]
    InvalidThreshold { value: f64 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
