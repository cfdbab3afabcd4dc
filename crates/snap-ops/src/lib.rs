pub mod config;
pub mod cube_axes;
pub mod overlap;
pub mod panel;
pub mod types;
pub mod uv_sets;

pub use config::{PanelConfig, ThresholdConfig};
pub use cube_axes::{derive_cube_axes, CubeAxesReport};
pub use overlap::{overlap_uv, overlap_uv_island, run_snap, NO_MATCH_WARNING};
pub use panel::ControlPanel;
pub use types::*;
pub use uv_sets::{collect_uv_coordinates, group_by_shell, ShellGroup};
