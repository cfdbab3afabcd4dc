use snap_kernel::{Point2d, Point3d};

use crate::types::*;

/// Selection state of the host session.
pub trait SelectionProvider {
    /// Currently selected components, flattened, in host order.
    fn selected(&self) -> Result<Vec<ComponentId>, HostError>;

    /// Selected components in the order the user picked them. Empty unless
    /// selection-order tracking is enabled.
    fn ordered_selection(&self) -> Result<Vec<ComponentId>, HostError>;

    /// Every UV of the shells touched by `components`.
    fn expand_to_shell(&self, components: &[ComponentId]) -> Result<Vec<ComponentId>, HostError>;

    /// Convert a component selection to its UV components, keeping order.
    fn to_uv_components(&self, components: &[ComponentId])
        -> Result<Vec<ComponentId>, HostError>;

    /// Whether the host records selection order.
    fn track_selection_order(&self) -> bool;

    /// Enable or disable selection-order tracking.
    fn set_track_selection_order(&mut self, enabled: bool);
}

/// Read/write access to UV components.
pub trait UvAccessor {
    /// Shape node owning a component.
    fn owning_shape(&self, component: &ComponentId) -> Result<ShapeId, HostError>;

    /// All UV components of a shape, in host index order.
    fn shape_uvs(&self, shape: &ShapeId) -> Result<Vec<ComponentId>, HostError>;

    /// Current UV position of a component.
    fn uv_position(&self, component: &ComponentId) -> Result<Point2d, HostError>;

    /// Shell (island) a UV component belongs to.
    fn shell_id(&self, component: &ComponentId) -> Result<ShellId, HostError>;

    /// Move a UV component to an absolute position.
    fn set_uv_position(&mut self, component: &ComponentId, position: Point2d)
        -> Result<(), HostError>;
}

/// World-space geometry queries.
pub trait GeometryAccessor {
    /// Control-point components of a curve.
    fn control_points(&self, curve: &str) -> Result<Vec<ComponentId>, HostError>;

    /// World-space position of a component.
    fn world_position(&self, component: &ComponentId) -> Result<Point3d, HostError>;
}

/// User-facing message surface of the host UI.
pub trait UserFeedback {
    /// Show a warning to the user.
    fn warning(&mut self, message: &str);
}

/// Everything the snapping operations need from a host session.
pub trait SceneHost: SelectionProvider + UvAccessor + GeometryAccessor + UserFeedback {}

impl<T> SceneHost for T where T: SelectionProvider + UvAccessor + GeometryAccessor + UserFeedback {}
