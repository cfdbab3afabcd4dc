//! Deterministic in-memory stand-in for the host application.
//!
//! Holds UV shapes split into shells, curves with control points, a selection
//! list and the selection-order preference. Records every UV write and every
//! warning so tests can assert on exactly what the operations did.

use std::collections::HashMap;

use snap_kernel::{Point2d, Point3d};

use crate::traits::*;
use crate::types::*;

#[derive(Debug, Clone)]
struct MockUv {
    shape: ShapeId,
    shell: ShellId,
    position: Point2d,
}

/// In-memory host session implementing every host-bridge trait.
#[derive(Debug, Default)]
pub struct MockHost {
    uvs: HashMap<ComponentId, MockUv>,
    /// UV ids per shape in creation (index) order.
    shape_order: HashMap<ShapeId, Vec<ComponentId>>,
    curves: HashMap<String, Vec<ComponentId>>,
    control_points: HashMap<ComponentId, Point3d>,
    selection: Vec<ComponentId>,
    track_selection_order: bool,
    preference_changes: usize,
    warnings: Vec<String>,
    writes: Vec<(ComponentId, Point2d)>,
    fail_writes_to: Option<ComponentId>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a UV to `shape` in `shell`. Ids follow `shape.map[index]`.
    pub fn add_uv(&mut self, shape: &str, shell: u32, u: f64, v: f64) -> ComponentId {
        let shape_id = ShapeId(shape.to_string());
        let ids = self.shape_order.entry(shape_id.clone()).or_default();
        let id = ComponentId(format!("{}.map[{}]", shape, ids.len()));
        ids.push(id.clone());
        self.uvs.insert(
            id.clone(),
            MockUv {
                shape: shape_id,
                shell: ShellId(shell),
                position: Point2d::new(u, v),
            },
        );
        id
    }

    /// Add a UV shell from a list of positions.
    pub fn add_shell(&mut self, shape: &str, shell: u32, positions: &[(f64, f64)]) -> Vec<ComponentId> {
        positions
            .iter()
            .map(|&(u, v)| self.add_uv(shape, shell, u, v))
            .collect()
    }

    /// Add a curve whose control points sit at `points`. Ids follow `curve.cv[index]`.
    pub fn add_curve(&mut self, curve: &str, points: &[Point3d]) -> Vec<ComponentId> {
        let ids: Vec<ComponentId> = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let id = ComponentId(format!("{curve}.cv[{i}]"));
                self.control_points.insert(id.clone(), *p);
                id
            })
            .collect();
        self.curves.insert(curve.to_string(), ids.clone());
        ids
    }

    /// Replace the selection; the slice order is the pick order.
    pub fn select(&mut self, components: &[ComponentId]) {
        self.selection = components.to_vec();
    }

    /// Make every later UV write to `component` fail.
    pub fn fail_writes_to(&mut self, component: ComponentId) {
        self.fail_writes_to = Some(component);
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Successful UV writes in call order.
    pub fn writes(&self) -> &[(ComponentId, Point2d)] {
        &self.writes
    }

    /// Number of times the selection-order preference was set.
    pub fn preference_changes(&self) -> usize {
        self.preference_changes
    }

    pub fn uv(&self, component: &ComponentId) -> Option<Point2d> {
        self.uvs.get(component).map(|uv| uv.position)
    }

    fn lookup_uv(&self, component: &ComponentId) -> Result<&MockUv, HostError> {
        self.uvs.get(component).ok_or_else(|| {
            if self.control_points.contains_key(component) {
                HostError::NotUvComponent {
                    id: component.clone(),
                }
            } else {
                HostError::ComponentNotFound {
                    id: component.clone(),
                }
            }
        })
    }
}

impl SelectionProvider for MockHost {
    fn selected(&self) -> Result<Vec<ComponentId>, HostError> {
        Ok(self.selection.clone())
    }

    fn ordered_selection(&self) -> Result<Vec<ComponentId>, HostError> {
        if self.track_selection_order {
            Ok(self.selection.clone())
        } else {
            Ok(Vec::new())
        }
    }

    fn expand_to_shell(&self, components: &[ComponentId]) -> Result<Vec<ComponentId>, HostError> {
        let mut shells = Vec::new();
        for id in components {
            let uv = self.lookup_uv(id)?;
            let key = (uv.shape.clone(), uv.shell);
            if !shells.contains(&key) {
                shells.push(key);
            }
        }

        let mut members = Vec::new();
        for (shape, shell) in &shells {
            let ids = self
                .shape_order
                .get(shape)
                .ok_or_else(|| HostError::ShapeNotFound {
                    shape: shape.clone(),
                })?;
            members.extend(
                ids.iter()
                    .filter(|id| self.uvs.get(*id).is_some_and(|uv| uv.shell == *shell))
                    .cloned(),
            );
        }
        Ok(members)
    }

    fn to_uv_components(&self, components: &[ComponentId]) -> Result<Vec<ComponentId>, HostError> {
        let mut out: Vec<ComponentId> = Vec::with_capacity(components.len());
        for id in components {
            self.lookup_uv(id)?;
            if !out.contains(id) {
                out.push(id.clone());
            }
        }
        Ok(out)
    }

    fn track_selection_order(&self) -> bool {
        self.track_selection_order
    }

    fn set_track_selection_order(&mut self, enabled: bool) {
        self.preference_changes += 1;
        self.track_selection_order = enabled;
    }
}

impl UvAccessor for MockHost {
    fn owning_shape(&self, component: &ComponentId) -> Result<ShapeId, HostError> {
        Ok(self.lookup_uv(component)?.shape.clone())
    }

    fn shape_uvs(&self, shape: &ShapeId) -> Result<Vec<ComponentId>, HostError> {
        self.shape_order
            .get(shape)
            .cloned()
            .ok_or_else(|| HostError::ShapeNotFound {
                shape: shape.clone(),
            })
    }

    fn uv_position(&self, component: &ComponentId) -> Result<Point2d, HostError> {
        Ok(self.lookup_uv(component)?.position)
    }

    fn shell_id(&self, component: &ComponentId) -> Result<ShellId, HostError> {
        Ok(self.lookup_uv(component)?.shell)
    }

    fn set_uv_position(&mut self, component: &ComponentId, position: Point2d) -> Result<(), HostError> {
        if self.fail_writes_to.as_ref() == Some(component) {
            return Err(HostError::Other {
                message: format!("write rejected for {component}"),
            });
        }
        let uv = self
            .uvs
            .get_mut(component)
            .ok_or_else(|| HostError::ComponentNotFound {
                id: component.clone(),
            })?;
        uv.position = position;
        self.writes.push((component.clone(), position));
        Ok(())
    }
}

impl GeometryAccessor for MockHost {
    fn control_points(&self, curve: &str) -> Result<Vec<ComponentId>, HostError> {
        self.curves
            .get(curve)
            .cloned()
            .ok_or_else(|| HostError::CurveNotFound {
                name: curve.to_string(),
            })
    }

    fn world_position(&self, component: &ComponentId) -> Result<Point3d, HostError> {
        self.control_points
            .get(component)
            .copied()
            .ok_or_else(|| HostError::ComponentNotFound {
                id: component.clone(),
            })
    }
}

impl UserFeedback for MockHost {
    fn warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
