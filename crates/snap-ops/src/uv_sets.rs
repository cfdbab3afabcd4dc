use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use host_bridge::{ComponentId, HostError, ShapeId, ShellId, UvAccessor};
use snap_kernel::UvCoordinate;

/// Read the current UV position of every component, keeping input order.
pub fn collect_uv_coordinates<H: UvAccessor + ?Sized>(
    host: &H,
    components: &[ComponentId],
) -> Result<Vec<UvCoordinate>, HostError> {
    components
        .iter()
        .map(|id| {
            let p = host.uv_position(id)?;
            Ok(UvCoordinate::new(id.as_str(), p.u, p.v))
        })
        .collect()
}

/// UVs of one shell, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellGroup {
    pub shape: ShapeId,
    pub shell: ShellId,
    pub members: Vec<ComponentId>,
}

/// Partition `uvs` by the shell they belong to. Groups appear in the order
/// their first member appears in `uvs`.
pub fn group_by_shell<H: UvAccessor + ?Sized>(
    host: &H,
    uvs: &[ComponentId],
) -> Result<Vec<ShellGroup>, HostError> {
    let mut groups: Vec<ShellGroup> = Vec::new();
    let mut index: HashMap<(ShapeId, ShellId), usize> = HashMap::new();

    for id in uvs {
        let shape = host.owning_shape(id)?;
        let shell = host.shell_id(id)?;
        let slot = *index.entry((shape.clone(), shell)).or_insert_with(|| {
            groups.push(ShellGroup {
                shape,
                shell,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].members.push(id.clone());
    }

    debug!(uvs = uvs.len(), shells = groups.len(), "grouped uvs by shell");
    Ok(groups)
}
