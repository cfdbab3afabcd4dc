//! Snap selected UVs onto nearby UVs of other shells.
//!
//! Both modes gather a reference set and a target set from the host, run
//! [`compare_uv_position`] and write the matches back. They differ in where
//! the sets come from and in how a target without a match is handled.

use std::collections::HashSet;

use tracing::{debug, info, instrument, warn};

use host_bridge::{ComponentId, SceneHost, SelectionOrderGuard};
use snap_kernel::compare_uv_position;

use crate::types::{SnapError, SnapMode, SnapOutcome};
use crate::uv_sets::{collect_uv_coordinates, group_by_shell};

/// Shown once when a direct-mode run stops on a UV without a match.
pub const NO_MATCH_WARNING: &str =
    "No nearby UV was found. The threshold may be too small.";

/// Run the given mode against `host`.
pub fn run_snap<H: SceneHost + ?Sized>(
    mode: SnapMode,
    host: &mut H,
    threshold: f64,
) -> Result<SnapOutcome, SnapError> {
    match mode {
        SnapMode::Direct => overlap_uv(host, threshold),
        SnapMode::Grouped => overlap_uv_island(host, threshold),
    }
}

/// Snap the selected UVs onto the other UVs of their shape.
///
/// The reference set is every UV of the first selected UV's shape minus the
/// shells the selection touches, so a UV never snaps onto its own shell.
/// Matches are written in selection order. On the first UV without a match a
/// single warning is shown and the rest of the batch is abandoned; UVs moved
/// before that point stay moved.
#[instrument(skip(host))]
pub fn overlap_uv<H: SceneHost + ?Sized>(
    host: &mut H,
    threshold: f64,
) -> Result<SnapOutcome, SnapError> {
    check_threshold(threshold)?;

    let selected = host.selected()?;
    let first = selected.first().ok_or(SnapError::EmptySelection)?;
    let island = host.expand_to_shell(&selected)?;
    let shape = host.owning_shape(first)?;

    let excluded: HashSet<&ComponentId> = island.iter().collect();
    let search: Vec<ComponentId> = host
        .shape_uvs(&shape)?
        .into_iter()
        .filter(|id| !excluded.contains(id))
        .collect();
    debug!(
        %shape,
        selected = selected.len(),
        island = island.len(),
        search = search.len(),
        "collected direct-mode uv sets"
    );

    let src = collect_uv_coordinates(&*host, &search)?;
    let dst = collect_uv_coordinates(&*host, &selected)?;
    let results = compare_uv_position(&src, &dst, threshold);

    let mut applied = 0;
    let mut aborted_at = None;
    let mut warnings = Vec::new();
    for (index, (id, result)) in selected.iter().zip(&results).enumerate() {
        match result.closest {
            Some(position) => {
                host.set_uv_position(id, position)?;
                applied += 1;
            }
            None => {
                warn!(%id, index, threshold, "no uv within threshold, abandoning batch");
                host.warning(NO_MATCH_WARNING);
                warnings.push(NO_MATCH_WARNING.to_string());
                aborted_at = Some(index);
                break;
            }
        }
    }

    info!(
        applied,
        targets = results.len(),
        aborted = aborted_at.is_some(),
        "direct uv snap finished"
    );
    Ok(SnapOutcome {
        mode: SnapMode::Direct,
        threshold,
        results,
        applied,
        aborted_at,
        warnings,
    })
}

/// Snap the most recently selected shell onto the other selected shells.
///
/// Selection-order tracking is switched on for the duration of the call if
/// it was off. The selection is split into shells in pick order; the last
/// shell is the target and the union of the others is the reference set.
/// With a single shell the reference set is empty and nothing moves. UVs
/// without a match are skipped without a warning.
#[instrument(skip(host))]
pub fn overlap_uv_island<H: SceneHost + ?Sized>(
    host: &mut H,
    threshold: f64,
) -> Result<SnapOutcome, SnapError> {
    check_threshold(threshold)?;

    let mut host = SelectionOrderGuard::acquire(host);

    let ordered = host.ordered_selection()?;
    let uvs = host.to_uv_components(&ordered)?;
    let mut groups = group_by_shell(&*host, &uvs)?;
    let target = groups.pop().ok_or(SnapError::EmptySelection)?;
    let search: Vec<ComponentId> = groups.into_iter().flat_map(|g| g.members).collect();
    debug!(
        target_shell = target.shell.0,
        targets = target.members.len(),
        search = search.len(),
        "collected grouped-mode uv sets"
    );

    let src = collect_uv_coordinates(&*host, &search)?;
    let dst = collect_uv_coordinates(&*host, &target.members)?;
    let results = compare_uv_position(&src, &dst, threshold);

    let mut applied = 0;
    for (id, result) in target.members.iter().zip(&results) {
        if let Some(position) = result.closest {
            host.set_uv_position(id, position)?;
            applied += 1;
        }
    }

    info!(
        applied,
        skipped = results.len() - applied,
        "grouped uv snap finished"
    );
    Ok(SnapOutcome {
        mode: SnapMode::Grouped,
        threshold,
        results,
        applied,
        aborted_at: None,
        warnings: Vec::new(),
    })
}

fn check_threshold(threshold: f64) -> Result<(), SnapError> {
    if threshold.is_finite() && threshold >= 0.0 {
        Ok(())
    } else {
        Err(SnapError::InvalidThreshold { value: threshold })
    }
}
