//! Project well contents over a robot-state timeline.
//!
//! Three views, all built from [`resolve_well_contents`](crate::resolve_well_contents):
//!
//! - every step, for scrubbing through the protocol
//! - the last valid state, the steady-state view
//! - the state at the active item
//!
//! The active-item view indexes into `[initial, ..snapshots, last_valid]`.
//! A step at position `i` of the ordered step list maps to index `i`,
//! clamped so it never points past the last valid state.

use aliquot_core::{Diagnostic, Diagnostics, StepId};
use aliquot_labware::LabwareEntities;

use crate::error::ProjectionError;
use crate::resolve::{resolve_labware_contents, resolve_labware_ids};
use crate::summary::WellContentsByLabware;
use crate::timeline::{ActiveItem, RobotState, TerminalId, Timeline};

/// Well contents at every point of the timeline: the initial state
/// first, then one entry per committed snapshot.
///
/// The result always has `timeline.len() + 1` entries.
pub fn all_well_contents_for_steps(
    timeline: &Timeline,
    entities: &LabwareEntities,
    diagnostics: &dyn Diagnostics,
) -> Vec<WellContentsByLabware> {
    timeline
        .states()
        .map(|state| resolve_labware_contents(&state.liquid_state, entities, diagnostics))
        .collect()
}

/// Well contents of every labware on the deck in the last valid state.
///
/// Unlike the per-step views this enumerates the labware placed on the
/// deck, so a labware that has never held liquid still appears with
/// every well empty.
pub fn last_valid_well_contents(
    timeline: &Timeline,
    entities: &LabwareEntities,
    diagnostics: &dyn Diagnostics,
) -> WellContentsByLabware {
    let state = timeline.last_valid();
    resolve_labware_ids(
        state.labware.keys(),
        &state.liquid_state,
        entities,
        diagnostics,
    )
}

/// Index into `[initial, ..snapshots, last_valid]` for the active item.
///
/// - `Terminal(Start)` → 0
/// - `Terminal(End)` → the last valid index
/// - `Step(id)` → position of `id` in `ordered_step_ids`, clamped to the
///   last valid index
///
/// A step id that is not in `ordered_step_ids` is an error; no fallback
/// index is substituted.
pub fn timeline_index_for_active_item(
    active: &ActiveItem,
    ordered_step_ids: &[StepId],
    timeline: &Timeline,
) -> Result<usize, ProjectionError> {
    let last_valid_index = timeline.len() + 1;
    match active {
        ActiveItem::Terminal(TerminalId::Start) => Ok(0),
        ActiveItem::Terminal(TerminalId::End) => Ok(last_valid_index),
        ActiveItem::Step(step_id) => ordered_step_ids
            .iter()
            .position(|id| id == step_id)
            .map(|i| i.min(last_valid_index))
            .ok_or_else(|| ProjectionError::UnknownActiveStep {
                step_id: step_id.clone(),
            }),
    }
}

/// Well contents at the active item.
///
/// An unknown step is reported as [`Diagnostic::UnknownActiveStep`] and
/// returned as [`ProjectionError::UnknownActiveStep`].
pub fn well_contents_for_active_item(
    active: &ActiveItem,
    ordered_step_ids: &[StepId],
    timeline: &Timeline,
    entities: &LabwareEntities,
    diagnostics: &dyn Diagnostics,
) -> Result<WellContentsByLabware, ProjectionError> {
    let index = timeline_index_for_active_item(active, ordered_step_ids, timeline).inspect_err(
        |err| {
            let ProjectionError::UnknownActiveStep { step_id } = err;
            diagnostics.report(&Diagnostic::UnknownActiveStep {
                step_id: step_id.clone(),
            });
        },
    )?;
    let state = state_at(timeline, index);
    Ok(resolve_labware_contents(
        &state.liquid_state,
        entities,
        diagnostics,
    ))
}

/// `[initial, ..snapshots, last_valid][index]`, for an index already
/// clamped to the last valid index.
fn state_at(timeline: &Timeline, index: usize) -> &RobotState {
    match index {
        0 => timeline.initial(),
        i if i <= timeline.len() => &timeline.snapshots()[i - 1],
        _ => timeline.last_valid(),
    }
}
