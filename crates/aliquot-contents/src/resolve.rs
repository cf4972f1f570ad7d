//! Resolve raw liquid state into per-well summaries.

use aliquot_core::liquid::well_contents;
use aliquot_core::{
    Diagnostic, Diagnostics, LabwareId, LabwareLiquidState, LiquidState, WellLiquidState, WellName,
};
use aliquot_labware::{LabwareDefinition, LabwareEntities};

use crate::summary::{ContentsByWell, WellContents, WellContentsByLabware, WellContentsSummary};

/// Summarize one labware's liquid state against its definition.
///
/// The definition is the source of truth for which wells exist: the
/// result has exactly one entry per well of `def`, in `def`'s order.
/// Liquid-state entries for wells the definition does not declare are
/// ignored. `liquid` may be `None` when the labware has never held
/// liquid, in which case every well is [`WellContents::Empty`].
pub fn resolve_well_contents(
    liquid: Option<&LabwareLiquidState>,
    def: &LabwareDefinition,
) -> ContentsByWell {
    def.all_well_names()
        .map(|well| {
            let contents = liquid
                .and_then(|l| l.get(well))
                .map_or(WellContents::Empty, |w| contents_for_well(w, well));
            (well.clone(), contents)
        })
        .collect()
}

fn contents_for_well(liquid: &WellLiquidState, well: &WellName) -> WellContents {
    let ingreds: WellLiquidState = well_contents(liquid)
        .map(|(id, v)| (id.clone(), *v))
        .collect();
    if ingreds.is_empty() {
        return WellContents::Empty;
    }
    WellContents::Filled(WellContentsSummary {
        well_name: well.clone(),
        group_ids: ingreds.keys().cloned().collect(),
        ingreds,
    })
}

/// Summarize every labware that has liquid state in `liquid_state`.
///
/// Labware without a definition in `entities` is skipped and reported
/// as [`Diagnostic::MissingLabwareGeometry`].
pub fn resolve_labware_contents(
    liquid_state: &LiquidState,
    entities: &LabwareEntities,
    diagnostics: &dyn Diagnostics,
) -> WellContentsByLabware {
    resolve_labware_ids(liquid_state.keys(), liquid_state, entities, diagnostics)
}

/// Summarize each labware in `labware_ids`, reading its liquid from
/// `liquid_state` (absent liquid means every well is empty).
pub(crate) fn resolve_labware_ids<'a>(
    labware_ids: impl Iterator<Item = &'a LabwareId>,
    liquid_state: &LiquidState,
    entities: &LabwareEntities,
    diagnostics: &dyn Diagnostics,
) -> WellContentsByLabware {
    labware_ids
        .filter_map(|labware_id| {
            let Some(def) = entities.get(labware_id.as_str()) else {
                diagnostics.report(&Diagnostic::MissingLabwareGeometry {
                    labware_id: labware_id.clone(),
                });
                return None;
            };
            let contents = resolve_well_contents(liquid_state.get(labware_id), def);
            Some((labware_id.clone(), contents))
        })
        .collect()
}
