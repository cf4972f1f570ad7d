//! Aggregate queries over the wells selected in one labware.
//!
//! A selection is an ordered set of well names. Its first element is the
//! reference well for the common-ingredient comparison; every other
//! selected well is checked against it.

use indexmap::IndexSet;

use aliquot_core::liquid::well_contents;
use aliquot_core::{
    Diagnostic, Diagnostics, IngredGroupId, LabwareId, LabwareLiquidState, LiquidState, WellName,
};
use aliquot_labware::LabwareEntities;

/// Wells selected in the active labware, in selection order.
pub type SelectedWells = IndexSet<WellName>;

/// The single ingredient group and volume shared by every selected well.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommonWellValues {
    /// The one ingredient group in every selected well, if there is one.
    pub ingredient_id: Option<IngredGroupId>,
    /// Its volume, if the ingredient is common and every well holds the
    /// same amount.
    pub volume: Option<f64>,
}

impl CommonWellValues {
    const NONE: Self = Self {
        ingredient_id: None,
        volume: None,
    };
}

/// Smallest capacity among the selected wells, from the labware
/// definition (not from current liquid).
///
/// An empty selection considers every well of the labware. With no
/// labware selected, or none of the selected wells in the labware, the
/// result is `f64::INFINITY` and a diagnostic is reported.
pub fn selected_wells_max_volume(
    selected: &SelectedWells,
    selected_labware: Option<&LabwareId>,
    entities: &LabwareEntities,
    diagnostics: &dyn Diagnostics,
) -> f64 {
    let Some(labware_id) = selected_labware else {
        diagnostics.report(&Diagnostic::NoLabwareSelected {
            query: "get max volume",
        });
        return f64::INFINITY;
    };
    let Some(def) = entities.get(labware_id.as_str()) else {
        diagnostics.report(&Diagnostic::MissingLabwareGeometry {
            labware_id: labware_id.clone(),
        });
        return f64::INFINITY;
    };

    let min = if selected.is_empty() {
        def.max_volumes().map(|(_, v)| v).reduce(f64::min)
    } else {
        selected
            .iter()
            .filter_map(|well| def.well(well.as_str()))
            .map(|w| w.max_volume())
            .reduce(f64::min)
    };

    min.unwrap_or_else(|| {
        diagnostics.report(&Diagnostic::EmptyVolumeSet {
            labware_id: labware_id.clone(),
        });
        f64::INFINITY
    })
}

/// The ingredient group and volume shared by every selected well.
///
/// Reads the current liquid state, with non-positive volumes treated as
/// absent. `ingredient_id` is set only if every selected well holds
/// exactly one ingredient group and it is the same group as in the first
/// selected well. `volume` is additionally set only if every selected well
/// holds exactly the same volume of it.
///
/// With no labware or no wells selected, both fields are `None` and a
/// diagnostic is reported.
///
/// # Examples
///
/// ```
/// use aliquot_contents::{selected_wells_common_values, RobotState, SelectedWells};
/// use aliquot_core::{LabwareId, NullDiagnostics, WellName};
///
/// let state = RobotState::new()
///     .with_liquid("plate", "A1", "water", 50.0)
///     .with_liquid("plate", "A2", "water", 30.0);
/// let selected: SelectedWells = ["A1", "A2"].into_iter().map(WellName::from).collect();
/// let common = selected_wells_common_values(
///     &selected,
///     Some(&LabwareId::from("plate")),
///     &state.liquid_state,
///     &NullDiagnostics,
/// );
/// assert_eq!(common.ingredient_id.as_ref().map(|i| i.as_str()), Some("water"));
/// assert_eq!(common.volume, None);
/// ```
pub fn selected_wells_common_values(
    selected: &SelectedWells,
    selected_labware: Option<&LabwareId>,
    liquid_state: &LiquidState,
    diagnostics: &dyn Diagnostics,
) -> CommonWellValues {
    let Some(labware_id) = selected_labware else {
        diagnostics.report(&Diagnostic::NoLabwareSelected {
            query: "get common well values",
        });
        return CommonWellValues::NONE;
    };
    let Some(reference) = selected.first() else {
        diagnostics.report(&Diagnostic::EmptySelection {
            query: "get common well values",
        });
        return CommonWellValues::NONE;
    };
    let Some(liquid) = liquid_state.get(labware_id) else {
        return CommonWellValues::NONE;
    };
    let Some((candidate, volume)) = sole_ingredient(liquid, reference) else {
        return CommonWellValues::NONE;
    };

    let mut same_volume = true;
    for well in selected {
        match sole_ingredient(liquid, well) {
            Some((id, v)) if id == candidate => same_volume &= v == volume,
            _ => return CommonWellValues::NONE,
        }
    }

    CommonWellValues {
        ingredient_id: Some(candidate.clone()),
        volume: same_volume.then_some(volume),
    }
}

/// Just the common ingredient of [`selected_wells_common_values`].
pub fn selected_wells_common_ingredient(
    selected: &SelectedWells,
    selected_labware: Option<&LabwareId>,
    liquid_state: &LiquidState,
    diagnostics: &dyn Diagnostics,
) -> Option<IngredGroupId> {
    selected_wells_common_values(selected, selected_labware, liquid_state, diagnostics)
        .ingredient_id
}

/// Just the common volume of [`selected_wells_common_values`].
pub fn selected_wells_common_volume(
    selected: &SelectedWells,
    selected_labware: Option<&LabwareId>,
    liquid_state: &LiquidState,
    diagnostics: &dyn Diagnostics,
) -> Option<f64> {
    selected_wells_common_values(selected, selected_labware, liquid_state, diagnostics).volume
}

/// The well's only ingredient group holding liquid, with its volume.
fn sole_ingredient<'a>(
    liquid: &'a LabwareLiquidState,
    well: &WellName,
) -> Option<(&'a IngredGroupId, f64)> {
    let mut groups = well_contents(liquid.get(well)?);
    let (id, v) = groups.next()?;
    if groups.next().is_some() {
        return None;
    }
    Some((id, v.volume))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::RobotState;
    use aliquot_core::NullDiagnostics;
    use aliquot_labware::{LabwareDefinition, WellGeometry};
    use std::sync::Arc;

    fn selection(wells: &[&str]) -> SelectedWells {
        wells.iter().map(|&w| WellName::from(w)).collect()
    }

    fn plate() -> Option<LabwareId> {
        Some(LabwareId::from("plate"))
    }

    fn common(wells: &[&str], state: &RobotState) -> CommonWellValues {
        selected_wells_common_values(
            &selection(wells),
            plate().as_ref(),
            &state.liquid_state,
            &NullDiagnostics,
        )
    }

    fn entities() -> LabwareEntities {
        let def = LabwareDefinition::builder("test", "mixed")
            .well("A1", WellGeometry::circular(10.0, 10.0, 3.0).with_volume(200.0))
            .well("A2", WellGeometry::circular(19.0, 10.0, 3.0).with_volume(150.7))
            .well("A3", WellGeometry::circular(28.0, 10.0, 3.0).with_volume(300.0))
            .build()
            .unwrap();
        [("plate", Arc::new(def))].into_iter().collect()
    }

    #[test]
    fn same_ingredient_same_volume() {
        let s = RobotState::new()
            .with_liquid("plate", "A1", "ingredX", 50.0)
            .with_liquid("plate", "A2", "ingredX", 50.0);
        assert_eq!(
            common(&["A1", "A2"], &s),
            CommonWellValues {
                ingredient_id: Some(IngredGroupId::from("ingredX")),
                volume: Some(50.0),
            }
        );
    }

    #[test]
    fn same_ingredient_different_volume() {
        let s = RobotState::new()
            .with_liquid("plate", "A1", "ingredX", 50.0)
            .with_liquid("plate", "A2", "ingredX", 30.0);
        assert_eq!(
            common(&["A1", "A2"], &s),
            CommonWellValues {
                ingredient_id: Some(IngredGroupId::from("ingredX")),
                volume: None,
            }
        );
    }

    #[test]
    fn different_ingredients_have_no_common_value() {
        let s = RobotState::new()
            .with_liquid("plate", "A1", "ingredX", 50.0)
            .with_liquid("plate", "A2", "ingredY", 50.0);
        assert_eq!(common(&["A1", "A2"], &s), CommonWellValues::default());
    }

    #[test]
    fn empty_or_mixed_selected_well_breaks_commonality() {
        let s = RobotState::new()
            .with_liquid("plate", "A1", "ingredX", 50.0)
            .with_liquid("plate", "A2", "ingredX", 50.0)
            .with_liquid("plate", "A2", "ingredY", 5.0);
        assert_eq!(common(&["A1", "A2"], &s), CommonWellValues::default());
        assert_eq!(common(&["A1", "A3"], &s), CommonWellValues::default());
    }

    #[test]
    fn zero_volume_groups_do_not_count() {
        let s = RobotState::new()
            .with_liquid("plate", "A1", "ingredX", 50.0)
            .with_liquid("plate", "A2", "ingredY", 0.0)
            .with_liquid("plate", "A2", "ingredX", 50.0);
        assert_eq!(
            common(&["A1", "A2"], &s).ingredient_id,
            Some(IngredGroupId::from("ingredX"))
        );
    }

    #[test]
    fn empty_selection_or_labware_is_none() {
        let s = RobotState::new().with_liquid("plate", "A1", "ingredX", 50.0);
        assert_eq!(common(&[], &s), CommonWellValues::default());
        let none = selected_wells_common_values(
            &selection(&["A1"]),
            None,
            &s.liquid_state,
            &NullDiagnostics,
        );
        assert_eq!(none, CommonWellValues::default());
        let dry = selected_wells_common_values(
            &selection(&["A1"]),
            Some(&LabwareId::from("other")),
            &s.liquid_state,
            &NullDiagnostics,
        );
        assert_eq!(dry, CommonWellValues::default());
    }

    #[test]
    fn convenience_projections_match() {
        let s = RobotState::new()
            .with_liquid("plate", "A1", "ingredX", 50.0)
            .with_liquid("plate", "A2", "ingredX", 30.0);
        let sel = selection(&["A1", "A2"]);
        let id = plate();
        assert_eq!(
            selected_wells_common_ingredient(&sel, id.as_ref(), &s.liquid_state, &NullDiagnostics),
            Some(IngredGroupId::from("ingredX"))
        );
        assert_eq!(
            selected_wells_common_volume(&sel, id.as_ref(), &s.liquid_state, &NullDiagnostics),
            None
        );
    }

    #[test]
    fn max_volume_over_selection() {
        let v = selected_wells_max_volume(
            &selection(&["A1", "A3"]),
            plate().as_ref(),
            &entities(),
            &NullDiagnostics,
        );
        assert_eq!(v, 200.0);
    }

    #[test]
    fn max_volume_with_empty_selection_uses_every_well() {
        let v = selected_wells_max_volume(
            &selection(&[]),
            plate().as_ref(),
            &entities(),
            &NullDiagnostics,
        );
        assert_eq!(v, 150.0);
    }

    #[test]
    fn max_volume_without_labware_is_unbounded() {
        let v = selected_wells_max_volume(&selection(&["A1"]), None, &entities(), &NullDiagnostics);
        assert_eq!(v, f64::INFINITY);
    }

    #[test]
    fn max_volume_ignores_wells_outside_labware() {
        let v = selected_wells_max_volume(
            &selection(&["A3", "Q7"]),
            plate().as_ref(),
            &entities(),
            &NullDiagnostics,
        );
        assert_eq!(v, 300.0);
        let none = selected_wells_max_volume(
            &selection(&["Q7"]),
            plate().as_ref(),
            &entities(),
            &NullDiagnostics,
        );
        assert_eq!(none, f64::INFINITY);
    }
}
