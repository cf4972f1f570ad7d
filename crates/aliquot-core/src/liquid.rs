//! Per-well liquid state.
//!
//! One snapshot of the deck's liquid is a three-level, insertion-ordered
//! mapping: labware id → well name → ingredient group → [`LiquidVolume`].
//! Iteration order of every level is meaningful: it is the order in
//! which downstream summaries list ingredient groups, and the order that
//! decides tie-breaks in selection queries.
//!
//! An entry whose volume is not strictly positive carries no liquid.
//! [`well_contents`] is the single place where that rule is applied;
//! every consumer goes through it so the rule cannot drift.

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::id::{IngredGroupId, LabwareId, WellName};

/// Volume of one ingredient group held in one well, in microliters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LiquidVolume {
    /// Volume in µL. Values `<= 0` (and NaN) mean "no content".
    pub volume: f64,
}

impl LiquidVolume {
    /// Create a volume entry.
    pub fn new(volume: f64) -> Self {
        Self { volume }
    }

    /// `true` if this entry represents actual liquid.
    ///
    /// NaN compares false, so a corrupt volume is treated as empty.
    pub fn has_content(&self) -> bool {
        self.volume > 0.0
    }
}

impl From<f64> for LiquidVolume {
    fn from(volume: f64) -> Self {
        Self { volume }
    }
}

/// Ingredient group → volume for a single well.
pub type WellLiquidState = IndexMap<IngredGroupId, LiquidVolume>;

/// Well → contents for a single labware.
pub type LabwareLiquidState = IndexMap<WellName, WellLiquidState>;

/// Labware → wells for the whole deck at one point in time.
pub type LiquidState = IndexMap<LabwareId, LabwareLiquidState>;

/// Iterate the ingredient groups of a well that actually hold liquid,
/// in source order.
pub fn well_contents(
    well: &WellLiquidState,
) -> impl Iterator<Item = (&IngredGroupId, &LiquidVolume)> + '_ {
    well.iter().filter(|(_, v)| v.has_content())
}

/// `true` if any ingredient group in the well holds liquid.
pub fn well_has_content(well: &WellLiquidState) -> bool {
    well_contents(well).next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well(entries: &[(&str, f64)]) -> WellLiquidState {
        entries
            .iter()
            .map(|&(id, v)| (IngredGroupId::from(id), LiquidVolume::new(v)))
            .collect()
    }

    #[test]
    fn zero_negative_and_nan_volumes_are_empty() {
        assert!(!LiquidVolume::new(0.0).has_content());
        assert!(!LiquidVolume::new(-1.0).has_content());
        assert!(!LiquidVolume::new(f64::NAN).has_content());
        assert!(LiquidVolume::new(0.001).has_content());
    }

    #[test]
    fn well_contents_keeps_source_order() {
        let w = well(&[("water", 10.0), ("dye", 0.0), ("buffer", 5.0)]);
        let ids: Vec<&str> = well_contents(&w).map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["water", "buffer"]);
    }

    proptest::proptest! {
        #[test]
        fn well_contents_is_an_ordered_positive_subset(
            volumes in proptest::collection::vec(-50.0f64..50.0, 0..8),
        ) {
            let w: WellLiquidState = volumes
                .iter()
                .enumerate()
                .map(|(i, &v)| (IngredGroupId::from(format!("g{i}")), LiquidVolume::new(v)))
                .collect();
            let kept: Vec<&IngredGroupId> = well_contents(&w).map(|(id, _)| id).collect();
            let expected: Vec<&IngredGroupId> = w
                .iter()
                .filter(|(_, v)| v.volume > 0.0)
                .map(|(id, _)| id)
                .collect();
            proptest::prop_assert_eq!(kept, expected);
            proptest::prop_assert_eq!(well_has_content(&w), volumes.iter().any(|&v| v > 0.0));
        }
    }

    #[test]
    fn well_has_content_ignores_empty_groups() {
        assert!(!well_has_content(&well(&[("water", 0.0)])));
        assert!(!well_has_content(&WellLiquidState::new()));
        assert!(well_has_content(&well(&[("water", 0.0), ("dye", 1.0)])));
    }
}
