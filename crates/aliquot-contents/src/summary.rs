//! Per-well content summaries.

use indexmap::IndexMap;

use aliquot_core::{IngredGroupId, LabwareId, WellLiquidState, WellName};

/// What one well holds, with every non-positive volume already removed.
#[derive(Clone, Debug, PartialEq)]
pub struct WellContentsSummary {
    /// The well this summary describes.
    pub well_name: WellName,
    /// Ingredient groups present, in the liquid state's iteration order.
    pub group_ids: Vec<IngredGroupId>,
    /// Ingredient group → volume, positive volumes only.
    pub ingreds: WellLiquidState,
}

/// Contents of one well of a labware.
///
/// `Filled` always holds at least one ingredient group with a positive
/// volume; a well with no liquid at all is `Empty`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum WellContents {
    /// No liquid.
    #[default]
    Empty,
    /// At least one ingredient group with a positive volume.
    Filled(WellContentsSummary),
}

impl WellContents {
    /// `true` for [`WellContents::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The summary, if the well holds liquid.
    pub fn summary(&self) -> Option<&WellContentsSummary> {
        match self {
            Self::Empty => None,
            Self::Filled(s) => Some(s),
        }
    }

    /// Ingredient groups present; empty for an empty well.
    pub fn group_ids(&self) -> &[IngredGroupId] {
        match self {
            Self::Empty => &[],
            Self::Filled(s) => &s.group_ids,
        }
    }

    /// Volume of one ingredient group, if present.
    pub fn volume_of(&self, group: &str) -> Option<f64> {
        self.summary()
            .and_then(|s| s.ingreds.get(group))
            .map(|v| v.volume)
    }
}

/// Well → contents for one labware, in the definition's well order.
pub type ContentsByWell = IndexMap<WellName, WellContents>;

/// Labware → per-well contents for one point in the timeline.
pub type WellContentsByLabware = IndexMap<LabwareId, ContentsByWell>;
