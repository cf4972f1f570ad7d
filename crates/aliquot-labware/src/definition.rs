//! Labware definitions: ordered wells plus quirk flags.

use indexmap::{IndexMap, IndexSet};

use aliquot_core::WellName;

use crate::error::DefinitionError;
use crate::quirk::Quirk;
use crate::well::WellGeometry;

/// Read-only geometry of one labware type.
///
/// Wells keep the order they were declared in. That order is the
/// enumeration order for every query in this workspace: well-content
/// summaries list wells in it, and point lookups return the first
/// matching well in it.
///
/// Construct with [`LabwareDefinition::builder`], which validates the
/// invariants (unique names, finite non-negative geometry).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "crate::json::RawDefinition"))]
pub struct LabwareDefinition {
    namespace: String,
    load_name: String,
    wells: IndexMap<WellName, WellGeometry>,
    quirks: IndexSet<Quirk>,
}

impl LabwareDefinition {
    /// Start building a definition identified by `namespace/load_name`.
    pub fn builder(
        namespace: impl Into<String>,
        load_name: impl Into<String>,
    ) -> LabwareDefinitionBuilder {
        LabwareDefinitionBuilder {
            namespace: namespace.into(),
            load_name: load_name.into(),
            wells: Vec::new(),
            quirks: IndexSet::new(),
        }
    }

    /// Catalog namespace (e.g. `"opentrons"`).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Catalog load name (e.g. `"corning_96_wellplate_360ul_flat"`).
    pub fn load_name(&self) -> &str {
        &self.load_name
    }

    /// `namespace/load_name`, used to name the labware in diagnostics.
    pub fn display_name(&self) -> String {
        format!("{}/{}", self.namespace, self.load_name)
    }

    /// All wells in declaration order.
    pub fn wells(&self) -> &IndexMap<WellName, WellGeometry> {
        &self.wells
    }

    /// Geometry of a single well.
    pub fn well(&self, name: &str) -> Option<&WellGeometry> {
        self.wells.get(name)
    }

    /// Number of wells.
    pub fn well_count(&self) -> usize {
        self.wells.len()
    }

    /// Well names in declaration order.
    pub fn all_well_names(&self) -> impl Iterator<Item = &WellName> + '_ {
        self.wells.keys()
    }

    /// Quirk flags, in declaration order.
    pub fn quirks(&self) -> &IndexSet<Quirk> {
        &self.quirks
    }

    /// `true` if the definition carries `quirk`.
    pub fn has_quirk(&self, quirk: &Quirk) -> bool {
        self.quirks.contains(quirk)
    }

    /// Per-well maximum capacity in µL, in declaration order.
    pub fn max_volumes(&self) -> impl Iterator<Item = (&WellName, f64)> + '_ {
        self.wells.iter().map(|(name, w)| (name, w.max_volume()))
    }

    /// The first well, in declaration order, containing the point `(x, y)`.
    ///
    /// Overlapping wells are resolved by declaration order alone.
    pub fn well_at(&self, x: f64, y: f64) -> Option<&WellName> {
        self.wells
            .iter()
            .find(|(_, w)| w.contains_point(x, y))
            .map(|(name, _)| name)
    }
}

/// Builder for [`LabwareDefinition`].
#[derive(Clone, Debug)]
pub struct LabwareDefinitionBuilder {
    namespace: String,
    load_name: String,
    wells: Vec<(WellName, WellGeometry)>,
    quirks: IndexSet<Quirk>,
}

impl LabwareDefinitionBuilder {
    /// Append a well. Declaration order is preserved.
    pub fn well(mut self, name: impl Into<WellName>, geometry: WellGeometry) -> Self {
        self.wells.push((name.into(), geometry));
        self
    }

    /// Append several wells in order.
    pub fn wells<N, I>(mut self, wells: I) -> Self
    where
        N: Into<WellName>,
        I: IntoIterator<Item = (N, WellGeometry)>,
    {
        self.wells
            .extend(wells.into_iter().map(|(n, g)| (n.into(), g)));
        self
    }

    /// Add a quirk flag. Repeats are ignored.
    pub fn quirk(mut self, quirk: impl Into<Quirk>) -> Self {
        self.quirks.insert(quirk.into());
        self
    }

    /// Validate and produce the definition.
    pub fn build(self) -> Result<LabwareDefinition, DefinitionError> {
        if self.wells.is_empty() {
            return Err(DefinitionError::NoWells);
        }
        let mut wells = IndexMap::with_capacity(self.wells.len());
        for (name, geometry) in self.wells {
            geometry.validate(&name)?;
            if wells.contains_key(&name) {
                return Err(DefinitionError::DuplicateWell { well: name });
            }
            wells.insert(name, geometry);
        }
        Ok(LabwareDefinition {
            namespace: self.namespace,
            load_name: self.load_name,
            wells,
            quirks: self.quirks,
        })
    }
}
