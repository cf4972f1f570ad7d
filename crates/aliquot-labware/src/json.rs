//! Deserialization from the labware catalog's JSON shape.
//!
//! The catalog stores wells as a JSON object keyed by well name; the
//! object's key order is the well enumeration order, so it is read
//! straight into an `IndexMap` rather than through an intermediate map.
//! Fields this workspace has no use for (`ordering`, `metadata`,
//! `cornerOffsetFromSlot`, ...) are ignored.

use indexmap::IndexMap;
use serde::Deserialize;

use aliquot_core::WellName;

use crate::definition::LabwareDefinition;
use crate::error::DefinitionError;
use crate::quirk::Quirk;
use crate::well::{WellGeometry, WellShape};

#[derive(Deserialize)]
pub(crate) struct RawDefinition {
    #[serde(default)]
    namespace: String,
    parameters: RawParameters,
    wells: IndexMap<WellName, RawWell>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParameters {
    load_name: String,
    #[serde(default)]
    quirks: Vec<Quirk>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWell {
    x: f64,
    y: f64,
    #[serde(default)]
    z: f64,
    #[serde(default)]
    depth: f64,
    #[serde(default)]
    total_liquid_volume: f64,
    #[serde(flatten)]
    shape: RawShape,
}

#[derive(Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase", rename_all_fields = "camelCase")]
enum RawShape {
    Circular { diameter: f64 },
    Rectangular { x_dimension: f64, y_dimension: f64 },
}

impl From<RawWell> for WellGeometry {
    fn from(w: RawWell) -> Self {
        let shape = match w.shape {
            RawShape::Circular { diameter } => WellShape::Circular { diameter },
            RawShape::Rectangular {
                x_dimension,
                y_dimension,
            } => WellShape::Rectangular {
                x_dimension,
                y_dimension,
            },
        };
        WellGeometry {
            x: w.x,
            y: w.y,
            z: w.z,
            depth: w.depth,
            total_liquid_volume: w.total_liquid_volume,
            shape,
        }
    }
}

impl TryFrom<RawDefinition> for LabwareDefinition {
    type Error = DefinitionError;

    fn try_from(raw: RawDefinition) -> Result<Self, Self::Error> {
        let mut builder = LabwareDefinition::builder(raw.namespace, raw.parameters.load_name)
            .wells(raw.wells.into_iter().map(|(n, w)| (n, WellGeometry::from(w))));
        for quirk in raw.parameters.quirks {
            builder = builder.quirk(quirk);
        }
        builder.build()
    }
}
