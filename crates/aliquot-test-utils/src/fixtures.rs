//! Reusable labware and liquid-state fixtures.
//!
//! Geometry follows the common SBS footprints closely enough for the
//! multichannel resolver to behave as it does on real catalog labware:
//!
//! - [`plate_96`]: 8 × 12 circular wells, 9 mm pitch.
//! - [`plate_384`]: 16 × 24 circular wells, 4.5 mm pitch.
//! - [`reservoir_12`]: 12 tall rectangular troughs in one row, with the
//!   `centerMultichannelOnWells` quirk. [`reservoir_12_plain`] is the
//!   same geometry without it.
//!
//! Wells are declared column-major (`A1, B1, …, H1, A2, …`), the order
//! the catalog uses.

use std::sync::Arc;

use aliquot_contents::{RobotState, Timeline};
use aliquot_core::{IngredGroupId, LabwareLiquidState, LiquidVolume, WellLiquidState, WellName};
use aliquot_labware::{
    LabwareDefinition, LabwareDefinitionBuilder, LabwareEntities, Quirk, WellGeometry,
};

/// Row letters, `A` first.
pub const ROWS: [char; 16] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
];

/// A regular grid of circular wells.
#[derive(Clone, Copy, Debug)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
    /// Center of `A1`.
    pub x0: f64,
    pub y0: f64,
    /// Center-to-center spacing in both axes.
    pub pitch: f64,
    pub diameter: f64,
    pub volume: f64,
}

impl GridLayout {
    /// Center of the well at zero-based `(row, col)`. Rows grow toward -Y.
    pub fn center(&self, row: usize, col: usize) -> (f64, f64) {
        (
            self.x0 + self.pitch * col as f64,
            self.y0 - self.pitch * row as f64,
        )
    }
}

/// Builder pre-populated with every well of `layout`, column-major.
pub fn circular_grid(
    namespace: &str,
    load_name: &str,
    layout: GridLayout,
) -> LabwareDefinitionBuilder {
    let mut builder = LabwareDefinition::builder(namespace, load_name);
    for col in 0..layout.cols {
        for (row, letter) in ROWS.iter().take(layout.rows).enumerate() {
            let (x, y) = layout.center(row, col);
            builder = builder.well(
                format!("{letter}{}", col + 1),
                WellGeometry::circular(x, y, layout.diameter)
                    .with_volume(layout.volume)
                    .with_depth(3.5, 10.8),
            );
        }
    }
    builder
}

pub const PLATE_96: GridLayout = GridLayout {
    rows: 8,
    cols: 12,
    x0: 14.38,
    y0: 74.24,
    pitch: 9.0,
    diameter: 6.4,
    volume: 360.0,
};

pub const PLATE_384: GridLayout = GridLayout {
    rows: 16,
    cols: 24,
    x0: 12.12,
    y0: 76.49,
    pitch: 4.5,
    diameter: 3.1,
    volume: 112.0,
};

pub fn plate_96() -> LabwareDefinition {
    circular_grid("fixture", "plate_96", PLATE_96)
        .build()
        .expect("plate_96 fixture is valid")
}

pub fn plate_384() -> LabwareDefinition {
    circular_grid("fixture", "plate_384", PLATE_384)
        .build()
        .expect("plate_384 fixture is valid")
}

fn reservoir_builder(load_name: &str) -> LabwareDefinitionBuilder {
    LabwareDefinition::builder("fixture", load_name).wells((0..12).map(|col| {
        (
            format!("A{}", col + 1),
            WellGeometry::rectangular(13.94 + 9.03 * col as f64, 42.74, 4.1, 35.6)
                .with_volume(22_000.0)
                .with_depth(2.0, 40.0),
        )
    }))
}

pub fn reservoir_12() -> LabwareDefinition {
    reservoir_builder("reservoir_12")
        .quirk(Quirk::CenterMultichannelOnWells)
        .build()
        .expect("reservoir_12 fixture is valid")
}

pub fn reservoir_12_plain() -> LabwareDefinition {
    reservoir_builder("reservoir_12_plain")
        .build()
        .expect("reservoir_12_plain fixture is valid")
}

/// A deck with `plate` (96-well) and `trough` (12-well reservoir).
pub fn deck_entities() -> LabwareEntities {
    [
        ("plate", Arc::new(plate_96())),
        ("trough", Arc::new(reservoir_12())),
    ]
    .into_iter()
    .collect()
}

/// Well names `["A1", "B1", …]` for quick comparisons.
pub fn names(wells: &[&str]) -> Vec<WellName> {
    wells.iter().map(|&w| WellName::from(w)).collect()
}

/// One well's liquid from `(group, volume)` pairs, in order.
pub fn well_liquid(groups: &[(&str, f64)]) -> WellLiquidState {
    groups
        .iter()
        .map(|&(id, v)| (IngredGroupId::from(id), LiquidVolume::new(v)))
        .collect()
}

/// One labware's liquid from `(well, [(group, volume)])` entries.
pub fn labware_liquid(wells: &[(&str, &[(&str, f64)])]) -> LabwareLiquidState {
    wells
        .iter()
        .map(|&(well, groups)| (WellName::from(well), well_liquid(groups)))
        .collect()
}

/// A timeline on the fixture deck where every snapshot sets one volume of
/// `water` in `plate`/`A1`.
pub fn water_timeline(volumes: &[f64]) -> Timeline {
    let initial = RobotState::new()
        .with_labware("plate", "1")
        .with_labware("trough", "2");
    let snapshots = volumes
        .iter()
        .map(|&v| initial.clone().with_liquid("plate", "A1", "water", v))
        .collect();
    Timeline::from_snapshots(initial, snapshots)
}
