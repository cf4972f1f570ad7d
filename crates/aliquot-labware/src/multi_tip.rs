//! Which wells each channel of a multichannel pipette lands in.
//!
//! A multichannel pipette's tips sit in a single column along Y at a fixed
//! pitch. Given the well under the first tip, each remaining tip is placed
//! one pitch further in -Y (toward higher row letters) and resolved to the
//! first well whose footprint contains it.
//!
//! Labware carrying [`Quirk::CenterMultichannelOnWells`] (single-row
//! reservoirs) instead center the whole tip span on the reference well:
//! every tip position shifts +Y by half the span.
//!
//! The result is all-or-nothing. A pipette cannot aspirate with some tips
//! over empty deck, so any tip that misses makes the whole query `None`.

use smallvec::SmallVec;

use aliquot_core::{Diagnostic, Diagnostics, WellName};

use crate::definition::LabwareDefinition;
use crate::error::ConfigError;
use crate::quirk::Quirk;

/// Channels on a standard multichannel pipette.
pub const CHANNEL_COUNT_8: usize = 8;

/// Distance between adjacent tips of a standard multichannel pipette, in mm.
pub const CHANNEL_PITCH_MM: f64 = 9.0;

/// Wells under each tip, channel 0 first.
pub type TipWells = SmallVec<[WellName; CHANNEL_COUNT_8]>;

/// Physical channel layout of a multichannel pipette.
///
/// [`Default`] is the standard 8-channel, 9 mm pitch head.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MultiChannelGeometry {
    channel_count: usize,
    pitch_mm: f64,
}

impl MultiChannelGeometry {
    /// A validated channel layout.
    pub fn new(channel_count: usize, pitch_mm: f64) -> Result<Self, ConfigError> {
        if channel_count == 0 {
            return Err(ConfigError::ZeroChannels);
        }
        if !pitch_mm.is_finite() || pitch_mm <= 0.0 {
            return Err(ConfigError::InvalidPitch { value: pitch_mm });
        }
        Ok(Self {
            channel_count,
            pitch_mm,
        })
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    /// Distance between adjacent tips in mm.
    pub fn pitch_mm(&self) -> f64 {
        self.pitch_mm
    }

    /// Distance from the first to the last tip in mm.
    pub fn tip_span_mm(&self) -> f64 {
        self.pitch_mm * (self.channel_count - 1) as f64
    }

    /// Y position of every tip when the first tip's nominal position is
    /// `reference_y`, channel 0 first.
    ///
    /// With `centered`, every position is shifted +Y by half the tip span.
    pub fn tip_y_positions(
        &self,
        reference_y: f64,
        centered: bool,
    ) -> SmallVec<[f64; CHANNEL_COUNT_8]> {
        let shift = if centered {
            self.tip_span_mm() / 2.0
        } else {
            0.0
        };
        (0..self.channel_count)
            .map(|tip| reference_y - tip as f64 * self.pitch_mm + shift)
            .collect()
    }
}

impl Default for MultiChannelGeometry {
    fn default() -> Self {
        Self {
            channel_count: CHANNEL_COUNT_8,
            pitch_mm: CHANNEL_PITCH_MM,
        }
    }
}

/// Wells under each tip of a standard 8-channel pipette whose first tip
/// targets `reference_well`.
///
/// Returns `None` if `reference_well` is not in the definition (reported
/// through `diagnostics`) or if any tip lands outside every well.
///
/// # Examples
///
/// ```
/// use aliquot_core::NullDiagnostics;
/// use aliquot_labware::{wells_under_multi_channel_tip, LabwareDefinition, WellGeometry};
///
/// let mut builder = LabwareDefinition::builder("example", "column_8");
/// for (i, row) in ["A", "B", "C", "D", "E", "F", "G", "H"].iter().enumerate() {
///     let y = 74.24 - 9.0 * i as f64;
///     builder = builder.well(format!("{row}1"), WellGeometry::circular(14.38, y, 6.4));
/// }
/// let def = builder.build().unwrap();
///
/// let wells = wells_under_multi_channel_tip(&def, "A1", &NullDiagnostics).unwrap();
/// assert_eq!(wells.len(), 8);
/// assert_eq!(wells[7], "H1");
/// ```
pub fn wells_under_multi_channel_tip(
    def: &LabwareDefinition,
    reference_well: &str,
    diagnostics: &dyn Diagnostics,
) -> Option<TipWells> {
    wells_under_tips(
        def,
        reference_well,
        &MultiChannelGeometry::default(),
        diagnostics,
    )
}

/// Wells under each tip of an arbitrary channel layout.
///
/// Same contract as [`wells_under_multi_channel_tip`]: either one well per
/// channel, channel 0 first, or `None`.
pub fn wells_under_tips(
    def: &LabwareDefinition,
    reference_well: &str,
    geometry: &MultiChannelGeometry,
    diagnostics: &dyn Diagnostics,
) -> Option<TipWells> {
    let Some(reference) = def.well(reference_well) else {
        diagnostics.report(&Diagnostic::UnknownWell {
            labware: def.display_name(),
            well: WellName::from(reference_well),
            operation: "get wells under multichannel tip",
        });
        return None;
    };

    let centered = def.has_quirk(&Quirk::CenterMultichannelOnWells);
    geometry
        .tip_y_positions(reference.y, centered)
        .into_iter()
        .map(|tip_y| def.well_at(reference.x, tip_y).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::well::WellGeometry;
    use aliquot_core::NullDiagnostics;

    const ROWS: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

    fn plate_96() -> LabwareDefinition {
        let mut b = LabwareDefinition::builder("test", "plate_96");
        for col in 0..12 {
            for (r, row) in ROWS.iter().enumerate() {
                let x = 14.38 + 9.0 * col as f64;
                let y = 74.24 - 9.0 * r as f64;
                b = b.well(format!("{row}{}", col + 1), WellGeometry::circular(x, y, 6.4));
            }
        }
        b.build().unwrap()
    }

    #[test]
    fn default_geometry_is_eight_by_nine() {
        let g = MultiChannelGeometry::default();
        assert_eq!(g.channel_count(), 8);
        assert_eq!(g.pitch_mm(), 9.0);
        assert_eq!(g.tip_span_mm(), 63.0);
    }

    #[test]
    fn invalid_geometry_rejected() {
        assert_eq!(
            MultiChannelGeometry::new(0, 9.0),
            Err(ConfigError::ZeroChannels)
        );
        assert!(matches!(
            MultiChannelGeometry::new(8, 0.0),
            Err(ConfigError::InvalidPitch { .. })
        ));
        assert!(matches!(
            MultiChannelGeometry::new(8, f64::INFINITY),
            Err(ConfigError::InvalidPitch { .. })
        ));
    }

    #[test]
    fn tip_positions_step_toward_negative_y() {
        let ys = MultiChannelGeometry::default().tip_y_positions(100.0, false);
        assert_eq!(
            ys.as_slice(),
            &[100.0, 91.0, 82.0, 73.0, 64.0, 55.0, 46.0, 37.0]
        );
    }

    #[test]
    fn centered_positions_shift_by_half_span() {
        let plain = MultiChannelGeometry::default().tip_y_positions(100.0, false);
        let centered = MultiChannelGeometry::default().tip_y_positions(100.0, true);
        for (p, c) in plain.iter().zip(centered.iter()) {
            assert_eq!(c - p, 31.5);
        }
    }

    #[test]
    fn column_one_from_a1() {
        let wells = wells_under_multi_channel_tip(&plate_96(), "A1", &NullDiagnostics).unwrap();
        let names: Vec<&str> = wells.iter().map(|w| w.as_str()).collect();
        assert_eq!(names, vec!["A1", "B1", "C1", "D1", "E1", "F1", "G1", "H1"]);
    }

    #[test]
    fn column_twelve_from_a12() {
        let wells = wells_under_multi_channel_tip(&plate_96(), "A12", &NullDiagnostics).unwrap();
        assert_eq!(wells[0], "A12");
        assert_eq!(wells[7], "H12");
    }

    #[test]
    fn starting_below_row_a_runs_off_the_plate() {
        assert_eq!(
            wells_under_multi_channel_tip(&plate_96(), "B1", &NullDiagnostics),
            None
        );
    }

    #[test]
    fn unknown_reference_well_is_none() {
        assert_eq!(
            wells_under_multi_channel_tip(&plate_96(), "Z99", &NullDiagnostics),
            None
        );
    }

    #[test]
    fn shorter_head_resolves_fewer_wells() {
        let g = MultiChannelGeometry::new(4, 9.0).unwrap();
        let wells = wells_under_tips(&plate_96(), "E1", &g, &NullDiagnostics).unwrap();
        let names: Vec<&str> = wells.iter().map(|w| w.as_str()).collect();
        assert_eq!(names, vec!["E1", "F1", "G1", "H1"]);
    }
}
