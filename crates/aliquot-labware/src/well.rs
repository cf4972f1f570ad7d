//! Per-well geometry and point containment.

use crate::error::DefinitionError;
use aliquot_core::WellName;

/// Cross-section of a well, seen from above.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WellShape {
    /// Round well.
    Circular {
        /// Diameter in mm.
        diameter: f64,
    },
    /// Axis-aligned rectangular well.
    Rectangular {
        /// Extent along X in mm, measured from the center.
        x_dimension: f64,
        /// Extent along Y in mm, measured from the center.
        y_dimension: f64,
    },
}

/// Geometry of one well, relative to the labware origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WellGeometry {
    /// Center X in mm.
    pub x: f64,
    /// Center Y in mm. Row A has the largest Y on standard plates.
    pub y: f64,
    /// Bottom Z in mm.
    pub z: f64,
    /// Depth in mm.
    pub depth: f64,
    /// Maximum liquid capacity in µL.
    pub total_liquid_volume: f64,
    /// Cross-section.
    pub shape: WellShape,
}

impl WellGeometry {
    /// A circular well centered at `(x, y)` with zero depth and capacity.
    pub fn circular(x: f64, y: f64, diameter: f64) -> Self {
        Self {
            x,
            y,
            z: 0.0,
            depth: 0.0,
            total_liquid_volume: 0.0,
            shape: WellShape::Circular { diameter },
        }
    }

    /// A rectangular well centered at `(x, y)` with zero depth and capacity.
    pub fn rectangular(x: f64, y: f64, x_dimension: f64, y_dimension: f64) -> Self {
        Self {
            x,
            y,
            z: 0.0,
            depth: 0.0,
            total_liquid_volume: 0.0,
            shape: WellShape::Rectangular {
                x_dimension,
                y_dimension,
            },
        }
    }

    /// Set the well's capacity in µL.
    pub fn with_volume(mut self, total_liquid_volume: f64) -> Self {
        self.total_liquid_volume = total_liquid_volume;
        self
    }

    /// Set the well's bottom Z and depth in mm.
    pub fn with_depth(mut self, z: f64, depth: f64) -> Self {
        self.z = z;
        self.depth = depth;
        self
    }

    /// `true` if the point `(x, y)` lies within this well.
    ///
    /// Circular wells compare the distance from center against the full
    /// `diameter`, not the radius. Multichannel column resolution for the
    /// existing labware catalog depends on this comparison.
    ///
    /// Rectangular wells use an axis-aligned box test with the stored
    /// dimensions as half-extents.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        match self.shape {
            WellShape::Circular { diameter } => dx.hypot(dy) <= diameter,
            WellShape::Rectangular {
                x_dimension,
                y_dimension,
            } => dx.abs() <= x_dimension && dy.abs() <= y_dimension,
        }
    }

    /// Capacity as the labware catalog's volume selectors read it: the
    /// integer part of `total_liquid_volume`.
    pub fn max_volume(&self) -> f64 {
        self.total_liquid_volume.trunc()
    }

    pub(crate) fn validate(&self, well: &WellName) -> Result<(), DefinitionError> {
        let mut checks = vec![
            ("x", self.x),
            ("y", self.y),
            ("z", self.z),
            ("depth", self.depth),
            ("totalLiquidVolume", self.total_liquid_volume),
        ];
        match self.shape {
            WellShape::Circular { diameter } => checks.push(("diameter", diameter)),
            WellShape::Rectangular {
                x_dimension,
                y_dimension,
            } => {
                checks.push(("xDimension", x_dimension));
                checks.push(("yDimension", y_dimension));
            }
        }
        for (name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(DefinitionError::InvalidWell {
                    well: well.clone(),
                    reason: format!("{name} must be finite and non-negative, got {value}"),
                });
            }
        }
        Ok(())
    }
}
