//! Error types for labware construction and pipette configuration.

use aliquot_core::WellName;
use std::fmt;

/// Errors arising from building or deserializing a labware definition.
#[derive(Clone, Debug, PartialEq)]
pub enum DefinitionError {
    /// The definition declares no wells.
    NoWells,
    /// The same well name was declared twice.
    DuplicateWell {
        /// The repeated name.
        well: WellName,
    },
    /// A well's position or dimensions are negative or non-finite.
    InvalidWell {
        /// The offending well.
        well: WellName,
        /// Which value was rejected.
        reason: String,
    },
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWells => write!(f, "labware definition must have at least one well"),
            Self::DuplicateWell { well } => write!(f, "well \"{well}\" declared more than once"),
            Self::InvalidWell { well, reason } => write!(f, "invalid well \"{well}\": {reason}"),
        }
    }
}

impl std::error::Error for DefinitionError {}

/// Errors detected when constructing a [`MultiChannelGeometry`](crate::MultiChannelGeometry).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A pipette needs at least one channel.
    ZeroChannels,
    /// Channel pitch is NaN, infinite, zero, or negative.
    InvalidPitch {
        /// The rejected pitch in mm.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroChannels => write!(f, "channel count must be at least 1"),
            Self::InvalidPitch { value } => {
                write!(f, "channel pitch must be finite and positive, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
