//! Labware geometry for Aliquot.
//!
//! This crate models the read-only geometry of a labware definition
//! (well positions, shapes, capacities and quirks) and answers the
//! one spatial question the simulator needs: which wells sit under
//! each channel of a multichannel pipette.
//!
//! # Geometry
//!
//! - [`LabwareDefinition`]: ordered wells plus quirk flags, built with
//!   [`LabwareDefinitionBuilder`] (or deserialized with the `serde` feature)
//! - [`WellGeometry`] / [`WellShape`]: per-well center, extents and capacity
//! - [`LabwareEntities`]: labware id → shared definition for one deck
//!
//! # Multichannel resolution
//!
//! [`wells_under_multi_channel_tip`] maps a reference well to the eight
//! wells under an 8-channel pipette, or `None` if any tip would miss.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod definition;
pub mod entities;
pub mod error;
pub mod multi_tip;
pub mod quirk;
pub mod well;

#[cfg(feature = "serde")]
mod json;

pub use definition::{LabwareDefinition, LabwareDefinitionBuilder};
pub use entities::LabwareEntities;
pub use error::{ConfigError, DefinitionError};
pub use multi_tip::{
    wells_under_multi_channel_tip, wells_under_tips, MultiChannelGeometry, TipWells,
    CHANNEL_COUNT_8, CHANNEL_PITCH_MM,
};
pub use quirk::Quirk;
pub use well::{WellGeometry, WellShape};
