//! Well contents for Aliquot: what liquid sits in which well, and when.
//!
//! Everything here is a pure function of an immutable robot-state
//! [`Timeline`], a [`LabwareEntities`](aliquot_labware::LabwareEntities)
//! table, and (for selection queries) the current selection.
//!
//! # Architecture
//!
//! - [`resolve_well_contents`] turns one labware's liquid state into a
//!   [`WellContents`] per well of its definition
//! - [`all_well_contents_for_steps`], [`last_valid_well_contents`] and
//!   [`well_contents_for_active_item`] project that over a timeline
//! - [`selected_wells_max_volume`] and [`selected_wells_common_values`]
//!   aggregate over a set of selected wells
//! - [`ProjectionCache`] memoizes the all-steps projection

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod error;
pub mod projection;
pub mod resolve;
pub mod selection;
pub mod summary;
pub mod timeline;

pub use cache::ProjectionCache;
pub use error::ProjectionError;
pub use projection::{
    all_well_contents_for_steps, last_valid_well_contents, timeline_index_for_active_item,
    well_contents_for_active_item,
};
pub use resolve::{resolve_labware_contents, resolve_well_contents};
pub use selection::{
    selected_wells_common_ingredient, selected_wells_common_values, selected_wells_common_volume,
    selected_wells_max_volume, CommonWellValues, SelectedWells,
};
pub use summary::{ContentsByWell, WellContents, WellContentsByLabware, WellContentsSummary};
pub use timeline::{ActiveItem, LabwarePlacement, RobotState, TerminalId, Timeline};
