//! Aliquot: liquid tracking for liquid-handling protocol simulation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Aliquot sub-crates. For most users, adding `aliquot` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use aliquot::prelude::*;
//!
//! // An 8-well column with 9 mm spacing.
//! let mut builder = LabwareDefinition::builder("example", "column_8");
//! for (i, row) in ["A", "B", "C", "D", "E", "F", "G", "H"].iter().enumerate() {
//!     let y = 74.24 - 9.0 * i as f64;
//!     builder = builder.well(
//!         format!("{row}1"),
//!         WellGeometry::circular(14.38, y, 6.4).with_volume(200.0),
//!     );
//! }
//! let def = Arc::new(builder.build().unwrap());
//! let entities: LabwareEntities = [("plate", def.clone())].into_iter().collect();
//!
//! // One step fills A1.
//! let initial = RobotState::new().with_labware("plate", "1");
//! let mut timeline = Timeline::new(initial.clone());
//! timeline.push(initial.with_liquid("plate", "A1", "water", 50.0));
//!
//! let steps = all_well_contents_for_steps(&timeline, &entities, &TracingDiagnostics);
//! assert_eq!(steps.len(), 2);
//! assert_eq!(steps[1]["plate"]["A1"].volume_of("water"), Some(50.0));
//! assert!(steps[1]["plate"]["B1"].is_empty());
//!
//! // An 8-channel pipette on A1 covers the whole column.
//! let tips = wells_under_multi_channel_tip(&def, "A1", &TracingDiagnostics).unwrap();
//! assert_eq!(tips.len(), 8);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `aliquot-core` | IDs, liquid-state model, diagnostics |
//! | [`labware`] | `aliquot-labware` | Labware geometry and multichannel resolution |
//! | [`contents`] | `aliquot-contents` | Well-content resolution, timeline projection, selection |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core identifiers, liquid state, and diagnostics (`aliquot-core`).
///
/// Contains the string id newtypes, the nested
/// [`types::LiquidState`] maps, and the [`types::Diagnostics`] channel.
pub use aliquot_core as types;

/// Labware geometry (`aliquot-labware`).
///
/// [`labware::LabwareDefinition`] and [`labware::LabwareEntities`], plus
/// [`labware::wells_under_multi_channel_tip`].
pub use aliquot_labware as labware;

/// Well contents over a timeline (`aliquot-contents`).
///
/// Resolution, the step/last-valid/active-item projections, selection
/// aggregates, and [`contents::ProjectionCache`].
pub use aliquot_contents as contents;

/// Common imports for typical Aliquot usage.
///
/// ```rust
/// use aliquot::prelude::*;
/// ```
pub mod prelude {
    // Identifiers and liquid state
    pub use aliquot_core::{
        IngredGroupId, LabwareId, LabwareLiquidState, LiquidState, LiquidVolume, StepId,
        WellLiquidState, WellName,
    };

    // Diagnostics
    pub use aliquot_core::{Diagnostic, Diagnostics, NullDiagnostics, TracingDiagnostics};

    // Labware
    pub use aliquot_labware::{
        wells_under_multi_channel_tip, LabwareDefinition, LabwareEntities, WellGeometry,
        WellShape,
    };

    // Contents
    pub use aliquot_contents::{
        all_well_contents_for_steps, last_valid_well_contents, selected_wells_common_values,
        selected_wells_max_volume, well_contents_for_active_item, ActiveItem, CommonWellValues,
        ProjectionCache, ProjectionError, RobotState, SelectedWells, TerminalId, Timeline,
        WellContents,
    };
}
