//! Core types for the Aliquot liquid-tracking workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the labware and contents crates: string
//! identifiers, the per-well liquid-state model, instance ids used as
//! memoization keys, and the explicit [`Diagnostics`] channel through
//! which every query reports degraded results.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod diagnostics;
pub mod id;
pub mod liquid;

pub use diagnostics::{Diagnostic, Diagnostics, NullDiagnostics, Severity, TracingDiagnostics};
pub use id::{EntitiesInstanceId, IngredGroupId, LabwareId, StepId, TimelineInstanceId, WellName};
pub use liquid::{LabwareLiquidState, LiquidState, LiquidVolume, WellLiquidState};
