//! Error types for timeline projection.

use aliquot_core::StepId;
use std::fmt;

/// Errors that indicate the caller's selection and timeline disagree.
///
/// These are not degraded results: projecting anyway would show every
/// downstream view the wrong step's liquid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectionError {
    /// The active item names a step missing from the ordered step ids.
    UnknownActiveStep {
        /// The step that could not be found.
        step_id: StepId,
    },
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownActiveStep { step_id } => {
                write!(f, "active item refers to unknown step \"{step_id}\"")
            }
        }
    }
}

impl std::error::Error for ProjectionError {}
