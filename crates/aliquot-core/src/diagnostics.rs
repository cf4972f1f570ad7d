//! Explicit diagnostics channel.
//!
//! Queries never log through a global. Each query that can degrade takes
//! a `&dyn Diagnostics` and reports a typed [`Diagnostic`] through it.
//! Reporting is advisory: it never changes what the query returns.
//!
//! [`TracingDiagnostics`] forwards to `tracing`; [`NullDiagnostics`]
//! discards everything.

use std::fmt;

use tracing::{error, warn};

use crate::id::{LabwareId, StepId, WellName};

/// How serious a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// An expected transient condition; a sentinel result was returned.
    Warn,
    /// Caller or state inconsistency; the query refused to answer.
    Error,
}

/// A structured report from a query that could not answer normally.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// A well name was not found in a labware definition.
    UnknownWell {
        /// `namespace/loadName` of the labware that was searched.
        labware: String,
        /// The well that could not be found.
        well: WellName,
        /// The operation that needed the well.
        operation: &'static str,
    },
    /// Liquid or deck state referenced a labware with no known definition.
    MissingLabwareGeometry {
        /// The labware lacking a definition.
        labware_id: LabwareId,
    },
    /// A selection query ran with no active labware.
    NoLabwareSelected {
        /// The query that needed a labware.
        query: &'static str,
    },
    /// A selection aggregate ran with no wells selected.
    EmptySelection {
        /// The query that needed a selection.
        query: &'static str,
    },
    /// A max-volume query had no wells to take a minimum over.
    EmptyVolumeSet {
        /// The labware whose wells were queried.
        labware_id: LabwareId,
    },
    /// The active item named a step that is not in the ordered step list.
    UnknownActiveStep {
        /// The unknown step.
        step_id: StepId,
    },
}

impl Diagnostic {
    /// Severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        match self {
            Self::UnknownActiveStep { .. } => Severity::Error,
            _ => Severity::Warn,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownWell {
                labware,
                well,
                operation,
            } => write!(
                f,
                "well \"{well}\" does not exist in labware {labware}, cannot {operation}"
            ),
            Self::MissingLabwareGeometry { labware_id } => {
                write!(f, "no labware definition for labware \"{labware_id}\"")
            }
            Self::NoLabwareSelected { query } => {
                write!(f, "no labware selected, cannot {query}")
            }
            Self::EmptySelection { query } => {
                write!(f, "no wells selected, cannot {query}")
            }
            Self::EmptyVolumeSet { labware_id } => {
                write!(
                    f,
                    "no selected wells exist in labware \"{labware_id}\", max volume is unbounded"
                )
            }
            Self::UnknownActiveStep { step_id } => {
                write!(f, "active item refers to unknown step \"{step_id}\"")
            }
        }
    }
}

/// Sink for [`Diagnostic`] reports.
///
/// `Send + Sync` so a single sink can be shared by queries running on
/// different threads.
pub trait Diagnostics: Send + Sync {
    /// Receive one diagnostic.
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing` with structured fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::UnknownWell {
                labware,
                well,
                operation,
            } => warn!(%labware, %well, operation, "{diagnostic}"),
            Diagnostic::MissingLabwareGeometry { labware_id } => {
                warn!(%labware_id, "{diagnostic}");
            }
            Diagnostic::NoLabwareSelected { query } => warn!(query, "{diagnostic}"),
            Diagnostic::EmptySelection { query } => warn!(query, "{diagnostic}"),
            Diagnostic::EmptyVolumeSet { labware_id } => warn!(%labware_id, "{diagnostic}"),
            Diagnostic::UnknownActiveStep { step_id } => error!(%step_id, "{diagnostic}"),
        }
    }
}

/// Discards every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unknown_step_is_an_error() {
        let step = Diagnostic::UnknownActiveStep {
            step_id: StepId::from("s1"),
        };
        assert_eq!(step.severity(), Severity::Error);
        let labware = Diagnostic::NoLabwareSelected { query: "q" };
        assert_eq!(labware.severity(), Severity::Warn);
        let selection = Diagnostic::EmptySelection { query: "q" };
        assert_eq!(selection.severity(), Severity::Warn);
    }

    #[test]
    fn unknown_well_message_names_labware_and_well() {
        let d = Diagnostic::UnknownWell {
            labware: "opentrons/plate_96".into(),
            well: WellName::from("Z9"),
            operation: "get wells under multichannel tip",
        };
        assert_eq!(
            d.to_string(),
            "well \"Z9\" does not exist in labware opentrons/plate_96, \
             cannot get wells under multichannel tip"
        );
    }

    #[test]
    fn empty_selection_message_names_query() {
        let d = Diagnostic::EmptySelection {
            query: "get common well values",
        };
        assert_eq!(d.to_string(), "no wells selected, cannot get common well values");
    }

    #[test]
    fn sinks_accept_reports() {
        let d = Diagnostic::MissingLabwareGeometry {
            labware_id: LabwareId::from("trash"),
        };
        NullDiagnostics.report(&d);
        TracingDiagnostics.report(&d);
    }
}
