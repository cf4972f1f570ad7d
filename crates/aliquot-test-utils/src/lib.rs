//! Test utilities for Aliquot development.
//!
//! Provides a [`RecordingDiagnostics`] sink that captures every report,
//! a tracing initializer for tests that want to see log output, and
//! standard labware and timeline fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::Mutex;

use aliquot_core::{Diagnostic, Diagnostics, Severity};

/// Diagnostics sink that records every report in arrival order.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    reports: Mutex<Vec<Diagnostic>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything reported so far.
    pub fn reports(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Drain everything reported so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of reports at `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.lock()
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // A panicking test thread must not hide earlier reports.
        self.reports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&self, diagnostic: &Diagnostic) {
        self.lock().push(diagnostic.clone());
    }
}

/// Install a test-friendly `tracing` subscriber.
///
/// Honors `RUST_LOG`. Safe to call from every test; only the first call
/// installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use aliquot_core::{LabwareId, StepId};

    #[test]
    fn records_in_order_and_drains() {
        let sink = RecordingDiagnostics::new();
        sink.report(&Diagnostic::NoLabwareSelected { query: "q" });
        sink.report(&Diagnostic::UnknownActiveStep {
            step_id: StepId::from("s9"),
        });
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.count(Severity::Error), 1);
        assert_eq!(
            sink.reports()[0],
            Diagnostic::NoLabwareSelected { query: "q" }
        );

        let drained = sink.take();
        assert_eq!(drained.len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        aliquot_core::TracingDiagnostics.report(&Diagnostic::MissingLabwareGeometry {
            labware_id: LabwareId::from("trash"),
        });
    }
}
