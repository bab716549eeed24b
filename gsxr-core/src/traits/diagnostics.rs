//! Diagnostics trait

use crate::control::CycleReport;

/// Receives one report per control cycle
///
/// Reports are for a human on the bench; nothing consumes them.
pub trait DiagnosticSink {
    /// Record a completed cycle
    fn report(&mut self, report: &CycleReport);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn report(&mut self, report: &CycleReport) {
        (**self).report(report)
    }
}

/// Discards all reports
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl DiagnosticSink for NoDiagnostics {
    fn report(&mut self, _report: &CycleReport) {}
}
