//! Diagnostic channel for rewritten sections.
//!
//! The re-ranker reports every section it rewrites to a [`SectionReporter`]
//! supplied by the caller. The binary wires a [`WriterReporter`] to stderr;
//! tests use [`CollectingReporter`] and inspect the reports directly.

use crate::types::SectionReport;
use std::io::Write;

/// Receives one call per section found during re-ranking.
pub trait SectionReporter {
    fn section(&mut self, report: &SectionReport);
}

/// Discards all reports.
impl SectionReporter for () {
    fn section(&mut self, _report: &SectionReport) {}
}

impl<R: SectionReporter + ?Sized> SectionReporter for &mut R {
    fn section(&mut self, report: &SectionReport) {
        (**self).section(report);
    }
}

/// Keeps every report in arrival order.
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    pub reports: Vec<SectionReport>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry counts per section, in arrival order.
    pub fn entry_counts(&self) -> Vec<usize> {
        self.reports.iter().map(|r| r.entries).collect()
    }
}

impl SectionReporter for CollectingReporter {
    fn section(&mut self, report: &SectionReport) {
        self.reports.push(*report);
    }
}

/// Writes `Found section of N entries` per section to any writer.
///
/// Write failures are logged and otherwise ignored: the diagnostic line is
/// not part of the normalized output.
#[derive(Debug)]
pub struct WriterReporter<W: Write> {
    out: W,
}

impl<W: Write> WriterReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl WriterReporter<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> SectionReporter for WriterReporter<W> {
    fn section(&mut self, report: &SectionReport) {
        if let Err(err) = writeln!(self.out, "Found section of {} entries", report.entries) {
            tracing::warn!(%err, "failed to write section diagnostic");
        }
    }
}
