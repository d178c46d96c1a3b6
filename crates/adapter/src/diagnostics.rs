//! Injected diagnostics output.
//!
//! The module never prints. Every progress or failure message goes through a
//! [`DiagnosticsSink`] handed over at construction time.

use parking_lot::Mutex;
use std::fmt::Debug;

/// Severity of a diagnostics report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

/// Receiver of diagnostics reports.
pub trait DiagnosticsSink: Debug + Send + Sync {
    fn report(&self, message: &str, severity: Severity);
}

/// Forwards reports to `tracing` under the `vv_adapter` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn report(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Debug => tracing::debug!(target: "vv_adapter", "{message}"),
            Severity::Info => tracing::info!(target: "vv_adapter", "{message}"),
            Severity::Warning => tracing::warn!(target: "vv_adapter", "{message}"),
            Severity::Error => tracing::error!(target: "vv_adapter", "{message}"),
        }
    }
}

/// A recorded report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub message: String,
    pub severity: Severity,
}

/// Keeps every report in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    reports: Mutex<Vec<Report>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all reports so far.
    #[must_use]
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().clone()
    }

    /// Messages reported with exactly `severity`.
    #[must_use]
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.reports
            .lock()
            .iter()
            .filter(|r| r.severity == severity)
            .map(|r| r.message.clone())
            .collect()
    }

    /// Whether any report contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.reports.lock().iter().any(|r| r.message.contains(needle))
    }

    pub fn clear(&self) {
        self.reports.lock().clear();
    }
}

impl DiagnosticsSink for MemorySink {
    fn report(&self, message: &str, severity: Severity) {
        self.reports.lock().push(Report { message: message.to_owned(), severity });
    }
}
