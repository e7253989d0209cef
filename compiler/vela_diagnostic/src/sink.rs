//! Append-only diagnostic storage.
//!
//! Analyses only ever append. The driver drains a [`DiagnosticBag`] once the
//! pass that owns it has finished.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::Diagnostic;

/// Destination for diagnostics.
///
/// Takes `&self` so a sink can be shared by every checker looking at the same
/// call, and by threads running independent passes when the implementation
/// supports concurrent append.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Thread-safe sink that keeps diagnostics in arrival order.
#[derive(Debug, Default)]
pub struct DiagnosticBag {
    diagnostics: Mutex<Vec<Diagnostic>>,
    /// Count of error-severity diagnostics (O(1) `error_count()`). Only
    /// written while `diagnostics` is locked.
    error_count: AtomicUsize,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of diagnostics reported so far.
    pub fn len(&self) -> usize {
        self.diagnostics.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().is_empty()
    }

    /// Number of error-severity diagnostics reported so far.
    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Copy of the diagnostics reported so far, in arrival order.
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    /// Drain all diagnostics in arrival order.
    pub fn take(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self.diagnostics.lock();
        // Reset under the lock so the count always matches the contents.
        self.error_count.store(0, Ordering::Relaxed);
        std::mem::take(&mut *diagnostics)
    }
}

impl DiagnosticSink for DiagnosticBag {
    fn report(&self, diagnostic: Diagnostic) {
        let mut diagnostics = self.diagnostics.lock();
        if diagnostic.is_error() {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }
        diagnostics.push(diagnostic);
    }
}
