//! Call checking: pluggable analyses over resolved calls.
//!
//! After overload resolution picks a candidate for a call expression, the
//! resolver hands the [`ResolvedCall`](vela_resolve::ResolvedCall) to a
//! [`CallCheckerDispatcher`], which runs every registered [`CallChecker`] on
//! it in registration order. Checkers only report diagnostics; they see the
//! call and the ambient state through `&` and cannot change either.
//!
//! Assignments to properties are the exception: `a.prop = v` binds straight
//! to the setter and has no resolved call, so the dispatcher routes the
//! setter's [`PropertyAccessorDescriptor`](vela_resolve::PropertyAccessorDescriptor)
//! to [`CallChecker::check_property_write`] instead.
//!
//! # Pieces
//!
//! - [`CallChecker`]: the capability checker authors implement
//! - [`CallCheckerContext`]: immutable snapshot shared by all checkers of one call
//! - [`ReportOn`]: opaque anchor for diagnostics, never an input to checker logic
//! - [`CallCheckerDispatcher`]: ordered registry and router
//! - [`is_computing_deferred_type`] / [`DeferredTypeProbe`]: ask whether a
//!   return type is mid-inference without forcing it
//! - [`checkers`]: built-in checkers, assembled by [`DefaultCallCheckerProvider`]
//!
//! # Tracing
//!
//! Dispatch emits `trace`-level spans. Call [`init_tracing`] and run with
//! `RUST_LOG=vela_calls=trace` to see them.

mod checker;
pub mod checkers;
mod context;
mod dispatch;
mod probe;
mod provider;
mod report;

#[cfg(test)]
mod test_support;

pub use checker::CallChecker;
pub use context::CallCheckerContext;
pub use dispatch::CallCheckerDispatcher;
pub use probe::{is_computing_deferred_type, DeferredTypeProbe};
pub use provider::{CallCheckerProvider, CheckerConfig, DefaultCallCheckerProvider};
pub use report::ReportOn;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
