//! Diagnostic system for call checking.
//!
//! A [`Diagnostic`] is a structured, non-fatal finding: an [`ErrorCode`], a
//! [`Severity`], a message, the parameters the message was rendered from,
//! and labels anchoring it in source. Diagnostics are appended to a
//! [`DiagnosticSink`]; nothing in the compiler reads them back to make
//! decisions during analysis.
//!
//! ```text
//! let bag = DiagnosticBag::new();
//! bag.report(
//!     Diagnostic::warning(ErrorCode::W4001)
//!         .with_message("`oldApi` is deprecated")
//!         .with_parameter("oldApi")
//!         .with_label(span, "deprecated call"),
//! );
//! let diagnostics = bag.take();
//! ```

mod diagnostic;
mod error_code;
mod sink;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use sink::{DiagnosticBag, DiagnosticSink};
