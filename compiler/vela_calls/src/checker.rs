//! The call checker capability.

use vela_resolve::{PropertyAccessorDescriptor, ResolvedCall};

use crate::{CallCheckerContext, ReportOn};

/// An analysis run on every resolved call.
///
/// Checkers are shared by every pass of a compilation, possibly across
/// threads, so they hold no per-call state. A checker must not depend on
/// what other checkers reported: all of them see the same call and the same
/// context, in registration order.
///
/// Inputs a checker cannot make sense of (an unresolved call, a call inside
/// an annotation argument when the analysis does not apply there) mean
/// there is nothing to check. Return without reporting.
pub trait CallChecker: Send + Sync {
    /// Check a resolved call, including one that resolved with errors.
    ///
    /// `report_on` is only for anchoring diagnostics. What a checker reports
    /// must not depend on which element it is.
    fn check(&self, call: &ResolvedCall, report_on: ReportOn, ctx: &CallCheckerContext<'_>);

    /// Check the accessor bound by an assignment to a property.
    ///
    /// Called instead of [`check`](Self::check) for `a.prop = v`, which has
    /// no resolved call for the setter. Does nothing by default.
    fn check_property_write(
        &self,
        _accessor: &PropertyAccessorDescriptor,
        _report_on: ReportOn,
        _ctx: &CallCheckerContext<'_>,
    ) {
    }

    /// Name used in tracing output and in [`CheckerConfig`](crate::CheckerConfig).
    fn name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}
