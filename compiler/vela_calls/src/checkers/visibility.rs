use vela_diagnostic::{Diagnostic, ErrorCode};
use vela_resolve::{PropertyAccessorDescriptor, ResolvedCall};

use super::container_str;
use crate::{CallChecker, CallCheckerContext, ReportOn};

/// Reports callees and setters the call site cannot see.
///
/// Overload resolution prefers visible candidates but falls back to an
/// invisible one when nothing else matches, so the call still resolves.
#[derive(Copy, Clone, Debug, Default)]
pub struct VisibilityChecker;

impl CallChecker for VisibilityChecker {
    fn check(&self, call: &ResolvedCall, report_on: ReportOn, ctx: &CallCheckerContext<'_>) {
        if !call.is_resolved() {
            return;
        }
        let candidate = call.candidate();
        if ctx.scope().can_see(candidate.visibility, &candidate.container) {
            return;
        }

        let name = ctx.name_str(candidate.name);
        let container = container_str(&candidate.container, ctx);
        ctx.report(
            report_on,
            "not accessible here",
            Diagnostic::new(ErrorCode::E4002)
                .with_message(format!(
                    "cannot access `{name}`: it is {} in `{container}`",
                    candidate.visibility
                ))
                .with_parameter(name)
                .with_parameter(candidate.visibility.to_string())
                .with_parameter(container),
        );
    }

    fn check_property_write(
        &self,
        accessor: &PropertyAccessorDescriptor,
        report_on: ReportOn,
        ctx: &CallCheckerContext<'_>,
    ) {
        if !accessor.is_setter() || ctx.scope().can_see(accessor.visibility, &accessor.container) {
            return;
        }

        let property = ctx.name_str(accessor.property);
        let container = container_str(&accessor.container, ctx);
        ctx.report(
            report_on,
            "setter not accessible here",
            Diagnostic::new(ErrorCode::E4003)
                .with_message(format!(
                    "cannot assign to `{property}`: the setter is {} in `{container}`",
                    accessor.visibility
                ))
                .with_parameter(property)
                .with_parameter(accessor.visibility.to_string())
                .with_parameter(container),
        );
    }
}
