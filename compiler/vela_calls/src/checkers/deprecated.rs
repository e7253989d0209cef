use vela_diagnostic::{Diagnostic, ErrorCode};
use vela_ir::Name;
use vela_resolve::{Deprecation, DeprecationLevel, PropertyAccessorDescriptor, ResolvedCall};

use crate::{CallChecker, CallCheckerContext, ReportOn};

/// Reports uses of deprecated declarations: calls to them and writes
/// through deprecated setters.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDeprecatedCallChecker;

impl NoDeprecatedCallChecker {
    fn report(
        name: Name,
        deprecation: &Deprecation,
        report_on: ReportOn,
        ctx: &CallCheckerContext<'_>,
    ) {
        let code = match deprecation.level {
            DeprecationLevel::Warning => ErrorCode::W4001,
            DeprecationLevel::Error => ErrorCode::E4001,
        };
        let name = ctx.name_str(name);
        let mut diagnostic = Diagnostic::new(code)
            .with_message(format!("`{name}` is deprecated"))
            .with_parameter(name);
        if let Some(message) = &deprecation.message {
            diagnostic = diagnostic
                .with_parameter(message.as_str())
                .with_note(message.as_str());
        }
        ctx.report(report_on, "deprecated", diagnostic);
    }
}

impl CallChecker for NoDeprecatedCallChecker {
    fn check(&self, call: &ResolvedCall, report_on: ReportOn, ctx: &CallCheckerContext<'_>) {
        if !call.is_resolved() {
            return;
        }
        let candidate = call.candidate();
        if let Some(deprecation) = &candidate.deprecation {
            Self::report(candidate.name, deprecation, report_on, ctx);
        }
    }

    fn check_property_write(
        &self,
        accessor: &PropertyAccessorDescriptor,
        report_on: ReportOn,
        ctx: &CallCheckerContext<'_>,
    ) {
        if let Some(deprecation) = &accessor.deprecation {
            Self::report(accessor.property, deprecation, report_on, ctx);
        }
    }
}
