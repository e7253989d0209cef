use vela_diagnostic::{Diagnostic, ErrorCode};
use vela_resolve::{CallableKind, ResolvedCall};

use crate::{CallChecker, CallCheckerContext, ReportOn};

/// Annotation arguments are evaluated at compile time: only constructors
/// and `const` functions may be called there.
#[derive(Copy, Clone, Debug, Default)]
pub struct AnnotationArgumentChecker;

impl CallChecker for AnnotationArgumentChecker {
    fn check(&self, call: &ResolvedCall, report_on: ReportOn, ctx: &CallCheckerContext<'_>) {
        if !ctx.is_annotation_context() || !call.is_resolved() {
            return;
        }
        let candidate = call.candidate();
        if candidate.is_const || candidate.kind == CallableKind::Constructor {
            return;
        }

        let name = ctx.name_str(candidate.name);
        ctx.report(
            report_on,
            "not a constant expression",
            Diagnostic::new(ErrorCode::E4005)
                .with_message(format!(
                    "only `const` functions can be called in annotation arguments, `{name}` is not `const`"
                ))
                .with_parameter(name),
        );
    }
}
