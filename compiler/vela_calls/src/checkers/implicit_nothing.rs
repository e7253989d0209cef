use vela_diagnostic::{Diagnostic, ErrorCode};
use vela_resolve::ResolvedCall;
use vela_types::Type;

use crate::{CallChecker, CallCheckerContext, DeferredTypeProbe, ReportOn};

/// Warns about calls to functions whose inferred return type is `Nothing`.
///
/// A function without a declared return type that always throws or loops
/// gets `Nothing` inferred, which silently makes every call site dead code.
///
/// The return type is a placeholder owned by inference. A checker never
/// computes it: a placeholder that is mid-computation or not yet computed
/// means there is nothing to check, and only a value inference already
/// settled is read.
#[derive(Copy, Clone, Debug, Default)]
pub struct ImplicitNothingChecker;

impl ImplicitNothingChecker {
    /// The settled type behind `ty`, following placeholders without running
    /// any of them.
    fn settled(&self, ty: &Type) -> Option<Type> {
        let mut current = ty.clone();
        loop {
            if self.is_computing_deferred_type(&current) {
                tracing::trace!("return type still being inferred, skipped");
                return None;
            }
            match current.as_deferred() {
                Some(deferred) => current = deferred.peek()?,
                None => return Some(current),
            }
        }
    }
}

impl CallChecker for ImplicitNothingChecker {
    fn check(&self, call: &ResolvedCall, report_on: ReportOn, ctx: &CallCheckerContext<'_>) {
        if !call.is_success() || ctx.is_annotation_context() {
            return;
        }
        let candidate = call.candidate();
        if !candidate.has_implicit_return_type() {
            return;
        }
        let Some(ty) = self.settled(call.return_type()) else {
            return;
        };

        if ty.is_nothing() && !ty.is_nullable() {
            let name = ctx.name_str(candidate.name);
            ctx.report(
                report_on,
                "never returns",
                Diagnostic::new(ErrorCode::W4002)
                    .with_message(format!(
                        "`{name}` has an inferred return type of `Nothing`; declare it explicitly"
                    ))
                    .with_parameter(name),
            );
        }
    }
}
