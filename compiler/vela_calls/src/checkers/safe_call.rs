use vela_diagnostic::{Diagnostic, ErrorCode};
use vela_resolve::{Nullability, Receiver, ResolvedCall};
use vela_types::Type;

use crate::{CallChecker, CallCheckerContext, ReportOn};

/// Warns about `?.` on receivers that cannot be null.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnnecessarySafeCallChecker;

impl UnnecessarySafeCallChecker {
    /// Non-null by declaration, by a null check, or by a smart cast.
    /// Placeholders are never forced here and count as unknown.
    fn is_known_non_null(receiver: &Receiver, ctx: &CallCheckerContext<'_>) -> bool {
        if is_definitely_non_null(&receiver.ty) {
            return true;
        }
        let Some(value) = receiver.value else {
            return false;
        };
        let flow = ctx.data_flow_info();
        flow.nullability(value) == Nullability::NotNull
            || flow.stable_types(value).iter().any(is_definitely_non_null)
    }
}

fn is_definitely_non_null(ty: &Type) -> bool {
    matches!(ty, Type::Named { nullable: false, .. })
}

impl CallChecker for UnnecessarySafeCallChecker {
    fn check(&self, call: &ResolvedCall, report_on: ReportOn, ctx: &CallCheckerContext<'_>) {
        if !call.is_success() || ctx.is_annotation_context() {
            return;
        }
        let Some(receiver) = call.receiver().filter(|r| r.is_safe_access) else {
            return;
        };
        if !Self::is_known_non_null(receiver, ctx) {
            return;
        }

        let ty = receiver.ty.display(ctx.interner()).to_string();
        ctx.report(
            report_on,
            "receiver is never null",
            Diagnostic::new(ErrorCode::W4003)
                .with_message(format!("unnecessary safe call on a non-null receiver of type `{ty}`"))
                .with_parameter(ty),
        );
    }
}
