use vela_diagnostic::{Diagnostic, ErrorCode};
use vela_resolve::ResolvedCall;

use crate::{CallChecker, CallCheckerContext, ReportOn};

/// Reports calls to declarations that need a language feature the module
/// is not compiled with.
#[derive(Copy, Clone, Debug, Default)]
pub struct LanguageFeatureChecker;

impl CallChecker for LanguageFeatureChecker {
    fn check(&self, call: &ResolvedCall, report_on: ReportOn, ctx: &CallCheckerContext<'_>) {
        if !call.is_resolved() {
            return;
        }
        let candidate = call.candidate();
        let Some(feature) = candidate.required_feature else {
            return;
        };
        let settings = ctx.language_features();
        if settings.supports(feature) {
            return;
        }

        let name = ctx.name_str(candidate.name);
        let feature = feature.display_name();
        let version = settings.version().to_string();
        ctx.report(
            report_on,
            "unsupported feature",
            Diagnostic::new(ErrorCode::E4004)
                .with_message(format!(
                    "`{name}` requires {feature}, which is not supported at language version {version}"
                ))
                .with_parameter(name)
                .with_parameter(feature)
                .with_parameter(version),
        );
    }
}
