//! The snapshot of ambient state every checker of one call receives.

use vela_diagnostic::{Diagnostic, DiagnosticSink};
use vela_ir::{Name, StringInterner};
use vela_resolve::{DataFlowInfo, LanguageFeatureSettings, LexicalScope, ResolutionContext};

use crate::ReportOn;

/// Read-only view of resolution state at the point a call was resolved.
///
/// Built once per checked call and shared by every checker for it, so all of
/// them see the same scope and flow facts. There are no mutating methods;
/// the one effect a checker can have is appending to the diagnostic sink
/// through [`report`](Self::report).
pub struct CallCheckerContext<'a> {
    trace: &'a dyn DiagnosticSink,
    interner: &'a StringInterner,
    scope: &'a LexicalScope,
    language_features: LanguageFeatureSettings,
    data_flow_info: DataFlowInfo,
    is_annotation_context: bool,
}

impl<'a> CallCheckerContext<'a> {
    pub fn new(
        trace: &'a dyn DiagnosticSink,
        interner: &'a StringInterner,
        scope: &'a LexicalScope,
        language_features: LanguageFeatureSettings,
        data_flow_info: DataFlowInfo,
        is_annotation_context: bool,
    ) -> Self {
        CallCheckerContext {
            trace,
            interner,
            scope,
            language_features,
            data_flow_info,
            is_annotation_context,
        }
    }

    /// Snapshot the resolver's current state.
    ///
    /// Flow facts are copied, so the resolver can keep refining its own
    /// context without the snapshot noticing.
    pub fn from_resolution(
        resolution: &ResolutionContext<'a>,
        language_features: LanguageFeatureSettings,
    ) -> Self {
        Self::new(
            resolution.trace(),
            resolution.interner(),
            resolution.scope(),
            language_features,
            resolution.data_flow_info().clone(),
            resolution.is_annotation_context(),
        )
    }

    pub fn scope(&self) -> &'a LexicalScope {
        self.scope
    }

    pub fn language_features(&self) -> &LanguageFeatureSettings {
        &self.language_features
    }

    pub fn data_flow_info(&self) -> &DataFlowInfo {
        &self.data_flow_info
    }

    /// The call is an annotation argument.
    pub fn is_annotation_context(&self) -> bool {
        self.is_annotation_context
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// The string behind `name`.
    pub fn name_str(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    /// Anchor `diagnostic` at `report_on` and append it to the sink.
    pub fn report(&self, report_on: ReportOn, label: &str, diagnostic: Diagnostic) {
        tracing::debug!(
            code = %diagnostic.code,
            name = diagnostic.code.name(),
            severity = %diagnostic.severity,
            "call checker reported"
        );
        self.trace
            .report(diagnostic.with_label(report_on.span(), label));
    }
}

impl std::fmt::Debug for CallCheckerContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallCheckerContext")
            .field("scope", &self.scope)
            .field("language_features", &self.language_features)
            .field("data_flow_info", &self.data_flow_info)
            .field("is_annotation_context", &self.is_annotation_context)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vela_diagnostic::{DiagnosticBag, ErrorCode};
    use vela_ir::Span;
    use vela_resolve::{DataFlowValue, LanguageVersion, Nullability};

    #[test]
    fn test_snapshot_copies_resolution_state() {
        let bag = DiagnosticBag::new();
        let interner = StringInterner::new();
        let scope = LexicalScope::file(interner.intern("app"), interner.intern("main.vl"));
        let x = DataFlowValue::stable(interner.intern("x"));

        let mut resolution = ResolutionContext::new(&bag, &interner, &scope).annotation_arguments();
        resolution.replace_data_flow_info(
            resolution
                .data_flow_info()
                .with_nullability(x, Nullability::NotNull),
        );
        let features = LanguageFeatureSettings::for_version(LanguageVersion::V1_0);

        let ctx = CallCheckerContext::from_resolution(&resolution, features);

        // Later refinement by the resolver does not leak into the snapshot.
        resolution.replace_data_flow_info(
            resolution
                .data_flow_info()
                .with_nullability(x, Nullability::Null),
        );

        assert!(ctx.is_annotation_context());
        assert_eq!(ctx.data_flow_info().nullability(x), Nullability::NotNull);
        assert_eq!(ctx.language_features().version(), LanguageVersion::V1_0);
        assert_eq!(ctx.scope(), &scope);
    }

    #[test]
    fn test_report_anchors_at_target() {
        let bag = DiagnosticBag::new();
        let interner = StringInterner::new();
        let scope = LexicalScope::file(interner.intern("app"), interner.intern("main.vl"));
        let ctx = CallCheckerContext::new(
            &bag,
            &interner,
            &scope,
            LanguageFeatureSettings::default(),
            DataFlowInfo::empty(),
            false,
        );

        ctx.report(
            ReportOn::new(Span::new(3, 9)),
            "here",
            Diagnostic::warning(ErrorCode::W4001).with_message("deprecated"),
        );

        let reported = bag.take();
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].primary_span(), Some(Span::new(3, 9)));
        assert_eq!(reported[0].labels[0].message, "here");
    }
}
