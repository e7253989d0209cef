//! Property-based tests for dispatch.
//!
//! Whatever the checkers are and whatever they report, every one of them
//! runs exactly once per construct, in registration order, and where a
//! diagnostic is anchored never changes what it says.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::sync::Arc;

use parking_lot::Mutex;

use proptest::prelude::*;
use vela_calls::{
    CallChecker, CallCheckerContext, CallCheckerDispatcher, DefaultCallCheckerProvider, ReportOn,
};
use vela_diagnostic::{Diagnostic, DiagnosticBag, ErrorCode};
use vela_ir::{Span, StringInterner};
use vela_resolve::{
    CallableDescriptor, CallableKind, ContainerId, DataFlowInfo, Deprecation,
    LanguageFeatureSettings, LexicalScope, PropertyAccessorDescriptor, ResolutionStatus,
    ResolvedCall, Visibility,
};
use vela_types::Type;

type Log = Arc<Mutex<Vec<(usize, &'static str)>>>;

struct Numbered {
    index: usize,
    reports: bool,
    log: Log,
}

impl CallChecker for Numbered {
    fn check(&self, _call: &ResolvedCall, report_on: ReportOn, ctx: &CallCheckerContext<'_>) {
        self.log.lock().push((self.index, "check"));
        if self.reports {
            ctx.report(report_on, "here", Diagnostic::new(ErrorCode::E4002));
        }
    }

    fn check_property_write(
        &self,
        _accessor: &PropertyAccessorDescriptor,
        _report_on: ReportOn,
        _ctx: &CallCheckerContext<'_>,
    ) {
        self.log.lock().push((self.index, "write"));
    }
}

fn span_strategy() -> impl Strategy<Value = Span> {
    (0u32..10_000, 0u32..200).prop_map(|(start, len)| Span::new(start, start + len))
}

fn visibility_strategy() -> impl Strategy<Value = Visibility> {
    prop_oneof![
        Just(Visibility::Public),
        Just(Visibility::Internal),
        Just(Visibility::Protected),
        Just(Visibility::Private),
    ]
}

proptest! {
    #[test]
    fn every_checker_runs_once_in_order(reports in prop::collection::vec(any::<bool>(), 0..16)) {
        let interner = StringInterner::new();
        let scope = LexicalScope::file(interner.intern("app"), interner.intern("main.vl"));
        let bag = DiagnosticBag::new();
        let log = Log::default();
        let dispatcher = CallCheckerDispatcher::new(
            reports
                .iter()
                .enumerate()
                .map(|(index, &reports)| {
                    Box::new(Numbered { index, reports, log: Arc::clone(&log) }) as Box<dyn CallChecker>
                })
                .collect(),
        );
        let ctx = CallCheckerContext::new(
            &bag,
            &interner,
            &scope,
            LanguageFeatureSettings::default(),
            DataFlowInfo::empty(),
            false,
        );
        let call = ResolvedCall::new(
            Arc::new(CallableDescriptor::new(
                interner.intern("run"),
                CallableKind::Function,
                ContainerId::top_level(interner.intern("app"), interner.intern("main.vl")),
            )),
            ResolutionStatus::Success,
        );

        dispatcher.check_call(&call, ReportOn::new(Span::new(0, 3)), &ctx);
        let expected: Vec<_> = (0..reports.len()).map(|i| (i, "check")).collect();
        prop_assert_eq!(log.lock().clone(), expected);
        prop_assert_eq!(bag.len(), reports.iter().filter(|&&r| r).count());

        log.lock().clear();
        let setter = PropertyAccessorDescriptor::setter(
            interner.intern("size"),
            ContainerId::top_level(interner.intern("app"), interner.intern("main.vl")),
            Type::Error,
        );
        dispatcher.check_property_write(&setter, ReportOn::new(Span::new(0, 3)), &ctx);
        let expected: Vec<_> = (0..reports.len()).map(|i| (i, "write")).collect();
        prop_assert_eq!(log.lock().clone(), expected);
    }

    #[test]
    fn anchor_never_changes_content(
        first in span_strategy(),
        second in span_strategy(),
        visibility in visibility_strategy(),
        deprecated in any::<bool>(),
        annotation in any::<bool>(),
    ) {
        let interner = StringInterner::new();
        let scope = LexicalScope::file(interner.intern("app"), interner.intern("main.vl"));
        let bag = DiagnosticBag::new();
        let dispatcher = CallCheckerDispatcher::from_provider(&DefaultCallCheckerProvider::default());
        let mut descriptor = CallableDescriptor::new(
            interner.intern("target"),
            CallableKind::Function,
            ContainerId::member(interner.intern("lib"), interner.intern("lib.vl"), interner.intern("Store")),
        )
        .with_visibility(visibility)
        .with_return_type(Type::named(interner.intern("Unit")));
        if deprecated {
            descriptor = descriptor.with_deprecation(Deprecation::warning().with_message("gone soon"));
        }
        let call = ResolvedCall::new(Arc::new(descriptor), ResolutionStatus::Success);
        let ctx = CallCheckerContext::new(
            &bag,
            &interner,
            &scope,
            LanguageFeatureSettings::default(),
            DataFlowInfo::empty(),
            annotation,
        );

        dispatcher.check_call(&call, ReportOn::new(first), &ctx);
        let at_first = bag.take();
        dispatcher.check_call(&call, ReportOn::new(second), &ctx);
        let at_second = bag.take();

        prop_assert_eq!(at_first.len(), at_second.len());
        for (a, b) in at_first.iter().zip(&at_second) {
            prop_assert!(a.same_content(b));
            prop_assert_eq!(a.primary_span(), Some(first));
            prop_assert_eq!(b.primary_span(), Some(second));
        }
    }
}
