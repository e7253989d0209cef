//! Routing resolved constructs to registered checkers.

use vela_resolve::{
    LanguageFeatureSettings, PropertyAccessorDescriptor, ResolutionContext, ResolvedCall,
};

use crate::{CallChecker, CallCheckerContext, CallCheckerProvider, ReportOn};

/// Ordered registry of call checkers.
///
/// Every checker runs on every construct, in registration order. What one
/// checker reports never stops the next from running, and the dispatcher
/// never looks at what was reported.
#[derive(Default)]
pub struct CallCheckerDispatcher {
    checkers: Vec<Box<dyn CallChecker>>,
}

impl CallCheckerDispatcher {
    pub fn new(checkers: Vec<Box<dyn CallChecker>>) -> Self {
        CallCheckerDispatcher { checkers }
    }

    pub fn from_provider(provider: &dyn CallCheckerProvider) -> Self {
        Self::new(provider.call_checkers())
    }

    /// Append a checker. Registration happens while the compiler is being
    /// assembled, before any call is checked.
    pub fn register(&mut self, checker: impl CallChecker + 'static) {
        self.checkers.push(Box::new(checker));
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    /// Checker names, in registration order.
    pub fn checker_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checkers.iter().map(|checker| checker.name())
    }

    /// Run [`CallChecker::check`] of every checker on `call`.
    #[tracing::instrument(level = "trace", skip_all, fields(
        callee = ?call.candidate().name,
        status = ?call.status(),
        checkers = self.checkers.len(),
    ))]
    pub fn check_call(&self, call: &ResolvedCall, report_on: ReportOn, ctx: &CallCheckerContext<'_>) {
        for checker in &self.checkers {
            tracing::trace!(checker = checker.name(), "check");
            checker.check(call, report_on, ctx);
        }
    }

    /// Run [`CallChecker::check_property_write`] of every checker on the
    /// accessor an assignment bound to. [`CallChecker::check`] is not run.
    #[tracing::instrument(level = "trace", skip_all, fields(
        property = ?accessor.property,
        kind = ?accessor.kind,
        checkers = self.checkers.len(),
    ))]
    pub fn check_property_write(
        &self,
        accessor: &PropertyAccessorDescriptor,
        report_on: ReportOn,
        ctx: &CallCheckerContext<'_>,
    ) {
        for checker in &self.checkers {
            tracing::trace!(checker = checker.name(), "check_property_write");
            checker.check_property_write(accessor, report_on, ctx);
        }
    }

    /// Snapshot `resolution` and run [`check_call`](Self::check_call).
    pub fn check_resolved_call(
        &self,
        call: &ResolvedCall,
        report_on: ReportOn,
        resolution: &ResolutionContext<'_>,
        language_features: LanguageFeatureSettings,
    ) {
        let ctx = CallCheckerContext::from_resolution(resolution, language_features);
        self.check_call(call, report_on, &ctx);
    }

    /// Snapshot `resolution` and run
    /// [`check_property_write`](Self::check_property_write).
    pub fn check_resolved_property_write(
        &self,
        accessor: &PropertyAccessorDescriptor,
        report_on: ReportOn,
        resolution: &ResolutionContext<'_>,
        language_features: LanguageFeatureSettings,
    ) {
        let ctx = CallCheckerContext::from_resolution(resolution, language_features);
        self.check_property_write(accessor, report_on, &ctx);
    }
}

impl std::fmt::Debug for CallCheckerDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.checker_names()).finish()
    }
}
