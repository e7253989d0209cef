//! Diagnostic anchors.

use std::fmt;

use vela_ir::Span;

/// The syntax element a checker's diagnostics are anchored at.
///
/// The resolver picks it (the callee name for `a.foo()`, the operator token
/// for `a + b`, the whole target for `a.prop = v`) and it only affects where a
/// diagnostic is shown. It is opaque to checkers: there are no accessors and
/// no comparisons, so the only thing a checker can do with it is hand it
/// back to [`CallCheckerContext::report`](crate::CallCheckerContext::report).
#[derive(Copy, Clone)]
pub struct ReportOn {
    span: Span,
}

impl ReportOn {
    pub fn new(span: Span) -> Self {
        ReportOn { span }
    }

    pub(crate) fn span(self) -> Span {
        self.span
    }
}

impl fmt::Debug for ReportOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ReportOn(..)")
    }
}
