//! Ambient resolution state.

use vela_diagnostic::DiagnosticSink;
use vela_ir::StringInterner;

use crate::{DataFlowInfo, LexicalScope};

/// State the resolver carries while walking a body.
///
/// The resolver replaces parts of it as it moves through the body (entering
/// an annotation argument, learning a smart cast). Phases that must not see
/// those later changes take a snapshot of it at the point of interest.
#[derive(Clone)]
pub struct ResolutionContext<'a> {
    trace: &'a dyn DiagnosticSink,
    interner: &'a StringInterner,
    scope: &'a LexicalScope,
    data_flow_info: DataFlowInfo,
    is_annotation_context: bool,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(
        trace: &'a dyn DiagnosticSink,
        interner: &'a StringInterner,
        scope: &'a LexicalScope,
    ) -> Self {
        ResolutionContext {
            trace,
            interner,
            scope,
            data_flow_info: DataFlowInfo::empty(),
            is_annotation_context: false,
        }
    }

    pub fn trace(&self) -> &'a dyn DiagnosticSink {
        self.trace
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn scope(&self) -> &'a LexicalScope {
        self.scope
    }

    pub fn data_flow_info(&self) -> &DataFlowInfo {
        &self.data_flow_info
    }

    pub fn is_annotation_context(&self) -> bool {
        self.is_annotation_context
    }

    /// Continue with new flow facts.
    pub fn replace_data_flow_info(&mut self, info: DataFlowInfo) {
        self.data_flow_info = info;
    }

    /// Continue in a different scope.
    pub fn replace_scope(&mut self, scope: &'a LexicalScope) {
        self.scope = scope;
    }

    /// Context for resolving annotation arguments.
    #[must_use]
    pub fn annotation_arguments(&self) -> Self {
        ResolutionContext {
            is_annotation_context: true,
            ..self.clone()
        }
    }
}

impl std::fmt::Debug for ResolutionContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionContext")
            .field("scope", &self.scope)
            .field("data_flow_info", &self.data_flow_info)
            .field("is_annotation_context", &self.is_annotation_context)
            .finish_non_exhaustive()
    }
}
