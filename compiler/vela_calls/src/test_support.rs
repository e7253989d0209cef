//! Shared fixtures for unit tests.

use std::sync::Arc;

use vela_diagnostic::{Diagnostic, DiagnosticBag};
use vela_ir::{Name, Span, StringInterner};
use vela_resolve::{
    CallableDescriptor, CallableKind, ContainerId, DataFlowInfo, LanguageFeatureSettings,
    LexicalScope, PropertyAccessorDescriptor, ResolutionStatus, ResolvedCall,
};
use vela_types::Type;

use crate::{CallCheckerContext, ReportOn};

/// One module `app` with one file `main.vl`, checked at the default
/// language version.
pub(crate) struct Fixture {
    pub interner: StringInterner,
    pub bag: DiagnosticBag,
    pub scope: LexicalScope,
    pub features: LanguageFeatureSettings,
    pub data_flow_info: DataFlowInfo,
    pub is_annotation_context: bool,
}

impl Fixture {
    pub fn new() -> Self {
        let interner = StringInterner::new();
        let scope = LexicalScope::file(interner.intern("app"), interner.intern("main.vl"));
        Fixture {
            interner,
            bag: DiagnosticBag::new(),
            scope,
            features: LanguageFeatureSettings::default(),
            data_flow_info: DataFlowInfo::empty(),
            is_annotation_context: false,
        }
    }

    pub fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    /// Container for declarations in another module.
    pub fn library(&self, class: Option<&str>) -> ContainerId {
        ContainerId {
            module: self.name("lib"),
            file: self.name("lib.vl"),
            class: class.map(|c| self.name(c)),
        }
    }

    /// Public top-level function in another module, returning `Unit`.
    pub fn function(&self, name: &str) -> CallableDescriptor {
        CallableDescriptor::new(self.name(name), CallableKind::Function, self.library(None))
            .with_return_type(Type::named(self.name("Unit")))
    }

    pub fn call(&self, descriptor: CallableDescriptor) -> ResolvedCall {
        ResolvedCall::new(Arc::new(descriptor), ResolutionStatus::Success)
    }

    pub fn setter(&self, property: &str, class: &str) -> PropertyAccessorDescriptor {
        PropertyAccessorDescriptor::setter(
            self.name(property),
            self.library(Some(class)),
            Type::named(self.name("Int")),
        )
    }

    pub fn ctx(&self) -> CallCheckerContext<'_> {
        CallCheckerContext::new(
            &self.bag,
            &self.interner,
            &self.scope,
            self.features,
            self.data_flow_info.clone(),
            self.is_annotation_context,
        )
    }

    pub fn take(&self) -> Vec<Diagnostic> {
        self.bag.take()
    }
}

pub(crate) fn report_on() -> ReportOn {
    ReportOn::new(Span::new(10, 20))
}
