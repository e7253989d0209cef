//! The outcome of overload resolution for one call expression.

use std::sync::Arc;

use smallvec::SmallVec;
use vela_types::Type;

use crate::{CallableDescriptor, CallableKind, DataFlowValue};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResolutionStatus {
    Success,
    /// A candidate was chosen but binding it reported errors (wrong argument
    /// types, missing arguments). Later phases still see the call so they can
    /// react to the recovery path.
    ContainsErrors,
    /// Nothing matched; the candidate is an error placeholder.
    Unresolved,
}

/// The value a member call is made on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receiver {
    pub ty: Type,
    /// Set when the receiver expression is stable enough to carry flow facts.
    pub value: Option<DataFlowValue>,
    /// Reached through `?.`.
    pub is_safe_access: bool,
}

impl Receiver {
    pub fn new(ty: Type) -> Self {
        Receiver {
            ty,
            value: None,
            is_safe_access: false,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: DataFlowValue) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn safe_access(mut self) -> Self {
        self.is_safe_access = true;
        self
    }
}

/// An argument bound to a parameter of the candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedArgument {
    pub parameter_index: usize,
    pub ty: Type,
}

/// A call expression after overload resolution.
///
/// Built once by the resolver and then only read; there are no setters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedCall {
    candidate: Arc<CallableDescriptor>,
    arguments: SmallVec<[ResolvedArgument; 4]>,
    receiver: Option<Receiver>,
    status: ResolutionStatus,
}

impl ResolvedCall {
    pub fn new(candidate: Arc<CallableDescriptor>, status: ResolutionStatus) -> Self {
        ResolvedCall {
            candidate,
            arguments: SmallVec::new(),
            receiver: None,
            status,
        }
    }

    #[must_use]
    pub fn with_receiver(mut self, receiver: Receiver) -> Self {
        self.receiver = Some(receiver);
        self
    }

    #[must_use]
    pub fn with_argument(mut self, parameter_index: usize, ty: Type) -> Self {
        self.arguments.push(ResolvedArgument {
            parameter_index,
            ty,
        });
        self
    }

    pub fn candidate(&self) -> &CallableDescriptor {
        &self.candidate
    }

    pub fn kind(&self) -> CallableKind {
        self.candidate.kind
    }

    pub fn arguments(&self) -> &[ResolvedArgument] {
        &self.arguments
    }

    pub fn receiver(&self) -> Option<&Receiver> {
        self.receiver.as_ref()
    }

    pub fn status(&self) -> ResolutionStatus {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == ResolutionStatus::Success
    }

    /// A candidate was chosen, with or without errors.
    pub fn is_resolved(&self) -> bool {
        self.status != ResolutionStatus::Unresolved
    }

    /// The candidate's return type. May be an unforced [`Type::Deferred`].
    pub fn return_type(&self) -> &Type {
        &self.candidate.return_type
    }
}
