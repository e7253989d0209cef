//! What overload resolution hands to the rest of semantic analysis.
//!
//! - [`ResolvedCall`]: the chosen candidate, bound arguments and receiver
//! - [`PropertyAccessorDescriptor`]: the accessor an assignment binds to
//! - [`ResolutionContext`]: ambient state at the point a call was resolved
//!   (diagnostic sink, [`LexicalScope`], [`DataFlowInfo`], annotation flag)
//! - [`LanguageFeatureSettings`]: the language level the module compiles at
//!
//! Resolution results are immutable once built. Later phases read them
//! through `&` and have no way to change them.

mod call;
mod context;
mod data_flow;
mod descriptor;
mod features;
mod scope;

pub use call::{Receiver, ResolutionStatus, ResolvedArgument, ResolvedCall};
pub use context::ResolutionContext;
pub use data_flow::{DataFlowInfo, DataFlowValue, Nullability};
pub use descriptor::{
    AccessorKind, CallableDescriptor, CallableKind, ContainerId, Deprecation, DeprecationLevel,
    ParameterDescriptor, PropertyAccessorDescriptor, Visibility,
};
pub use features::{LanguageFeatureSettings, LanguageFeatures, LanguageVersion};
pub use scope::{LexicalScope, ScopeOwner};
