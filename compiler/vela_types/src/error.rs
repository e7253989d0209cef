//! Errors produced while computing types.

use thiserror::Error;

/// Failure to produce a type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TypeError {
    /// A deferred type was forced while its own computation was in progress.
    ///
    /// Fatal for the pass that hit it; callers avoid it by checking
    /// [`DeferredType::is_computing`](crate::DeferredType::is_computing)
    /// before forcing.
    #[error("type checking has run into a recursive problem")]
    RecursiveProblem,

    /// The inference engine could not determine a type.
    #[error("cannot infer type: {reason}")]
    CannotInfer { reason: String },
}
