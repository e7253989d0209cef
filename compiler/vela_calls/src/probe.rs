//! Asking about a deferred type without forcing it.
//!
//! A call's return type may be a placeholder the inference engine has not
//! finished, because the call sits inside the very body whose type is being
//! inferred. Forcing it from a checker re-enters inference and fails the pass
//! with a recursive-problem error. Checkers never force: they ask here first,
//! then read a settled value with `DeferredType::peek`.

use vela_types::Type;

use crate::CallChecker;

/// True exactly when `ty` is a deferred placeholder whose computation is in
/// progress. Never runs inference.
pub fn is_computing_deferred_type(ty: &Type) -> bool {
    matches!(ty, Type::Deferred(deferred) if deferred.is_computing())
}

/// [`is_computing_deferred_type`] as a method on every checker.
pub trait DeferredTypeProbe {
    fn is_computing_deferred_type(&self, ty: &Type) -> bool {
        is_computing_deferred_type(ty)
    }
}

impl<C: CallChecker + ?Sized> DeferredTypeProbe for C {}

#[cfg(test)]
mod tests;
