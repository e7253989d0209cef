//! Vela type representation.
//!
//! A [`Type`] is either fully known or a [`DeferredType`]: a placeholder
//! whose value the inference engine computes on first demand. Forcing a
//! placeholder can re-enter inference, and re-entering a placeholder that is
//! already being computed fails with [`TypeError::RecursiveProblem`].
//! Code that only needs to know *whether* a placeholder is mid-computation
//! should ask [`DeferredType::state`], which never forces anything.

mod deferred;
mod error;
mod stack;
mod ty;

pub use deferred::{DeferredState, DeferredType};
pub use error::TypeError;
pub use ty::{Type, TypeDisplay};
