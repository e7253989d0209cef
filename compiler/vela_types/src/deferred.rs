//! Lazily computed type placeholders.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::stack::ensure_sufficient_stack;
use crate::{Type, TypeError};

type Thunk = Box<dyn FnOnce() -> Result<Type, TypeError> + Send>;

enum Slot {
    Uncomputed(Thunk),
    Computing,
    Resolved(Type),
}

/// Observable state of a [`DeferredType`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeferredState {
    /// Nobody has asked for the value yet.
    Uncomputed,
    /// The thunk is running, possibly further up the current call stack.
    Computing,
    Resolved,
}

/// A type computed on first demand.
///
/// Clones share the same slot: forcing one clone resolves all of them.
/// Equality is identity of the slot.
///
/// A placeholder belongs to the pass that created it. Forcing it from a
/// second thread while the first is computing reports
/// [`TypeError::RecursiveProblem`] rather than waiting.
#[derive(Clone)]
pub struct DeferredType {
    slot: Arc<Mutex<Slot>>,
}

impl DeferredType {
    pub fn new(compute: impl FnOnce() -> Result<Type, TypeError> + Send + 'static) -> Self {
        DeferredType {
            slot: Arc::new(Mutex::new(Slot::Uncomputed(Box::new(compute)))),
        }
    }

    /// Placeholder that is already resolved.
    pub fn resolved(ty: Type) -> Self {
        DeferredType {
            slot: Arc::new(Mutex::new(Slot::Resolved(ty))),
        }
    }

    /// Current state. Never runs the thunk.
    pub fn state(&self) -> DeferredState {
        match &*self.slot.lock() {
            Slot::Uncomputed(_) => DeferredState::Uncomputed,
            Slot::Computing => DeferredState::Computing,
            Slot::Resolved(_) => DeferredState::Resolved,
        }
    }

    pub fn is_computing(&self) -> bool {
        self.state() == DeferredState::Computing
    }

    /// The value, if already resolved. Never runs the thunk.
    pub fn peek(&self) -> Option<Type> {
        match &*self.slot.lock() {
            Slot::Resolved(ty) => Some(ty.clone()),
            Slot::Uncomputed(_) | Slot::Computing => None,
        }
    }

    /// Compute the value, or return the cached one.
    ///
    /// The lock is not held while the thunk runs, so the thunk may force
    /// other placeholders, and may observe this one as
    /// [`DeferredState::Computing`]. A failing thunk leaves the placeholder
    /// resolved to [`Type::Error`].
    pub fn force(&self) -> Result<Type, TypeError> {
        let thunk = {
            let mut slot = self.slot.lock();
            match std::mem::replace(&mut *slot, Slot::Computing) {
                Slot::Uncomputed(thunk) => thunk,
                Slot::Resolved(ty) => {
                    *slot = Slot::Resolved(ty.clone());
                    return Ok(ty);
                }
                Slot::Computing => {
                    tracing::debug!("deferred type re-entered during its own computation");
                    return Err(TypeError::RecursiveProblem);
                }
            }
        };

        tracing::trace!("computing deferred type");
        let result = ensure_sufficient_stack(thunk);

        let mut slot = self.slot.lock();
        match result {
            Ok(ty) => {
                *slot = Slot::Resolved(ty.clone());
                Ok(ty)
            }
            Err(err) => {
                *slot = Slot::Resolved(Type::Error);
                Err(err)
            }
        }
    }
}

impl PartialEq for DeferredType {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl Eq for DeferredType {}

impl fmt::Debug for DeferredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.slot.lock() {
            Slot::Uncomputed(_) => write!(f, "DeferredType(<uncomputed>)"),
            Slot::Computing => write!(f, "DeferredType(<computing>)"),
            Slot::Resolved(ty) => write!(f, "DeferredType({ty:?})"),
        }
    }
}
