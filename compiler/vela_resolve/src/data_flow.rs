//! Flow-sensitive facts about stable values at a program point.
//!
//! `DataFlowInfo` is a value: refining it produces a new info and leaves the
//! original untouched, so a snapshot taken at a call site cannot be changed
//! by analysis that continues afterwards.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use vela_ir::Name;
use vela_types::Type;

/// A value whose facts can be tracked: a `val` local, parameter, or
/// stable property path rooted in one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DataFlowValue(Name);

impl DataFlowValue {
    pub fn stable(name: Name) -> Self {
        DataFlowValue(name)
    }

    pub fn name(self) -> Name {
        self.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Nullability {
    Null,
    NotNull,
    #[default]
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Facts {
    nullability: FxHashMap<DataFlowValue, Nullability>,
    /// Types a value is known to have beyond its declared type (smart casts).
    types: FxHashMap<DataFlowValue, SmallVec<[Type; 2]>>,
}

/// Immutable set of flow facts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataFlowInfo {
    facts: Arc<Facts>,
}

impl DataFlowInfo {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn nullability(&self, value: DataFlowValue) -> Nullability {
        self.facts
            .nullability
            .get(&value)
            .copied()
            .unwrap_or_default()
    }

    /// Smart-cast types recorded for `value`.
    pub fn stable_types(&self, value: DataFlowValue) -> &[Type] {
        self.facts
            .types
            .get(&value)
            .map(SmallVec::as_slice)
            .unwrap_or(&[])
    }

    /// Info with `value`'s nullability replaced.
    #[must_use]
    pub fn with_nullability(&self, value: DataFlowValue, nullability: Nullability) -> Self {
        let mut facts = (*self.facts).clone();
        facts.nullability.insert(value, nullability);
        DataFlowInfo {
            facts: Arc::new(facts),
        }
    }

    /// Info that additionally knows `value: ty`.
    #[must_use]
    pub fn with_type(&self, value: DataFlowValue, ty: Type) -> Self {
        let mut facts = (*self.facts).clone();
        let types = facts.types.entry(value).or_default();
        if !types.contains(&ty) {
            types.push(ty);
        }
        DataFlowInfo {
            facts: Arc::new(facts),
        }
    }
}
