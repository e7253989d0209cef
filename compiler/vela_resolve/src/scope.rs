//! Lexical scope at a call site, reduced to what visibility checks need.

use smallvec::SmallVec;
use vela_ir::Name;

use crate::{ContainerId, Visibility};

/// A class the call site is nested in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopeOwner {
    pub class: Name,
    /// All supertypes, transitively.
    pub supertypes: SmallVec<[Name; 4]>,
}

impl ScopeOwner {
    pub fn new(class: Name) -> Self {
        ScopeOwner {
            class,
            supertypes: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_supertype(mut self, supertype: Name) -> Self {
        self.supertypes.push(supertype);
        self
    }

    fn is_subclass_of(&self, class: Name) -> bool {
        self.class == class || self.supertypes.contains(&class)
    }
}

/// Where a call expression appears.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexicalScope {
    module: Name,
    file: Name,
    /// Enclosing classes, innermost first.
    enclosing: Vec<ScopeOwner>,
}

impl LexicalScope {
    /// Top level of `file` in `module`.
    pub fn file(module: Name, file: Name) -> Self {
        LexicalScope {
            module,
            file,
            enclosing: Vec::new(),
        }
    }

    /// Scope one class deeper.
    #[must_use]
    pub fn nested_in(&self, owner: ScopeOwner) -> Self {
        let mut enclosing = Vec::with_capacity(self.enclosing.len() + 1);
        enclosing.push(owner);
        enclosing.extend(self.enclosing.iter().cloned());
        LexicalScope {
            module: self.module,
            file: self.file,
            enclosing,
        }
    }

    pub fn module(&self) -> Name {
        self.module
    }

    pub fn file_name(&self) -> Name {
        self.file
    }

    /// Enclosing classes, innermost first.
    pub fn enclosing_classes(&self) -> &[ScopeOwner] {
        &self.enclosing
    }

    /// Whether a member declared in `container` with `visibility` can be
    /// accessed from here.
    pub fn can_see(&self, visibility: Visibility, container: &ContainerId) -> bool {
        match visibility {
            Visibility::Public => true,
            Visibility::Internal => container.module == self.module,
            Visibility::Private => match container.class {
                Some(class) => {
                    container.module == self.module
                        && self.enclosing.iter().any(|owner| owner.class == class)
                }
                None => container.module == self.module && container.file == self.file,
            },
            Visibility::Protected => match container.class {
                Some(class) => self.enclosing.iter().any(|owner| owner.is_subclass_of(class)),
                None => false,
            },
        }
    }
}
