//! Declarations as seen by call resolution.

use std::fmt;

use smallvec::SmallVec;
use vela_ir::Name;
use vela_types::Type;

use crate::LanguageFeatures;

/// Declared visibility of a member.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    /// Visible inside the declaring module.
    Internal,
    /// Visible inside the declaring class and its subclasses.
    Protected,
    /// Visible inside the declaring class, or the declaring file for
    /// top-level declarations.
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Visibility::Public => "public",
            Visibility::Internal => "internal",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        })
    }
}

/// Where a declaration lives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContainerId {
    pub module: Name,
    pub file: Name,
    /// Declaring class, `None` for top-level declarations.
    pub class: Option<Name>,
}

impl ContainerId {
    pub fn top_level(module: Name, file: Name) -> Self {
        ContainerId {
            module,
            file,
            class: None,
        }
    }

    pub fn member(module: Name, file: Name, class: Name) -> Self {
        ContainerId {
            module,
            file,
            class: Some(class),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeprecationLevel {
    /// Uses are reported as warnings.
    Warning,
    /// Uses are reported as errors.
    Error,
}

/// A `@Deprecated` marker on a declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Deprecation {
    pub level: DeprecationLevel,
    pub message: Option<String>,
}

impl Deprecation {
    pub fn warning() -> Self {
        Deprecation {
            level: DeprecationLevel::Warning,
            message: None,
        }
    }

    pub fn error() -> Self {
        Deprecation {
            level: DeprecationLevel::Error,
            message: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CallableKind {
    Function,
    Constructor,
    /// Operator convention function (`plus`, `get`, `invoke`, ...).
    Operator,
    /// Property read through its getter.
    PropertyGetter,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub name: Name,
    pub ty: Type,
    pub has_default: bool,
}

/// A function, constructor or property that a call can resolve to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallableDescriptor {
    pub name: Name,
    pub kind: CallableKind,
    pub container: ContainerId,
    pub visibility: Visibility,
    pub deprecation: Option<Deprecation>,
    /// Feature the declaration needs at its use sites.
    pub required_feature: Option<LanguageFeatures>,
    /// Callable in constant expressions (annotation arguments).
    pub is_const: bool,
    /// [`Type::Deferred`] when the declaration has no explicit return type.
    pub return_type: Type,
    pub parameters: SmallVec<[ParameterDescriptor; 4]>,
}

impl CallableDescriptor {
    pub fn new(name: Name, kind: CallableKind, container: ContainerId) -> Self {
        CallableDescriptor {
            name,
            kind,
            container,
            visibility: Visibility::Public,
            deprecation: None,
            required_feature: None,
            is_const: false,
            return_type: Type::Error,
            parameters: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn with_deprecation(mut self, deprecation: Deprecation) -> Self {
        self.deprecation = Some(deprecation);
        self
    }

    #[must_use]
    pub fn with_required_feature(mut self, feature: LanguageFeatures) -> Self {
        self.required_feature = Some(feature);
        self
    }

    #[must_use]
    pub fn with_const(mut self) -> Self {
        self.is_const = true;
        self
    }

    #[must_use]
    pub fn with_return_type(mut self, ty: Type) -> Self {
        self.return_type = ty;
        self
    }

    #[must_use]
    pub fn with_parameter(mut self, name: Name, ty: Type) -> Self {
        self.parameters.push(ParameterDescriptor {
            name,
            ty,
            has_default: false,
        });
        self
    }

    /// Return type was left for inference.
    pub fn has_implicit_return_type(&self) -> bool {
        matches!(self.return_type, Type::Deferred(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    Getter,
    Setter,
}

/// The accessor an assignment target binds to.
///
/// `a.prop = v` never goes through ordinary call resolution for the setter,
/// so there is no [`ResolvedCall`](crate::ResolvedCall) for it; this is all
/// later phases get.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyAccessorDescriptor {
    pub kind: AccessorKind,
    /// The property the accessor belongs to.
    pub property: Name,
    pub container: ContainerId,
    /// Own visibility, which may be narrower than the property's.
    pub visibility: Visibility,
    pub deprecation: Option<Deprecation>,
    pub property_type: Type,
}

impl PropertyAccessorDescriptor {
    pub fn setter(property: Name, container: ContainerId, property_type: Type) -> Self {
        Self::new(AccessorKind::Setter, property, container, property_type)
    }

    pub fn getter(property: Name, container: ContainerId, property_type: Type) -> Self {
        Self::new(AccessorKind::Getter, property, container, property_type)
    }

    fn new(kind: AccessorKind, property: Name, container: ContainerId, property_type: Type) -> Self {
        PropertyAccessorDescriptor {
            kind,
            property,
            container,
            visibility: Visibility::Public,
            deprecation: None,
            property_type,
        }
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn with_deprecation(mut self, deprecation: Deprecation) -> Self {
        self.deprecation = Some(deprecation);
        self
    }

    pub fn is_setter(&self) -> bool {
        self.kind == AccessorKind::Setter
    }
}
