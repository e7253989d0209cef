//! The `Type` value.

use std::fmt;

use vela_ir::{Name, StringInterner};

use crate::{DeferredState, DeferredType};

/// A type as seen by call checking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Type {
    /// A class or alias reference, e.g. `List<Int>?`.
    Named {
        name: Name,
        arguments: Vec<Type>,
        nullable: bool,
    },
    /// The bottom type. `Nothing?` only admits `null`.
    Nothing { nullable: bool },
    /// Placeholder left by earlier errors.
    Error,
    /// Type whose value is computed on first demand.
    Deferred(DeferredType),
}

impl Type {
    /// Non-null, non-generic named type.
    pub fn named(name: Name) -> Self {
        Type::Named {
            name,
            arguments: Vec::new(),
            nullable: false,
        }
    }

    /// Nullable variant of this type. Deferred types are returned unchanged.
    #[must_use]
    pub fn nullable(self) -> Self {
        match self {
            Type::Named {
                name, arguments, ..
            } => Type::Named {
                name,
                arguments,
                nullable: true,
            },
            Type::Nothing { .. } => Type::Nothing { nullable: true },
            other => other,
        }
    }

    /// True for `Nothing` and `Nothing?`. Does not look through placeholders.
    pub fn is_nothing(&self) -> bool {
        matches!(self, Type::Nothing { .. })
    }

    /// Does not look through placeholders.
    pub fn is_nullable(&self) -> bool {
        match self {
            Type::Named { nullable, .. } | Type::Nothing { nullable } => *nullable,
            Type::Error | Type::Deferred(_) => false,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Type::Error)
    }

    pub fn as_deferred(&self) -> Option<&DeferredType> {
        match self {
            Type::Deferred(deferred) => Some(deferred),
            _ => None,
        }
    }

    /// Render with names looked up in `interner`.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> TypeDisplay<'a> {
        TypeDisplay { ty: self, interner }
    }
}

/// [`Type`] paired with the interner needed to print it.
///
/// Printing never forces a placeholder: an unresolved one prints as
/// `<deferred>`, one under computation as `<computing>`.
pub struct TypeDisplay<'a> {
    ty: &'a Type,
    interner: &'a StringInterner,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty {
            Type::Named {
                name,
                arguments,
                nullable,
            } => {
                write!(f, "{}", self.interner.lookup(*name))?;
                if !arguments.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in arguments.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", arg.display(self.interner))?;
                    }
                    write!(f, ">")?;
                }
                if *nullable {
                    write!(f, "?")?;
                }
                Ok(())
            }
            Type::Nothing { nullable } => {
                write!(f, "Nothing{}", if *nullable { "?" } else { "" })
            }
            Type::Error => write!(f, "<error>"),
            Type::Deferred(deferred) => match deferred.peek() {
                Some(ty) => write!(f, "{}", ty.display(self.interner)),
                None if deferred.state() == DeferredState::Computing => write!(f, "<computing>"),
                None => write!(f, "<deferred>"),
            },
        }
    }
}
