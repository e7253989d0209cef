//! Built-in call checkers.
//!
//! Each one looks at a single aspect of a resolved call and reports through
//! [`CallCheckerContext::report`](crate::CallCheckerContext::report).
//! [`DefaultCallCheckerProvider`](crate::DefaultCallCheckerProvider)
//! registers them in the order they are declared here.

mod annotation;
mod deprecated;
mod feature;
mod implicit_nothing;
mod safe_call;
mod visibility;

pub use annotation::AnnotationArgumentChecker;
pub use deprecated::NoDeprecatedCallChecker;
pub use feature::LanguageFeatureChecker;
pub use implicit_nothing::ImplicitNothingChecker;
pub use safe_call::UnnecessarySafeCallChecker;
pub use visibility::VisibilityChecker;

use vela_resolve::ContainerId;

use crate::CallCheckerContext;

/// Where a declaration lives, for messages: the class, or the file for
/// top-level declarations.
fn container_str(container: &ContainerId, ctx: &CallCheckerContext<'_>) -> &'static str {
    ctx.name_str(container.class.unwrap_or(container.file))
}
