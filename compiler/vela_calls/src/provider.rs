//! Assembling the checker set a compilation runs.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::checkers::{
    AnnotationArgumentChecker, ImplicitNothingChecker, LanguageFeatureChecker,
    NoDeprecatedCallChecker, UnnecessarySafeCallChecker, VisibilityChecker,
};
use crate::CallChecker;

/// Source of checkers for a [`CallCheckerDispatcher`](crate::CallCheckerDispatcher).
///
/// Platforms implement this to contribute checkers of their own, e.g.
/// rejecting calls a particular backend cannot lower.
pub trait CallCheckerProvider {
    fn call_checkers(&self) -> Vec<Box<dyn CallChecker>>;
}

/// Which checkers are switched off, by [`CallChecker::name`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckerConfig {
    disabled: FxHashSet<String>,
}

impl CheckerConfig {
    #[must_use]
    pub fn disable(mut self, name: impl Into<String>) -> Self {
        self.disabled.insert(name.into());
        self
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        !self.disabled.contains(name)
    }
}

/// The built-in checkers, followed by those of any additional providers,
/// minus what the config disables.
#[derive(Default)]
pub struct DefaultCallCheckerProvider {
    config: CheckerConfig,
    additional: Vec<Box<dyn CallCheckerProvider + Send + Sync>>,
}

impl DefaultCallCheckerProvider {
    pub fn new(config: CheckerConfig) -> Self {
        DefaultCallCheckerProvider {
            config,
            additional: Vec::new(),
        }
    }

    /// Append the checkers of `provider` after the built-ins.
    #[must_use]
    pub fn with_additional(
        mut self,
        provider: impl CallCheckerProvider + Send + Sync + 'static,
    ) -> Self {
        self.additional.push(Box::new(provider));
        self
    }

    fn builtins() -> Vec<Box<dyn CallChecker>> {
        vec![
            Box::new(NoDeprecatedCallChecker),
            Box::new(VisibilityChecker),
            Box::new(LanguageFeatureChecker),
            Box::new(AnnotationArgumentChecker),
            Box::new(ImplicitNothingChecker),
            Box::new(UnnecessarySafeCallChecker),
        ]
    }
}

impl CallCheckerProvider for DefaultCallCheckerProvider {
    fn call_checkers(&self) -> Vec<Box<dyn CallChecker>> {
        let mut checkers = Self::builtins();
        for provider in &self.additional {
            checkers.extend(provider.call_checkers());
        }
        checkers.retain(|checker| self.config.is_enabled(checker.name()));
        tracing::debug!(count = checkers.len(), "assembled call checkers");
        checkers
    }
}

impl fmt::Debug for DefaultCallCheckerProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultCallCheckerProvider")
            .field("config", &self.config)
            .field("additional", &self.additional.len())
            .finish()
    }
}

#[cfg(test)]
mod tests;
