use super::*;
use crate::{CallCheckerContext, CallCheckerDispatcher, ReportOn};
use pretty_assertions::assert_eq;
use vela_resolve::ResolvedCall;

struct BackendChecker;

impl CallChecker for BackendChecker {
    fn check(&self, _call: &ResolvedCall, _report_on: ReportOn, _ctx: &CallCheckerContext<'_>) {}
}

struct Backend;

impl CallCheckerProvider for Backend {
    fn call_checkers(&self) -> Vec<Box<dyn CallChecker>> {
        vec![Box::new(BackendChecker)]
    }
}

fn names(provider: &DefaultCallCheckerProvider) -> Vec<&'static str> {
    CallCheckerDispatcher::from_provider(provider)
        .checker_names()
        .collect()
}

#[test]
fn test_builtins_in_fixed_order() {
    assert_eq!(
        names(&DefaultCallCheckerProvider::default()),
        vec![
            "NoDeprecatedCallChecker",
            "VisibilityChecker",
            "LanguageFeatureChecker",
            "AnnotationArgumentChecker",
            "ImplicitNothingChecker",
            "UnnecessarySafeCallChecker",
        ]
    );
}

#[test]
fn test_additional_providers_follow_builtins() {
    let provider = DefaultCallCheckerProvider::default().with_additional(Backend);
    let names = names(&provider);

    assert_eq!(names.len(), 7);
    assert_eq!(names.last(), Some(&"BackendChecker"));
}

#[test]
fn test_config_disables_by_name() {
    let config = CheckerConfig::default()
        .disable("ImplicitNothingChecker")
        .disable("BackendChecker");
    assert!(!config.is_enabled("ImplicitNothingChecker"));
    assert!(config.is_enabled("VisibilityChecker"));

    let provider = DefaultCallCheckerProvider::new(config).with_additional(Backend);
    let names = names(&provider);

    assert_eq!(names.len(), 5);
    assert!(!names.contains(&"ImplicitNothingChecker"));
    assert!(!names.contains(&"BackendChecker"));
}

#[test]
fn test_unknown_names_are_ignored() {
    let provider =
        DefaultCallCheckerProvider::new(CheckerConfig::default().disable("NoSuchChecker"));
    assert_eq!(provider.call_checkers().len(), 6);
}
