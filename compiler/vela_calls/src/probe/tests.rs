use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use vela_ir::StringInterner;
use vela_types::{DeferredState, DeferredType};

/// Stand-in for the inference engine that counts how often it computes.
#[derive(Default)]
struct CountingInference {
    computations: Arc<AtomicUsize>,
}

impl CountingInference {
    fn placeholder(&self, result: Type) -> DeferredType {
        let computations = Arc::clone(&self.computations);
        DeferredType::new(move || {
            computations.fetch_add(1, Ordering::SeqCst);
            Ok(result)
        })
    }

    fn computations(&self) -> usize {
        self.computations.load(Ordering::SeqCst)
    }
}

#[test]
fn test_resolved_type_is_not_computing() {
    let interner = StringInterner::new();
    let engine = CountingInference::default();

    assert!(!is_computing_deferred_type(&Type::named(interner.intern("Int"))));
    assert!(!is_computing_deferred_type(&Type::Error));
    assert_eq!(engine.computations(), 0);
}

#[test]
fn test_unentered_placeholder_is_not_computing_and_stays_unentered() {
    let engine = CountingInference::default();
    let placeholder = engine.placeholder(Type::Nothing { nullable: false });
    let ty = Type::Deferred(placeholder.clone());

    assert!(!is_computing_deferred_type(&ty));
    assert_eq!(engine.computations(), 0);
    assert_eq!(placeholder.state(), DeferredState::Uncomputed);
}

#[test]
fn test_resolved_placeholder_is_not_computing() {
    let engine = CountingInference::default();
    let placeholder = engine.placeholder(Type::Error);
    let _ = placeholder.force();
    assert_eq!(engine.computations(), 1);

    assert!(!is_computing_deferred_type(&Type::Deferred(placeholder)));
    assert_eq!(engine.computations(), 1);
}

#[test]
fn test_placeholder_mid_computation_is_computing() {
    let seen_from_inside: Arc<OnceLock<bool>> = Arc::new(OnceLock::new());
    let cell: Arc<OnceLock<DeferredType>> = Arc::new(OnceLock::new());

    let seen = Arc::clone(&seen_from_inside);
    let me = Arc::clone(&cell);
    let placeholder = DeferredType::new(move || {
        if let Some(me) = me.get() {
            let _ = seen.set(is_computing_deferred_type(&Type::Deferred(me.clone())));
        }
        Ok(Type::Nothing { nullable: false })
    });
    let _ = cell.set(placeholder.clone());

    assert_eq!(placeholder.force(), Ok(Type::Nothing { nullable: false }));
    assert_eq!(seen_from_inside.get(), Some(&true));
    assert!(!is_computing_deferred_type(&Type::Deferred(placeholder)));
}

#[test]
fn test_computing_check_available_on_checkers() {
    struct Silent;
    impl CallChecker for Silent {
        fn check(
            &self,
            _call: &vela_resolve::ResolvedCall,
            _report_on: crate::ReportOn,
            _ctx: &crate::CallCheckerContext<'_>,
        ) {
        }
    }

    let as_dyn: &dyn CallChecker = &Silent;
    assert!(!as_dyn.is_computing_deferred_type(&Type::Error));
    assert!(!Silent.is_computing_deferred_type(&Type::Error));
}
