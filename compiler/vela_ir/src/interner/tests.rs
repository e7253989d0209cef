use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_intern_is_stable() {
    let interner = StringInterner::new();
    let a = interner.intern("setValue");
    let b = interner.intern("setValue");
    let c = interner.intern("getValue");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.lookup(a), "setValue");
    assert_eq!(interner.lookup(c), "getValue");
}

#[test]
fn test_empty_is_pre_interned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.len(), 1);
}

#[test]
fn test_lookup_foreign_name() {
    let big = StringInterner::new();
    for i in 0..10 {
        big.intern(&format!("n{i}"));
    }
    let foreign = big.intern("only-in-big");

    let small = StringInterner::new();
    assert_eq!(small.lookup(foreign), "");
}

#[test]
fn test_interner_shared_across_threads() {
    let shared = StringInterner::new();
    let names: Vec<Name> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = &shared;
                s.spawn(move || shared.intern("deprecatedCall"))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|_| panic!("interning thread panicked")))
            .collect()
    });

    assert!(names.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(shared.lookup(names[0]), "deprecatedCall");
}
