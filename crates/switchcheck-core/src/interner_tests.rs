use crate::{Interner, Name};

#[test]
fn intern_deduplicates() {
    let mut interner = Interner::new();

    let a = interner.intern("Status");
    let b = interner.intern("Status");
    let c = interner.intern("Accepted");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.len(), 2);
}

#[test]
fn resolve_roundtrip() {
    let mut interner = Interner::new();

    let name = interner.intern("Cooking");
    assert_eq!(interner.resolve(name), "Cooking");
}

#[test]
fn get_does_not_intern() {
    let mut interner = Interner::new();
    interner.intern("known");

    assert!(interner.get("known").is_some());
    assert!(interner.get("unknown").is_none());
    assert_eq!(interner.len(), 1);
}

#[test]
fn names_are_copy() {
    let mut interner = Interner::new();
    let name = interner.intern("x");

    let copy = name;
    assert_eq!(name, copy);
}

#[test]
fn name_ordering_is_insertion_order() {
    let mut interner = Interner::new();

    let z = interner.intern("z");
    let a = interner.intern("a");

    assert!(z < a);
}

#[test]
fn try_resolve_out_of_range() {
    let interner = Interner::new();
    let mut other = Interner::new();
    let foreign: Name = other.intern("foreign");

    assert_eq!(interner.try_resolve(foreign), None);
}

#[test]
fn iter_yields_insertion_order() {
    let mut interner = Interner::new();
    interner.intern("first");
    interner.intern("second");
    interner.intern("first");

    let names: Vec<_> = interner.iter().map(|(_, s)| s).collect();
    assert_eq!(names, ["first", "second"]);
}
