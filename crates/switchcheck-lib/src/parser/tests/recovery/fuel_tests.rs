use crate::Error;
use crate::parser::{parse, parse_with};

fn nested_parens(depth: usize) -> String {
    format!(
        "class C {{ object M() => {}x{}; }}",
        "(".repeat(depth),
        ")".repeat(depth)
    )
}

#[test]
fn deep_nesting_hits_recursion_limit() {
    let input = nested_parens(64);
    let err = parse_with(&input, None, Some(32)).unwrap_err();
    assert!(matches!(err, Error::RecursionLimitExceeded));
}

#[test]
fn default_limits_accept_moderate_nesting() {
    let input = nested_parens(40);
    let (_, diagnostics) = parse(&input).expect("within limits");
    assert!(diagnostics.is_empty());
}

#[test]
fn exec_fuel_exhaustion() {
    let err = parse_with("enum Status { A, B, C }", Some(3), None).unwrap_err();
    assert!(matches!(err, Error::ExecFuelExhausted));
}

#[test]
fn unlimited_fuel() {
    let (_, diagnostics) = parse_with("enum Status { A, B, C }", None, None).unwrap();
    assert!(diagnostics.is_empty());
}
