mod grammar;
mod recovery;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser::{Parse, parse};
use crate::printer::SyntaxPrinter;

#[track_caller]
fn parse_ok(source: &str) -> Parse {
    let (parse, diagnostics) = parse(source).expect("parser fuel exhausted");
    assert!(
        diagnostics.is_empty(),
        "unexpected diagnostics:\n{}",
        diagnostics.render(source)
    );
    parse
}

#[track_caller]
fn parse_err(source: &str) -> (Parse, Diagnostics) {
    let (parse, diagnostics) = parse(source).expect("parser fuel exhausted");
    assert!(diagnostics.has_errors(), "expected parse errors");
    assert_eq!(parse.syntax().to_string(), source, "tree must stay lossless");
    (parse, diagnostics)
}

/// Tree dump without trivia; fails on any diagnostic.
#[track_caller]
fn dump(source: &str) -> String {
    SyntaxPrinter::new(&parse_ok(source).syntax()).dump()
}

#[track_caller]
fn dump_with_trivia(source: &str) -> String {
    SyntaxPrinter::new(&parse_ok(source).syntax())
        .with_trivia(true)
        .dump()
}

#[track_caller]
fn errors(source: &str) -> String {
    let (_, diagnostics) = parse_err(source);
    diagnostics.render_filtered(source)
}

#[track_caller]
fn error_kinds(source: &str) -> Vec<DiagnosticKind> {
    let (_, diagnostics) = parse_err(source);
    diagnostics.filtered().iter().map(|d| d.kind()).collect()
}
