use rowan::TextRange;

use super::*;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedType, range(0, 5))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    assert_eq!(diagnostics.iter().next().unwrap().message(), "expected a type");
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedIdentifier, range(0, 5))
        .message("enum member name")
        .emit();

    let msg = diagnostics.iter().next().unwrap();
    assert_eq!(msg.message(), "expected enum member name");
}

#[test]
fn builder_with_related() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedBrace, range(0, 5))
        .message("expected `}`")
        .related_to("block started here", range(6, 10))
        .emit();

    let result = diagnostics.printer("int x = (1;}").render();
    insta::assert_snapshot!(result, @r"
    error: missing closing `}`; expected `}`
      |
    1 | int x = (1;}
      | ^^^^^ ---- block started here
    ");
}

#[test]
fn builder_with_fix() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(0, 3))
        .message("`dim` is not a type")
        .fix("declare with `var`", "var")
        .emit();

    let result = diagnostics.printer("dim x = 1;").render();
    insta::assert_snapshot!(result, @r"
    error: `dim` is not a type
      |
    1 | dim x = 1;
      | ^^^
      |
    help: declare with `var`
      |
    1 - dim x = 1;
    1 + var x = 1;
      |
    ");
}

#[test]
fn warning_carries_rule_id() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::NonExhaustiveSwitch, range(0, 6))
        .message("missing `Status.Cooked`")
        .emit();

    assert!(diagnostics.has_warnings());
    assert!(!diagnostics.has_errors());
    let result = diagnostics.printer("switch (s) {}").render();
    insta::assert_snapshot!(result, @r"
    warning[non-exhaustive-enum-switch]: switch does not handle every enum member: missing `Status.Cooked`
      |
    1 | switch (s) {}
      | ^^^^^^
    ");
}

#[test]
fn printer_colored() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnrecognizedInput, range(0, 5))
        .emit();

    let result = diagnostics.printer("@@@@@").colored(true).render();
    assert!(result.contains("unrecognized input"));
    assert!(result.contains('\x1b'));
}

#[test]
fn printer_empty_diagnostics() {
    let diagnostics = Diagnostics::new();
    assert!(diagnostics.printer("class C { }").render().is_empty());
}

#[test]
fn printer_with_path() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedStatement, range(0, 4))
        .emit();

    let result = diagnostics.printer("else { }").path("Order.cs").render();
    insta::assert_snapshot!(result, @r"
    error: expected a statement
     --> Order.cs:1:1
      |
    1 | else { }
      | ^^^^
    ");
}

#[test]
fn printer_zero_width_span() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, TextRange::empty(4.into()))
        .emit();

    let result = diagnostics.printer("x = ;").render();
    insta::assert_snapshot!(result, @r"
    error: expected an expression
      |
    1 | x = ;
      |     ^
    ");
}

#[test]
fn printer_multiple_diagnostics() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(0, 5))
        .emit();
    diagnostics
        .report(DiagnosticKind::ExpectedPattern, range(6, 10))
        .emit();

    let result = diagnostics.printer("int x = (1;}").render();
    insta::assert_snapshot!(result, @r"
    error: missing closing `)`
      |
    1 | int x = (1;}
      | ^^^^^

    error: expected a pattern
      |
    1 | int x = (1;}
      |       ^^^^
    ");
}

#[test]
fn diagnostic_kind_suppression_order() {
    assert!(DiagnosticKind::UnclosedBrace.suppresses(&DiagnosticKind::UnexpectedToken));
    assert!(DiagnosticKind::ExpectedExpression.suppresses(&DiagnosticKind::NonExhaustiveSwitch));
    assert!(!DiagnosticKind::UnclosedBrace.suppresses(&DiagnosticKind::UnclosedBrace));
    assert!(!DiagnosticKind::UnexpectedToken.suppresses(&DiagnosticKind::UnclosedParen));
}

#[test]
fn diagnostic_kind_message_rendering() {
    assert_eq!(
        DiagnosticKind::UnclosedParen.message(None),
        "missing closing `)`"
    );
    assert_eq!(
        DiagnosticKind::UnclosedParen.message(Some("expected `)`")),
        "missing closing `)`; expected `)`"
    );
    assert_eq!(
        DiagnosticKind::UnexpectedToken.message(Some("expected `;`")),
        "expected `;`"
    );
    assert_eq!(
        DiagnosticKind::ExpectedPattern.message(Some("after `case`")),
        "expected a pattern: after `case`"
    );
}

#[test]
fn filtered_no_suppression_disjoint_spans() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedBrace, range(0, 5))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(10, 15))
        .emit();

    assert_eq!(diagnostics.filtered().len(), 2);
}

#[test]
fn filtered_suppresses_lower_priority_contained() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedBrace, range(0, 20))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(5, 15))
        .emit();

    let filtered = diagnostics.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].kind(), DiagnosticKind::UnclosedBrace);
}

#[test]
fn filtered_uses_suppression_range() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, range(2, 3))
        .suppression_range(range(0, 20))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(8, 9))
        .emit();

    let filtered = diagnostics.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].kind(), DiagnosticKind::ExpectedExpression);
}

#[test]
fn filtered_root_cause_beats_structural_at_same_start() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(4, 12))
        .emit();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, range(4, 5))
        .emit();

    let filtered = diagnostics.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].kind(), DiagnosticKind::ExpectedExpression);
}

#[test]
fn render_filtered() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedBrace, range(0, 20))
        .message("unclosed body")
        .emit();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(5, 15))
        .message("stray token")
        .emit();

    let result = diagnostics.render_filtered("class C { void M() {");
    assert!(result.contains("unclosed body"));
    assert!(!result.contains("stray token"));
}
