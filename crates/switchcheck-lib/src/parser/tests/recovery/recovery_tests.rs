use indoc::indoc;

use crate::diagnostics::DiagnosticKind;
use crate::parser::ast::{SwitchStmt, TypeDecl};
use crate::parser::tests::{error_kinds, errors, parse_err};

#[test]
fn missing_semicolon_points_at_next_token() {
    let input = "class C { void M() { return 1 } }";

    insta::assert_snapshot!(errors(input), @r"
    error: expected `;`
      |
    1 | class C { void M() { return 1 } }
      |                               ^
    ");
}

#[test]
fn unclosed_block_reports_once() {
    let input = "class C { void M() {";

    assert_eq!(error_kinds(input), [DiagnosticKind::UnclosedBrace]);
    let rendered = errors(input);
    assert!(rendered.contains("missing closing `}`"), "{rendered}");
    assert!(rendered.contains("block started here"), "{rendered}");
}

#[test]
fn unclosed_argument_list() {
    let input = "class C { void M() { Log(1; } }";
    assert_eq!(error_kinds(input), [DiagnosticKind::UnclosedParen]);
}

#[test]
fn garbage_in_initializer_reports_root_cause() {
    let input = "class C { int x = $; }";
    assert_eq!(error_kinds(input), [DiagnosticKind::ExpectedExpression]);
}

#[test]
fn empty_condition() {
    let input = "class C { void M() { if () return; } }";
    assert_eq!(error_kinds(input), [DiagnosticKind::ExpectedExpression]);
}

#[test]
fn non_member_in_type_body() {
    let input = "class C { 42; int x; }";
    assert_eq!(error_kinds(input), [DiagnosticKind::ExpectedMember]);

    let (parse, _) = parse_err(input);
    let class = parse
        .syntax()
        .descendants()
        .find_map(TypeDecl::cast)
        .unwrap();
    assert_eq!(class.members().count(), 1);
}

#[test]
fn statement_before_first_label() {
    let input = indoc! {r#"
        class C {
            void M(Status s) {
                switch (s) {
                    break;
                    case Status.A:
                        break;
                }
            }
        }
    "#};
    let rendered = errors(input);
    assert!(rendered.contains("expected `case` or `default` label"), "{rendered}");

    let (parse, _) = parse_err(input);
    let switch = parse
        .syntax()
        .descendants()
        .find_map(SwitchStmt::cast)
        .unwrap();
    assert_eq!(switch.sections().count(), 1);
}

#[test]
fn missing_colon_after_case_label() {
    let input = indoc! {r#"
        class C {
            void M(Status s) {
                switch (s) {
                    case Status.A
                        break;
                }
            }
        }
    "#};
    let rendered = errors(input);
    assert!(rendered.contains("expected `:` after case label"), "{rendered}");
}

#[test]
fn later_switches_survive_earlier_errors() {
    let input = indoc! {r#"
        class C {
            int x = ;
            void M(Status s) {
                switch (s) {
                    case Status.A:
                        break;
                }
            }
        }
    "#};
    assert_eq!(error_kinds(input), [DiagnosticKind::ExpectedExpression]);

    let (parse, _) = parse_err(input);
    let switch = parse
        .syntax()
        .descendants()
        .find_map(SwitchStmt::cast)
        .unwrap();
    assert_eq!(switch.sections().count(), 1);
}

#[test]
fn stray_closing_brace_at_top_level() {
    let input = "enum Status { A } }";
    assert_eq!(error_kinds(input), [DiagnosticKind::ExpectedMember]);
}
