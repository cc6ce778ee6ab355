use indoc::indoc;

use crate::parser::SyntaxKind;
use crate::parser::ast::SwitchStmt;
use crate::parser::tests::{dump_with_trivia, parse_ok};

#[test]
fn leading_comment_stays_outside_declaration() {
    let input = "// orders\nenum Status { A }\n";

    insta::assert_snapshot!(dump_with_trivia(input), @r#"
    CompilationUnit
      LineComment "// orders"
      Newline "\n"
      EnumDecl
        KwEnum "enum"
        Whitespace " "
        Ident "Status"
        Whitespace " "
        BraceOpen "{"
        Whitespace " "
        EnumMember
          Ident "A"
        Whitespace " "
        BraceClose "}"
      Newline "\n"
    "#);
}

#[test]
fn comment_between_sections_belongs_to_switch() {
    let input = indoc! {r#"
        class C {
            void M(Status s) {
                switch (s) {
                    // accepted orders
                    case Status.A: break;
                    /* the rest */
                    default: break;
                }
            }
        }
    "#};
    let root = parse_ok(input).syntax();
    let switch = root.descendants().find_map(SwitchStmt::cast).unwrap();
    let direct_comments: Vec<_> = switch
        .as_cst()
        .children_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(|t| matches!(t.kind(), SyntaxKind::LineComment | SyntaxKind::BlockComment))
        .map(|t| t.text().to_string())
        .collect();
    assert_eq!(direct_comments, ["// accepted orders", "/* the rest */"]);
}

#[test]
fn directives_are_trivia() {
    let input = indoc! {r#"
        #region Orders
        enum Status { A }
        #endregion
    "#};
    let root = parse_ok(input).syntax();
    assert_eq!(root.to_string(), input);
    let directives = root
        .descendants_with_tokens()
        .filter(|it| it.kind() == SyntaxKind::Directive)
        .count();
    assert_eq!(directives, 2);
}

#[test]
fn tree_is_lossless() {
    let input = indoc! {r#"
        using System;

        namespace Kitchen
        {
            public enum Status { Accepted = 1, Cooking = 2, Cooked = 3, }

            public static class Describer
            {
                // Maps status to a label.
                public static string Describe(Status status)
                {
                    switch (status)
                    {
                        case Status.Accepted:
                            return "accepted";
                        default:
                            throw new ArgumentOutOfRangeException(nameof(status));
                    }
                }

                public static int Rank(Status status) => status switch
                {
                    Status.Accepted => 1,
                    _ => throw new ArgumentOutOfRangeException(nameof(status)),
                };
            }
        }
    "#};
    let root = parse_ok(input).syntax();
    assert_eq!(root.to_string(), input);
}

#[test]
fn crlf_sources_are_lossless() {
    let input = "enum Status {\r\n    A,\r\n    B,\r\n}\r\n";
    let root = parse_ok(input).syntax();
    assert_eq!(root.to_string(), input);
}
