use indoc::indoc;

use crate::parser::ast::{Expr, Label, Pattern, SwitchExpr, SwitchStmt};
use crate::parser::tests::{dump, parse_ok};

#[test]
fn switch_statement_sections() {
    let input = "class C { void M() { switch (s) { case A.B: break; default: throw new X(); } } }";

    insta::assert_snapshot!(dump(input), @r#"
    CompilationUnit
      TypeDecl
        KwClass "class"
        Ident "C"
        BraceOpen "{"
        MethodDecl
          TypeRef
            PredefinedType "void"
          Ident "M"
          ParamList
            ParenOpen "("
            ParenClose ")"
          Block
            BraceOpen "{"
            SwitchStmt
              KwSwitch "switch"
              ParenOpen "("
              NameRef
                Ident "s"
              ParenClose ")"
              BraceOpen "{"
              SwitchSection
                CaseLabel
                  KwCase "case"
                  ConstantPattern
                    MemberAccess
                      NameRef
                        Ident "A"
                      Dot "."
                      Ident "B"
                  Colon ":"
                BreakStmt
                  KwBreak "break"
                  Semicolon ";"
              SwitchSection
                DefaultLabel
                  KwDefault "default"
                  Colon ":"
                ThrowStmt
                  KwThrow "throw"
                  ObjectCreation
                    KwNew "new"
                    TypeRef
                      Ident "X"
                    ArgList
                      ParenOpen "("
                      ParenClose ")"
                  Semicolon ";"
              BraceClose "}"
            BraceClose "}"
        BraceClose "}"
    "#);
}

#[test]
fn switch_expression_arms() {
    let input = "class C { int M(S s) => s switch { S.A => 1, _ => 0 }; }";

    insta::assert_snapshot!(dump(input), @r#"
    CompilationUnit
      TypeDecl
        KwClass "class"
        Ident "C"
        BraceOpen "{"
        MethodDecl
          TypeRef
            PredefinedType "int"
          Ident "M"
          ParamList
            ParenOpen "("
            Param
              TypeRef
                Ident "S"
              Ident "s"
            ParenClose ")"
          ExprBody
            FatArrow "=>"
            SwitchExpr
              NameRef
                Ident "s"
              KwSwitch "switch"
              BraceOpen "{"
              SwitchArm
                ConstantPattern
                  MemberAccess
                    NameRef
                      Ident "S"
                    Dot "."
                    Ident "A"
                FatArrow "=>"
                Literal
                  Number "1"
              Comma ","
              SwitchArm
                DiscardPattern
                  Ident "_"
                FatArrow "=>"
                Literal
                  Number "0"
              BraceClose "}"
          Semicolon ";"
        BraceClose "}"
    "#);
}

#[test]
fn section_spans_exclude_surrounding_trivia() {
    let input = indoc! {r#"
        class C {
            void M(Status s) {
                switch (s) {
                    case Status.A: // first
                        break;

                    default:
                        return;
                }
            }
        }
    "#};
    let root = parse_ok(input).syntax();
    let switch = root.descendants().find_map(SwitchStmt::cast).unwrap();
    let sections: Vec<_> = switch
        .sections()
        .map(|s| s.as_cst().text().to_string())
        .collect();

    assert_eq!(sections.len(), 2);
    assert!(sections[0].starts_with("case Status.A: // first"));
    assert!(sections[0].ends_with("break;"));
    assert!(sections[1].starts_with("default:"));
    assert!(sections[1].ends_with("return;"));
}

#[test]
fn arm_spans_exclude_separators() {
    let input = indoc! {r#"
        class C {
            int M(Status s) => s switch
            {
                Status.A => 1, // one
                _ => 0,
            };
        }
    "#};
    let root = parse_ok(input).syntax();
    let switch = root.descendants().find_map(SwitchExpr::cast).unwrap();
    let arms: Vec<_> = switch
        .arms()
        .map(|a| a.as_cst().text().to_string())
        .collect();
    assert_eq!(arms, ["Status.A => 1", "_ => 0"]);
}

#[test]
fn stacked_labels_share_a_section() {
    let input = indoc! {r#"
        class C {
            void M(Status s) {
                switch (s) {
                    case Status.A:
                    case Status.B:
                        break;
                }
            }
        }
    "#};
    let root = parse_ok(input).syntax();
    let switch = root.descendants().find_map(SwitchStmt::cast).unwrap();
    let sections: Vec<_> = switch.sections().collect();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].labels().count(), 2);
    assert_eq!(sections[0].statements().count(), 1);
}

#[test]
fn tuple_discriminant() {
    let input = indoc! {r#"
        class C {
            void M(Status a, Status b) {
                switch (a, b) {
                    case (Status.A, _):
                        break;
                }
            }
        }
    "#};
    let root = parse_ok(input).syntax();
    let switch = root.descendants().find_map(SwitchStmt::cast).unwrap();
    assert!(matches!(switch.discriminant(), Some(Expr::TupleExpr(_))));

    let section = switch.sections().next().unwrap();
    let Some(Label::CaseLabel(label)) = section.labels().next() else {
        panic!("expected case label");
    };
    assert!(matches!(label.pattern(), Some(Pattern::ParenPattern(_))));
}

#[test]
fn pattern_forms() {
    let input = indoc! {r#"
        class C {
            void M(object o) {
                switch (o) {
                    case Status.A or Status.B:
                    case >= 1 and < 3:
                    case not null:
                    case Status x when x == Status.C:
                    case var y:
                    case { Length: 0 }:
                    case Order { Status: Status.A } order:
                        break;
                }
            }
        }
    "#};
    let root = parse_ok(input).syntax();
    let switch = root.descendants().find_map(SwitchStmt::cast).unwrap();
    let patterns: Vec<_> = switch
        .sections()
        .flat_map(|s| s.labels().collect::<Vec<_>>())
        .filter_map(|l| match l {
            Label::CaseLabel(c) => c.pattern(),
            Label::DefaultLabel(_) => None,
        })
        .map(|p| format!("{:?}", p.as_cst().kind()))
        .collect();

    insta::assert_snapshot!(patterns.join("\n"), @r"
    BinaryPattern
    BinaryPattern
    NotPattern
    DeclarationPattern
    VarPattern
    PropertyPattern
    PropertyPattern
    ");
}

#[test]
fn default_label_is_not_default_expression() {
    let input = indoc! {r#"
        class C {
            int M(Status s) {
                switch (s) {
                    default:
                        return default(int);
                }
            }
        }
    "#};
    let root = parse_ok(input).syntax();
    let switch = root.descendants().find_map(SwitchStmt::cast).unwrap();
    let section = switch.sections().next().unwrap();
    assert!(section.is_default());
}

#[test]
fn switch_expression_in_local_initializer() {
    let input = indoc! {r#"
        class C {
            void M(Status s) {
                var label = s switch { Status.A => "a", _ => "other" };
            }
        }
    "#};
    let root = parse_ok(input).syntax();
    assert_eq!(root.descendants().filter_map(SwitchExpr::cast).count(), 1);
}

#[test]
fn chained_switch_expressions() {
    let input = "class C { int M(Status s) => s switch { _ => s } switch { _ => 1 }; }";
    let root = parse_ok(input).syntax();
    let outer = root.descendants().find_map(SwitchExpr::cast).unwrap();
    assert!(matches!(outer.discriminant(), Some(Expr::SwitchExpr(_))));
}
