use crate::parser::ast::{Expr, ExprBody};
use crate::parser::tests::parse_ok;
use crate::printer::SyntaxPrinter;

/// Dumps the expression body of `object M() => <source>;`.
#[track_caller]
fn expr(source: &str) -> String {
    let input = format!("class C {{ object M() => {source}; }}");
    let root = parse_ok(&input).syntax();
    let body = root
        .descendants()
        .find_map(ExprBody::cast)
        .and_then(|b| b.expr())
        .expect("expression body");
    SyntaxPrinter::new(body.as_cst()).dump()
}

#[track_caller]
fn expr_node(source: &str) -> Expr {
    let input = format!("class C {{ object M() => {source}; }}");
    let root = parse_ok(&input).syntax();
    root.descendants()
        .find_map(ExprBody::cast)
        .and_then(|b| b.expr())
        .expect("expression body")
}

#[test]
fn multiplicative_binds_tighter() {
    insta::assert_snapshot!(expr("a + b * c"), @r#"
    BinaryExpr
      NameRef
        Ident "a"
      Plus "+"
      BinaryExpr
        NameRef
          Ident "b"
        Star "*"
        NameRef
          Ident "c"
    "#);
}

#[test]
fn coalesce_is_right_associative() {
    insta::assert_snapshot!(expr("a ?? b ?? c"), @r#"
    BinaryExpr
      NameRef
        Ident "a"
      QuestionQuestion "??"
      BinaryExpr
        NameRef
          Ident "b"
        QuestionQuestion "??"
        NameRef
          Ident "c"
    "#);
}

#[test]
fn comparison_is_not_generic() {
    insta::assert_snapshot!(expr("a < b && c > d"), @r#"
    BinaryExpr
      BinaryExpr
        NameRef
          Ident "a"
        Lt "<"
        NameRef
          Ident "b"
      AmpAmp "&&"
      BinaryExpr
        NameRef
          Ident "c"
        Gt ">"
        NameRef
          Ident "d"
    "#);
}

#[test]
fn generic_invocation() {
    insta::assert_snapshot!(expr("Enum.Parse<Status>(text)"), @r#"
    Invocation
      MemberAccess
        NameRef
          Ident "Enum"
        Dot "."
        Ident "Parse"
        TypeArgList
          Lt "<"
          TypeRef
            Ident "Status"
          Gt ">"
      ArgList
        ParenOpen "("
        Arg
          NameRef
            Ident "text"
        ParenClose ")"
    "#);
}

#[test]
fn right_shift_joins_two_tokens() {
    insta::assert_snapshot!(expr("x >> 2"), @r#"
    BinaryExpr
      NameRef
        Ident "x"
      Gt ">"
      Gt ">"
      Literal
        Number "2"
    "#);
}

#[test]
fn cast_expression() {
    insta::assert_snapshot!(expr("(Status)value"), @r#"
    CastExpr
      ParenOpen "("
      TypeRef
        Ident "Status"
      ParenClose ")"
      NameRef
        Ident "value"
    "#);
}

#[test]
fn parenthesized_name_before_operator_is_not_cast() {
    assert!(matches!(expr_node("(a) - b"), Expr::BinaryExpr(_)));
}

#[test]
fn is_pattern_expression() {
    insta::assert_snapshot!(expr("x is Status.A or Status.B"), @r#"
    IsExpr
      NameRef
        Ident "x"
      KwIs "is"
      BinaryPattern
        ConstantPattern
          MemberAccess
            NameRef
              Ident "Status"
            Dot "."
            Ident "A"
        Ident "or"
        ConstantPattern
          MemberAccess
            NameRef
              Ident "Status"
            Dot "."
            Ident "B"
    "#);
}

#[test]
fn postfix_chain() {
    insta::assert_snapshot!(expr("items?.First()[0]!"), @r#"
    PostfixExpr
      ElementAccess
        Invocation
          MemberAccess
            NameRef
              Ident "items"
            QuestionDot "?."
            Ident "First"
          ArgList
            ParenOpen "("
            ParenClose ")"
        ArgList
          BracketOpen "["
          Arg
            Literal
              Number "0"
          BracketClose "]"
      Bang "!"
    "#);
}

#[test]
fn lambda_bodies() {
    assert!(matches!(expr_node("s => s == Status.A"), Expr::LambdaExpr(_)));
    assert!(matches!(expr_node("(a, b) => a + b"), Expr::LambdaExpr(_)));
    assert!(matches!(expr_node("async () => { await Task.Yield(); }"), Expr::LambdaExpr(_)));

    let Expr::LambdaExpr(lambda) = expr_node("(Status s, int n) => n") else {
        panic!("expected lambda");
    };
    let params = lambda.params();
    assert_eq!(params.len(), 2);
    assert!(params[0].ty().is_some());
}

#[test]
fn assignment_of_conditional() {
    let Expr::AssignExpr(assign) = expr_node("x = ready ? 1 : 2") else {
        panic!("expected assignment");
    };
    assert!(matches!(assign.value(), Some(Expr::ConditionalExpr(_))));
}

#[test]
fn object_creation_with_initializer() {
    let Expr::ObjectCreation(creation) = expr_node("new Order { Status = Status.A }") else {
        panic!("expected object creation");
    };
    assert_eq!(creation.ty().unwrap().last_segment().unwrap().text(), "Order");
    assert!(!creation.is_array());
}

#[test]
fn array_creation() {
    let Expr::ObjectCreation(creation) = expr_node("new Status[3]") else {
        panic!("expected array creation");
    };
    assert!(creation.is_array());
}

#[test]
fn prefix_operators() {
    assert!(matches!(expr_node("-x"), Expr::PrefixExpr(_)));
    assert!(matches!(expr_node("!done"), Expr::PrefixExpr(_)));
    assert!(matches!(expr_node("await LoadAsync()"), Expr::PrefixExpr(_)));
}

#[test]
fn tuple_and_paren() {
    assert!(matches!(expr_node("(a, b)"), Expr::TupleExpr(_)));
    assert!(matches!(expr_node("(a)"), Expr::ParenExpr(_)));
}

#[test]
fn as_expression() {
    let Expr::AsExpr(as_expr) = expr_node("o as Order") else {
        panic!("expected as");
    };
    assert_eq!(as_expr.ty().unwrap().last_segment().unwrap().text(), "Order");
}

#[test]
fn interpolated_string_literal() {
    assert!(matches!(expr_node("$\"{a} and {b}\""), Expr::Literal(_)));
}
