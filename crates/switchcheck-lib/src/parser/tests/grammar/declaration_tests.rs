use indoc::indoc;

use crate::parser::ast::{Member, NamespaceDecl, TypeDecl};
use crate::parser::tests::{dump, parse_ok};

#[test]
fn enum_declaration() {
    insta::assert_snapshot!(dump("enum Status { A = 1, B }"), @r#"
    CompilationUnit
      EnumDecl
        KwEnum "enum"
        Ident "Status"
        BraceOpen "{"
        EnumMember
          Ident "A"
          Equals "="
          Literal
            Number "1"
        Comma ","
        EnumMember
          Ident "B"
        BraceClose "}"
    "#);
}

#[test]
fn enum_with_attribute_and_base_type() {
    insta::assert_snapshot!(dump("[Flags] enum Mode : byte { None = 0, Hot = 1 << 0, }"), @r#"
    CompilationUnit
      EnumDecl
        AttributeList
          BracketOpen "["
          Ident "Flags"
          BracketClose "]"
        KwEnum "enum"
        Ident "Mode"
        Colon ":"
        TypeRef
          PredefinedType "byte"
        BraceOpen "{"
        EnumMember
          Ident "None"
          Equals "="
          Literal
            Number "0"
        Comma ","
        EnumMember
          Ident "Hot"
          Equals "="
          BinaryExpr
            Literal
              Number "1"
            LtLt "<<"
            Literal
              Number "0"
        Comma ","
        BraceClose "}"
    "#);
}

#[test]
fn file_scoped_namespace_owns_following_declarations() {
    let input = indoc! {r#"
        namespace Kitchen.Orders;

        enum Status { A }
        class Order { }
    "#};
    let root = parse_ok(input).syntax();
    let ns = root.descendants().find_map(NamespaceDecl::cast).unwrap();
    assert_eq!(ns.name(), "Kitchen.Orders");
    assert_eq!(ns.members().count(), 2);
}

#[test]
fn class_member_kinds() {
    let input = indoc! {r#"
        public sealed class Order : Entity, IOrder
        {
            public Order(int id) : base(id) { }
            public Status Status { get; private set; } = Status.A;
            public bool Done => Status == Status.C;
            private readonly int _id, _copy;
            public T Get<T>(int id) where T : class => default;
            enum Inner { X }
            class Nested { }
        }
    "#};
    let root = parse_ok(input).syntax();
    let class = root.descendants().find_map(TypeDecl::cast).unwrap();
    let kinds: Vec<_> = class
        .members()
        .map(|m| match m {
            Member::ConstructorDecl(_) => "ctor",
            Member::PropertyDecl(_) => "property",
            Member::FieldDecl(_) => "field",
            Member::MethodDecl(_) => "method",
            Member::EnumDecl(_) => "enum",
            Member::TypeDecl(_) => "type",
            Member::UsingDirective(_) | Member::NamespaceDecl(_) => "other",
        })
        .collect();
    assert_eq!(
        kinds,
        ["ctor", "property", "property", "field", "method", "enum", "type"]
    );
}

#[test]
fn record_with_primary_constructor() {
    let root = parse_ok("public record Order(int Id, Status Status);").syntax();
    let record = root.descendants().find_map(TypeDecl::cast).unwrap();
    assert_eq!(record.name().unwrap().text(), "Order");
    assert_eq!(record.param_list().unwrap().params().count(), 2);
}

#[test]
fn interface_method_signatures() {
    let input = "interface IOrders { Status Get(int id); void Put(Order o); }";
    let root = parse_ok(input).syntax();
    let iface = root.descendants().find_map(TypeDecl::cast).unwrap();
    assert_eq!(iface.members().count(), 2);
}

#[test]
fn using_directives_before_namespace() {
    let input = indoc! {r#"
        using System;
        using static System.Math;
        using Alias = Kitchen.Status;

        namespace Kitchen { }
    "#};
    let root = parse_ok(input).syntax();
    assert_eq!(
        root.children()
            .filter(|n| n.kind() == crate::parser::SyntaxKind::UsingDirective)
            .count(),
        3
    );
}
