use indoc::indoc;
use switchcheck_core::{SymbolKind, TypeKind};

use super::model::Ty;
use super::{SemanticContext, bind};
use crate::parser::ast::Expr;
use crate::parser::{SyntaxNode, parse};

const SOURCE: &str = indoc! {r#"
    enum Status { Accepted, Cooking, Cooked }
    class Kitchen {
        Status current;
        void Prepare(Status next) {
            Use(current);
            Use(next);
        }
    }
"#};

fn use_site(root: &SyntaxNode, text: &str) -> Expr {
    root.descendants()
        .filter_map(Expr::cast)
        .find(|e| e.as_cst().text() == text)
        .unwrap()
}

#[test]
fn describe_members_and_locals() {
    let (parse, _) = parse(SOURCE).expect("fuel");
    let root = parse.syntax();
    let model = bind(&root);
    let decls = model.decls();

    let kitchen = decls.types_named("Kitchen")[0];
    let current = decls.member_named(kitchen, "current").unwrap();
    assert_eq!(model.describe_symbol(current), "Kitchen.current");
    assert_eq!(model.symbol_type(current).unwrap().name, "Status");
    assert_eq!(model.resolve_symbol(&use_site(&root, "current")), Some(current));

    let next = model.resolve_symbol(&use_site(&root, "next")).unwrap();
    assert_eq!(decls.symbol(next).kind, SymbolKind::Parameter);
    assert_eq!(model.describe_symbol(next), "next");
}

#[test]
fn keys_survive_a_fresh_cursor() {
    let (parse, _) = parse(SOURCE).expect("fuel");
    let model = bind(&parse.syntax());

    // A second root over the same green tree sees the same resolutions.
    let other: SyntaxNode = parse.syntax();
    let next = use_site(&other, "next");
    let ty = model.resolve_type(&next).unwrap();
    assert_eq!(ty.kind, TypeKind::Enum);
    assert!(model.resolve_symbol(&next).is_some());
}

#[test]
fn collapsed_type_info() {
    let (parse, _) = parse(SOURCE).expect("fuel");
    let model = bind(&parse.syntax());
    let status = model.decls().types_named("Status")[0];

    let plain = model.type_info(&Ty::Decl(status)).unwrap();
    assert_eq!((plain.kind, plain.name.as_str()), (TypeKind::Enum, "Status"));

    let nullable = model
        .type_info(&Ty::Nullable(Box::new(Ty::Decl(status))))
        .unwrap();
    assert_eq!(
        (nullable.kind, nullable.name.as_str(), nullable.decl),
        (TypeKind::Struct, "Nullable", None)
    );

    let nullable_external = model
        .type_info(&Ty::Nullable(Box::new(Ty::External("Order".into()))))
        .unwrap();
    assert_eq!(nullable_external.name, "Order");

    let array = model
        .type_info(&Ty::Array(Box::new(Ty::Decl(status))))
        .unwrap();
    assert_eq!((array.kind, array.name.as_str()), (TypeKind::Class, "Array"));

    assert!(model.type_info(&Ty::Unknown).is_none());
}

#[test]
fn members_of_non_domains_is_empty() {
    let (parse, _) = parse(SOURCE).expect("fuel");
    let model = bind(&parse.syntax());
    let kitchen = model.decls().types_named("Kitchen")[0];
    let info = model.decls().type_info(kitchen);

    assert_eq!(info.kind, TypeKind::Class);
    assert!(model.members_of(&info).is_empty());
    assert!(model.members_of(&switchcheck_core::TypeInfo::unknown()).is_empty());
}
