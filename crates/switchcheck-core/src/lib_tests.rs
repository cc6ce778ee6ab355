use crate::{DeclTable, MemberKind, SymbolKind, TypeInfo, TypeKind};

#[test]
fn enum_members_keep_declaration_order() {
    let mut table = DeclTable::new();
    let status = table.declare_type("Status", TypeKind::Enum, None, None);
    let accepted = table.declare_member(status, "Accepted", MemberKind::EnumMember);
    let cooking = table.declare_member(status, "Cooking", MemberKind::EnumMember);
    let cooked = table.declare_member(status, "Cooked", MemberKind::EnumMember);

    let members: Vec<_> = table.enum_members(status).collect();
    assert_eq!(members, [(accepted, 0), (cooking, 1), (cooked, 2)]);
    assert_eq!(table.symbol_name(cooking), "Cooking");
}

#[test]
fn same_member_name_in_two_enums_has_distinct_identity() {
    let mut table = DeclTable::new();
    let a = table.declare_type("A", TypeKind::Enum, None, None);
    let b = table.declare_type("B", TypeKind::Enum, None, None);
    let a_done = table.declare_member(a, "Done", MemberKind::EnumMember);
    let b_done = table.declare_member(b, "Done", MemberKind::EnumMember);

    assert_ne!(a_done, b_done);
    assert_eq!(table.member_named(a, "Done"), Some(a_done));
    assert_eq!(table.member_named(b, "Done"), Some(b_done));
    assert_eq!(
        table.symbol(b_done).kind,
        SymbolKind::EnumMember {
            owner: b,
            ordinal: 0
        }
    );
}

#[test]
fn ordinals_skip_non_enum_members() {
    let mut table = DeclTable::new();
    let c = table.declare_type("C", TypeKind::Class, None, None);
    table.declare_member(c, "field", MemberKind::Field);
    table.declare_member(c, "Run", MemberKind::Method);

    assert_eq!(table.enum_members(c).count(), 0);
    assert_eq!(table.type_decl(c).members().len(), 2);
}

#[test]
fn nested_and_namespaced_lookup() {
    let mut table = DeclTable::new();
    let outer = table.declare_type("Outer", TypeKind::Class, None, Some("App.Models"));
    let inner = table.declare_type("Kind", TypeKind::Enum, Some(outer), Some("App.Models"));
    let top = table.declare_type("Kind", TypeKind::Enum, None, Some("App"));

    assert_eq!(table.types_named("Kind"), [inner, top]);
    assert_eq!(table.nested_type(outer, "Kind"), Some(inner));
    assert_eq!(table.type_in_namespace("App", "Kind"), Some(top));
    assert_eq!(table.type_in_namespace("App.Models", "Outer"), Some(outer));
    assert!(table.is_namespace("App"));
    assert!(table.is_namespace("App.Models"));
    assert!(!table.is_namespace("Ap"));
}

#[test]
fn primitives_are_shared_and_not_name_indexed() {
    let mut table = DeclTable::new();
    let a = table.primitive("int");
    let b = table.primitive("int");

    assert_eq!(a, b);
    assert_eq!(table.find_primitive("int"), Some(a));
    assert!(table.types_named("int").is_empty());
    assert_eq!(table.type_info(a).kind, TypeKind::Primitive);
}

#[test]
fn type_info_carries_simple_name() {
    let mut table = DeclTable::new();
    let status = table.declare_type("Status", TypeKind::Enum, None, Some("Kitchen"));

    let info = table.type_info(status);
    assert_eq!(
        info,
        TypeInfo {
            kind: TypeKind::Enum,
            name: "Status".to_owned(),
            decl: Some(status),
        }
    );
    assert!(info.kind.is_closed_domain());
    assert!(TypeInfo::unknown().is_unknown());
    assert_eq!(TypeInfo::external("Foo").kind, TypeKind::External);
}

#[test]
#[should_panic(expected = "not found")]
fn foreign_handle_panics() {
    let mut other = DeclTable::new();
    other.declare_type("A", TypeKind::Class, None, None);
    let foreign = other.declare_type("B", TypeKind::Class, None, None);

    let table = DeclTable::new();
    table.type_decl(foreign);
}
