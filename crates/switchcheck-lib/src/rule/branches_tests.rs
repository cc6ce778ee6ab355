use indoc::indoc;

use super::scenarios::in_method;
use super::{Branch, BranchConstruct, ConstructForm};
use crate::parser::{SyntaxNode, parse};

fn constructs(source: &str) -> Vec<BranchConstruct> {
    let (parse, diagnostics) = parse(source).expect("fuel");
    assert!(diagnostics.is_empty(), "{}", diagnostics.render(source));
    let root: SyntaxNode = parse.syntax();
    root.descendants().filter_map(BranchConstruct::cast).collect()
}

fn accesses(branch: &Branch) -> Vec<String> {
    branch
        .member_accesses()
        .iter()
        .map(|access| access.as_cst().text().to_string())
        .collect()
}

#[test]
fn statement_sections_and_default() {
    let source = in_method(indoc! {r#"
        switch (status)
        {
            case Status.Accepted:
            case Status.Cooking:
                return 1;
            case Status.Cooked:
            default:
                return 2;
        }
    "#});
    let construct = &constructs(&source)[0];
    assert_eq!(construct.form(), ConstructForm::Statement);
    assert_eq!(construct.form().to_string(), "switch statement");
    assert_eq!(construct.discriminant().unwrap().as_cst().text(), "status");

    let (explicit, defaults) = construct.partition();
    assert_eq!(explicit.len(), 1);
    assert_eq!(accesses(&explicit[0]), ["Status.Accepted", "Status.Cooking"]);

    // a section holding `default:` is a default even with other labels
    assert_eq!(defaults.len(), 1);
    assert_eq!(accesses(&defaults[0]), ["Status.Cooked"]);
    assert_eq!(defaults[0].body().len(), 1);
}

#[test]
fn nested_default_stays_with_inner_switch() {
    let source = in_method(indoc! {r#"
        switch (status)
        {
            case Status.Accepted:
                switch (count) { default: break; }
                break;
        }
    "#});
    let found = constructs(&source);
    assert_eq!(found.len(), 2);

    let (explicit, defaults) = found[0].partition();
    assert_eq!((explicit.len(), defaults.len()), (1, 0));
    assert_eq!(explicit[0].body().len(), 2);

    let (explicit, defaults) = found[1].partition();
    assert_eq!((explicit.len(), defaults.len()), (0, 1));
}

#[test]
fn arms_with_or_patterns_and_when_clauses() {
    let source = in_method(indoc! {r#"
        return status switch
        {
            Status.Accepted or Status.Cooked => 1,
            Status.Cooking when count > (int)Door.Cooked => 2,
            _ when count > 0 => 3,
            _ => 4,
        };
    "#});
    let construct = &constructs(&source)[0];
    assert_eq!(construct.form(), ConstructForm::Expression);

    let (explicit, defaults) = construct.partition();
    assert_eq!(accesses(&explicit[0]), ["Status.Accepted", "Status.Cooked"]);
    assert_eq!(accesses(&explicit[1]), ["Status.Cooking"]);
    assert_eq!(defaults.len(), 2);
    assert!(defaults.iter().all(Branch::is_default));

    let body: Vec<_> = defaults.iter().map(|d| d.body()[0].text().to_string()).collect();
    assert_eq!(body, ["3", "4"]);
}

#[test]
fn construct_range_starts_at_switch_or_discriminant() {
    let source = in_method(indoc! {r#"
        var x = status switch { _ => 0 };
        switch (door) { }
    "#});
    let found = constructs(&source);
    let texts: Vec<_> = found
        .iter()
        .map(|c| source[c.text_range()].to_string())
        .collect();
    assert_eq!(texts, ["status switch { _ => 0 }", "switch (door) { }"]);
}
