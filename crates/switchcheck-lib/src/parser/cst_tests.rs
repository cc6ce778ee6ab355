use super::cst::token_sets::*;
use super::cst::{CsLang, SyntaxKind, TokenSet};
use rowan::Language;

#[test]
fn token_set_contains() {
    let set = TokenSet::new(&[SyntaxKind::KwCase, SyntaxKind::KwDefault]);
    assert!(set.contains(SyntaxKind::KwCase));
    assert!(set.contains(SyntaxKind::KwDefault));
    assert!(!set.contains(SyntaxKind::KwSwitch));
}

#[test]
fn token_set_union() {
    let a = TokenSet::single(SyntaxKind::Comma);
    let b = TokenSet::single(SyntaxKind::Semicolon);
    let both = a.union(b);
    assert!(both.contains(SyntaxKind::Comma));
    assert!(both.contains(SyntaxKind::Semicolon));
    assert!(!TokenSet::EMPTY.contains(SyntaxKind::Comma));
}

#[test]
fn token_set_ignores_node_kinds() {
    assert!(!STMT_FIRST.contains(SyntaxKind::SwitchStmt));
}

#[test]
fn token_set_debug() {
    let set = TokenSet::new(&[SyntaxKind::ParenOpen, SyntaxKind::Colon]);
    insta::assert_snapshot!(format!("{set:?}"), @"{ParenOpen, Colon}");
}

#[test]
fn statement_first_covers_expressions() {
    assert!(STMT_FIRST.contains(SyntaxKind::Ident));
    assert!(STMT_FIRST.contains(SyntaxKind::KwSwitch));
    assert!(STMT_FIRST.contains(SyntaxKind::BraceOpen));
    assert!(!STMT_FIRST.contains(SyntaxKind::KwCase));
}

#[test]
fn recovery_sets_stop_at_labels() {
    assert!(STMT_RECOVERY.contains(SyntaxKind::KwCase));
    assert!(STMT_RECOVERY.contains(SyntaxKind::KwDefault));
    assert!(LIST_RECOVERY.contains(SyntaxKind::ParenClose));
}

#[test]
fn trivia_kinds() {
    for kind in [
        SyntaxKind::Whitespace,
        SyntaxKind::Newline,
        SyntaxKind::LineComment,
        SyntaxKind::BlockComment,
        SyntaxKind::Directive,
    ] {
        assert!(kind.is_trivia(), "{kind:?}");
        assert!(TRIVIA.contains(kind), "{kind:?}");
    }
    assert!(!SyntaxKind::Ident.is_trivia());
}

#[test]
fn error_kinds() {
    assert!(SyntaxKind::Error.is_error());
    assert!(SyntaxKind::Garbage.is_error());
    assert!(!SyntaxKind::UnknownMember.is_error());
}

#[test]
fn node_predicates() {
    assert!(SyntaxKind::SwitchExpr.is_expr());
    assert!(!SyntaxKind::SwitchStmt.is_expr());
    assert!(SyntaxKind::SwitchStmt.is_stmt());
    assert!(SyntaxKind::DiscardPattern.is_pattern());
    assert!(!SyntaxKind::Subpattern.is_pattern());
}

#[test]
fn language_kind_roundtrip() {
    for kind in [
        SyntaxKind::ParenOpen,
        SyntaxKind::KwSwitch,
        SyntaxKind::CompilationUnit,
        SyntaxKind::LambdaExpr,
    ] {
        assert_eq!(CsLang::kind_from_raw(CsLang::kind_to_raw(kind)), kind);
    }
}

#[test]
fn token_kinds_fit_token_set() {
    assert!((SyntaxKind::Garbage as u16) < 128);
    assert!(SyntaxKind::Error < SyntaxKind::CompilationUnit);
}
