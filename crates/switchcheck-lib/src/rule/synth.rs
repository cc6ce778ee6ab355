//! Placeholder branches, built in exactly the shape the parser gives the
//! same text.

use rowan::{GreenNode, GreenNodeBuilder, GreenToken};

use crate::parser::SyntaxKind;
use crate::parser::lexer::lex;

pub const PLACEHOLDER_SIGNAL: &str = "NotImplementedException";

/// `case Domain.Member:<gap>throw new NotImplementedException();`
pub(crate) fn section(domain: &str, member: &str, gap: &[GreenToken]) -> GreenNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(SyntaxKind::SwitchSection.into());

    builder.start_node(SyntaxKind::CaseLabel.into());
    token(&mut builder, SyntaxKind::KwCase, "case");
    token(&mut builder, SyntaxKind::Whitespace, " ");
    label(&mut builder, domain, member);
    token(&mut builder, SyntaxKind::Colon, ":");
    builder.finish_node();

    for trivia in gap {
        builder.token(trivia.kind(), trivia.text());
    }

    builder.start_node(SyntaxKind::ThrowStmt.into());
    token(&mut builder, SyntaxKind::KwThrow, "throw");
    token(&mut builder, SyntaxKind::Whitespace, " ");
    placeholder(&mut builder);
    token(&mut builder, SyntaxKind::Semicolon, ";");
    builder.finish_node();

    builder.finish_node();
    builder.finish()
}

/// `Domain.Member => throw new NotImplementedException()`
pub(crate) fn arm(domain: &str, member: &str) -> GreenNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(SyntaxKind::SwitchArm.into());

    label(&mut builder, domain, member);
    token(&mut builder, SyntaxKind::Whitespace, " ");
    token(&mut builder, SyntaxKind::FatArrow, "=>");
    token(&mut builder, SyntaxKind::Whitespace, " ");

    builder.start_node(SyntaxKind::ThrowExpr.into());
    token(&mut builder, SyntaxKind::KwThrow, "throw");
    token(&mut builder, SyntaxKind::Whitespace, " ");
    placeholder(&mut builder);
    builder.finish_node();

    builder.finish_node();
    builder.finish()
}

fn token(builder: &mut GreenNodeBuilder<'_>, kind: SyntaxKind, text: &str) {
    builder.token(kind.into(), text);
}

fn label(builder: &mut GreenNodeBuilder<'_>, domain: &str, member: &str) {
    builder.start_node(SyntaxKind::ConstantPattern.into());
    builder.start_node(SyntaxKind::MemberAccess.into());
    builder.start_node(SyntaxKind::NameRef.into());
    token(builder, SyntaxKind::Ident, &identifier(domain));
    builder.finish_node();
    token(builder, SyntaxKind::Dot, ".");
    token(builder, SyntaxKind::Ident, &identifier(member));
    builder.finish_node();
    builder.finish_node();
}

/// `new NotImplementedException()`
fn placeholder(builder: &mut GreenNodeBuilder<'_>) {
    builder.start_node(SyntaxKind::ObjectCreation.into());
    token(builder, SyntaxKind::KwNew, "new");
    token(builder, SyntaxKind::Whitespace, " ");
    builder.start_node(SyntaxKind::TypeRef.into());
    token(builder, SyntaxKind::Ident, PLACEHOLDER_SIGNAL);
    builder.finish_node();
    builder.start_node(SyntaxKind::ArgList.into());
    token(builder, SyntaxKind::ParenOpen, "(");
    token(builder, SyntaxKind::ParenClose, ")");
    builder.finish_node();
    builder.finish_node();
}

/// Names that would lex as keywords get the verbatim `@` prefix.
pub(crate) fn identifier(name: &str) -> String {
    match lex(name).as_slice() {
        [token] if token.kind == SyntaxKind::Ident => name.to_owned(),
        _ => format!("@{name}"),
    }
}
