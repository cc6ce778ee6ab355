//! Guard detection.
//!
//! A default branch guards the switch when it throws `ArgumentOutOfRangeException`
//! anywhere in its body. The match is on the created type's name, not its
//! symbol, and a throw nested in an `if` or a block still counts.

use crate::parser::ast::{ObjectCreation, ThrowExpr, ThrowStmt};
use crate::parser::{Expr, SyntaxKind, SyntaxNode};
use crate::semantic::SemanticContext;

use super::Branch;

pub const GUARD_SIGNAL: &str = "ArgumentOutOfRangeException";

pub fn is_guarded(ctx: &impl SemanticContext, defaults: &[Branch]) -> bool {
    defaults.iter().any(|branch| raises_guard(ctx, branch))
}

fn raises_guard(ctx: &impl SemanticContext, branch: &Branch) -> bool {
    branch
        .body()
        .iter()
        .flat_map(SyntaxNode::descendants)
        .filter_map(thrown)
        .any(|creation| creates(ctx, &creation, GUARD_SIGNAL))
}

/// Object created by a `throw` statement or expression.
fn thrown(node: SyntaxNode) -> Option<ObjectCreation> {
    let operand = match node.kind() {
        SyntaxKind::ThrowStmt => ThrowStmt::cast(node)?.expr()?,
        SyntaxKind::ThrowExpr => ThrowExpr::cast(node)?.expr()?,
        _ => return None,
    };
    match operand.unparenthesized() {
        Expr::ObjectCreation(creation) => Some(creation),
        _ => None,
    }
}

/// Whether the created type is named `name`, qualified or not.
pub(crate) fn creates(ctx: &impl SemanticContext, creation: &ObjectCreation, name: &str) -> bool {
    if let Some(ty) = ctx.resolve_type(&Expr::ObjectCreation(creation.clone())) {
        return ty.name == name;
    }
    creation
        .ty()
        .and_then(|ty| ty.last_segment())
        .is_some_and(|segment| segment.text().trim_start_matches('@') == name)
}
