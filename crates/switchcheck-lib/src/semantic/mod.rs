//! Semantic model: which declaration each name refers to, and the static
//! type of each expression.
//!
//! Binding runs in three passes over one compilation unit:
//! 1. Collect type declarations (enums with their members, classes, structs,
//!    interfaces, records), namespaces and `using` directives
//! 2. Declare fields, properties and methods with their resolved types
//! 3. Walk bodies with a scope stack, recording a resolution for every name
//!    and member access and a type for every expression
//!
//! The rule never touches the binder directly. It sees the model through
//! [`SemanticContext`], so any resolution engine implementing that trait can
//! drive it.

mod binder;
mod model;

#[cfg(test)]
mod model_tests;

pub use model::SemanticModel;

use switchcheck_core::{SymbolId, TypeInfo};

use crate::parser::SyntaxNode;
use crate::parser::ast::Expr;

/// One member of a closed domain, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainMember {
    pub symbol: SymbolId,
    /// Zero-based declaration index inside the enum.
    pub ordinal: u32,
    pub name: String,
}

/// Resolution capability the rule is written against.
pub trait SemanticContext {
    /// Static type of an expression, `None` when it cannot be determined.
    fn resolve_type(&self, expr: &Expr) -> Option<TypeInfo>;

    /// Declared symbol an expression refers to (locals, members, enum members).
    fn resolve_symbol(&self, expr: &Expr) -> Option<SymbolId>;

    /// Enum members of `ty` in declaration order. Empty for anything else.
    fn members_of(&self, ty: &TypeInfo) -> Vec<DomainMember>;
}

/// Bind a parsed compilation unit. Never fails: unresolvable names are left
/// without a resolution.
pub fn bind(root: &SyntaxNode) -> SemanticModel {
    binder::Binder::new().run(root)
}
