use switchcheck_core::TypeInfo;

use crate::parser::Expr;
use crate::semantic::{DomainMember, SemanticContext};

/// Enum type of a discriminant with its members in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedDomain {
    pub ty: TypeInfo,
    pub members: Vec<DomainMember>,
}

impl ClosedDomain {
    /// `None` unless the discriminant's static type is an enum.
    pub fn resolve(ctx: &impl SemanticContext, discriminant: &Expr) -> Option<Self> {
        let ty = ctx.resolve_type(discriminant)?;
        if !ty.kind.is_closed_domain() {
            return None;
        }
        let members = ctx.members_of(&ty);
        Some(Self { ty, members })
    }

    pub fn name(&self) -> &str {
        &self.ty.name
    }
}
