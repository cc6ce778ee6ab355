//! One view over both switch forms.

use rowan::TextRange;
use serde::Serialize;

use crate::parser::ast::{Label, MemberAccess, Pattern, SwitchArm, SwitchSection};
use crate::parser::{Expr, SwitchExpr, SwitchStmt, SyntaxKind, SyntaxNode};

/// Surface form of a branch construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructForm {
    Statement,
    Expression,
}

impl std::fmt::Display for ConstructForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstructForm::Statement => write!(f, "switch statement"),
            ConstructForm::Expression => write!(f, "switch expression"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BranchConstruct {
    Statement(SwitchStmt),
    Expression(SwitchExpr),
}

impl BranchConstruct {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::SwitchStmt => SwitchStmt::cast(node).map(Self::Statement),
            SyntaxKind::SwitchExpr => SwitchExpr::cast(node).map(Self::Expression),
            _ => None,
        }
    }

    pub fn form(&self) -> ConstructForm {
        match self {
            Self::Statement(_) => ConstructForm::Statement,
            Self::Expression(_) => ConstructForm::Expression,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Self::Statement(stmt) => stmt.as_cst(),
            Self::Expression(expr) => expr.as_cst(),
        }
    }

    pub fn text_range(&self) -> TextRange {
        self.as_cst().text_range()
    }

    pub fn discriminant(&self) -> Option<Expr> {
        match self {
            Self::Statement(stmt) => stmt.discriminant(),
            Self::Expression(expr) => expr.discriminant(),
        }
    }

    /// Branches in source order.
    pub fn branches(&self) -> Vec<Branch> {
        match self {
            Self::Statement(stmt) => stmt.sections().map(Branch::Section).collect(),
            Self::Expression(expr) => expr.arms().map(Branch::Arm).collect(),
        }
    }

    /// `(explicit, default)`, each in source order.
    pub fn partition(&self) -> (Vec<Branch>, Vec<Branch>) {
        self.branches().into_iter().partition(|b| !b.is_default())
    }
}

/// A statement section or an expression arm.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Branch {
    Section(SwitchSection),
    Arm(SwitchArm),
}

impl Branch {
    /// A section is default when one of its own labels is `default:`; nested
    /// switches in its body do not count. An arm is default when its pattern
    /// is the discard `_`.
    pub fn is_default(&self) -> bool {
        match self {
            Self::Section(section) => section.is_default(),
            Self::Arm(arm) => arm.is_discard(),
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Self::Section(section) => section.as_cst(),
            Self::Arm(arm) => arm.as_cst(),
        }
    }

    /// Patterns that decide whether the branch is taken. `when` clauses
    /// are not part of them.
    pub fn patterns(&self) -> Vec<Pattern> {
        match self {
            Self::Section(section) => section
                .labels()
                .filter_map(|label| match label {
                    Label::CaseLabel(case) => case.pattern(),
                    Label::DefaultLabel(_) => None,
                })
                .collect(),
            Self::Arm(arm) => arm.pattern().into_iter().collect(),
        }
    }

    /// Every member access inside the branch's patterns. `case A.X or A.Y:`
    /// yields both.
    pub fn member_accesses(&self) -> Vec<MemberAccess> {
        self.patterns()
            .iter()
            .flat_map(|pattern| pattern.as_cst().descendants())
            .filter_map(MemberAccess::cast)
            .collect()
    }

    /// Nodes executed when the branch is taken.
    pub fn body(&self) -> Vec<SyntaxNode> {
        match self {
            Self::Section(section) => section.statements().map(|s| s.as_cst().clone()).collect(),
            Self::Arm(arm) => arm.body().map(|e| e.as_cst().clone()).into_iter().collect(),
        }
    }
}
