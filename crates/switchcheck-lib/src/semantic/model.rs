use std::collections::HashMap;

use rowan::TextRange;
use switchcheck_core::{DeclTable, SymbolId, SymbolKind, TypeId, TypeInfo, TypeKind};

use crate::parser::ast::Expr;
use crate::parser::{SyntaxKind, SyntaxNode};

use super::{DomainMember, SemanticContext};

/// Static type as tracked while binding. Collapsed to [`TypeInfo`] at the
/// trait boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum Ty {
    /// Declared in this document, or a primitive keyword type.
    Decl(TypeId),
    /// Written type name with no declaration in this document.
    External(String),
    Array(Box<Ty>),
    /// `T?`
    Nullable(Box<Ty>),
    #[default]
    Unknown,
}

impl Ty {
    pub(crate) fn is_unknown(&self) -> bool {
        matches!(self, Ty::Unknown)
    }

    pub(crate) fn strip_nullable(self) -> Ty {
        match self {
            Ty::Nullable(inner) => *inner,
            other => other,
        }
    }

    pub(crate) fn element(&self) -> Ty {
        match self {
            Ty::Array(inner) => (**inner).clone(),
            _ => Ty::Unknown,
        }
    }
}

/// What a name or member access refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Resolution {
    Symbol(SymbolId),
    /// A value without a declared symbol, such as `Nullable<T>.Value`.
    Value(Ty),
    Type(Ty),
    /// Fully qualified namespace name.
    Namespace(String),
}

/// Nodes are keyed by kind and range so the model stays valid for every
/// cursor created over the same green tree.
pub(crate) type NodeKey = (SyntaxKind, TextRange);

pub(crate) fn node_key(node: &SyntaxNode) -> NodeKey {
    (node.kind(), node.text_range())
}

#[derive(Debug, Clone, Default)]
pub struct SemanticModel {
    pub(crate) decls: DeclTable,
    pub(crate) symbol_types: HashMap<SymbolId, Ty>,
    pub(crate) resolutions: HashMap<NodeKey, Resolution>,
    pub(crate) expr_types: HashMap<NodeKey, Ty>,
}

impl SemanticModel {
    pub fn decls(&self) -> &DeclTable {
        &self.decls
    }

    /// Declared type of a symbol: a field's type, a method's return type,
    /// the owning enum for enum members.
    pub fn symbol_type(&self, symbol: SymbolId) -> Option<TypeInfo> {
        self.symbol_types.get(&symbol).and_then(|ty| self.type_info(ty))
    }

    /// `Owner.Name` for members, the bare name for locals and parameters.
    pub fn describe_symbol(&self, symbol: SymbolId) -> String {
        let data = self.decls.symbol(symbol);
        let name = self.decls.name(data.name);
        let owner = match data.kind {
            SymbolKind::EnumMember { owner, .. }
            | SymbolKind::Field { owner }
            | SymbolKind::Property { owner }
            | SymbolKind::Method { owner } => Some(owner),
            SymbolKind::Parameter | SymbolKind::Local => None,
        };
        match owner {
            Some(owner) => format!("{}.{}", self.decls.type_name(owner), name),
            None => name.to_owned(),
        }
    }

    pub(crate) fn type_info(&self, ty: &Ty) -> Option<TypeInfo> {
        match ty {
            Ty::Decl(id) => Some(self.decls.type_info(*id)),
            Ty::External(name) => Some(TypeInfo::external(name.clone())),
            Ty::Array(_) => Some(TypeInfo {
                kind: TypeKind::Class,
                name: "Array".to_owned(),
                decl: None,
            }),
            Ty::Nullable(inner) => {
                let inner = self.type_info(inner)?;
                if matches!(inner.kind, TypeKind::Enum | TypeKind::Struct) {
                    // `Status?` is `Nullable<Status>`, which is not a closed domain.
                    Some(TypeInfo {
                        kind: TypeKind::Struct,
                        name: "Nullable".to_owned(),
                        decl: None,
                    })
                } else {
                    Some(inner)
                }
            }
            Ty::Unknown => None,
        }
    }

    pub(crate) fn resolution(&self, node: &SyntaxNode) -> Option<&Resolution> {
        self.resolutions.get(&node_key(node))
    }
}

impl SemanticContext for SemanticModel {
    fn resolve_type(&self, expr: &Expr) -> Option<TypeInfo> {
        let ty = self.expr_types.get(&node_key(expr.as_cst()))?;
        self.type_info(ty)
    }

    fn resolve_symbol(&self, expr: &Expr) -> Option<SymbolId> {
        match self.resolution(expr.as_cst())? {
            Resolution::Symbol(symbol) => Some(*symbol),
            _ => None,
        }
    }

    fn members_of(&self, ty: &TypeInfo) -> Vec<DomainMember> {
        let Some(decl) = ty.decl else {
            return Vec::new();
        };
        if !ty.kind.is_closed_domain() {
            return Vec::new();
        }
        self.decls
            .enum_members(decl)
            .map(|(symbol, ordinal)| DomainMember {
                symbol,
                ordinal,
                name: self.decls.symbol_name(symbol).to_owned(),
            })
            .collect()
    }
}
