#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Declaration tables shared by the switchcheck parser, binder and rule.
//!
//! Two layers:
//! - **Identity layer**: `TypeId` / `SymbolId` handles into append-only arenas.
//!   Identity is never derived from names; two enum members named `Done`
//!   in different enums get different `SymbolId`s.
//! - **Lookup layer**: name-indexed views (`types_named`, `member_named`)
//!   used by the binder to resolve written names to declarations.

use indexmap::IndexMap;
use serde::Serialize;

mod interner;
mod invariants;
pub mod utils;

#[cfg(test)]
mod interner_tests;
#[cfg(test)]
mod lib_tests;
#[cfg(test)]
mod utils_tests;

pub use interner::{Interner, Name};
pub use utils::{LineCol, LineIndex};

// ============================================================================
// Handles
// ============================================================================

/// Handle to a declared (or synthesized primitive) type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TypeId(u32);

impl TypeId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Stable identity of a declared symbol within one declaration table.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SymbolId(u32);

impl SymbolId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

// ============================================================================
// Kinds
// ============================================================================

/// Classification of a type. Only `Enum` is a closed domain.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Enum,
    Class,
    Struct,
    Interface,
    Record,
    /// Built-in keyword types (`int`, `string`, ...).
    Primitive,
    /// Referenced by name but not declared in the document.
    External,
    Unknown,
}

impl TypeKind {
    pub fn is_closed_domain(self) -> bool {
        self == TypeKind::Enum
    }
}

/// What a symbol declares.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SymbolKind {
    /// Enum member with its declaration index inside the owning enum.
    EnumMember { owner: TypeId, ordinal: u32 },
    Field { owner: TypeId },
    Property { owner: TypeId },
    Method { owner: TypeId },
    Parameter,
    Local,
}

/// Member kinds accepted by [`DeclTable::declare_member`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MemberKind {
    EnumMember,
    Field,
    Property,
    Method,
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Clone, Debug)]
pub struct TypeDecl {
    pub name: Name,
    pub kind: TypeKind,
    /// Enclosing type for nested declarations.
    pub parent: Option<TypeId>,
    /// Dotted namespace the type was declared in.
    pub namespace: Option<Name>,
    members: Vec<SymbolId>,
}

impl TypeDecl {
    /// Members in declaration order.
    pub fn members(&self) -> &[SymbolId] {
        &self.members
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SymbolData {
    pub name: Name,
    pub kind: SymbolKind,
}

/// Resolved static type of an expression.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TypeInfo {
    pub kind: TypeKind,
    /// Simple (last-segment) name of the type.
    pub name: String,
    pub decl: Option<TypeId>,
}

impl TypeInfo {
    pub fn unknown() -> Self {
        Self {
            kind: TypeKind::Unknown,
            name: String::new(),
            decl: None,
        }
    }

    /// A type known only by its written name.
    pub fn external(name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::External,
            name: name.into(),
            decl: None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.kind == TypeKind::Unknown
    }
}

/// Append-only arenas of types and symbols for one document snapshot.
#[derive(Clone, Debug, Default)]
pub struct DeclTable {
    names: Interner,
    types: Vec<TypeDecl>,
    symbols: Vec<SymbolData>,
    types_by_name: IndexMap<Name, Vec<TypeId>>,
    primitives: IndexMap<Name, TypeId>,
}

impl DeclTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, name: &str) -> Name {
        self.names.intern(name)
    }

    pub fn name(&self, name: Name) -> &str {
        self.names.resolve(name)
    }

    pub fn declare_type(
        &mut self,
        name: &str,
        kind: TypeKind,
        parent: Option<TypeId>,
        namespace: Option<&str>,
    ) -> TypeId {
        let name = self.names.intern(name);
        let namespace = namespace.map(|ns| self.names.intern(ns));
        let id = TypeId(self.types.len() as u32);
        self.types.push(TypeDecl {
            name,
            kind,
            parent,
            namespace,
            members: Vec::new(),
        });
        self.types_by_name.entry(name).or_default().push(id);
        id
    }

    /// Get or create the primitive type for a keyword such as `int`.
    ///
    /// Primitives are not indexed by name: `string` is never found by
    /// [`types_named`](Self::types_named), only through this method.
    pub fn primitive(&mut self, keyword: &str) -> TypeId {
        let name = self.names.intern(keyword);
        if let Some(&id) = self.primitives.get(&name) {
            return id;
        }
        let id = TypeId(self.types.len() as u32);
        self.types.push(TypeDecl {
            name,
            kind: TypeKind::Primitive,
            parent: None,
            namespace: None,
            members: Vec::new(),
        });
        self.primitives.insert(name, id);
        id
    }

    /// Lookup-only variant of [`primitive`](Self::primitive).
    pub fn find_primitive(&self, keyword: &str) -> Option<TypeId> {
        let name = self.names.get(keyword)?;
        self.primitives.get(&name).copied()
    }

    pub fn declare_member(&mut self, owner: TypeId, name: &str, kind: MemberKind) -> SymbolId {
        let name = self.names.intern(name);
        let kind = match kind {
            MemberKind::EnumMember => {
                let ordinal = self
                    .ensure_type(owner)
                    .members
                    .iter()
                    .filter(|m| {
                        matches!(self.symbols[m.0 as usize].kind, SymbolKind::EnumMember { .. })
                    })
                    .count() as u32;
                SymbolKind::EnumMember { owner, ordinal }
            }
            MemberKind::Field => SymbolKind::Field { owner },
            MemberKind::Property => SymbolKind::Property { owner },
            MemberKind::Method => SymbolKind::Method { owner },
        };
        let id = self.push_symbol(name, kind);
        self.ensure_type_mut(owner).members.push(id);
        id
    }

    /// Declare a parameter or local. Members go through [`declare_member`](Self::declare_member).
    pub fn declare_variable(&mut self, name: &str, is_parameter: bool) -> SymbolId {
        let name = self.names.intern(name);
        let kind = if is_parameter {
            SymbolKind::Parameter
        } else {
            SymbolKind::Local
        };
        self.push_symbol(name, kind)
    }

    fn push_symbol(&mut self, name: Name, kind: SymbolKind) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(SymbolData { name, kind });
        id
    }

    pub fn type_decl(&self, id: TypeId) -> &TypeDecl {
        self.ensure_type(id)
    }

    pub fn symbol(&self, id: SymbolId) -> &SymbolData {
        self.ensure_symbol(id)
    }

    pub fn type_name(&self, id: TypeId) -> &str {
        self.name(self.ensure_type(id).name)
    }

    pub fn symbol_name(&self, id: SymbolId) -> &str {
        self.name(self.ensure_symbol(id).name)
    }

    /// All non-primitive types declared with this simple name, in declaration order.
    pub fn types_named(&self, name: &str) -> &[TypeId] {
        self.names
            .get(name)
            .and_then(|n| self.types_by_name.get(&n))
            .map_or(&[], |ids| ids.as_slice())
    }

    /// First member of `owner` with this name.
    pub fn member_named(&self, owner: TypeId, name: &str) -> Option<SymbolId> {
        let name = self.names.get(name)?;
        self.ensure_type(owner)
            .members
            .iter()
            .copied()
            .find(|&m| self.symbols[m.0 as usize].name == name)
    }

    /// Type nested directly inside `parent` with this name.
    pub fn nested_type(&self, parent: TypeId, name: &str) -> Option<TypeId> {
        self.types_named(name)
            .iter()
            .copied()
            .find(|&t| self.types[t.0 as usize].parent == Some(parent))
    }

    /// Top-level type declared in exactly this namespace.
    pub fn type_in_namespace(&self, namespace: &str, name: &str) -> Option<TypeId> {
        let ns = self.names.get(namespace)?;
        self.types_named(name).iter().copied().find(|&t| {
            let decl = &self.types[t.0 as usize];
            decl.parent.is_none() && decl.namespace == Some(ns)
        })
    }

    /// Whether any type was declared in `namespace` or one of its children.
    pub fn is_namespace(&self, namespace: &str) -> bool {
        self.types.iter().any(|t| {
            t.namespace.is_some_and(|ns| {
                let ns = self.name(ns);
                ns == namespace
                    || ns
                        .strip_prefix(namespace)
                        .is_some_and(|rest| rest.starts_with('.'))
            })
        })
    }

    pub fn type_info(&self, id: TypeId) -> TypeInfo {
        let decl = self.ensure_type(id);
        TypeInfo {
            kind: decl.kind,
            name: self.name(decl.name).to_owned(),
            decl: Some(id),
        }
    }

    /// Enum members of `owner` in declaration order. Empty for non-enums.
    pub fn enum_members(&self, owner: TypeId) -> impl Iterator<Item = (SymbolId, u32)> + '_ {
        self.ensure_type(owner)
            .members
            .iter()
            .filter_map(|&m| match self.symbols[m.0 as usize].kind {
                SymbolKind::EnumMember { ordinal, .. } => Some((m, ordinal)),
                _ => None,
            })
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn types(&self) -> impl Iterator<Item = (TypeId, &TypeDecl)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, t)| (TypeId(i as u32), t))
    }
}
