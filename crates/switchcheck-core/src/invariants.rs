//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{DeclTable, SymbolData, SymbolId, TypeDecl, TypeId};

impl DeclTable {
    pub(crate) fn ensure_type(&self, id: TypeId) -> &TypeDecl {
        self.types.get(id.0 as usize).unwrap_or_else(|| {
            panic!(
                "DeclTable: type id {} not found \
                 (handles must come from the same table)",
                id.0
            )
        })
    }

    pub(crate) fn ensure_type_mut(&mut self, id: TypeId) -> &mut TypeDecl {
        self.types.get_mut(id.0 as usize).unwrap_or_else(|| {
            panic!(
                "DeclTable: type id {} not found \
                 (handles must come from the same table)",
                id.0
            )
        })
    }

    pub(crate) fn ensure_symbol(&self, id: SymbolId) -> &SymbolData {
        self.symbols.get(id.0 as usize).unwrap_or_else(|| {
            panic!(
                "DeclTable: symbol id {} not found \
                 (handles must come from the same table)",
                id.0
            )
        })
    }
}
