//! Parser infrastructure for the C# subset.
//!
//! # Architecture
//!
//! The parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder:
//!
//! - Zero-copy lexing: tokens carry spans, text is sliced only when building tree nodes
//! - Trivia buffering: whitespace and comments attach to the node being built when it starts
//! - Checkpoint-based wrapping: binary operators, member access and `switch` expressions
//!   retroactively wrap their left operand
//! - Lookahead scanners decide declaration vs expression without backtracking
//!
//! # Recovery Strategy
//!
//! The parser always produces a tree covering every byte of the input:
//!
//! 1. Unknown tokens get wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing expected tokens emit a diagnostic but don't consume (parent may handle)
//! 3. Recovery sets define synchronization points per production
//!
//! Fuel exhaustion (exec_fuel, recursion_fuel) returns an actual error immediately.

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod cst_tests;
#[cfg(test)]
mod tests;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{
    CompilationUnit, EnumDecl, Expr, Pattern, Stmt, SwitchArm, SwitchExpr, SwitchSection,
    SwitchStmt,
};

pub use core::{ParseResult, Parser};

use crate::PassResult;
use lexer::lex;

pub const DEFAULT_EXEC_FUEL: u32 = 1_000_000;
pub const DEFAULT_RECURSION_FUEL: u32 = 512;

/// Parse result containing the green tree.
///
/// The tree is always complete; diagnostics are returned separately.
/// Error nodes in the tree represent recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    cst: rowan::GreenNode,
}

impl Parse {
    pub fn as_cst(&self) -> &rowan::GreenNode {
        &self.cst
    }

    pub fn into_cst(self) -> rowan::GreenNode {
        self.cst
    }

    /// Creates a cursor view over the immutable green tree.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.cst.clone())
    }
}

/// Main entry point with default fuel. Returns Err on fuel exhaustion.
pub fn parse(source: &str) -> PassResult<Parse> {
    parse_with(
        source,
        Some(DEFAULT_EXEC_FUEL),
        Some(DEFAULT_RECURSION_FUEL),
    )
}

/// Parse with explicit fuel limits. `None` means unlimited.
pub fn parse_with(
    source: &str,
    exec_fuel: Option<u32>,
    recursion_fuel: Option<u32>,
) -> PassResult<Parse> {
    let parser = Parser::new(source, lex(source))
        .with_exec_fuel(exec_fuel)
        .with_recursion_fuel(recursion_fuel);
    let ParseResult {
        green, diagnostics, ..
    } = parser.parse()?;
    Ok((Parse { cst: green }, diagnostics))
}
