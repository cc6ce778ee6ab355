//! Exhaustiveness check: domain, then branches, then guard, then coverage.

use std::collections::HashSet;

use switchcheck_core::SymbolId;

use crate::cancel::CancellationToken;
use crate::document::Document;
use crate::parser::Expr;
use crate::semantic::{DomainMember, SemanticContext};
use crate::{Error, Result};

use super::guard::is_guarded;
use super::{Branch, BranchConstruct, ClosedDomain, Finding, MissingMember};

/// Why a construct produced no finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Skip {
    NoDiscriminant,
    NotADomain,
    NoDefault,
    Unguarded,
    Exhaustive,
}

/// A construct that is guarded and misses at least one member.
#[derive(Debug, Clone)]
pub(crate) struct Analysis {
    pub construct: BranchConstruct,
    pub domain: ClosedDomain,
    pub missing: Vec<DomainMember>,
}

impl Analysis {
    pub(crate) fn finding(&self) -> Finding {
        Finding {
            range: self.construct.text_range(),
            form: self.construct.form(),
            domain: self.domain.name().to_owned(),
            missing: self
                .missing
                .iter()
                .map(|member| MissingMember {
                    name: member.name.clone(),
                    ordinal: member.ordinal,
                    symbol: member.symbol,
                })
                .collect(),
        }
    }
}

pub(crate) fn analyze(
    ctx: &impl SemanticContext,
    construct: &BranchConstruct,
) -> std::result::Result<Analysis, Skip> {
    let discriminant = construct.discriminant().ok_or(Skip::NoDiscriminant)?;
    let domain = ClosedDomain::resolve(ctx, &discriminant).ok_or(Skip::NotADomain)?;

    let branches = construct.branches();
    let defaults: Vec<Branch> = branches.iter().filter(|b| b.is_default()).cloned().collect();
    if defaults.is_empty() {
        return Err(Skip::NoDefault);
    }
    if !is_guarded(ctx, &defaults) {
        return Err(Skip::Unguarded);
    }

    let covered = covered(ctx, &branches);
    let missing: Vec<DomainMember> = domain
        .members
        .iter()
        .filter(|member| !covered.contains(&member.symbol))
        .cloned()
        .collect();
    if missing.is_empty() {
        return Err(Skip::Exhaustive);
    }

    Ok(Analysis {
        construct: construct.clone(),
        domain,
        missing,
    })
}

/// Symbols named by member accesses in the patterns of every branch. A
/// `case` label sharing a section with `default:` still covers its member.
/// Symbols outside the domain are harmless: only domain members are looked up.
fn covered(ctx: &impl SemanticContext, branches: &[Branch]) -> HashSet<SymbolId> {
    branches
        .iter()
        .flat_map(Branch::member_accesses)
        .filter_map(|access| ctx.resolve_symbol(&Expr::MemberAccess(access)))
        .collect()
}

/// Findings for every switch in the document, in source order.
pub fn check(document: &Document) -> Vec<Finding> {
    // a fresh token is never cancelled
    check_with(document, &CancellationToken::new()).unwrap_or_default()
}

/// Like [`check`], polling `cancel` before each switch.
pub fn check_with(document: &Document, cancel: &CancellationToken) -> Result<Vec<Finding>> {
    let root = document.syntax();
    let model = document.model();
    let mut findings = Vec::new();

    for construct in root.descendants().filter_map(BranchConstruct::cast) {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        match analyze(model, &construct) {
            Ok(analysis) => {
                tracing::debug!(
                    range = ?construct.text_range(),
                    missing = analysis.missing.len(),
                    "non-exhaustive switch"
                );
                findings.push(analysis.finding());
            }
            Err(skip) => {
                tracing::trace!(range = ?construct.text_range(), ?skip, "switch skipped");
            }
        }
    }

    Ok(findings)
}
