//! Fixes: one construct at a time, or every fixable construct in rounds.

use rowan::{GreenNode, TextRange};

use crate::document::Document;
use crate::parser::{Expr, SyntaxNode};
use crate::semantic::SemanticModel;
use crate::Error;

use super::checker::{Skip, analyze};
use super::rewrite::rewrite;
use super::{BranchConstruct, Finding, check};

/// Why a fix produced no edit. The finding itself stays valid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Decline {
    #[error("no switch at the given location")]
    NoConstruct,
    #[error("switch discriminant is not a simple identifier")]
    UnsupportedDiscriminant,
    #[error("switch is not a guarded switch over an enum")]
    NotApplicable,
    #[error("switch already handles every enum member")]
    AlreadyExhaustive,
    #[error("rewritten document could not be parsed: {0}")]
    Reparse(#[from] Error),
}

/// Replacement of `range` in the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: TextRange,
    pub replacement: String,
}

impl TextEdit {
    pub fn apply(&self, text: &str) -> String {
        splice(text, std::slice::from_ref(self))
    }
}

#[derive(Debug, Clone)]
pub struct Fixed {
    pub document: Document,
    pub edit: TextEdit,
}

/// Result of [`fix_all`].
#[derive(Debug, Clone)]
pub struct FixAll {
    pub document: Document,
    /// Number of constructs rewritten.
    pub applied: usize,
    pub rounds: usize,
    /// Findings still open in the final document, with the reason each was
    /// declined.
    pub declined: Vec<(Finding, Decline)>,
}

/// Fix the switch reported at `location`: the innermost construct containing
/// its start, or the one spanning it exactly.
pub fn fix(document: &Document, location: TextRange) -> Result<Fixed, Decline> {
    let root = document.syntax();
    let construct = locate(&root, location).ok_or(Decline::NoConstruct)?;
    let replacement = plan(document.model(), &construct)?;

    let edit = TextEdit {
        range: construct.text_range(),
        replacement: replacement.to_string(),
    };
    let green = construct.as_cst().replace_with(replacement);
    let document = document.reparse(green.to_string())?;

    tracing::debug!(range = ?edit.range, "fixed switch");
    Ok(Fixed { document, edit })
}

/// Fix every fixable finding.
///
/// Each round computes fixes against one snapshot and merges them in source
/// order. A fix overlapping an accepted one (a nested switch) waits for the
/// next round, which runs against the merged result.
pub fn fix_all(document: &Document) -> Result<FixAll, Error> {
    let limit = document
        .syntax()
        .descendants()
        .filter_map(BranchConstruct::cast)
        .count();
    let mut current = document.clone();
    let mut applied = 0;
    let mut round = 0;

    loop {
        let root = current.syntax();
        let mut edits: Vec<TextEdit> = Vec::new();
        let mut declined = Vec::new();
        let mut deferred = 0;

        for finding in check(&current) {
            if edits
                .last()
                .is_some_and(|accepted| finding.range.start() < accepted.range.end())
            {
                deferred += 1;
                continue;
            }
            let planned = locate(&root, finding.range)
                .ok_or(Decline::NoConstruct)
                .and_then(|construct| plan(current.model(), &construct));
            match planned {
                Ok(green) => edits.push(TextEdit {
                    range: finding.range,
                    replacement: green.to_string(),
                }),
                Err(decline) => declined.push((finding, decline)),
            }
        }

        if edits.is_empty() || round == limit {
            tracing::debug!(rounds = round, applied, "fix-all finished");
            return Ok(FixAll {
                document: current,
                applied,
                rounds: round,
                declined,
            });
        }

        tracing::debug!(round, edits = edits.len(), deferred, "fix-all round");
        applied += edits.len();
        current = current.reparse(splice(current.text(), &edits))?;
        round += 1;
    }
}

pub(crate) fn locate(root: &SyntaxNode, location: TextRange) -> Option<BranchConstruct> {
    let containing: Vec<BranchConstruct> = root
        .descendants()
        .filter_map(BranchConstruct::cast)
        .filter(|construct| construct.text_range().contains(location.start()))
        .collect();
    containing
        .iter()
        .find(|construct| construct.text_range() == location)
        .or(containing.last())
        .cloned()
}

fn plan(model: &SemanticModel, construct: &BranchConstruct) -> Result<GreenNode, Decline> {
    let analysis = analyze(model, construct).map_err(|skip| match skip {
        Skip::Exhaustive => Decline::AlreadyExhaustive,
        _ => Decline::NotApplicable,
    })?;
    if !matches!(construct.discriminant(), Some(Expr::NameRef(_))) {
        return Err(Decline::UnsupportedDiscriminant);
    }
    rewrite(&analysis).ok_or(Decline::NotApplicable)
}

/// Apply non-overlapping edits sorted by position.
fn splice(text: &str, edits: &[TextEdit]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for edit in edits {
        out.push_str(&text[cursor..usize::from(edit.range.start())]);
        out.push_str(&edit.replacement);
        cursor = edit.range.end().into();
    }
    out.push_str(&text[cursor..]);
    out
}
