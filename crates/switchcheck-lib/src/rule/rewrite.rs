//! Rebuilding a switch with the synthesized branches in place.
//!
//! Branch order becomes `explicit ++ synthesized ++ default`. Every original
//! element is reused. The trivia between two branches is cut after the first
//! newline: the head (comma, same-line comment, line break) stays in its slot,
//! and the rest (blank lines, comment lines, indentation) leads the next branch
//! and moves with it. Only the joints of added branches are new.

use rowan::{GreenNode, GreenToken, NodeOrToken};

use crate::parser::cst::SyntaxElement;
use crate::parser::{SyntaxKind, SyntaxNode};

use super::ConstructForm;
use super::checker::Analysis;
use super::synth;

type GreenElement = NodeOrToken<GreenNode, GreenToken>;

/// New green node for the construct. `None` when it has no branches.
pub(crate) fn rewrite(analysis: &Analysis) -> Option<GreenNode> {
    let node = analysis.construct.as_cst();
    let form = analysis.construct.form();
    let elements: Vec<SyntaxElement> = node.children_with_tokens().collect();

    let branch_at: Vec<usize> = elements
        .iter()
        .enumerate()
        .filter(|(_, element)| is_branch(element))
        .map(|(index, _)| index)
        .collect();
    let (&first, &last) = (branch_at.first()?, branch_at.last()?);

    let prefix = &elements[..first];
    let prefix_end = line_end(prefix);
    let mut leads: Vec<Vec<GreenElement>> = vec![greens(&prefix[prefix_end..])];
    let mut slots: Vec<Vec<GreenElement>> = Vec::new();
    for pair in branch_at.windows(2) {
        let between = &elements[pair[0] + 1..pair[1]];
        let end = line_end(between);
        slots.push(greens(&between[..end]));
        leads.push(greens(&between[end..]));
    }

    let branches = analysis.construct.branches();
    let first_default = branches
        .iter()
        .zip(&branch_at)
        .find(|(branch, _)| branch.is_default())
        .map(|(_, &index)| index)?;
    let (added_slot, added_lead) = added_joint(form, &elements[..first_default]);

    let domain = analysis.domain.name();
    let synthesized: Vec<GreenNode> = match form {
        ConstructForm::Statement => {
            let gap = label_gap(node);
            analysis
                .missing
                .iter()
                .map(|member| synth::section(domain, &member.name, &gap))
                .collect()
        }
        ConstructForm::Expression => analysis
            .missing
            .iter()
            .map(|member| synth::arm(domain, &member.name))
            .collect(),
    };

    let (defaults, explicit): (Vec<_>, Vec<_>) = branches
        .iter()
        .zip(leads)
        .map(|(branch, lead)| {
            let green = branch.as_cst().green().into_owned();
            (branch.is_default(), lead, green)
        })
        .partition(|(is_default, _, _)| *is_default);
    let ordered = explicit
        .into_iter()
        .map(|(_, lead, green)| (lead, green))
        .chain(synthesized.into_iter().map(|green| (added_lead.clone(), green)))
        .chain(defaults.into_iter().map(|(_, lead, green)| (lead, green)));

    let mut children: Vec<GreenElement> = greens(&prefix[..prefix_end]);
    for (position, (lead, branch)) in ordered.enumerate() {
        if position > 0 {
            children.extend(slots.get(position - 1).unwrap_or(&added_slot).iter().cloned());
        }
        children.extend(lead);
        children.push(NodeOrToken::Node(branch));
    }
    children.extend(greens(&elements[last + 1..]));

    Some(GreenNode::new(node.kind().into(), children))
}

fn is_branch(element: &SyntaxElement) -> bool {
    matches!(
        element.kind(),
        SyntaxKind::SwitchSection | SyntaxKind::SwitchArm
    )
}

fn green(element: &SyntaxElement) -> GreenElement {
    match element {
        NodeOrToken::Node(node) => NodeOrToken::Node(node.green().into_owned()),
        NodeOrToken::Token(token) => NodeOrToken::Token(token.green().to_owned()),
    }
}

fn token(kind: SyntaxKind, text: &str) -> GreenElement {
    NodeOrToken::Token(GreenToken::new(kind.into(), text))
}

fn greens(elements: &[SyntaxElement]) -> Vec<GreenElement> {
    elements.iter().map(green).collect()
}

/// Index just past the first newline that follows the last significant
/// element. The whole slice when that trivia has no newline.
fn line_end(elements: &[SyntaxElement]) -> usize {
    let trivia = elements
        .iter()
        .rposition(|element| !is_trivia(element))
        .map_or(0, |index| index + 1);
    elements[trivia..]
        .iter()
        .position(|element| element.kind() == SyntaxKind::Newline)
        .map_or(elements.len(), |newline| trivia + newline + 1)
}

/// Slot and lead for an added branch, copied from the line break and
/// indentation right before the first default. A single space when the
/// switch sits on one line.
fn added_joint(
    form: ConstructForm,
    before: &[SyntaxElement],
) -> (Vec<GreenElement>, Vec<GreenElement>) {
    let mut slot = Vec::new();
    if form == ConstructForm::Expression {
        slot.push(token(SyntaxKind::Comma, ","));
    }

    let start = before
        .iter()
        .rposition(|element| !is_trivia(element))
        .map_or(0, |index| index + 1);
    let run = &before[start..];

    match run.iter().rposition(|element| element.kind() == SyntaxKind::Newline) {
        Some(newline) => {
            slot.push(green(&run[newline]));
            (slot, greens(&run[newline + 1..]))
        }
        None => {
            slot.push(token(SyntaxKind::Whitespace, " "));
            (slot, Vec::new())
        }
    }
}

fn is_trivia(element: &SyntaxElement) -> bool {
    element.as_token().is_some_and(|t| t.kind().is_trivia())
}

/// Trivia between the last label and the first statement of the first
/// section that has any.
fn label_gap(node: &SyntaxNode) -> Vec<GreenToken> {
    let sections = node
        .children()
        .filter(|child| child.kind() == SyntaxKind::SwitchSection);
    for section in sections {
        let elements: Vec<SyntaxElement> = section.children_with_tokens().collect();
        let Some(last_label) = elements.iter().rposition(|element| {
            matches!(
                element.kind(),
                SyntaxKind::CaseLabel | SyntaxKind::DefaultLabel
            )
        }) else {
            continue;
        };
        let gap: Vec<GreenToken> = elements[last_label + 1..]
            .iter()
            .map_while(|element| element.as_token().filter(|t| t.kind().is_trivia()))
            .map(|t| t.green().to_owned())
            .collect();
        // a section without statements has no gap to copy
        let has_statement = elements[last_label + 1..]
            .iter()
            .any(|element| element.as_node().is_some_and(|n| n.kind().is_stmt()));
        if !gap.is_empty() && has_statement {
            return gap;
        }
    }
    vec![GreenToken::new(SyntaxKind::Whitespace.into(), " ")]
}
