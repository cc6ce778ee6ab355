//! Report non-exhaustive switches.

use std::path::PathBuf;

use serde::Serialize;
use switchcheck_core::{LineCol, LineIndex};
use switchcheck_lib::rule::fix;
use switchcheck_lib::{Analyzer, Checked, Diagnostics, Finding, RULE_ID, SourceMap};

use super::{Outcome, load_or_exit};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct CheckArgs {
    pub paths: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub format: OutputFormat,
    pub strict: bool,
    pub jobs: Option<usize>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let map = load_or_exit(&args.paths, args.source_text.as_deref());
    check_sources(&map, &args).finish();
}

/// One JSON entry per finding.
#[derive(Serialize)]
struct Record<'a> {
    path: &'a str,
    start: LineCol,
    end: LineCol,
    rule: &'static str,
    #[serde(flatten)]
    finding: &'a Finding,
}

pub(crate) fn check_sources(map: &SourceMap, args: &CheckArgs) -> Outcome {
    let reports = Analyzer::new(map)
        .concurrent(args.jobs != Some(1))
        .jobs(args.jobs.unwrap_or(0))
        .run();

    let mut outcome = Outcome::default();
    let mut records = Vec::new();

    for report in &reports {
        let Some(source) = map.get(report.source) else {
            continue;
        };
        let name = source.name();
        let checked = match &report.result {
            Ok(checked) => checked,
            Err(err) => {
                outcome.error(format_args!("{name}: {err}"));
                continue;
            }
        };

        let document = &checked.document;
        let diagnostics = document.diagnostics();
        if !diagnostics.is_empty() {
            outcome.stderr.push_str(
                &diagnostics
                    .filtered_printer(document.text())
                    .path(name)
                    .colored(args.color)
                    .render(),
            );
            outcome.stderr.push('\n');
            outcome.failed |= args.strict && diagnostics.has_errors();
        }

        outcome.failed |= !checked.findings.is_empty();
        match args.format {
            OutputFormat::Text => outcome.stdout.push_str(&render(name, checked, args.color)),
            OutputFormat::Json => {
                let index = LineIndex::new(document.text());
                records.extend(checked.findings.iter().map(|finding| Record {
                    path: name,
                    start: index.line_col(document.text(), finding.range.start().into()),
                    end: index.line_col(document.text(), finding.range.end().into()),
                    rule: RULE_ID,
                    finding,
                }));
            }
        }
    }

    if args.format == OutputFormat::Json {
        match serde_json::to_string_pretty(&records) {
            Ok(json) => {
                outcome.stdout.push_str(&json);
                outcome.stdout.push('\n');
            }
            Err(err) => outcome.error(err),
        }
    }

    tracing::debug!(sources = reports.len(), records = records.len(), "check finished");
    outcome
}

/// Findings as warnings, each with the fixed switch as a patch when a fix applies.
fn render(name: &str, checked: &Checked, color: bool) -> String {
    if checked.findings.is_empty() {
        return String::new();
    }

    let document = &checked.document;
    let mut diagnostics = Diagnostics::new();
    for finding in &checked.findings {
        let preview = fix(document, finding.range)
            .ok()
            .map(|fixed| fixed.edit.replacement);
        finding.report(&mut diagnostics, preview.as_deref());
    }

    let mut out = diagnostics
        .printer(document.text())
        .path(name)
        .colored(color)
        .render();
    out.push('\n');
    out
}
