//! Insert the missing branches, printing the result or rewriting files.

use std::fs;
use std::path::PathBuf;

use switchcheck_core::LineIndex;
use switchcheck_lib::rule::fix_all;
use switchcheck_lib::{Document, SourceMap};

use super::{Outcome, load_or_exit};

pub struct FixArgs {
    pub paths: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub write: bool,
    pub color: bool,
}

pub fn run(args: FixArgs) {
    let map = load_or_exit(&args.paths, args.source_text.as_deref());
    fix_sources(&map, &args).finish();
}

pub(crate) fn fix_sources(map: &SourceMap, args: &FixArgs) -> Outcome {
    let mut outcome = Outcome::default();
    let headers = map.len() > 1 && !args.write;

    for source in map.iter() {
        let name = source.name();
        let document = match Document::parse(source.content) {
            Ok(document) => document,
            Err(err) => {
                outcome.error(format_args!("{name}: {err}"));
                continue;
            }
        };
        if document.diagnostics().has_errors() {
            outcome.stderr.push_str(
                &document
                    .diagnostics()
                    .filtered_printer(document.text())
                    .path(name)
                    .colored(args.color)
                    .render(),
            );
            outcome.stderr.push('\n');
            outcome.error(format_args!("{name}: not fixed, the source has syntax errors"));
            continue;
        }

        let fixed = match fix_all(&document) {
            Ok(fixed) => fixed,
            Err(err) => {
                outcome.error(format_args!("{name}: {err}"));
                continue;
            }
        };
        tracing::debug!(source = name, applied = fixed.applied, rounds = fixed.rounds, "fixed");

        let text = fixed.document.text();
        let index = LineIndex::new(text);
        for (finding, decline) in &fixed.declined {
            let at = index.line_col(text, finding.range.start().into());
            outcome.stderr.push_str(&format!(
                "{name}:{}:{}: fix declined: {decline}\n",
                at.line, at.column
            ));
            outcome.failed = true;
        }

        match (args.write, map.path(source.id)) {
            (true, Some(path)) => {
                if fixed.applied == 0 {
                    continue;
                }
                if let Err(err) = fs::write(path, text) {
                    outcome.error(format_args!("failed to write '{path}': {err}"));
                    continue;
                }
                outcome
                    .stderr
                    .push_str(&format!("{name}: fixed {} switch(es)\n", fixed.applied));
            }
            _ => {
                if headers {
                    outcome.stdout.push_str(&format!("==> {name} <==\n"));
                }
                outcome.stdout.push_str(text);
            }
        }
    }

    outcome
}
