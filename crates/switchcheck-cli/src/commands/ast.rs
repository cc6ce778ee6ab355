//! Show the syntax tree of a source.

use std::path::PathBuf;

use switchcheck_lib::printer::SyntaxPrinter;
use switchcheck_lib::{Document, SourceMap};

use super::{Outcome, load_or_exit};

pub struct AstArgs {
    pub paths: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub trivia: bool,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let map = load_or_exit(&args.paths, args.source_text.as_deref());
    dump_sources(&map, &args).finish();
}

/// Syntax errors are printed but do not fail: the tree is still complete.
pub(crate) fn dump_sources(map: &SourceMap, args: &AstArgs) -> Outcome {
    let mut outcome = Outcome::default();

    for source in map.iter() {
        let document = match Document::parse(source.content) {
            Ok(document) => document,
            Err(err) => {
                outcome.error(format_args!("{}: {err}", source.name()));
                continue;
            }
        };

        if !document.diagnostics().is_empty() {
            outcome.stderr.push_str(
                &document
                    .diagnostics()
                    .filtered_printer(document.text())
                    .path(source.name())
                    .colored(args.color)
                    .render(),
            );
            outcome.stderr.push('\n');
        }

        let root = document.syntax();
        let dump = SyntaxPrinter::new(&root)
            .with_trivia(args.trivia)
            .with_spans(args.spans)
            .dump();
        outcome.stdout.push_str(&dump);
    }

    outcome
}
