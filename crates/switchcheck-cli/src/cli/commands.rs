//! Command builders for the CLI.

use clap::{ArgGroup, Command};

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("switchcheck")
        .about("Find and fix guarded enum switches that miss members")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(fix_command())
        .subcommand(ast_command())
}

/// Sources come from positional paths or `-s`, never both.
fn input_group() -> ArgGroup {
    ArgGroup::new("input")
        .args(["paths", "source_text"])
        .required(true)
        .multiple(false)
}

/// Report non-exhaustive switches.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Report guarded enum switches that miss members")
        .override_usage(
            "\
  switchcheck check <PATH>...
  switchcheck check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  switchcheck check src/                   # every .cs file, recursively
  switchcheck check Order.cs --format json
  switchcheck check src/ --strict -j 4
  switchcheck check -s 'enum E { A, B } ...'"#,
        )
        .arg(paths_arg())
        .arg(source_text_arg())
        .arg(format_arg())
        .arg(strict_arg())
        .arg(jobs_arg())
        .arg(color_arg())
        .group(input_group())
}

/// Insert the missing branches.
pub fn fix_command() -> Command {
    Command::new("fix")
        .about("Insert a throwing branch for every missing enum member")
        .override_usage(
            "\
  switchcheck fix <PATH>... [--write]
  switchcheck fix -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  switchcheck fix Order.cs                 # print the fixed file
  switchcheck fix src/ --write             # rewrite files in place"#,
        )
        .arg(paths_arg())
        .arg(source_text_arg())
        .arg(write_arg())
        .arg(color_arg())
        .group(input_group())
}

/// Show the syntax tree of a source.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the syntax tree of a C# source")
        .override_usage(
            "\
  switchcheck ast <PATH>
  switchcheck ast -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  switchcheck ast Order.cs
  switchcheck ast Order.cs --trivia --spans
  switchcheck ast -s 'enum E { A }'"#,
        )
        .arg(path_arg())
        .arg(source_text_arg())
        .arg(trivia_arg())
        .arg(spans_arg())
        .arg(color_arg())
        .group(
            ArgGroup::new("input")
                .args(["path", "source_text"])
                .required(true)
                .multiple(false),
        )
}
