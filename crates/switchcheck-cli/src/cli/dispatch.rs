//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but keep the raw CLI choices
//! (like `--color auto`); the `Into<*Args>` impls resolve them.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::{CheckArgs, OutputFormat};
use crate::commands::fix::FixArgs;

pub struct CheckParams {
    pub paths: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub format: OutputFormat,
    pub strict: bool,
    pub jobs: Option<usize>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let format = match m.get_one::<String>("format").map(|s| s.as_str()) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };
        Self {
            paths: parse_paths(m),
            source_text: m.get_one::<String>("source_text").cloned(),
            format,
            strict: m.get_flag("strict"),
            jobs: m.get_one::<usize>("jobs").copied(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            paths: p.paths,
            source_text: p.source_text,
            format: p.format,
            strict: p.strict,
            jobs: p.jobs,
            color: p.color.should_colorize(),
        }
    }
}

pub struct FixParams {
    pub paths: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub write: bool,
    pub color: ColorChoice,
}

impl FixParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            paths: parse_paths(m),
            source_text: m.get_one::<String>("source_text").cloned(),
            write: m.get_flag("write"),
            color: parse_color(m),
        }
    }
}

impl From<FixParams> for FixArgs {
    fn from(p: FixParams) -> Self {
        Self {
            paths: p.paths,
            source_text: p.source_text,
            write: p.write,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub trivia: bool,
    pub spans: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: m.get_one::<PathBuf>("path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            paths: p.path.into_iter().collect(),
            source_text: p.source_text,
            trivia: p.trivia,
            spans: p.spans,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_paths(m: &ArgMatches) -> Vec<PathBuf> {
    m.get_many::<PathBuf>("paths")
        .map(|paths| paths.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
