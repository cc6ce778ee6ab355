//! Batch analysis over a [`SourceMap`].
//!
//! Every source gets its own [`Document`]. With [`Analyzer::concurrent`]
//! the sources are split into contiguous chunks, one scoped thread per
//! chunk; reports always come back in source order.

use std::num::NonZeroUsize;
use std::thread;

use crate::cancel::CancellationToken;
use crate::document::{Document, DocumentBuilder};
use crate::rule::{Finding, check_with};
use crate::source_map::{Source, SourceId, SourceMap};
use crate::{Error, Result};

/// A parsed source and its findings.
#[derive(Debug, Clone)]
pub struct Checked {
    pub document: Document,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub source: SourceId,
    pub result: Result<Checked>,
}

impl FileReport {
    /// Findings, empty when the source failed.
    pub fn findings(&self) -> &[Finding] {
        match &self.result {
            Ok(checked) => &checked.findings,
            Err(_) => &[],
        }
    }

    pub fn has_parse_errors(&self) -> bool {
        self.result
            .as_ref()
            .is_ok_and(|checked| checked.document.diagnostics().has_errors())
    }
}

pub struct Analyzer<'a> {
    sources: &'a SourceMap,
    builder: DocumentBuilder,
    concurrent: bool,
    jobs: Option<NonZeroUsize>,
    cancel: CancellationToken,
}

impl<'a> Analyzer<'a> {
    pub fn new(sources: &'a SourceMap) -> Self {
        Self {
            sources,
            builder: DocumentBuilder::default(),
            concurrent: false,
            jobs: None,
            cancel: CancellationToken::new(),
        }
    }

    /// Analyze sources on worker threads. Off by default.
    pub fn concurrent(mut self, enabled: bool) -> Self {
        self.concurrent = enabled;
        self
    }

    /// Upper bound on worker threads. Defaults to the available parallelism;
    /// zero means the default.
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = NonZeroUsize::new(jobs);
        self
    }

    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Fuel limits for every document.
    pub fn documents(mut self, builder: DocumentBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// One report per source, in source order.
    pub fn run(&self) -> Vec<FileReport> {
        let sources: Vec<Source<'_>> = self.sources.iter().collect();
        let workers = self.workers(sources.len());

        if workers <= 1 {
            tracing::debug!(sources = sources.len(), "analyzing sequentially");
            return sources.iter().map(|source| self.analyze(source)).collect();
        }

        let chunk = sources.len().div_ceil(workers);
        tracing::debug!(sources = sources.len(), workers, chunk, "analyzing concurrently");

        thread::scope(|scope| {
            let handles: Vec<_> = sources
                .chunks(chunk)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|source| self.analyze(source))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        })
    }

    fn workers(&self, sources: usize) -> usize {
        if !self.concurrent {
            return 1;
        }
        let limit = self
            .jobs
            .or_else(|| thread::available_parallelism().ok())
            .map_or(1, NonZeroUsize::get);
        limit.min(sources)
    }

    fn analyze(&self, source: &Source<'_>) -> FileReport {
        let result = self.check_source(source);
        if let Err(error) = &result {
            tracing::debug!(source = source.name(), %error, "source not analyzed");
        }
        FileReport {
            source: source.id,
            result,
        }
    }

    fn check_source(&self, source: &Source<'_>) -> Result<Checked> {
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        let document = self.builder.parse(source.content)?;
        let findings = check_with(&document, &self.cancel)?;
        Ok(Checked { document, findings })
    }
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod analyzer_tests;
