//! switchcheck: finds guarded enum switches that miss members, and fixes them.
//!
//! A switch over an enum whose catch-all branch throws
//! `ArgumentOutOfRangeException` is treated as a promise that every member is
//! handled explicitly. When members are missing, the rule reports them and can
//! insert one `throw new NotImplementedException()` branch per member, right
//! before the catch-all.
//!
//! # Example
//!
//! ```
//! use switchcheck_lib::{Document, rule};
//!
//! let source = r#"
//!     enum Status { Accepted, Cooking, Cooked }
//!     class Kitchen {
//!         string Describe(Status s) => s switch
//!         {
//!             Status.Accepted => "accepted",
//!             _ => throw new ArgumentOutOfRangeException(nameof(s)),
//!         };
//!     }
//! "#;
//!
//! let document = Document::parse(source).expect("out of fuel");
//! let findings = rule::check(&document);
//! assert_eq!(findings.len(), 1);
//!
//! let fixed = rule::fix(&document, findings[0].range).expect("fixable");
//! assert!(fixed.document.text().contains("Status.Cooked => throw new NotImplementedException()"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyzer;
pub mod cancel;
pub mod diagnostics;
pub mod document;
pub mod parser;
pub mod printer;
pub mod rule;
pub mod semantic;
pub mod source_map;

/// Result type for analysis passes that produce both output and diagnostics.
///
/// Each pass returns its typed output alongside any diagnostics it collected.
/// Fatal errors (like fuel exhaustion) use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

pub use analyzer::{Analyzer, Checked, FileReport};
pub use cancel::CancellationToken;
pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use document::{Document, DocumentBuilder};
pub use rule::{Decline, Finding, FixAll, Fixed, RULE_ID, TextEdit};
pub use source_map::{SourceId, SourceKind, SourceMap};

/// Errors that abort a pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    /// The pass observed a cancellation request.
    #[error("analysis cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, Error>;
