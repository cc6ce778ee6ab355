//! The `non-exhaustive-enum-switch` rule.
//!
//! A switch is reported when all of these hold:
//! - its discriminant is statically an enum
//! - it has a default branch (`default:` or `_`) that throws
//!   `ArgumentOutOfRangeException`
//! - its explicit branches leave at least one enum member unmatched
//!
//! Coverage is by symbol identity: `Door.Open` never covers `Status.Open`.
//! The fix inserts one `throw new NotImplementedException()` branch per
//! missing member, in declaration order, right before the default branches.

mod branches;
mod checker;
mod domain;
mod finding;
mod fix;
mod guard;
mod rewrite;
mod synth;

#[cfg(test)]
mod branches_tests;
#[cfg(test)]
pub(crate) mod scenarios;

pub use branches::{Branch, BranchConstruct, ConstructForm};
pub use checker::{check, check_with};
pub use domain::ClosedDomain;
pub use finding::{Finding, MissingMember};
pub use fix::{Decline, FixAll, Fixed, TextEdit, fix, fix_all};
pub use guard::{GUARD_SIGNAL, is_guarded};
pub use synth::PLACEHOLDER_SIGNAL;

/// Diagnostic code of every finding.
pub const RULE_ID: &str = "non-exhaustive-enum-switch";
