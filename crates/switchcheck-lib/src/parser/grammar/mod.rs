//! Grammar productions for the C# subset.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Declarations, statements, switches (both forms plus patterns) and
//! expressions each live in their own file; `types` holds the type grammar
//! and the lookahead scanners that disambiguate declarations from expressions.

mod expressions;
mod items;
mod statements;
mod switches;
mod types;
