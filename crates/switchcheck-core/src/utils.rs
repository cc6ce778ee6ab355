//! Byte offset to line/column conversion.

use serde::Serialize;

/// 1-based line and column. Columns count Unicode scalar values.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

/// Precomputed line starts of one source text.
///
/// # Examples
/// ```
/// use switchcheck_core::{LineCol, LineIndex};
/// let index = LineIndex::new("ab\ncd");
/// assert_eq!(index.line_col("ab\ncd", 4), LineCol { line: 2, column: 2 });
/// ```
#[derive(Clone, Debug)]
pub struct LineIndex {
    line_starts: Vec<u32>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i as u32 + 1),
        );
        Self { line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset into `text` (the same text the index was built from).
    ///
    /// Offsets past the end clamp to the end; offsets inside a multi-byte
    /// character count that character as started.
    pub fn line_col(&self, text: &str, offset: u32) -> LineCol {
        let offset = offset.min(text.len() as u32);
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let start = self.line_starts[line] as usize;
        let column = text.as_bytes()[start..offset as usize]
            .iter()
            .filter(|&&b| (b & 0xC0) != 0x80)
            .count();
        LineCol {
            line: line as u32 + 1,
            column: column as u32 + 1,
        }
    }
}
