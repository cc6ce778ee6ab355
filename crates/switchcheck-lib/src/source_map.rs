//! Sources of one analysis run.
//!
//! Owns the text of every input so reports can refer back to it by
//! [`SourceId`] after the documents built from it are gone.

/// Handle to a source in a [`SourceMap`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SourceId(u32);

impl SourceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where a source came from.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SourceKind {
    /// Text passed on the command line (`-s`).
    Inline,
    Stdin,
    File(String),
}

impl SourceKind {
    /// Name used in diagnostics and reports.
    pub fn display_name(&self) -> &str {
        match self {
            SourceKind::Inline => "<source>",
            SourceKind::Stdin => "<stdin>",
            SourceKind::File(path) => path,
        }
    }
}

/// Borrowed view of one entry.
#[derive(Clone, Copy, Debug)]
pub struct Source<'a> {
    pub id: SourceId,
    pub kind: &'a SourceKind,
    pub content: &'a str,
}

impl<'a> Source<'a> {
    pub fn name(&self) -> &'a str {
        self.kind.display_name()
    }
}

#[derive(Clone, Debug)]
struct Entry {
    kind: SourceKind,
    content: String,
}

#[derive(Clone, Debug, Default)]
pub struct SourceMap {
    entries: Vec<Entry>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding one inline source.
    pub fn inline(content: impl Into<String>) -> Self {
        let mut map = Self::new();
        map.add_inline(content);
        map
    }

    pub fn add_inline(&mut self, content: impl Into<String>) -> SourceId {
        self.push(SourceKind::Inline, content.into())
    }

    pub fn add_stdin(&mut self, content: impl Into<String>) -> SourceId {
        self.push(SourceKind::Stdin, content.into())
    }

    pub fn add_file(&mut self, path: impl Into<String>, content: impl Into<String>) -> SourceId {
        self.push(SourceKind::File(path.into()), content.into())
    }

    pub fn get(&self, id: SourceId) -> Option<Source<'_>> {
        self.entries.get(id.index()).map(|entry| Source {
            id,
            kind: &entry.kind,
            content: &entry.content,
        })
    }

    pub fn content(&self, id: SourceId) -> Option<&str> {
        self.get(id).map(|source| source.content)
    }

    pub fn kind(&self, id: SourceId) -> Option<&SourceKind> {
        self.entries.get(id.index()).map(|entry| &entry.kind)
    }

    /// File path, for file sources only.
    pub fn path(&self, id: SourceId) -> Option<&str> {
        match self.kind(id)? {
            SourceKind::File(path) => Some(path),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Source<'_>> {
        self.entries.iter().enumerate().map(|(index, entry)| Source {
            id: SourceId(index as u32),
            kind: &entry.kind,
            content: &entry.content,
        })
    }

    fn push(&mut self, kind: SourceKind, content: String) -> SourceId {
        let id = SourceId(self.entries.len() as u32);
        self.entries.push(Entry { kind, content });
        id
    }
}

#[cfg(test)]
#[path = "source_map_tests.rs"]
mod source_map_tests;
