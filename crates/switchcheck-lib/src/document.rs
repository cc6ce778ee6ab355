//! A parsed and bound snapshot of one source text.

use rowan::GreenNode;

use crate::Result;
use crate::diagnostics::Diagnostics;
use crate::parser::{DEFAULT_EXEC_FUEL, DEFAULT_RECURSION_FUEL, SyntaxNode, parse_with};
use crate::semantic::{SemanticModel, bind};

/// Immutable: a fix returns a new document instead of changing this one.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    green: GreenNode,
    diagnostics: Diagnostics,
    model: SemanticModel,
    config: DocumentBuilder,
}

/// Fuel limits used to parse a document and every snapshot derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentBuilder {
    exec_fuel: Option<u32>,
    recursion_fuel: Option<u32>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self {
            exec_fuel: Some(DEFAULT_EXEC_FUEL),
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set execution fuel limit. None = infinite.
    ///
    /// Execution fuel never replenishes. It protects against large inputs.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit;
        self
    }

    /// Set recursion depth limit. None = infinite.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    /// Parse and bind. Syntax errors are collected in
    /// [`Document::diagnostics`]; only fuel exhaustion fails.
    pub fn parse(self, source: impl Into<String>) -> Result<Document> {
        let text = source.into();
        let (parse, diagnostics) = parse_with(&text, self.exec_fuel, self.recursion_fuel)?;
        let green = parse.into_cst();
        let model = bind(&SyntaxNode::new_root(green.clone()));

        tracing::debug!(
            bytes = text.len(),
            errors = diagnostics.error_count(),
            "parsed document"
        );

        Ok(Document {
            text,
            green,
            diagnostics,
            model,
            config: self,
        })
    }
}

impl Document {
    /// Parse with default fuel.
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        DocumentBuilder::new().parse(source)
    }

    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// New snapshot of edited text, parsed with this document's limits.
    pub fn reparse(&self, text: impl Into<String>) -> Result<Self> {
        self.config.parse(text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Parse errors of this snapshot.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn model(&self) -> &SemanticModel {
        &self.model
    }

    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }
}
