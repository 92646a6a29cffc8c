//! Core symbol types shared by the extractor and the providers

use serde::{Deserialize, Serialize};

/// The kind of a declared symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Function,
    Class,
    Variable,
}

/// A symbol extracted from a declaration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    /// Short name offered as the completion label
    pub name: String,
    /// Kind of declaration this symbol came from
    pub kind: SymbolKind,
    /// Provenance string shown next to the completion
    pub detail: String,
    /// Doc comment captured from the line directly above the declaration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl Symbol {
    /// Create a new symbol without documentation
    pub fn new(name: impl Into<String>, kind: SymbolKind, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            detail: detail.into(),
            documentation: None,
        }
    }

    /// Attach documentation text
    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }
}
