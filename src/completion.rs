//! Completion item rendering

use crate::index::DefinitionsIndex;
use crate::types::SymbolKind;
use serde::Serialize;

/// A completion entry offered to the editor
#[derive(Debug, Clone, Serialize)]
pub struct CompletionItem {
    /// Display text, matched against the typed prefix
    pub label: String,
    /// Kind of the underlying symbol
    pub kind: SymbolKind,
    /// Provenance string shown next to the label
    pub detail: String,
    /// Markdown documentation, if the declaration carried a doc comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// Render every indexed symbol as a completion item, in index order.
pub fn render_completions(index: &DefinitionsIndex) -> Vec<CompletionItem> {
    index
        .symbols()
        .iter()
        .map(|symbol| CompletionItem {
            label: symbol.name.clone(),
            kind: symbol.kind,
            detail: symbol.detail.clone(),
            documentation: symbol.documentation.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn index_from(api: &str, globals: &str) -> DefinitionsIndex {
        let temp = TempDir::new().unwrap();
        let api_path = temp.path().join("api.d.lua");
        let globals_path = temp.path().join("globals.d.lua");
        fs::write(&api_path, api).unwrap();
        fs::write(&globals_path, globals).unwrap();
        DefinitionsIndex::load(api_path, globals_path)
    }

    #[test]
    fn test_render_preserves_order() {
        let index = index_from(
            "--- Creates a widget\nfunction Widget.new(x)\n---@class Widget\n",
            "SomeGlobal = 5\n",
        );
        let items = render_completions(&index);

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].label, "new");
        assert_eq!(items[1].label, "Widget");
        assert_eq!(items[2].label, "SomeGlobal");
    }

    #[test]
    fn test_render_carries_documentation() {
        let index = index_from("--- Creates a widget\nfunction Widget.new(x)\n", "");
        let items = render_completions(&index);

        assert_eq!(items[0].documentation, Some("Creates a widget".to_string()));
        assert_eq!(items[0].detail, "Potassium API: Widget.new");
    }

    #[test]
    fn test_item_serialization() {
        let index = index_from("function Widget.new(x)\n", "");
        let items = render_completions(&index);

        let json = serde_json::to_string(&items[0]).unwrap();
        assert!(json.contains("\"label\":\"new\""));
        assert!(json.contains("\"kind\":\"function\""));
        assert!(!json.contains("documentation"));
    }

    #[test]
    fn test_render_empty_index() {
        let index = index_from("", "");
        assert!(render_completions(&index).is_empty());
    }
}
