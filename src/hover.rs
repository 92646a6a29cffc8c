//! Hover documentation rendering

use crate::index::DefinitionsIndex;
use serde::Serialize;

/// Hover content for a symbol
#[derive(Debug, Clone, Serialize)]
pub struct HoverInfo {
    /// Markdown-formatted content
    pub contents: String,
}

/// Hover information for the word under the cursor.
///
/// Looks the word up by exact name; with duplicate names the first indexed
/// symbol wins. Returns `None` when no symbol matches.
pub fn hover_symbol(index: &DefinitionsIndex, word: &str) -> Option<HoverInfo> {
    let symbol = index.find(word)?;

    let mut contents = String::new();
    contents.push_str(&format!("**{}**\n\n", symbol.detail));
    if let Some(ref doc) = symbol.documentation {
        contents.push_str(doc);
        contents.push_str("\n\n");
    }
    contents.push_str(&format!("```lua\n{}\n```", symbol.name));

    Some(HoverInfo { contents })
}
