//! Rebuildable symbol collection loaded from the declaration file pair

use crate::extractor::extract_definitions;
use crate::types::Symbol;
use log::info;
use std::path::{Path, PathBuf};

/// Symbol collection built from the API and globals declaration files.
///
/// The index owns both file paths so the collection can be rebuilt on
/// demand. Symbols from the API file always precede symbols from the
/// globals file, and within a file they keep scan order. Duplicate names
/// are retained; [`find`](Self::find) resolves them first-match-wins.
pub struct DefinitionsIndex {
    api_path: PathBuf,
    globals_path: PathBuf,
    symbols: Vec<Symbol>,
}

impl DefinitionsIndex {
    /// Load symbols from the declaration file pair.
    ///
    /// Missing files contribute no symbols; loading never fails.
    pub fn load(api_path: impl Into<PathBuf>, globals_path: impl Into<PathBuf>) -> Self {
        let mut index = Self {
            api_path: api_path.into(),
            globals_path: globals_path.into(),
            symbols: Vec::new(),
        };
        index.reload();
        index
    }

    /// Rebuild the collection from the stored paths.
    ///
    /// The replacement collection is built in full before it is swapped in,
    /// so the index never exposes a partially rebuilt state.
    pub fn reload(&mut self) {
        let mut symbols = extract_definitions(&self.api_path);
        symbols.extend(extract_definitions(&self.globals_path));
        info!(
            "indexed {} symbols from {} and {}",
            symbols.len(),
            self.api_path.display(),
            self.globals_path.display()
        );
        self.symbols = symbols;
    }

    /// All symbols in extraction order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// First symbol with the given name, if any.
    pub fn find(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|symbol| symbol.name == name)
    }

    /// Number of indexed symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the index holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Path of the API declaration file.
    pub fn api_path(&self) -> &Path {
        &self.api_path
    }

    /// Path of the globals declaration file.
    pub fn globals_path(&self) -> &Path {
        &self.globals_path
    }
}
