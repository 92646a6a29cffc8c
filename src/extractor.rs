//! Line-oriented declaration file scanner

use crate::types::{Symbol, SymbolKind};
use log::info;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Function declaration pattern: `function name`, `function a.b:c`
static FUNCTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"function\s+([A-Za-z0-9_.:]+)").unwrap());

/// Extract symbols from a declaration file.
///
/// A missing or unreadable file is not an error: the declaration files are
/// optional, so the result is simply empty and symbol loading continues.
pub fn extract_definitions(path: &Path) -> Vec<Symbol> {
    match fs::read_to_string(path) {
        Ok(source) => scan_definitions(&source),
        Err(_) => {
            info!("declaration file not found: {}", path.display());
            Vec::new()
        }
    }
}

/// Scan declaration source line by line and collect symbols in order.
///
/// One piece of state is carried between lines: the most recent doc comment
/// (`--- text`), which attaches to the next function declaration. Blank
/// lines and `---@meta` headers discard it.
pub fn scan_definitions(source: &str) -> Vec<Symbol> {
    let mut symbols = Vec::new();
    let mut pending_doc = String::new();

    for raw_line in source.split('\n') {
        let line = raw_line.trim();

        // Meta header or blank line: nothing declared here
        if line.is_empty() || line.starts_with("---@meta") {
            pending_doc.clear();
            continue;
        }

        // Doc comment, but not an annotation (`---@...`). Only the line
        // directly above a declaration is kept; earlier lines are dropped.
        if line.starts_with("---") && !line.starts_with("---@") {
            pending_doc = line[3..].trim().to_string();
            continue;
        }

        // function a.b:c(...)
        if let Some(caps) = FUNCTION_REGEX.captures(line) {
            let full_name = &caps[1];
            let name = full_name.rsplit(['.', ':']).next().unwrap_or(full_name);
            if !name.is_empty() {
                let mut symbol = Symbol::new(
                    name,
                    SymbolKind::Function,
                    format!("Potassium API: {}", full_name),
                );
                if !pending_doc.is_empty() {
                    symbol = symbol.with_documentation(pending_doc.as_str());
                }
                symbols.push(symbol);
            }
            pending_doc.clear();
            continue;
        }

        // ---@class Name ...
        // A class annotation does not consume the pending doc comment; a
        // doc line above a class still attaches to the next function.
        if let Some((_, rest)) = line.split_once("---@class") {
            if let Some(class_name) = rest.trim().split_whitespace().next() {
                symbols.push(Symbol::new(
                    class_name,
                    SymbolKind::Class,
                    format!("Potassium Type: {}", class_name),
                ));
            }
            continue;
        }

        // Global assignment: `Name = value`
        if !line.starts_with("--") {
            if let Some((before, _)) = line.split_once('=') {
                let var_name = before.trim();
                if !var_name.is_empty()
                    && !var_name.contains(char::is_whitespace)
                    && !var_name.starts_with("---")
                {
                    symbols.push(Symbol::new(
                        var_name,
                        SymbolKind::Variable,
                        "Potassium Global",
                    ));
                }
            }
        }
    }

    symbols
}
