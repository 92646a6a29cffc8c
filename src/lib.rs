//! Completion and hover intelligence for Potassium Lua declaration files
//!
//! Parses the `api.d.lua` / `globals.d.lua` declaration pair shipped with
//! the Potassium runtime and exposes the extracted symbols through
//! completion and hover providers that an editor integration can render.
//!
//! # Example
//!
//! ```no_run
//! use potassium_intellisense::{render_completions, DefinitionsIndex};
//!
//! let index = DefinitionsIndex::load("api.d.lua", "globals.d.lua");
//! for item in render_completions(&index) {
//!     println!("{}: {}", item.label, item.detail);
//! }
//! ```

mod completion;
mod config;
mod extractor;
mod hover;
mod index;
mod types;

pub use completion::{render_completions, CompletionItem};
pub use config::{ConfigError, LuarcConfig, PREDEFINED_GLOBALS};
pub use extractor::{extract_definitions, scan_definitions};
pub use hover::{hover_symbol, HoverInfo};
pub use index::DefinitionsIndex;
pub use types::{Symbol, SymbolKind};
