//! Workspace settings surface (`.luarc.json`)

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Globals the Lua diagnostics layer should accept without warnings
pub const PREDEFINED_GLOBALS: [&str; 16] = [
    "game",
    "Game",
    "workspace",
    "Workspace",
    "Players",
    "Camera",
    "script",
    "shared",
    "_G",
    "getgenv",
    "getrenv",
    "cache",
    "crypt",
    "debug",
    "Drawing",
    "WebSocket",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to serialize .luarc.json: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Contents of a workspace `.luarc.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LuarcConfig {
    #[serde(rename = "diagnostics.globals")]
    pub diagnostics_globals: Vec<String>,
    #[serde(rename = "workspace.library")]
    pub workspace_library: Vec<String>,
}

impl LuarcConfig {
    /// Default config: the predefined globals plus the declaration files
    /// registered as workspace libraries.
    pub fn for_workspace<P: AsRef<Path>>(library_paths: &[P]) -> Self {
        Self {
            diagnostics_globals: PREDEFINED_GLOBALS.iter().map(|g| g.to_string()).collect(),
            workspace_library: library_paths
                .iter()
                .map(|p| p.as_ref().display().to_string())
                .collect(),
        }
    }

    /// Write `.luarc.json` into the workspace directory.
    pub fn write_to(&self, workspace_dir: &Path) -> Result<PathBuf, ConfigError> {
        let path = workspace_dir.join(".luarc.json");
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Best-effort write: a failure is logged and swallowed so it can
    /// never block symbol loading.
    pub fn write_or_log(&self, workspace_dir: &Path) {
        match self.write_to(workspace_dir) {
            Ok(path) => info!("created {}", path.display()),
            Err(e) => warn!("could not create .luarc.json: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_for_workspace_includes_predefined_globals() {
        let config = LuarcConfig::for_workspace(&["api.d.lua", "globals.d.lua"]);

        assert_eq!(config.diagnostics_globals.len(), 16);
        assert!(config.diagnostics_globals.contains(&"getgenv".to_string()));
        assert_eq!(config.workspace_library, vec!["api.d.lua", "globals.d.lua"]);
    }

    #[test]
    fn test_serialized_key_names() {
        let config = LuarcConfig::for_workspace(&["api.d.lua"]);
        let json = serde_json::to_string(&config).unwrap();

        assert!(json.contains("\"diagnostics.globals\""));
        assert!(json.contains("\"workspace.library\""));
    }

    #[test]
    fn test_round_trip() {
        let config = LuarcConfig::for_workspace(&["api.d.lua"]);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: LuarcConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.diagnostics_globals, config.diagnostics_globals);
        assert_eq!(parsed.workspace_library, config.workspace_library);
    }

    #[test]
    fn test_write_to_creates_file() {
        let temp = TempDir::new().unwrap();
        let config = LuarcConfig::for_workspace(&["api.d.lua"]);

        let path = config.write_to(temp.path()).unwrap();
        assert!(path.ends_with(".luarc.json"));

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("diagnostics.globals"));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let config = LuarcConfig::for_workspace(&["api.d.lua"]);
        let result = config.write_to(Path::new("/nonexistent/workspace"));

        assert!(matches!(result, Err(ConfigError::Write { .. })));
    }

    #[test]
    fn test_write_or_log_swallows_errors() {
        let config = LuarcConfig::for_workspace(&["api.d.lua"]);
        // Must not panic or propagate
        config.write_or_log(Path::new("/nonexistent/workspace"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Write {
            path: PathBuf::from("/test/.luarc.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/test/.luarc.json"));
    }
}
