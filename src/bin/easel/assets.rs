//! Asset embedding and tool configuration loading.

use easel::ToolsConfig;
use rust_embed::RustEmbed;
use std::path::Path;
use thiserror::Error;

/// Embeds all assets from the assets/ directory into the binary.
/// In debug mode, assets are loaded from the filesystem for faster iteration.
/// In release mode, assets are compressed and embedded in the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// Errors that can occur when loading the tool configuration.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("tools.ron not found in embedded assets")]
    ToolsNotFound,
    #[error("invalid UTF-8 in tools.ron: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("failed to parse tool config: {0}")]
    ParseError(#[from] ron::de::SpannedError),
    #[error("failed to read tool config '{path}': {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },
}

/// Loads the tool configuration from embedded assets.
pub fn load_tools() -> Result<ToolsConfig, ConfigLoadError> {
    let file = Assets::get("tools.ron").ok_or(ConfigLoadError::ToolsNotFound)?;
    let ron_string = std::str::from_utf8(&file.data)?;
    Ok(ron::from_str(ron_string)?)
}

/// Loads a tool configuration from a file on disk (`--config` override).
pub fn load_tools_from_path(path: &Path) -> Result<ToolsConfig, ConfigLoadError> {
    let ron_string =
        std::fs::read_to_string(path).map_err(|source| ConfigLoadError::ReadError {
            path: path.display().to_string(),
            source,
        })?;
    Ok(ron::from_str(&ron_string)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_tool_config_parses() {
        let tools = load_tools().expect("embedded tools.ron must parse");
        let ids: Vec<_> = tools.sliders.iter().map(|s| s.id.as_str()).collect();
        assert!(ids.contains(&"brush-size"));
        assert!(ids.contains(&"brush-opacity"));
    }

    #[test]
    fn missing_override_file_reports_read_error() {
        let err = load_tools_from_path(Path::new("does-not-exist.ron")).unwrap_err();
        assert!(matches!(err, ConfigLoadError::ReadError { .. }));
    }
}
