//! Layout settings loaded from disk

use anyhow::{Context, Result};
use spread_layout::LayoutConfig;
use std::path::Path;

/// Read a layout config from a JSON file; fields missing from the file keep
/// their defaults
pub fn load_config(path: &Path) -> Result<LayoutConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: LayoutConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded layout config");
    Ok(config)
}

/// Config from `path` if given, otherwise defaults, with an optional spacing
/// override applied last
pub fn resolve_config(path: Option<&Path>, spacing: Option<f32>) -> Result<LayoutConfig> {
    let config = match path {
        Some(path) => load_config(path)?,
        None => LayoutConfig::default(),
    };
    Ok(match spacing {
        Some(spacing) => config.with_spacing(spacing),
        None => config,
    })
}
