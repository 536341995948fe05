//! Catalog artifact I/O: the serialized JSON hand-off between builder and
//! server. No schema version field; builder and server ship together.

use std::path::Path;

use {anyhow::Context, tracing::info};

use crate::types::Catalog;

/// Serialize `catalog` to `path`, creating the parent directory if needed.
/// Overwrites any previous artifact.
pub fn write_artifact(catalog: &Catalog, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(catalog).context("failed to serialize catalog")?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), items = catalog.len(), "catalog artifact written");
    Ok(())
}

/// Load a catalog artifact produced by [`write_artifact`].
pub fn load_artifact(path: &Path) -> anyhow::Result<Catalog> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog artifact {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid catalog artifact {}", path.display()))
}
