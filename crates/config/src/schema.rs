//! Config schema types (content root, catalog artifact, server).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    /// Content root holding `agents/`, `skills/`, `commands/`, and `.mcp.json`.
    pub root: PathBuf,
    pub catalog: CatalogConfig,
    pub server: ServerConfig,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            catalog: CatalogConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl ShelfConfig {
    /// Artifact location; relative paths resolve against the content root.
    pub fn artifact_path(&self) -> PathBuf {
        if self.catalog.artifact.is_absolute() {
            self.catalog.artifact.clone()
        } else {
            self.root.join(&self.catalog.artifact)
        }
    }
}

/// Catalog build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Artifact file the builder writes and the server loads.
    pub artifact: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            artifact: PathBuf::from("data/catalog.json"),
        }
    }
}

/// Catalog server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to. Defaults to "127.0.0.1".
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: 7878,
        }
    }
}
