//! Component catalog: scan content sources, extract metadata, and read/write
//! the serialized catalog artifact.
//!
//! Sources scanned under the content root:
//! - `agents/*.md`: agent prompt files
//! - `skills/<name>/SKILL.md`: skill instruction bundles
//! - `commands/*.md`: slash-command templates
//! - `.mcp.json`: MCP server definitions

pub mod artifact;
pub mod extract;
pub mod scan;
pub mod types;

pub use {
    artifact::{load_artifact, write_artifact},
    scan::{MCP_CONFIG_FILE, build},
    types::{Catalog, CatalogItem, ItemKind},
};
