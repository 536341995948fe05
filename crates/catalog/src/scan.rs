//! Catalog build: scan the four content sources and assemble the catalog.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use {
    serde::Deserialize,
    tracing::{info, warn},
};

use crate::{
    extract::describe,
    types::{Catalog, CatalogItem, ItemKind, sentence_name, title_name},
};

/// Fixed source locations under the content root.
const AGENTS_DIR: &str = "agents";
const SKILLS_DIR: &str = "skills";
const COMMANDS_DIR: &str = "commands";
const SKILL_FILENAME: &str = "SKILL.md";
const MARKDOWN_EXT: &str = "md";

/// The MCP config file at the content root; shared `path` of all MCP items.
pub const MCP_CONFIG_FILE: &str = ".mcp.json";

/// Build the full catalog from the four content sources under `root`.
///
/// Source order is agents, skills, commands, MCP servers; entries within
/// each source are sorted by display name so rebuilds are byte-stable.
/// A missing or unreadable source drops only that source's contribution.
pub fn build(root: &Path) -> Catalog {
    let mut items = Vec::new();
    items.extend(scan_agents(root));
    items.extend(scan_skills(root));
    items.extend(scan_commands(root));
    items.extend(scan_mcp_servers(root));
    info!(items = items.len(), root = %root.display(), "catalog built");
    Catalog { items }
}

// ── Markdown sources ─────────────────────────────────────────────────────────

/// Agent prompts: `agents/*.md`, one item per file.
fn scan_agents(root: &Path) -> Vec<CatalogItem> {
    let mut items: Vec<CatalogItem> = markdown_files(&root.join(AGENTS_DIR))
        .into_iter()
        .filter_map(|(slug, path)| {
            let content = read_source(&path)?;
            Some(CatalogItem {
                id: format!("agent-{slug}"),
                name: sentence_name(&slug),
                kind: ItemKind::Agent,
                description: describe(&content, ItemKind::Agent),
                path: format!("{AGENTS_DIR}/{slug}.{MARKDOWN_EXT}"),
                content,
            })
        })
        .collect();
    items.sort_by(|a, b| a.name.cmp(&b.name));
    items
}

/// Slash commands: `commands/*.md`, display name is `/` plus the file stem.
fn scan_commands(root: &Path) -> Vec<CatalogItem> {
    let mut items: Vec<CatalogItem> = markdown_files(&root.join(COMMANDS_DIR))
        .into_iter()
        .filter_map(|(slug, path)| {
            let content = read_source(&path)?;
            Some(CatalogItem {
                id: format!("command-{slug}"),
                name: format!("/{slug}"),
                kind: ItemKind::Command,
                description: describe(&content, ItemKind::Command),
                path: format!("{COMMANDS_DIR}/{slug}.{MARKDOWN_EXT}"),
                content,
            })
        })
        .collect();
    items.sort_by(|a, b| a.name.cmp(&b.name));
    items
}

/// Skills: `skills/<name>/SKILL.md`, one item per conforming directory.
/// Directories without a `SKILL.md` are skipped without comment.
fn scan_skills(root: &Path) -> Vec<CatalogItem> {
    let dir = root.join(SKILLS_DIR);
    let Some(entries) = list_dir(&dir) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for entry in entries {
        let skill_dir = entry.path();
        if !skill_dir.is_dir() {
            continue;
        }
        let Some(slug) = skill_dir.file_name().and_then(|s| s.to_str()).map(String::from) else {
            continue;
        };
        let skill_md = skill_dir.join(SKILL_FILENAME);
        if !skill_md.is_file() {
            continue;
        }
        let Some(content) = read_source(&skill_md) else {
            continue;
        };
        items.push(CatalogItem {
            id: format!("skill-{slug}"),
            name: title_name(&slug),
            kind: ItemKind::Skill,
            description: describe(&content, ItemKind::Skill),
            path: format!("{SKILLS_DIR}/{slug}/{SKILL_FILENAME}"),
            content,
        });
    }
    items.sort_by(|a, b| a.name.cmp(&b.name));
    items
}

// ── MCP servers ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct McpConfig {
    #[serde(default, rename = "mcpServers")]
    mcp_servers: BTreeMap<String, serde_json::Value>,
}

/// MCP servers: one item per entry in `.mcp.json`'s server map. All entries
/// share the config file as their `path`.
fn scan_mcp_servers(root: &Path) -> Vec<CatalogItem> {
    let path = root.join(MCP_CONFIG_FILE);
    if !path.is_file() {
        warn!(path = %path.display(), "MCP config missing, skipping source");
        return Vec::new();
    }
    let Some(raw) = read_source(&path) else {
        return Vec::new();
    };
    let config: McpConfig = match serde_json::from_str(&raw) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %path.display(), %e, "unparseable MCP config, skipping source");
            return Vec::new();
        },
    };

    // BTreeMap iteration is already name-ordered.
    config
        .mcp_servers
        .iter()
        .filter_map(|(name, server)| {
            let content = match serde_json::to_string_pretty(server) {
                Ok(c) => c,
                Err(e) => {
                    warn!(%name, %e, "failed to render MCP server entry");
                    return None;
                },
            };
            Some(CatalogItem {
                id: format!("mcp-{name}"),
                name: name.clone(),
                kind: ItemKind::Mcp,
                description: describe_mcp(server),
                path: MCP_CONFIG_FILE.to_string(),
                content,
            })
        })
        .collect()
}

/// Synthesize an MCP description from the transport declaration.
fn describe_mcp(server: &serde_json::Value) -> String {
    if server.get("type").and_then(|v| v.as_str()) == Some("http") {
        let url = server.get("url").and_then(|v| v.as_str()).unwrap_or_default();
        format!("HTTP: {url}")
    } else {
        "stdio server".to_string()
    }
}

// ── Filesystem helpers ───────────────────────────────────────────────────────

/// List a source directory, warn-and-skip when missing or unreadable.
fn list_dir(dir: &Path) -> Option<Vec<std::fs::DirEntry>> {
    if !dir.is_dir() {
        warn!(dir = %dir.display(), "source directory missing, skipping");
        return None;
    }
    match std::fs::read_dir(dir) {
        Ok(entries) => Some(entries.flatten().collect()),
        Err(e) => {
            warn!(dir = %dir.display(), %e, "failed to list source directory, skipping");
            None
        },
    }
}

/// `*.md` files directly under `dir`, as (stem, path) pairs.
fn markdown_files(dir: &Path) -> Vec<(String, PathBuf)> {
    let Some(entries) = list_dir(dir) else {
        return Vec::new();
    };
    entries
        .into_iter()
        .filter_map(|entry| {
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(MARKDOWN_EXT) {
                return None;
            }
            let stem = path.file_stem()?.to_str()?.to_string();
            Some((stem, path))
        })
        .collect()
}

/// Read one source file, warn-and-skip on failure.
fn read_source(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!(path = %path.display(), %e, "failed to read source file");
            None
        },
    }
}
