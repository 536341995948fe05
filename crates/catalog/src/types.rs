use serde::{Deserialize, Serialize};

// ── Item kinds ───────────────────────────────────────────────────────────────

/// Kind of a catalog item. A tag, not a behavioral subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Agent,
    Skill,
    Command,
    Mcp,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Skill => "skill",
            Self::Command => "command",
            Self::Mcp => "mcp",
        }
    }

    /// Fallback description for sources that declare none.
    pub fn default_description(self) -> &'static str {
        match self {
            Self::Agent => "Agent prompt",
            Self::Skill => "Skill instructions",
            Self::Command => "Slash command",
            Self::Mcp => "MCP server",
        }
    }
}

// ── Catalog entries ──────────────────────────────────────────────────────────

/// One catalog entry: an agent prompt, skill, slash command, or MCP server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique id, `{kind}-{slug}` (e.g. `skill-threejs-development`).
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Short description extracted from the source, or a kind default.
    pub description: String,
    /// Root-relative source path. Every MCP entry shares `.mcp.json`.
    pub path: String,
    /// Full source text, or the pretty-printed config fragment for MCP.
    pub content: String,
}

/// The full component catalog, serialized as a flat JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exact-match lookup by source path. No prefix or fuzzy matching.
    pub fn find_by_path(&self, path: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.path == path)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.find_by_path(path).is_some()
    }
}

// ── Display-name derivation ──────────────────────────────────────────────────

/// Agent-style name: hyphens to spaces, first letter only capitalized.
/// `code-reviewer` becomes `Code reviewer`.
pub fn sentence_name(slug: &str) -> String {
    let spaced = slug.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => spaced,
    }
}

/// Skill-style name: hyphens to spaces, every word capitalized.
/// `threejs-development` becomes `Threejs Development`.
pub fn title_name(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
