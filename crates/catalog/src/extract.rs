//! Best-effort description extraction from markdown component files.
//!
//! Components document themselves with a `## Purpose` or `## Description`
//! heading carrying inline text. Extraction is a pure function over the file
//! text; callers fall back to a per-kind default when nothing matches.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ItemKind;

/// Matches `## Purpose: <text>` / `## Description <text>` heading lines.
/// Case-insensitive, colon optional, inline text required.
#[allow(clippy::expect_used)]
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^##\s*(?:purpose|description)(?:\s*:\s*|\s+)(\S.*)$")
        .expect("valid literal regex")
});

/// Extract the inline remainder of the first `## Purpose` or
/// `## Description` heading line, if any.
pub fn extract_description(content: &str) -> Option<String> {
    DESCRIPTION_RE
        .captures(content)
        .map(|caps| caps[1].trim().to_string())
}

/// Extraction with the kind's fallback applied.
pub fn describe(content: &str, kind: ItemKind) -> String {
    extract_description(content).unwrap_or_else(|| kind.default_description().to_string())
}
