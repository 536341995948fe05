//! HTTP client for a running catalog server, backing the `items`, `show`,
//! and `edit` subcommands.

use std::{io::Read, path::Path};

use {anyhow::Context, promptshelf_catalog::ItemKind, serde::Deserialize};

/// One list entry as served by `/api/components`.
#[derive(Debug, Deserialize)]
struct ItemSummary {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    description: String,
    path: String,
}

/// Fetch the component list and print it grouped by kind.
pub async fn list_items(server: &str) -> anyhow::Result<()> {
    let items: Vec<ItemSummary> = reqwest::get(format!("{server}/api/components"))
        .await
        .context("failed to reach catalog server")?
        .error_for_status()
        .context("list request failed")?
        .json()
        .await
        .context("invalid list response")?;

    for kind in [
        ItemKind::Agent,
        ItemKind::Skill,
        ItemKind::Command,
        ItemKind::Mcp,
    ] {
        let group: Vec<&ItemSummary> = items
            .iter()
            .filter(|i| i.kind == kind.as_str())
            .collect();
        if group.is_empty() {
            continue;
        }
        println!("{} ({})", kind.as_str(), group.len());
        for item in group {
            println!("  {:<28} {:<44} {}", item.name, item.description, item.path);
        }
    }
    Ok(())
}

/// Fetch and print one item's content. Prints a fallback line instead of
/// failing the process when the item can't be loaded.
pub async fn show_item(server: &str, path: &str) -> anyhow::Result<()> {
    match fetch_content(server, path).await {
        Ok(content) => println!("{content}"),
        Err(e) => println!("Failed to load component content: {e}"),
    }
    Ok(())
}

async fn fetch_content(server: &str, path: &str) -> anyhow::Result<String> {
    let body: serde_json::Value = reqwest::get(format!("{server}/api/component/{path}"))
        .await
        .context("failed to reach catalog server")?
        .error_for_status()
        .context("detail request failed")?
        .json()
        .await
        .context("invalid detail response")?;
    body.get("content")
        .and_then(|c| c.as_str())
        .map(String::from)
        .context("detail response missing content")
}

/// Push new content for one item: confirmation on success, error
/// notification on failure, no retry.
pub async fn edit_item(server: &str, path: &str, file: Option<&Path>) -> anyhow::Result<()> {
    let content = match file {
        Some(f) => {
            std::fs::read_to_string(f).with_context(|| format!("failed to read {}", f.display()))?
        },
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        },
    };

    let resp = reqwest::Client::new()
        .put(format!("{server}/api/component/{path}"))
        .json(&serde_json::json!({ "content": content }))
        .send()
        .await
        .context("failed to reach catalog server")?;

    if !resp.status().is_success() {
        let status = resp.status();
        let detail = resp
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or_else(|| "no detail".into());
        anyhow::bail!("save failed ({status}): {detail}");
    }
    println!("saved {path}");
    Ok(())
}
