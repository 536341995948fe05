//! Integration tests for the catalog API surface.

use std::{net::SocketAddr, path::Path};

use tokio::net::TcpListener;

use {
    promptshelf_catalog::{build, write_artifact},
    promptshelf_server::{AppState, build_app},
};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// Seed a content root with one item of each kind.
fn seed_bundle(root: &Path) {
    write(
        root,
        "agents/code-reviewer.md",
        "# Code Reviewer\n\n## Purpose: Reviews code for bugs\n\nBe thorough.\n",
    );
    write(
        root,
        "skills/threejs-development/SKILL.md",
        "## Description: Builds three.js scenes\n\nScene setup notes.\n",
    );
    write(root, "commands/deploy.md", "## Purpose: Ships the thing\n");
    write(
        root,
        ".mcp.json",
        r#"{"mcpServers": {"docs": {"type": "http", "url": "https://x"}}}"#,
    );
}

/// Build the artifact from `root`, load it, and start a server on an
/// ephemeral port.
async fn start_server(root: &Path) -> SocketAddr {
    let artifact = root.join("data/catalog.json");
    write_artifact(&build(root), &artifact).unwrap();
    let state = AppState::load(root, &artifact).unwrap();
    let app = build_app(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn health_reports_ok() {
    let tmp = tempfile::tempdir().unwrap();
    seed_bundle(tmp.path());
    let addr = start_server(tmp.path()).await;

    let resp = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn list_strips_content_and_keeps_order() {
    let tmp = tempfile::tempdir().unwrap();
    seed_bundle(tmp.path());
    let addr = start_server(tmp.path()).await;

    let resp = reqwest::get(format!("http://{addr}/api/components"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let items: Vec<serde_json::Value> = resp.json().await.unwrap();

    assert_eq!(items.len(), 4);
    let ids: Vec<&str> = items.iter().map(|i| i["id"].as_str().unwrap()).collect();
    assert_eq!(
        ids,
        vec![
            "agent-code-reviewer",
            "skill-threejs-development",
            "command-deploy",
            "mcp-docs",
        ]
    );
    for item in &items {
        assert!(item.get("content").is_none());
        assert!(item.get("description").is_some());
    }
    assert_eq!(items[0]["type"], "agent");
    assert_eq!(items[0]["name"], "Code reviewer");
    assert_eq!(items[3]["description"], "HTTP: https://x");
}

#[tokio::test]
async fn detail_returns_cached_content() {
    let tmp = tempfile::tempdir().unwrap();
    seed_bundle(tmp.path());
    let addr = start_server(tmp.path()).await;

    let resp = reqwest::get(format!("http://{addr}/api/component/agents/code-reviewer.md"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["path"], "agents/code-reviewer.md");
    assert!(body["content"].as_str().unwrap().contains("Be thorough."));
}

#[tokio::test]
async fn detail_matching_is_exact() {
    let tmp = tempfile::tempdir().unwrap();
    seed_bundle(tmp.path());
    let addr = start_server(tmp.path()).await;

    for unknown in ["agents/code-reviewer", "agents", "skills/threejs-development"] {
        let resp = reqwest::get(format!("http://{addr}/api/component/{unknown}"))
            .await
            .unwrap();
        assert_eq!(resp.status(), 404, "expected 404 for {unknown}");
    }
}

#[tokio::test]
async fn blank_path_is_a_bad_request() {
    let tmp = tempfile::tempdir().unwrap();
    seed_bundle(tmp.path());
    let addr = start_server(tmp.path()).await;

    let resp = reqwest::get(format!("http://{addr}/api/component/%20"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn save_round_trips_to_disk() {
    let tmp = tempfile::tempdir().unwrap();
    seed_bundle(tmp.path());
    let addr = start_server(tmp.path()).await;

    let client = reqwest::Client::new();
    let resp = client
        .put(format!("http://{addr}/api/component/agents/code-reviewer.md"))
        .json(&serde_json::json!({ "content": "new text" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["path"], "agents/code-reviewer.md");

    let on_disk = std::fs::read_to_string(tmp.path().join("agents/code-reviewer.md")).unwrap();
    assert_eq!(on_disk, "new text");
}

#[tokio::test]
async fn detail_is_stale_until_rebuild_and_reload() {
    let tmp = tempfile::tempdir().unwrap();
    seed_bundle(tmp.path());
    let addr = start_server(tmp.path()).await;
    let client = reqwest::Client::new();

    client
        .put(format!("http://{addr}/api/component/commands/deploy.md"))
        .json(&serde_json::json!({ "content": "## Purpose: Redeploys\n" }))
        .send()
        .await
        .unwrap();

    // The snapshot still serves the content captured at build time.
    let stale: serde_json::Value = client
        .get(format!("http://{addr}/api/component/commands/deploy.md"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stale["content"], "## Purpose: Ships the thing\n");

    // Rebuild the artifact, then ask the server to swap snapshots.
    let artifact = tmp.path().join("data/catalog.json");
    write_artifact(&build(tmp.path()), &artifact).unwrap();
    let resp = client
        .post(format!("http://{addr}/api/catalog/reload"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let fresh: serde_json::Value = client
        .get(format!("http://{addr}/api/component/commands/deploy.md"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fresh["content"], "## Purpose: Redeploys\n");
}

#[tokio::test]
async fn save_requires_content() {
    let tmp = tempfile::tempdir().unwrap();
    seed_bundle(tmp.path());
    let addr = start_server(tmp.path()).await;
    let client = reqwest::Client::new();

    for body in [serde_json::json!({}), serde_json::json!({ "content": "" })] {
        let resp = client
            .put(format!("http://{addr}/api/component/agents/code-reviewer.md"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400, "expected 400 for body {body}");
    }

    // The file is untouched.
    let on_disk = std::fs::read_to_string(tmp.path().join("agents/code-reviewer.md")).unwrap();
    assert!(on_disk.contains("Be thorough."));
}

#[tokio::test]
async fn save_rejects_paths_not_in_catalog() {
    let tmp = tempfile::tempdir().unwrap();
    seed_bundle(tmp.path());
    let addr = start_server(tmp.path()).await;
    let client = reqwest::Client::new();

    for path in ["agents/unknown.md", "secrets/creds.md", "../escape.md"] {
        let resp = client
            .put(format!("http://{addr}/api/component/{path}"))
            .json(&serde_json::json!({ "content": "planted" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404, "expected 404 for {path}");
    }

    assert!(!tmp.path().join("secrets/creds.md").exists());
    assert!(!tmp.path().join("../escape.md").exists());
}

#[tokio::test]
async fn save_rejects_the_shared_mcp_config_path() {
    let tmp = tempfile::tempdir().unwrap();
    seed_bundle(tmp.path());
    let addr = start_server(tmp.path()).await;

    let resp = reqwest::Client::new()
        .put(format!("http://{addr}/api/component/.mcp.json"))
        .json(&serde_json::json!({ "content": "{\"type\": \"http\"}" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let on_disk = std::fs::read_to_string(tmp.path().join(".mcp.json")).unwrap();
    assert!(on_disk.contains("mcpServers"));
}
