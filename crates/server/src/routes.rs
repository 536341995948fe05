//! API handlers for the catalog surface (list, detail, save, reload).

use std::path::{Path, PathBuf};

use {
    axum::{
        Json,
        extract::{Path as UrlPath, State},
        response::IntoResponse,
    },
    serde::{Deserialize, Serialize},
    tracing::{error, info, warn},
};

use promptshelf_catalog::{CatalogItem, ItemKind, MCP_CONFIG_FILE};

use crate::{error::ApiError, state::AppState};

// ── List ─────────────────────────────────────────────────────────────────────

/// A catalog item minus its content, as returned by the list endpoint.
#[derive(Debug, Serialize)]
pub struct ItemSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub description: String,
    pub path: String,
}

impl From<&CatalogItem> for ItemSummary {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            kind: item.kind,
            description: item.description.clone(),
            path: item.path.clone(),
        }
    }
}

/// GET /api/components: every entry, content stripped, catalog order.
pub async fn list_components_handler(State(state): State<AppState>) -> Json<Vec<ItemSummary>> {
    let catalog = state.catalog().await;
    Json(catalog.items.iter().map(ItemSummary::from).collect())
}

// ── Detail ───────────────────────────────────────────────────────────────────

/// GET /api/component/{*path}: the snapshot's cached content, not a live
/// re-read; a save only shows up here after a rebuild and reload.
pub async fn get_component_handler(
    UrlPath(path): UrlPath<String>,
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if path.trim().is_empty() {
        return Err(ApiError::BadRequest("path is required".into()));
    }
    let catalog = state.catalog().await;
    let item = catalog
        .find_by_path(&path)
        .ok_or_else(|| ApiError::NotFound(path.clone()))?;
    Ok(Json(
        serde_json::json!({ "path": item.path, "content": item.content }),
    ))
}

// ── Save ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    #[serde(default)]
    pub content: Option<String>,
}

/// PUT /api/component/{*path}: write through to the source file.
///
/// The path must be an exact member of the loaded catalog and resolve inside
/// the content root; the shared MCP config path is refused because a single
/// entry's fragment would clobber every server's definition.
pub async fn save_component_handler(
    UrlPath(path): UrlPath<String>,
    State(state): State<AppState>,
    Json(body): Json<SaveRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if path.trim().is_empty() {
        return Err(ApiError::BadRequest("path is required".into()));
    }
    let Some(content) = body.content.filter(|c| !c.is_empty()) else {
        return Err(ApiError::BadRequest("content is required".into()));
    };

    let catalog = state.catalog().await;
    if !catalog.contains_path(&path) {
        return Err(ApiError::NotFound(path));
    }
    if path == MCP_CONFIG_FILE {
        return Err(ApiError::BadRequest(
            "MCP entries share one config file; edit .mcp.json directly".into(),
        ));
    }

    let target = resolve_in_root(state.root(), &path)?;
    if let Err(e) = std::fs::write(&target, &content) {
        error!(path = %target.display(), kind = ?e.kind(), %e, "component write failed");
        return Err(ApiError::Internal);
    }
    info!(%path, bytes = content.len(), "component saved");
    Ok(Json(serde_json::json!({ "success": true, "path": path })))
}

/// Resolve `rel` against the content root and require the canonicalized
/// target to stay inside it. Catalog membership is checked by the caller, so
/// this only trips on a catalog artifact that references the outside world.
fn resolve_in_root(root: &Path, rel: &str) -> Result<PathBuf, ApiError> {
    let target = root.join(rel);
    let parent = target
        .parent()
        .ok_or_else(|| ApiError::BadRequest("invalid path".into()))?;

    let canonical_root = root.canonicalize().map_err(|e| {
        error!(root = %root.display(), %e, "content root not resolvable");
        ApiError::Internal
    })?;
    let canonical_parent = parent.canonicalize().map_err(|e| {
        error!(path = %parent.display(), kind = ?e.kind(), %e, "save target directory not resolvable");
        ApiError::Internal
    })?;

    if !canonical_parent.starts_with(&canonical_root) {
        warn!(%rel, "save target escapes content root, refusing");
        return Err(ApiError::BadRequest("path escapes content root".into()));
    }
    Ok(target)
}

// ── Admin ────────────────────────────────────────────────────────────────────

/// POST /api/catalog/reload: re-read the artifact, swap the snapshot.
pub async fn reload_catalog_handler(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.reload().await {
        Ok(items) => {
            info!(items, "catalog reloaded");
            Ok(Json(serde_json::json!({ "success": true, "items": items })))
        },
        Err(e) => {
            error!(%e, "catalog reload failed");
            Err(ApiError::Internal)
        },
    }
}

/// GET /health
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
