//! Router assembly and server startup.

use std::net::SocketAddr;

use {
    axum::{
        Router,
        routing::{get, post},
    },
    tower_http::cors::{Any, CorsLayer},
    tracing::info,
};

use crate::{
    routes::{
        get_component_handler, health_handler, list_components_handler, reload_catalog_handler,
        save_component_handler,
    },
    state::AppState,
};

/// Build the catalog router (shared between production startup and tests).
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/components", get(list_components_handler))
        .route(
            "/api/component/{*path}",
            get(get_component_handler).put(save_component_handler),
        )
        .route("/api/catalog/reload", post(reload_catalog_handler))
        .layer(cors)
        .with_state(state)
}

/// Start the catalog server and block until it exits.
pub async fn serve(bind: &str, port: u16, state: AppState) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{bind}:{port}")
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid bind address {bind}:{port}: {e}"))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "catalog server listening");
    axum::serve(listener, build_app(state)).await?;
    Ok(())
}
