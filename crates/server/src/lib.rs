//! Catalog HTTP server: serves the built catalog artifact and brokers edits
//! to component source files under the content root.

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use {
    error::ApiError,
    server::{build_app, serve},
    state::AppState,
};
