//! Configuration loading for the promptshelf workspace.
//!
//! Config file: `promptshelf.toml`, searched in the content root and then
//! `~/.config/promptshelf/`. `PROMPTSHELF_*` environment variables override
//! file values; CLI flags override both.

pub mod loader;
pub mod schema;

pub use {
    loader::{apply_env_overrides, discover_and_load, load_config},
    schema::{CatalogConfig, ServerConfig, ShelfConfig},
};
