use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::schema::ShelfConfig;

/// Config file name, checked in the content root and the user config dir.
const CONFIG_FILENAME: &str = "promptshelf.toml";

/// Load config from the given path.
pub fn load_config(path: &Path) -> anyhow::Result<ShelfConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    toml::from_str(&raw).map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))
}

/// Discover and load config.
///
/// Search order:
/// 1. `<root>/promptshelf.toml`
/// 2. `~/.config/promptshelf/promptshelf.toml`
///
/// Falls back to `ShelfConfig::default()` when no file is found or the file
/// fails to parse. `PROMPTSHELF_*` env overrides are applied over file
/// values; `root` (the `--root` flag) wins over both.
pub fn discover_and_load(root: Option<&Path>) -> ShelfConfig {
    let search_root = root.map(Path::to_path_buf).unwrap_or_else(|| ".".into());

    let mut cfg = if let Some(path) = find_config_file(&search_root) {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
                ShelfConfig::default()
            },
        }
    } else {
        debug!("no config file found, using defaults");
        ShelfConfig::default()
    };

    apply_env_overrides(&mut cfg);
    if let Some(root) = root {
        cfg.root = root.to_path_buf();
    }
    cfg
}

/// Find the first config file in standard locations.
fn find_config_file(root: &Path) -> Option<PathBuf> {
    let local = root.join(CONFIG_FILENAME);
    if local.exists() {
        return Some(local);
    }

    if let Some(dirs) = directories::ProjectDirs::from("", "", "promptshelf") {
        let global = dirs.config_dir().join(CONFIG_FILENAME);
        if global.exists() {
            return Some(global);
        }
    }

    None
}

/// Apply `PROMPTSHELF_*` environment overrides to `cfg`.
///
/// Recognized: `PROMPTSHELF_ROOT`, `PROMPTSHELF_ARTIFACT`,
/// `PROMPTSHELF_BIND`, `PROMPTSHELF_PORT`.
pub fn apply_env_overrides(cfg: &mut ShelfConfig) {
    apply_overrides_from(cfg, |name| std::env::var(name).ok());
}

fn apply_overrides_from(cfg: &mut ShelfConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(root) = lookup("PROMPTSHELF_ROOT")
        && !root.is_empty()
    {
        cfg.root = PathBuf::from(root);
    }
    if let Some(artifact) = lookup("PROMPTSHELF_ARTIFACT")
        && !artifact.is_empty()
    {
        cfg.catalog.artifact = PathBuf::from(artifact);
    }
    if let Some(bind) = lookup("PROMPTSHELF_BIND")
        && !bind.is_empty()
    {
        cfg.server.bind = bind;
    }
    if let Some(port) = lookup("PROMPTSHELF_PORT") {
        match port.parse() {
            Ok(p) => cfg.server.port = p,
            Err(e) => warn!(%port, %e, "ignoring invalid PROMPTSHELF_PORT"),
        }
    }
}
