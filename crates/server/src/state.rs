//! Shared server state: the loaded catalog snapshot and the content root.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::sync::RwLock;

use promptshelf_catalog::{Catalog, load_artifact};

/// Cheaply clonable app state handed to every request handler.
///
/// The catalog is an immutable snapshot; a reload swaps the whole `Arc`
/// rather than mutating entries in place, so in-flight requests keep a
/// consistent view.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<StateInner>,
}

struct StateInner {
    catalog: RwLock<Arc<Catalog>>,
    root: PathBuf,
    artifact: PathBuf,
}

impl AppState {
    /// Load the artifact and build the initial snapshot.
    ///
    /// A missing or invalid artifact is a startup failure: the catalog is a
    /// build-time input, not something the server recovers at request time.
    pub fn load(root: &Path, artifact: &Path) -> anyhow::Result<Self> {
        let catalog = load_artifact(artifact)?;
        Ok(Self::with_catalog(root, artifact, catalog))
    }

    /// Build state around an already-loaded catalog.
    pub fn with_catalog(root: &Path, artifact: &Path, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(StateInner {
                catalog: RwLock::new(Arc::new(catalog)),
                root: root.to_path_buf(),
                artifact: artifact.to_path_buf(),
            }),
        }
    }

    /// Content root that save targets resolve against.
    pub fn root(&self) -> &Path {
        &self.inner.root
    }

    /// Current catalog snapshot.
    pub async fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&*self.inner.catalog.read().await)
    }

    /// Re-read the artifact and atomically swap the snapshot.
    /// Returns the new item count.
    pub async fn reload(&self) -> anyhow::Result<usize> {
        let catalog = load_artifact(&self.inner.artifact)?;
        let count = catalog.len();
        *self.inner.catalog.write().await = Arc::new(catalog);
        Ok(count)
    }
}
