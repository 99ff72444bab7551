use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::loader::{config_chain, load_layers};
use super::merged::MergedConfig;
use crate::cache::Cache;

/// Merged configuration per directory, cached until invalidated.
#[derive(Debug)]
pub struct ConfigResolver {
    root: PathBuf,
    cache: Cache<PathBuf, Arc<MergedConfig>>,
}

impl ConfigResolver {
    /// `root` bounds the upward search for config files.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: Cache::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Configuration for the directory holding `path` (or `path` itself
    /// when it is a directory).
    ///
    /// Never fails: unreadable files are logged and skipped, and a
    /// directory without any config gets the default configuration.
    pub fn resolve(&mut self, path: &Path) -> Arc<MergedConfig> {
        let dir = if path.is_dir() {
            path
        } else {
            path.parent().unwrap_or(Path::new("."))
        };

        if let Some(merged) = self.cache.get(dir) {
            tracing::trace!(dir = %dir.display(), "config cache hit");
            return Arc::clone(merged);
        }

        let merged = Arc::new(merge_for_dir(dir, &self.root));
        self.cache.insert(dir.to_path_buf(), Arc::clone(&merged));
        merged
    }

    /// Drop the cached configuration of one directory.
    pub fn invalidate(&mut self, dir: &Path) -> bool {
        tracing::trace!(dir = %dir.display(), "config cache invalidated");
        self.cache.invalidate(dir).is_some()
    }

    /// Drop everything; called whenever any config file changes.
    pub fn invalidate_all(&mut self) {
        tracing::trace!(entries = self.cache.len(), "config cache cleared");
        self.cache.clear();
    }

    pub fn cached_dirs(&self) -> usize {
        self.cache.len()
    }
}

/// Uncached resolution for `dir`.
pub fn merge_for_dir(dir: &Path, root: &Path) -> MergedConfig {
    let layers: Vec<_> = config_chain(dir, root)
        .iter()
        .flat_map(|path| load_layers(path))
        .collect();
    MergedConfig::from_layers(&layers)
}
