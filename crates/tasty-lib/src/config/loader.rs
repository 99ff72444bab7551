//! Config file discovery and `extends` resolution.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::raw::RawConfig;

/// File names checked in every directory, most preferred first.
pub const CONFIG_FILE_NAMES: &[&str] = &["tasty.config.json", ".tastyrc.json", ".tastyrc"];

/// Where packages referenced by `extends` are installed.
const PACKAGES_DIR: &str = "node_modules";

/// The first config file in `dir`, by [`CONFIG_FILE_NAMES`] order.
pub fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

pub fn load_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| ConfigError::parse(path, e))
}

/// Config files from `root` down to `dir`, root first.
///
/// At most one file per directory. When `dir` is not below `root` the walk
/// stops at the filesystem root.
pub fn config_chain(dir: &Path, root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut current = Some(dir);
    while let Some(d) = current {
        if let Some(path) = find_config_in_dir(d) {
            tracing::debug!(path = %path.display(), "found config file");
            found.push(path);
        }
        if d == root {
            break;
        }
        current = d.parent();
    }
    found.reverse();
    found
}

/// Locate the file an `extends` value points at.
///
/// `./x` and `/x` are paths relative to `from_dir`. Anything else is a
/// package reference, `name[/sub]` or `@scope/name[/sub]`, looked up in the
/// nearest package directory walking up from `from_dir`.
pub fn resolve_extends(reference: &str, from_dir: &Path) -> Result<PathBuf, ConfigError> {
    let unresolved = || ConfigError::Extends {
        reference: reference.to_string(),
        from: from_dir.to_path_buf(),
    };

    if reference.starts_with(['.', '/']) {
        return resolve_config_path(&from_dir.join(reference)).ok_or_else(unresolved);
    }

    let (package, subpath) = split_package_reference(reference).ok_or_else(unresolved)?;
    for dir in from_dir.ancestors() {
        let package_dir = dir.join(PACKAGES_DIR).join(package);
        if !package_dir.is_dir() {
            continue;
        }
        let target = match subpath {
            Some(sub) => resolve_config_path(&package_dir.join(sub)),
            None => find_config_in_dir(&package_dir),
        };
        return target.ok_or_else(unresolved);
    }
    Err(unresolved())
}

/// A file, a directory holding a config file, or a file missing its
/// `.json` extension.
fn resolve_config_path(path: &Path) -> Option<PathBuf> {
    if path.is_dir() {
        return find_config_in_dir(path);
    }
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    if path.extension().is_none() {
        let mut with_ext = OsString::from(path.as_os_str());
        with_ext.push(".json");
        let with_ext = PathBuf::from(with_ext);
        if with_ext.is_file() {
            return Some(with_ext);
        }
    }
    None
}

/// `@scope/name/sub/path` → (`@scope/name`, `Some("sub/path")`).
fn split_package_reference(reference: &str) -> Option<(&str, Option<&str>)> {
    let name_end = if reference.starts_with('@') {
        let scope_end = reference.find('/')?;
        reference[scope_end + 1..]
            .find('/')
            .map(|i| scope_end + 1 + i)
    } else {
        reference.find('/')
    };
    let (package, subpath) = match name_end {
        Some(end) => (&reference[..end], Some(&reference[end + 1..])),
        None => (reference, None),
    };
    if package.is_empty() || package.ends_with('/') {
        return None;
    }
    Some((package, subpath.filter(|s| !s.is_empty())))
}

/// Load `path` and everything it extends, in fold order.
///
/// Each extended file's own chain comes before the file itself. Failures
/// are logged and the failing file contributes nothing.
pub fn load_layers(path: &Path) -> Vec<RawConfig> {
    let mut layers = Vec::new();
    let mut stack = Vec::new();
    collect_layers(path, &mut stack, &mut layers);
    layers
}

fn collect_layers(path: &Path, stack: &mut Vec<PathBuf>, layers: &mut Vec<RawConfig>) {
    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    if stack.contains(&canonical) {
        let err = ConfigError::Cycle { path: canonical };
        tracing::warn!("{err}");
        return;
    }

    let raw = match load_config_file(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!("{err}");
            return;
        }
    };

    stack.push(canonical);
    if let Some(reference) = &raw.extends {
        let from_dir = path.parent().unwrap_or(Path::new("."));
        match resolve_extends(reference, from_dir) {
            Ok(target) => collect_layers(&target, stack, layers),
            Err(err) => tracing::warn!("{err}"),
        }
    }
    stack.pop();

    layers.push(raw);
}
