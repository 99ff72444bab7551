use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tasty_lib::defs::StyleObject;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid forest in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read a forest from a JSON file, or from stdin when `path` is `-`.
pub fn load_forest(path: &Path) -> Result<Vec<StyleObject>, LoadError> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };
    parse_forest(&content, path)
}

/// Parse forest JSON: an array of style objects or a single one.
pub fn parse_forest(content: &str, path: &Path) -> Result<Vec<StyleObject>, LoadError> {
    let parse_error = |source: serde_json::Error| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    };
    let value: serde_json::Value = serde_json::from_str(content).map_err(parse_error)?;
    if value.is_array() {
        serde_json::from_value(value).map_err(parse_error)
    } else {
        serde_json::from_value(value).map(|object| vec![object]).map_err(parse_error)
    }
}
