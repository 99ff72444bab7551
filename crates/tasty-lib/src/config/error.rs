use std::path::PathBuf;

/// Errors raised while loading one configuration file.
///
/// [`super::ConfigResolver`] logs these and carries on without the failing
/// file; [`super::load_config_file`] returns them to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot resolve `extends: \"{reference}\"` from '{}'", from.display())]
    Extends { reference: String, from: PathBuf },

    #[error("circular `extends` chain through '{}'", path.display())]
    Cycle { path: PathBuf },
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
