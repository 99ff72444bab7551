//! Project configuration: discovery, `extends` and merging.
//!
//! Every directory from the project root down to a document's directory may
//! hold one config file. Files are folded root first, each preceded by
//! whatever it extends, so the closest file has the last word.

mod error;
mod loader;
mod merged;
mod raw;
mod resolver;


pub use error::ConfigError;
pub use loader::{
    CONFIG_FILE_NAMES, config_chain, find_config_in_dir, load_config_file, load_layers,
    resolve_extends,
};
pub use merged::{MergedConfig, NameSet};
pub(crate) use merged::normalize_state_name;
pub use raw::{NameList, RawConfig};
pub use resolver::{ConfigResolver, merge_for_dir};
