use std::path::{Path, PathBuf};
use std::{env, fs};

use tasty_lib::config::{MergedConfig, merge_for_dir};

pub struct ConfigArgs {
    pub path: PathBuf,
    pub root: Option<PathBuf>,
}

pub fn run(args: ConfigArgs) {
    match render(&args) {
        Ok(out) => println!("{}", out),
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    }
}

/// Merged configuration for `args.path` as pretty JSON.
pub fn render(args: &ConfigArgs) -> Result<String, String> {
    let path = fs::canonicalize(&args.path)
        .map_err(|e| format!("failed to resolve '{}': {}", args.path.display(), e))?;
    let root = match &args.root {
        Some(root) => fs::canonicalize(root)
            .map_err(|e| format!("failed to resolve '{}': {}", root.display(), e))?,
        None => env::current_dir().map_err(|e| format!("failed to get current directory: {}", e))?,
    };
    let dir = if path.is_dir() {
        path.as_path()
    } else {
        path.parent().unwrap_or(Path::new("."))
    };

    let merged: MergedConfig = merge_for_dir(dir, &root);
    serde_json::to_string_pretty(&merged).map_err(|e| e.to_string())
}
