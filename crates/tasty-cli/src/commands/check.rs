use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Serialize;
use tasty_lib::{ConfigResolver, Diagnostics, DocumentAnalysis, analyze};

use super::forest_loader::load_forest;

pub struct CheckArgs {
    pub forest_path: PathBuf,
    pub source_path: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub strict: bool,
    pub json: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    errors: usize,
    warnings: usize,
    diagnostics: &'a Diagnostics,
}

pub fn run(args: CheckArgs) {
    let (analysis, source) = match analyze_input(&args) {
        Ok(result) => result,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let diagnostics = &analysis.diagnostics;
    let display_path = args
        .source_path
        .as_deref()
        .unwrap_or(&args.forest_path)
        .display()
        .to_string();

    if args.json {
        match render_json(&display_path, diagnostics) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else if !diagnostics.is_empty() {
        eprintln!(
            "{}",
            render_text(diagnostics, source.as_deref(), &display_path, args.color)
        );
    }

    if !passes(diagnostics, args.strict) {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

/// Load the forest and the optional host source, resolve configuration and
/// analyze.
pub fn analyze_input(args: &CheckArgs) -> Result<(DocumentAnalysis, Option<String>), String> {
    let forest = load_forest(&args.forest_path).map_err(|e| e.to_string())?;
    tracing::debug!(
        path = %args.forest_path.display(),
        objects = forest.len(),
        "loaded forest"
    );

    let source = match &args.source_path {
        Some(path) => Some(
            fs::read_to_string(path)
                .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?,
        ),
        None => None,
    };

    let cwd = env::current_dir().map_err(|e| format!("failed to get current directory: {}", e))?;
    let root = args.root.as_deref().map_or_else(|| cwd.clone(), absolute);
    let target = match args.source_path.as_deref() {
        Some(path) => absolute(path),
        None if args.forest_path.as_os_str() == "-" => cwd,
        None => absolute(&args.forest_path),
    };

    let mut resolver = ConfigResolver::new(root);
    let config = resolver.resolve(&target);
    Ok((analyze(&forest, &config), source))
}

/// Whether the run succeeds: no errors, and no warnings under `--strict`.
pub fn passes(diagnostics: &Diagnostics, strict: bool) -> bool {
    !diagnostics.has_errors() && !(strict && diagnostics.has_warnings())
}

/// Annotated snippets when the host source is known, one line per
/// diagnostic otherwise.
pub fn render_text(
    diagnostics: &Diagnostics,
    source: Option<&str>,
    path: &str,
    color: bool,
) -> String {
    let mut printer = diagnostics.printer().path(path).colored(color);
    if let Some(source) = source {
        printer = printer.source(source);
    }
    printer.render()
}

pub fn render_json(path: &str, diagnostics: &Diagnostics) -> serde_json::Result<String> {
    let report = JsonReport {
        file: path,
        errors: diagnostics.error_count(),
        warnings: diagnostics.warning_count(),
        diagnostics,
    };
    serde_json::to_string_pretty(&report)
}

fn absolute(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
