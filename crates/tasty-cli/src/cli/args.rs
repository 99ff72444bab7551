//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Style-object forest file (positional).
pub fn forest_path_arg() -> Arg {
    Arg::new("forest_path")
        .value_name("FOREST")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Forest JSON file, or '-' for stdin")
}

/// Host source file the forest was extracted from (--source).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .short('s')
        .long("source")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Host file the forest was extracted from (enables annotated output)")
}

/// Upper bound of the config search (--root).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .long("root")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Stop looking for config files above this directory [default: current dir]")
}

/// File or directory whose configuration to show (positional).
pub fn config_path_arg() -> Arg {
    Arg::new("config_path")
        .value_name("PATH")
        .default_value(".")
        .value_parser(value_parser!(PathBuf))
        .help("File or directory to resolve configuration for")
}

/// Style value to tokenize (--value).
pub fn value_text_arg() -> Arg {
    Arg::new("value_text")
        .long("value")
        .value_name("TEXT")
        .conflicts_with("key_text")
        .required_unless_present("key_text")
        .help("Tokenize a style value")
}

/// State key to tokenize (--key).
pub fn key_text_arg() -> Arg {
    Arg::new("key_text")
        .long("key")
        .value_name("TEXT")
        .help("Tokenize a state key")
}

/// Extra units for value tokenization (--units).
pub fn units_arg() -> Arg {
    Arg::new("units")
        .long("units")
        .value_name("NAMES")
        .value_delimiter(',')
        .action(ArgAction::Append)
        .help("Custom units, comma separated")
}

/// Presets for value tokenization (--presets).
pub fn presets_arg() -> Arg {
    Arg::new("presets")
        .long("presets")
        .value_name("NAMES")
        .value_delimiter(',')
        .action(ArgAction::Append)
        .help("Preset names, comma separated")
}

/// State aliases for key tokenization (--alias).
pub fn alias_arg() -> Arg {
    Arg::new("aliases")
        .long("alias")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Known state alias, e.g. @mobile (repeatable)")
}

/// Include whitespace tokens (--trivia).
pub fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .action(ArgAction::SetTrue)
        .help("Include whitespace tokens")
}

/// Show byte ranges (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show byte ranges")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print diagnostics as JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Debug logging (-v/--verbose), available on every command.
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .global(true)
        .action(ArgAction::SetTrue)
        .help("Log config discovery and resolution to stderr")
}
