//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but are populated from clap;
//! `Into<*Args>` bridges dispatch to the command handlers.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::config::ConfigArgs;
use crate::commands::tokens::{TokensArgs, TokensInput};

pub struct CheckParams {
    pub forest_path: PathBuf,
    pub source_path: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub strict: bool,
    pub json: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            forest_path: m
                .get_one::<PathBuf>("forest_path")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("-")),
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            root: m.get_one::<PathBuf>("root").cloned(),
            strict: m.get_flag("strict"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            forest_path: p.forest_path,
            source_path: p.source_path,
            root: p.root,
            strict: p.strict,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub value_text: Option<String>,
    pub key_text: Option<String>,
    pub units: Vec<String>,
    pub presets: Vec<String>,
    pub aliases: Vec<String>,
    pub trivia: bool,
    pub spans: bool,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            value_text: m.get_one::<String>("value_text").cloned(),
            key_text: m.get_one::<String>("key_text").cloned(),
            units: get_list(m, "units"),
            presets: get_list(m, "presets"),
            aliases: get_list(m, "aliases"),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        let input = match (p.value_text, p.key_text) {
            (Some(text), _) => TokensInput::Value(text),
            (None, Some(text)) => TokensInput::Key(text),
            (None, None) => TokensInput::Value(String::new()),
        };
        Self {
            input,
            units: p.units,
            presets: p.presets,
            aliases: p.aliases,
            trivia: p.trivia,
            spans: p.spans,
        }
    }
}

pub struct ConfigParams {
    pub path: PathBuf,
    pub root: Option<PathBuf>,
}

impl ConfigParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: m
                .get_one::<PathBuf>("config_path")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(".")),
            root: m.get_one::<PathBuf>("root").cloned(),
        }
    }
}

impl From<ConfigParams> for ConfigArgs {
    fn from(p: ConfigParams) -> Self {
        Self {
            path: p.path,
            root: p.root,
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn get_list(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|values| values.filter(|v| !v.is_empty()).cloned().collect())
        .unwrap_or_default()
}
